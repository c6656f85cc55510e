//! Input-to-intent mapping.
//!
//! [`CameraIntent::from_input`] turns one frame of raw device state into the
//! deltas the camera integrates. Keeping this step separate from the camera
//! lets the control mapping be exercised without any input backend.

use std::time::Duration;

use glam::{Vec2, Vec3};

use super::event::CameraKey;
use super::snapshot::{InputSnapshot, PointerState};
use crate::options::ControlOptions;

/// Milliseconds of frame time that make up one unit of the frame-time scalar.
pub const FRAME_TIME_DIVISOR_MS: f32 = 2000.0;

/// Ortho key zoom: fraction of the frame-time scalar applied per frame.
const KEY_ZOOM_STEP: f32 = 0.01;

/// Rising-edge detector: fires once when its input goes from up to down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeLatch {
    was_down: bool,
}

impl EdgeLatch {
    /// Feed the current key state; returns `true` only on the transition
    /// from released to pressed.
    pub fn rising(&mut self, down: bool) -> bool {
        let fired = down && !self.was_down;
        self.was_down = down;
        fired
    }

    /// Whether the key was down at the last sample.
    #[must_use]
    pub fn is_latched(&self) -> bool {
        self.was_down
    }
}

/// Convert elapsed frame time into the frame-time scalar
/// (`elapsed_ms / 2000`).
#[must_use]
pub fn frame_amount(elapsed: Duration) -> f32 {
    elapsed.as_secs_f32() * 1000.0 / FRAME_TIME_DIVISOR_MS
}

/// Everything the camera should do this frame, derived from input alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraIntent {
    /// Flip between perspective and orthographic.
    pub toggle_mode: bool,
    /// Restore the default pose before the remaining deltas are applied.
    pub reset: bool,
    /// Frame-time scalar after speed modifiers.
    pub amount: f32,
    /// Camera-local movement directions (unscaled; `-Z` is forward).
    pub move_local: Vec3,
    /// Ortho key pan directions: `x` along world X, `y` along world Z.
    pub ortho_pan: Vec2,
    /// Multiplicative ortho scale change requested by keys (1.0 = none).
    pub ortho_zoom: f32,
    /// Arrow-key rotation directions: `x` yaw, `y` pitch.
    pub rotate: Vec2,
    /// Pointer pixel delta while the primary button is held.
    pub drag: Option<Vec2>,
    /// Sign of the scroll wheel delta (-1, 0 or 1).
    pub scroll: f32,
}

impl CameraIntent {
    /// An intent that changes nothing.
    #[must_use]
    pub fn idle(amount: f32) -> Self {
        Self {
            toggle_mode: false,
            reset: false,
            amount,
            move_local: Vec3::ZERO,
            ortho_pan: Vec2::ZERO,
            ortho_zoom: 1.0,
            rotate: Vec2::ZERO,
            drag: None,
            scroll: 0.0,
        }
    }

    /// Map one frame of input to camera intent.
    ///
    /// `previous` is the pointer state from the preceding frame; without it
    /// the drag delta is zero. `toggle_latch` carries the mode key's edge
    /// state across frames.
    pub fn from_input(
        input: &InputSnapshot,
        previous: Option<&PointerState>,
        elapsed: Duration,
        controls: &ControlOptions,
        toggle_latch: &mut EdgeLatch,
    ) -> Self {
        let down = |key: CameraKey| input.is_key_down(key);
        let axis = |positive: CameraKey, negative: CameraKey| {
            f32::from(u8::from(down(positive)))
                - f32::from(u8::from(down(negative)))
        };

        let mut intent = Self::idle(frame_amount(elapsed));
        intent.toggle_mode = toggle_latch.rising(down(CameraKey::ToggleMode));

        let mut modifier = controls.modifier_factor;
        if down(CameraKey::Boost) {
            modifier *= controls.boost_factor;
        }
        if down(CameraKey::Fast) {
            intent.amount *= modifier;
        }
        if down(CameraKey::Precise) {
            intent.amount /= modifier;
        }

        intent.move_local = Vec3::new(
            axis(CameraKey::Right, CameraKey::Left),
            axis(CameraKey::Up, CameraKey::Down),
            axis(CameraKey::Back, CameraKey::Forward),
        );
        intent.reset = down(CameraKey::Reset);

        intent.ortho_pan = Vec2::new(intent.move_local.x, intent.move_local.z);
        if down(CameraKey::Up) {
            intent.ortho_zoom *= 1.0 + KEY_ZOOM_STEP * intent.amount;
        }
        if down(CameraKey::Down) {
            intent.ortho_zoom *= 1.0 - KEY_ZOOM_STEP * intent.amount;
        }

        intent.rotate = Vec2::new(
            axis(CameraKey::RotateLeft, CameraKey::RotateRight),
            axis(CameraKey::RotateUp, CameraKey::RotateDown),
        );

        let pointer = &input.pointer;
        if pointer.primary {
            if pointer.secondary {
                intent.move_local.z -= 1.0;
            }
            let delta = previous.map_or(Vec2::ZERO, |prev| {
                pointer.position - prev.position
            });
            intent.drag = Some(delta);
        }

        intent.scroll = if pointer.wheel_delta > 0.0 {
            1.0
        } else if pointer.wheel_delta < 0.0 {
            -1.0
        } else {
            0.0
        };

        intent
    }
}
