//! Per-frame update: input sampling, intent integration, matrix rebuild.

use std::time::Duration;

use super::core::Camera;
use crate::input::{CameraIntent, InputSnapshot};

/// Scroll zoom: fraction of the zoom speed applied per wheel notch.
const SCROLL_ZOOM_STEP: f32 = 0.1;

/// Size of the render target in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Viewport of `width` by `height` pixels.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, or `None` when either side is zero.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.width > 0 && self.height > 0)
            .then(|| self.width as f32 / self.height as f32)
    }
}

/// What the host loop supplies each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Time since the previous frame.
    pub elapsed: Duration,
    /// Whether the viewer is focused; input is ignored when it is not.
    pub active: bool,
    /// Current render target size.
    pub viewport: Viewport,
}

impl Camera {
    /// Advance one frame.
    ///
    /// Samples `input` (only while `frame.active`), integrates the resulting
    /// motion, then rebuilds the view and projection matrices. Call exactly
    /// once per frame: a second call integrates the same input again.
    pub fn update(&mut self, frame: &FrameContext, input: &InputSnapshot) {
        self.previous_pointer = self.current_pointer.replace(input.pointer);

        if frame.active {
            let intent = CameraIntent::from_input(
                input,
                self.previous_pointer.as_ref(),
                frame.elapsed,
                &self.controls,
                &mut self.mode_toggle_latch,
            );
            self.apply_intent(&intent);
        }

        self.update_view_matrix();

        match frame.viewport.aspect_ratio() {
            Some(aspect) => self.aspect = aspect,
            None => log::debug!(
                "degenerate viewport {}x{}, keeping aspect {}",
                frame.viewport.width,
                frame.viewport.height,
                self.aspect
            ),
        }
        self.update_projection_matrix();
    }

    /// Integrate one frame's intent into the camera pose.
    ///
    /// Matrices are not rebuilt here; [`Camera::update`] does that after
    /// calling this.
    pub fn apply_intent(&mut self, intent: &CameraIntent) {
        if intent.toggle_mode {
            self.ortho_mode = !self.ortho_mode;
            log::debug!(
                "camera switched to {} projection",
                if self.ortho_mode { "orthographic" } else { "perspective" }
            );
        }

        if intent.reset {
            self.reset();
        }

        let amount = intent.amount;

        if self.ortho_mode {
            self.zoom_ortho(intent.ortho_zoom);
            let pan =
                intent.ortho_pan * amount * self.controls.ortho_key_pan_rate;
            self.ortho_look_at.x += pan.x;
            self.ortho_look_at.z += pan.y;
        }

        let turn = self.controls.rotation_speed * amount * 2.0;
        self.yaw += intent.rotate.x * turn;
        self.pitch += intent.rotate.y * turn;

        if let Some(delta) = intent.drag {
            if self.ortho_mode {
                let pan =
                    delta * self.controls.ortho_pan_speed * self.ortho_scale;
                self.ortho_look_at.x -= pan.x;
                self.ortho_look_at.z -= pan.y;
            } else {
                self.yaw -= delta.x * self.controls.mouse_yaw_speed;
                self.pitch -= delta.y * self.controls.mouse_pitch_speed;
            }
        }

        if self.ortho_mode && intent.scroll != 0.0 {
            self.zoom_ortho(
                1.0 - SCROLL_ZOOM_STEP
                    * intent.scroll
                    * self.controls.ortho_zoom_speed,
            );
        }

        if !self.ortho_mode {
            self.add_to_position(intent.move_local * amount);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec2, Vec3};

    use super::*;
    use crate::camera::BoundingBox;
    use crate::input::CameraKey;
    use crate::options::Options;

    const EPS: f32 = 1e-4;
    const VIEWPORT: Viewport = Viewport {
        width: 800,
        height: 600,
    };

    fn frame(ms: u64) -> FrameContext {
        FrameContext {
            elapsed: Duration::from_millis(ms),
            active: true,
            viewport: VIEWPORT,
        }
    }

    fn camera() -> Camera {
        Camera::new(&Options::default(), VIEWPORT)
    }

    fn keys(keys: &[CameraKey]) -> InputSnapshot {
        InputSnapshot::with_keys(keys)
    }

    fn expected_projection(cam: &Camera) -> Mat4 {
        let aspect = 800.0 / 600.0;
        if cam.is_ortho() {
            let h = cam.ortho_scale() * 1000.0;
            let w = h * aspect;
            Mat4::orthographic_rh(
                -w / 2.0,
                w / 2.0,
                -h / 2.0,
                h / 2.0,
                0.1,
                100_000.0,
            )
        } else {
            Mat4::perspective_rh(cam.fov(), aspect, 0.1, 10_000.0)
        }
    }

    #[test]
    fn projection_follows_active_mode() {
        let mut cam = camera();
        cam.update(&frame(16), &InputSnapshot::default());
        assert!(cam.projection().abs_diff_eq(expected_projection(&cam), EPS));

        cam.set_ortho_mode(true);
        cam.update(&frame(16), &InputSnapshot::default());
        assert!(cam.projection().abs_diff_eq(expected_projection(&cam), EPS));
        assert!(cam.eye_position().abs_diff_eq(Vec3::new(0.0, 10.0, 0.0), EPS));

        cam.set_ortho_mode(false);
        cam.update(&frame(16), &InputSnapshot::default());
        assert!(cam.projection().abs_diff_eq(expected_projection(&cam), EPS));
    }

    #[test]
    fn held_toggle_key_flips_mode_once() {
        let mut cam = camera();
        let held = keys(&[CameraKey::ToggleMode]);
        for _ in 0..10 {
            cam.update(&frame(16), &held);
        }
        assert!(cam.is_ortho());
        assert!(cam.mode_key_latched());

        cam.update(&frame(16), &InputSnapshot::default());
        assert!(cam.is_ortho());
        assert!(!cam.mode_key_latched());

        cam.update(&frame(16), &held);
        assert!(!cam.is_ortho());
    }

    #[test]
    fn inactive_frames_ignore_input() {
        let mut cam = camera();
        let inactive = FrameContext {
            active: false,
            ..frame(100)
        };
        cam.update(
            &inactive,
            &keys(&[CameraKey::ToggleMode, CameraKey::Forward]),
        );
        assert!(!cam.is_ortho());
        assert_eq!(cam.position(), Vec3::new(0.0, 1.0, 2.0));
        assert!(!cam.mode_key_latched());
    }

    #[test]
    fn forward_moves_move_speed_times_amount() {
        for yaw in [0.0_f32, 0.8, -2.5] {
            let mut cam = camera();
            cam.set_yaw(yaw);
            let start = cam.position();
            cam.update(&frame(100), &keys(&[CameraKey::Forward]));

            let delta = cam.position() - start;
            // 20 * (100 / 2000)
            assert!((delta.length() - 1.0).abs() < EPS);
            assert!(delta.normalize().abs_diff_eq(cam.forward(), EPS));
            assert!(delta.y.abs() < EPS);
        }
    }

    #[test]
    fn fast_and_precise_modifiers_change_distance() {
        let mut cam = camera();
        let start = cam.position();
        cam.update(&frame(100), &keys(&[CameraKey::Back, CameraKey::Fast]));
        assert!(((cam.position() - start).length() - 2.0).abs() < EPS);

        let mut cam = camera();
        cam.update(
            &frame(100),
            &keys(&[CameraKey::Back, CameraKey::Precise]),
        );
        assert!(((cam.position() - start).length() - 0.5).abs() < EPS);
    }

    #[test]
    fn reset_key_applies_before_same_frame_motion() {
        let mut cam = camera();
        cam.set_position(Vec3::new(50.0, 50.0, 50.0));
        cam.set_yaw(1.0);
        cam.update(&frame(100), &keys(&[CameraKey::Reset, CameraKey::Up]));

        assert_eq!(cam.yaw(), 0.0);
        assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 2.0, 2.0), EPS));
    }

    #[test]
    fn arrow_keys_rotate() {
        let mut cam = camera();
        cam.update(
            &frame(100),
            &keys(&[CameraKey::RotateLeft, CameraKey::RotateUp]),
        );
        // pi/2 * 0.05 * 2
        let step = std::f32::consts::FRAC_PI_2 * 0.1;
        assert!((cam.yaw() - step).abs() < EPS);
        assert!((cam.pitch() - step).abs() < EPS);

        cam.update(
            &frame(100),
            &keys(&[CameraKey::RotateRight, CameraKey::RotateDown]),
        );
        assert!(cam.yaw().abs() < EPS);
        assert!(cam.pitch().abs() < EPS);
    }

    #[test]
    fn pitch_is_not_clamped() {
        let mut cam = camera();
        for _ in 0..50 {
            cam.update(&frame(1000), &keys(&[CameraKey::RotateUp]));
        }
        assert!(cam.pitch() > 2.0 * std::f32::consts::PI);
    }

    fn dragging(x: f32, y: f32, secondary: bool) -> InputSnapshot {
        let mut input = InputSnapshot::default();
        input.pointer.position = Vec2::new(x, y);
        input.pointer.primary = true;
        input.pointer.secondary = secondary;
        input
    }

    #[test]
    fn perspective_drag_rotates() {
        let mut cam = camera();
        cam.update(&frame(16), &dragging(100.0, 100.0, false));
        assert_eq!(cam.yaw(), 0.0);

        cam.update(&frame(16), &dragging(150.0, 70.0, false));
        let controls = Options::default().controls;
        assert!((cam.yaw() + 50.0 * controls.mouse_yaw_speed).abs() < EPS);
        assert!((cam.pitch() - 30.0 * controls.mouse_pitch_speed).abs() < EPS);
        assert_eq!(cam.position(), Vec3::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn both_buttons_fly_forward() {
        let mut cam = camera();
        cam.update(&frame(100), &dragging(0.0, 0.0, true));
        assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 1.0, 1.0), EPS));
    }

    #[test]
    fn ortho_drag_pans_scaled_by_zoom() {
        let mut cam = camera();
        cam.set_ortho_mode(true);
        cam.set_ortho_scale(2.0).unwrap();
        cam.update(&frame(16), &dragging(100.0, 100.0, false));
        cam.update(&frame(16), &dragging(110.0, 80.0, false));

        // 10 * 0.85 * 2, -20 * 0.85 * 2
        assert!(cam
            .ortho_look_at()
            .abs_diff_eq(Vec3::new(-17.0, 0.0, 34.0), EPS));
        assert_eq!(cam.yaw(), 0.0);
        assert_eq!(cam.pitch(), 0.0);
    }

    #[test]
    fn ortho_keys_pan_and_zoom_without_moving_eye() {
        let mut cam = camera();
        cam.set_ortho_mode(true);
        cam.update(
            &frame(200),
            &keys(&[CameraKey::Forward, CameraKey::Right, CameraKey::Up]),
        );

        // amount 0.1, pan rate 10
        assert!(cam
            .ortho_look_at()
            .abs_diff_eq(Vec3::new(1.0, 0.0, -1.0), EPS));
        assert!((cam.ortho_scale() - 1.001).abs() < 1e-6);
        assert_eq!(cam.position(), Vec3::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn scroll_sign_zooms_ortho_only() {
        let mut cam = camera();
        let mut input = InputSnapshot::default();
        input.pointer.wheel_delta = 480.0;

        cam.update(&frame(16), &input);
        assert_eq!(cam.ortho_scale(), 1.0);

        cam.set_ortho_mode(true);
        cam.update(&frame(16), &input);
        assert!((cam.ortho_scale() - 0.99).abs() < 1e-6);

        input.pointer.wheel_delta = -1.0;
        cam.update(&frame(16), &input);
        assert!((cam.ortho_scale() - 0.99 * 1.01).abs() < 1e-6);
    }

    #[test]
    fn ortho_scale_stays_positive_under_extreme_zoom() {
        let mut cam = camera();
        cam.set_ortho_mode(true);
        let zoom_in = keys(&[
            CameraKey::Down,
            CameraKey::Fast,
            CameraKey::Boost,
        ]);
        for _ in 0..200 {
            cam.update(&frame(60_000), &zoom_in);
            assert!(cam.ortho_scale() > 0.0);
        }
        let mut scroll = InputSnapshot::default();
        scroll.pointer.wheel_delta = 1.0;
        for _ in 0..20_000 {
            cam.update(&frame(16), &scroll);
        }
        assert!(cam.ortho_scale() > 0.0);
        assert!(cam.projection().is_finite());
    }

    #[test]
    fn contains_eye_box_but_not_far_box() {
        let mut options = Options::default();
        options.projection.fov = 0.9;
        let mut cam = Camera::new(&options, VIEWPORT);
        cam.update(&frame(16), &InputSnapshot::default());

        let eye = cam.position();
        assert!(cam.contains(&BoundingBox::from_center(eye, Vec3::ONE)));

        let far = eye + cam.forward() * 20_000.0;
        assert!(!cam.contains(&BoundingBox::from_center(far, Vec3::ONE)));
    }

    #[test]
    fn zero_viewport_keeps_previous_aspect() {
        let mut cam = camera();
        let minimized = FrameContext {
            viewport: Viewport::new(0, 0),
            ..frame(16)
        };
        cam.update(&minimized, &InputSnapshot::default());
        assert!((cam.aspect_ratio() - 4.0 / 3.0).abs() < EPS);
        assert!(cam.projection().is_finite());

        let wide = FrameContext {
            viewport: Viewport::new(1920, 1080),
            ..frame(16)
        };
        cam.update(&wide, &InputSnapshot::default());
        assert!((cam.aspect_ratio() - 16.0 / 9.0).abs() < EPS);
    }

    #[test]
    fn enabled_flag_is_advisory() {
        let mut cam = camera();
        cam.set_enabled(false);
        cam.update(&frame(100), &keys(&[CameraKey::Forward]));
        assert!(!cam.is_enabled());
        assert!(cam.position().z < 2.0);
    }

    #[test]
    fn viewport_aspect_ratio() {
        assert_eq!(Viewport::new(800, 600).aspect_ratio(), Some(800.0 / 600.0));
        assert_eq!(Viewport::new(800, 0).aspect_ratio(), None);
    }
}
