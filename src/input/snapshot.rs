//! Immutable per-frame views of keyboard and pointer state.

use glam::Vec2;
use rustc_hash::FxHashSet;

use super::event::CameraKey;

/// Set of camera keys held down at the moment the snapshot was taken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    down: FxHashSet<CameraKey>,
}

impl KeyboardState {
    /// Build a state with exactly `keys` held.
    #[must_use]
    pub fn with_keys(keys: &[CameraKey]) -> Self {
        Self {
            down: keys.iter().copied().collect(),
        }
    }

    /// Whether `key` is currently down.
    #[must_use]
    pub fn is_key_down(&self, key: CameraKey) -> bool {
        self.down.contains(&key)
    }

    /// Mark `key` as held (`true`) or released (`false`).
    pub fn set(&mut self, key: CameraKey, down: bool) {
        if down {
            let _ = self.down.insert(key);
        } else {
            let _ = self.down.remove(&key);
        }
    }

    /// Release every key.
    pub fn clear(&mut self) {
        self.down.clear();
    }
}

/// Pointer device state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Absolute cursor position in physical pixels.
    pub position: Vec2,
    /// Primary (left) button held.
    pub primary: bool,
    /// Secondary (right) button held.
    pub secondary: bool,
    /// Wheel movement since the previous snapshot.
    pub wheel_delta: f32,
}

/// Everything the camera reads from input devices for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    /// Keyboard state.
    pub keys: KeyboardState,
    /// Pointer state.
    pub pointer: PointerState,
}

impl InputSnapshot {
    /// Snapshot with only `keys` held and an idle pointer at the origin.
    #[must_use]
    pub fn with_keys(keys: &[CameraKey]) -> Self {
        Self {
            keys: KeyboardState::with_keys(keys),
            pointer: PointerState::default(),
        }
    }

    /// Whether `key` is currently down.
    #[must_use]
    pub fn is_key_down(&self, key: CameraKey) -> bool {
        self.keys.is_key_down(key)
    }
}
