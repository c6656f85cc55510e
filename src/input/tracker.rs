//! Folds raw platform events into per-frame input snapshots.
//!
//! The `InputTracker` owns the transient device state between frames (held
//! keys, cursor position, button flags, accumulated wheel movement, focus).
//! Hosts forward events as they arrive and take one snapshot per frame.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::snapshot::{InputSnapshot, KeyboardState, PointerState};

/// Converts raw window events into [`InputSnapshot`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// tracker.handle_event(event);
///
/// // Once per frame:
/// let frame = FrameContext {
///     elapsed: clock.tick(),
///     active: tracker.is_focused(),
///     viewport,
/// };
/// camera.update(&frame, &tracker.take_snapshot());
/// ```
#[derive(Debug, Clone)]
pub struct InputTracker {
    /// Keys currently held.
    keys: KeyboardState,
    /// Cursor position, button flags and pending wheel movement.
    pointer: PointerState,
    /// Whether the viewer window has focus.
    focused: bool,
}

impl InputTracker {
    /// Create a tracker with nothing held and the window focused.
    #[must_use]
    pub fn new() -> Self {
        Self {
            keys: KeyboardState::default(),
            pointer: PointerState::default(),
            focused: true,
        }
    }

    /// Whether the viewer window currently has focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Apply one platform event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key { key, pressed } => self.keys.set(key, pressed),
            InputEvent::CursorMoved { x, y } => {
                self.pointer.position = Vec2::new(x, y);
            }
            InputEvent::MouseButton { button, pressed } => match button {
                MouseButton::Left => self.pointer.primary = pressed,
                MouseButton::Right => self.pointer.secondary = pressed,
                MouseButton::Middle => {}
            },
            InputEvent::Scroll { delta } => self.pointer.wheel_delta += delta,
            InputEvent::Focus { focused } => {
                self.focused = focused;
                if !focused {
                    // Releases are not delivered to an unfocused window.
                    self.keys.clear();
                    self.pointer.primary = false;
                    self.pointer.secondary = false;
                    self.pointer.wheel_delta = 0.0;
                }
            }
        }
    }

    /// Current state without consuming the pending wheel movement.
    #[must_use]
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            keys: self.keys.clone(),
            pointer: self.pointer,
        }
    }

    /// Snapshot for this frame; the wheel delta is reset afterwards.
    pub fn take_snapshot(&mut self) -> InputSnapshot {
        let snapshot = self.snapshot();
        self.pointer.wheel_delta = 0.0;
        snapshot
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}
