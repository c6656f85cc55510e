/// Keys the camera reacts to.
///
/// The set is fixed; hosts translate their own key representation into
/// these values (see the `viewer` feature for the winit mapping).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraKey {
    /// Move along the camera's forward axis.
    Forward,
    /// Move along the camera's backward axis.
    Back,
    /// Strafe left.
    Left,
    /// Strafe right.
    Right,
    /// Rise along the camera's up axis (ortho: zoom out).
    Up,
    /// Sink along the camera's up axis (ortho: zoom in).
    Down,
    /// Restore the default pose.
    Reset,
    /// Switch between perspective and orthographic projection.
    ToggleMode,
    /// Multiply the frame-time scalar by the modifier factor.
    Fast,
    /// Divide the frame-time scalar by the modifier factor.
    Precise,
    /// Scale the modifier factor by the boost factor.
    Boost,
    /// Increase yaw.
    RotateLeft,
    /// Decrease yaw.
    RotateRight,
    /// Increase pitch.
    RotateUp,
    /// Decrease pitch.
    RotateDown,
}

impl CameraKey {
    /// Every key, in declaration order.
    #[cfg(test)]
    pub(crate) const ALL: [Self; 15] = [
        Self::Forward,
        Self::Back,
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
        Self::Reset,
        Self::ToggleMode,
        Self::Fast,
        Self::Precise,
        Self::Boost,
        Self::RotateLeft,
        Self::RotateRight,
        Self::RotateUp,
        Self::RotateDown,
    ];
}

/// Platform-agnostic input events.
///
/// These are fed into an [`InputTracker`](super::InputTracker) which folds
/// them into per-frame [`InputSnapshot`](super::InputSnapshot)s.
///
/// # Example
///
/// ```ignore
/// tracker.handle_event(InputEvent::CursorMoved { x: 100.0, y: 200.0 });
/// tracker.handle_event(InputEvent::Key {
///     key: CameraKey::Forward,
///     pressed: true,
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A camera key was pressed or released.
    Key {
        /// Which key changed.
        key: CameraKey,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = away from the user).
    Scroll {
        /// Scroll amount; only its sign reaches the camera.
        delta: f32,
    },
    /// The viewer window gained or lost focus.
    Focus {
        /// Whether the viewer is now focused.
        focused: bool,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "viewer")]
impl CameraKey {
    /// Map a physical winit key to the camera key it drives, if any.
    #[must_use]
    pub fn from_key_code(code: winit::keyboard::KeyCode) -> Option<Self> {
        use winit::keyboard::KeyCode;
        let key = match code {
            KeyCode::KeyW => Self::Forward,
            KeyCode::KeyS => Self::Back,
            KeyCode::KeyA => Self::Left,
            KeyCode::KeyD => Self::Right,
            KeyCode::KeyQ => Self::Up,
            KeyCode::KeyZ => Self::Down,
            KeyCode::KeyR => Self::Reset,
            KeyCode::KeyO => Self::ToggleMode,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Self::Fast,
            KeyCode::ControlLeft | KeyCode::ControlRight => Self::Precise,
            KeyCode::Space => Self::Boost,
            KeyCode::ArrowLeft => Self::RotateLeft,
            KeyCode::ArrowRight => Self::RotateRight,
            KeyCode::ArrowUp => Self::RotateUp,
            KeyCode::ArrowDown => Self::RotateDown,
            _ => return None,
        };
        Some(key)
    }
}
