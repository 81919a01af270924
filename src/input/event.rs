/// Platform-agnostic input events.
///
/// These are folded into an [`InputState`](super::InputState) snapshot, which
/// the [`InputMapper`](super::InputMapper) turns into messages once per frame.
///
/// # Example
///
/// ```
/// use freelook::input::{InputEvent, InputState};
///
/// let mut state = InputState::new();
/// state.apply(&InputEvent::Key { key: "KeyW".into(), pressed: true });
/// assert!(state.is_key_down("KeyW"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Keyboard key pressed or released.
    Key {
        /// Physical key in `winit::keyboard::KeyCode` debug form, e.g.
        /// `"KeyW"`.
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Relative mouse motion in physical pixels.
    MouseMoved {
        /// Horizontal motion (positive = right).
        dx: f32,
        /// Vertical motion (positive = down).
        dy: f32,
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
