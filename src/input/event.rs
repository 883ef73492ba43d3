/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor), which
/// accumulates them until the next frame is stepped.
///
/// # Example
///
/// ```
/// use wormhole::input::{InputEvent, InputProcessor};
///
/// let mut input = InputProcessor::new();
/// input.handle_event(&InputEvent::Key {
///     key: "KeyW".into(),
///     pressed: true,
/// });
/// let frame = input.take_frame();
/// assert!(frame.is_held(wormhole::input::NavAction::WalkForward));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Physical key changed state.
    Key {
        /// Key string in `winit::keyboard::KeyCode` debug format
        /// (`"KeyW"`, `"F2"`, `"ShiftLeft"`).
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Relative mouse motion since the previous event.
    MouseMotion {
        /// Horizontal motion in pixels.
        dx: f32,
        /// Vertical motion in pixels (positive = down).
        dy: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button; held to look around.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}
