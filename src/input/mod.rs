//! Input handling: event types and the processor that folds raw key and
//! mouse events into per-frame navigation input.

/// Platform-agnostic input events.
pub mod event;
/// Folds events into held actions and accumulated mouse motion.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::{FrameInput, InputProcessor, KeyBindings};
use serde::{Deserialize, Serialize};

/// Navigation actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// KeyW = "walk_forward"
/// F2 = "toggle_orbit"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavAction {
    /// Move along the look vector.
    WalkForward,
    /// Move against the look vector.
    WalkBackward,
    /// Move against the right vector.
    StrafeLeft,
    /// Move along the right vector.
    StrafeRight,
    /// Move along the up vector.
    FlyUp,
    /// Move against the up vector.
    FlyDown,
    /// Roll counter-clockwise.
    RollLeft,
    /// Roll clockwise.
    RollRight,
    /// Multiply the movement delta while held.
    Boost,
    /// Turn to face the throat centre.
    LookAtCenter,
    /// Enter or leave orbit mode.
    ToggleOrbit,
}

impl NavAction {
    /// Whether the action fires once per press rather than every held frame.
    #[must_use]
    pub fn is_trigger(self) -> bool {
        matches!(self, Self::LookAtCenter | Self::ToggleOrbit)
    }
}
