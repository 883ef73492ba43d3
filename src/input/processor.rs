//! Folds raw platform events into per-frame navigation input.
//!
//! The `InputProcessor` owns all transient input state (held keys, mouse
//! look, accumulated motion) and the key-binding map. Once per frame the
//! accumulated state is taken as a [`FrameInput`] and handed to the
//! [`NavigationController`](crate::camera::NavigationController).

use std::collections::{HashMap, HashSet};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use super::NavAction;

/// Maps physical key strings to [`NavAction`] variants.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyW"`, `"Space"`, `"F2"`, etc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → action.
    bindings: HashMap<String, NavAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyW".into(), NavAction::WalkForward),
            ("KeyS".into(), NavAction::WalkBackward),
            ("KeyA".into(), NavAction::StrafeLeft),
            ("KeyD".into(), NavAction::StrafeRight),
            ("KeyC".into(), NavAction::FlyUp),
            ("Space".into(), NavAction::FlyDown),
            ("KeyQ".into(), NavAction::RollLeft),
            ("KeyE".into(), NavAction::RollRight),
            ("ShiftLeft".into(), NavAction::Boost),
            ("F1".into(), NavAction::LookAtCenter),
            ("F2".into(), NavAction::ToggleOrbit),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the action for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<NavAction> {
        self.bindings.get(key).copied()
    }

    /// Bind `key` to `action`, returning the action it was bound to before.
    pub fn bind(
        &mut self,
        key: impl Into<String>,
        action: NavAction,
    ) -> Option<NavAction> {
        self.bindings.insert(key.into(), action)
    }
}

/// Navigation input gathered over one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Actions held at the end of the frame.
    pub held: HashSet<NavAction>,
    /// Trigger actions pressed during the frame, in press order.
    pub triggered: Vec<NavAction>,
    /// Mouse motion accumulated over the frame, in pixels.
    pub mouse_delta: Vec2,
    /// Whether mouse look (right button) is active.
    pub looking: bool,
}

impl FrameInput {
    /// Input with the given actions held and nothing else.
    #[must_use]
    pub fn holding(actions: &[NavAction]) -> Self {
        Self {
            held: actions.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Whether `action` is held.
    #[must_use]
    pub fn is_held(&self, action: NavAction) -> bool {
        self.held.contains(&action)
    }

    /// Whether `action` was pressed this frame.
    #[must_use]
    pub fn was_triggered(&self, action: NavAction) -> bool {
        self.triggered.contains(&action)
    }
}

/// Accumulates raw events between frames.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// input.handle_event(&event);
///
/// // Once per frame:
/// let frame = input.take_frame();
/// controller.update(&mut camera, &wormhole, &frame, frame_time_ms);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Bound keys currently down. Several keys may share an action.
    held_keys: HashSet<String>,
    /// Trigger actions pressed since the last frame.
    triggered: Vec<NavAction>,
    /// Mouse motion since the last frame.
    mouse_delta: Vec2,
    /// Whether the right mouse button is held.
    looking: bool,
    /// Key string → action mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Fold one raw event into the pending frame state.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Key { key, pressed } => {
                if let Some(action) = self.key_bindings.lookup(key) {
                    self.handle_key(key, action, *pressed);
                }
            }
            InputEvent::MouseMotion { dx, dy } => {
                self.mouse_delta += Vec2::new(*dx, *dy);
            }
            InputEvent::MouseButton { button, pressed } => {
                if *button == MouseButton::Right {
                    self.looking = *pressed;
                }
            }
        }
    }

    fn handle_key(&mut self, key: &str, action: NavAction, pressed: bool) {
        if pressed {
            // Key repeat re-sends presses; triggers fire only when the
            // action goes from no keys down to one.
            let already_held = self.is_action_held(action);
            let newly_pressed = self.held_keys.insert(key.to_owned());
            if newly_pressed && !already_held && action.is_trigger() {
                self.triggered.push(action);
            }
        } else {
            let _ = self.held_keys.remove(key);
        }
    }

    fn is_action_held(&self, action: NavAction) -> bool {
        self.held_keys
            .iter()
            .any(|key| self.key_bindings.lookup(key) == Some(action))
    }

    fn held_actions(&self) -> HashSet<NavAction> {
        self.held_keys
            .iter()
            .filter_map(|key| self.key_bindings.lookup(key))
            .collect()
    }

    /// Take the input gathered since the previous call.
    ///
    /// Held keys and mouse look carry over; triggers and mouse motion are
    /// reset.
    pub fn take_frame(&mut self) -> FrameInput {
        FrameInput {
            held: self.held_actions(),
            triggered: std::mem::take(&mut self.triggered),
            mouse_delta: std::mem::take(&mut self.mouse_delta),
            looking: self.looking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            key: key.to_owned(),
            pressed,
        }
    }

    #[test]
    fn default_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.lookup("KeyW"), Some(NavAction::WalkForward));
        assert_eq!(bindings.lookup("Space"), Some(NavAction::FlyDown));
        assert_eq!(bindings.lookup("F2"), Some(NavAction::ToggleOrbit));
        assert_eq!(bindings.lookup("KeyZ"), None);
    }

    #[test]
    fn held_keys_persist_across_frames() {
        let mut input = InputProcessor::new();
        input.handle_event(&key("KeyW", true));
        input.handle_event(&key("ShiftLeft", true));
        assert!(input.take_frame().is_held(NavAction::WalkForward));

        let second = input.take_frame();
        assert!(second.is_held(NavAction::WalkForward));
        assert!(second.is_held(NavAction::Boost));

        input.handle_event(&key("KeyW", false));
        assert!(!input.take_frame().is_held(NavAction::WalkForward));
    }

    #[test]
    fn triggers_fire_once_per_press() {
        let mut input = InputProcessor::new();
        input.handle_event(&key("F2", true));
        // OS key repeat
        input.handle_event(&key("F2", true));
        let frame = input.take_frame();
        assert_eq!(frame.triggered, vec![NavAction::ToggleOrbit]);
        assert!(input.take_frame().triggered.is_empty());

        input.handle_event(&key("F2", false));
        input.handle_event(&key("F2", true));
        assert!(input.take_frame().was_triggered(NavAction::ToggleOrbit));
    }

    #[test]
    fn shared_action_held_until_last_key_released() {
        let mut input = InputProcessor::new();
        let _ = input
            .key_bindings_mut()
            .bind("ArrowUp", NavAction::WalkForward);

        input.handle_event(&key("KeyW", true));
        input.handle_event(&key("ArrowUp", true));
        input.handle_event(&key("ArrowUp", false));
        assert!(input.take_frame().is_held(NavAction::WalkForward));

        input.handle_event(&key("KeyW", false));
        assert!(!input.take_frame().is_held(NavAction::WalkForward));
    }

    #[test]
    fn shared_trigger_fires_on_first_key_down() {
        let mut input = InputProcessor::new();
        let _ = input.key_bindings_mut().bind("KeyO", NavAction::ToggleOrbit);

        input.handle_event(&key("F2", true));
        input.handle_event(&key("KeyO", true));
        assert_eq!(input.take_frame().triggered, vec![NavAction::ToggleOrbit]);

        // One key still down: the action never went idle.
        input.handle_event(&key("F2", false));
        input.handle_event(&key("F2", true));
        assert!(input.take_frame().triggered.is_empty());

        input.handle_event(&key("F2", false));
        input.handle_event(&key("KeyO", false));
        input.handle_event(&key("KeyO", true));
        assert!(input.take_frame().was_triggered(NavAction::ToggleOrbit));
    }

    #[test]
    fn mouse_motion_accumulates_and_resets() {
        let mut input = InputProcessor::new();
        input.handle_event(&InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        input.handle_event(&InputEvent::MouseMotion { dx: 3.0, dy: -1.0 });
        input.handle_event(&InputEvent::MouseMotion { dx: 2.0, dy: 4.0 });
        let frame = input.take_frame();
        assert!(frame.looking);
        assert_eq!(frame.mouse_delta, Vec2::new(5.0, 3.0));

        let next = input.take_frame();
        assert_eq!(next.mouse_delta, Vec2::ZERO);
        assert!(next.looking);
    }

    #[test]
    fn rebinding_replaces_action() {
        let mut input = InputProcessor::new();
        let previous = input
            .key_bindings_mut()
            .bind("KeyW", NavAction::FlyUp);
        assert_eq!(previous, Some(NavAction::WalkForward));
        input.handle_event(&key("KeyW", true));
        assert!(input.take_frame().is_held(NavAction::FlyUp));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut input = InputProcessor::new();
        input.handle_event(&key("KeyZ", true));
        assert_eq!(input.take_frame(), FrameInput::default());
    }
}
