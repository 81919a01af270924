use glam::Vec2;
use rustc_hash::FxHashSet;

use super::event::{InputEvent, MouseButton};

/// Per-frame input snapshot.
///
/// Events are applied as they arrive; [`InputState::begin_frame`] rolls the
/// held-key set into the previous frame so presses can be told apart from
/// holds.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys_down: FxHashSet<String>,
    previous_keys_down: FxHashSet<String>,
    right_mouse_down: bool,
    mouse_delta: Vec2,
    elapsed: f32,
}

impl InputState {
    /// Create an empty snapshot with nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame lasting `elapsed` seconds.
    ///
    /// Keys held now become the previous frame's keys and the accumulated
    /// mouse motion is cleared.
    pub fn begin_frame(&mut self, elapsed: f32) {
        self.previous_keys_down.clone_from(&self.keys_down);
        self.mouse_delta = Vec2::ZERO;
        self.elapsed = elapsed;
    }

    /// Fold one event into the snapshot.
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Key { key, pressed: true } => {
                let _ = self.keys_down.insert(key.clone());
            }
            InputEvent::Key { key, pressed: false } => {
                let _ = self.keys_down.remove(key);
            }
            InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed,
            } => {
                self.right_mouse_down = *pressed;
            }
            InputEvent::MouseButton { .. } => {}
            InputEvent::MouseMoved { dx, dy } => {
                self.mouse_delta += Vec2::new(*dx, *dy);
            }
        }
    }

    /// Whether `key` is held this frame.
    #[must_use]
    pub fn is_key_down(&self, key: &str) -> bool {
        self.keys_down.contains(key)
    }

    /// Whether `key` went down this frame (held now, not held last frame).
    #[must_use]
    pub fn is_key_pressed(&self, key: &str) -> bool {
        self.keys_down.contains(key) && !self.previous_keys_down.contains(key)
    }

    /// Whether the right mouse button is held.
    #[must_use]
    pub fn is_right_mouse_button_down(&self) -> bool {
        self.right_mouse_down
    }

    /// Mouse motion accumulated since the frame began.
    #[must_use]
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    /// Duration of the current frame in seconds.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
