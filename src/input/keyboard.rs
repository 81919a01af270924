use serde::{Deserialize, Serialize};

/// Camera actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// reset_camera = "KeyR"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Walk along the horizontal look direction.
    MoveForward,
    /// Walk against the horizontal look direction.
    MoveBackward,
    /// Strafe left.
    MoveLeft,
    /// Strafe right.
    MoveRight,
    /// Rise along world up.
    MoveUp,
    /// Sink along world down.
    MoveDown,
    /// Return to the configured starting pose.
    ResetCamera,
}

impl KeyAction {
    /// Every action, in binding order.
    pub const ALL: [Self; 7] = [
        Self::MoveForward,
        Self::MoveBackward,
        Self::MoveLeft,
        Self::MoveRight,
        Self::MoveUp,
        Self::MoveDown,
        Self::ResetCamera,
    ];
}
