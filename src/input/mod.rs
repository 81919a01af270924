//! Input handling: event types, the per-frame snapshot, and the mapper that
//! converts snapshots into messages.

/// Platform-agnostic input events.
pub mod event;
/// Bindable camera actions.
pub mod keyboard;
/// Converts input snapshots into broadcast messages.
pub mod mapper;
/// Message types produced from input.
pub mod messages;
/// Per-frame input snapshot.
pub mod state;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use mapper::InputMapper;
pub use messages::InputMessage;
pub use state::InputState;
