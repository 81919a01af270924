//! Messages the input mapper broadcasts.
//!
//! Each message captures what its listener needs from the frame's
//! [`InputState`] at the moment it is sent.

use glam::Vec2;

use super::state::InputState;

/// A message built from the current input snapshot.
pub trait InputMessage: 'static {
    /// Capture this message from `input`.
    fn from_input(input: &InputState) -> Self;
}

/// Walk along the horizontal look direction for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveForward {
    /// Frame duration in seconds.
    pub elapsed: f32,
}

/// Walk against the horizontal look direction for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveBackward {
    /// Frame duration in seconds.
    pub elapsed: f32,
}

/// Strafe left for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveLeft {
    /// Frame duration in seconds.
    pub elapsed: f32,
}

/// Strafe right for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveRight {
    /// Frame duration in seconds.
    pub elapsed: f32,
}

/// Rise for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveUp {
    /// Frame duration in seconds.
    pub elapsed: f32,
}

/// Sink for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveDown {
    /// Frame duration in seconds.
    pub elapsed: f32,
}

/// Turn the view by a mouse drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseLook {
    /// Mouse motion this frame in physical pixels (positive y = down).
    pub delta: Vec2,
}

/// Return the camera to its starting pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetCamera;

impl InputMessage for MoveForward {
    fn from_input(input: &InputState) -> Self {
        Self {
            elapsed: input.elapsed(),
        }
    }
}

impl InputMessage for MoveBackward {
    fn from_input(input: &InputState) -> Self {
        Self {
            elapsed: input.elapsed(),
        }
    }
}

impl InputMessage for MoveLeft {
    fn from_input(input: &InputState) -> Self {
        Self {
            elapsed: input.elapsed(),
        }
    }
}

impl InputMessage for MoveRight {
    fn from_input(input: &InputState) -> Self {
        Self {
            elapsed: input.elapsed(),
        }
    }
}

impl InputMessage for MoveUp {
    fn from_input(input: &InputState) -> Self {
        Self {
            elapsed: input.elapsed(),
        }
    }
}

impl InputMessage for MoveDown {
    fn from_input(input: &InputState) -> Self {
        Self {
            elapsed: input.elapsed(),
        }
    }
}

impl InputMessage for MouseLook {
    fn from_input(input: &InputState) -> Self {
        Self {
            delta: input.mouse_delta(),
        }
    }
}

impl InputMessage for ResetCamera {
    fn from_input(_input: &InputState) -> Self {
        Self
    }
}
