//! Orientation-relative movement.
//!
//! Horizontal moves use only the yaw, so looking up or down never changes
//! altitude. Vertical moves follow world Y regardless of orientation.

use glam::{DMat3, DVec3};

use super::core::Camera;

impl Camera {
    /// Translate along the yaw-only forward direction.
    pub fn move_forward_horizontally(&mut self, distance: f64) {
        self.translate(self.horizontal_direction(DVec3::NEG_Z), distance);
    }

    /// Translate against the yaw-only forward direction.
    pub fn move_backward_horizontally(&mut self, distance: f64) {
        self.translate(self.horizontal_direction(DVec3::Z), distance);
    }

    /// Strafe left in the horizontal plane.
    pub fn move_left(&mut self, distance: f64) {
        self.translate(self.horizontal_direction(DVec3::NEG_X), distance);
    }

    /// Strafe right in the horizontal plane.
    pub fn move_right(&mut self, distance: f64) {
        self.translate(self.horizontal_direction(DVec3::X), distance);
    }

    /// Rise along world up.
    pub fn move_up(&mut self, distance: f64) {
        self.translate(DVec3::Y, distance);
    }

    /// Sink along world down.
    pub fn move_down(&mut self, distance: f64) {
        self.translate(DVec3::NEG_Y, distance);
    }

    /// Rotate a canonical horizontal axis by the current yaw.
    fn horizontal_direction(&self, axis: DVec3) -> DVec3 {
        DMat3::from_rotation_y(f64::from(self.yaw())) * axis
    }

    fn translate(&mut self, direction: DVec3, distance: f64) {
        self.set_location(self.location() + direction * distance);
    }
}
