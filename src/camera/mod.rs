//! Free-look camera.
//!
//! Provides pose state (location, yaw, pitch, roll), the derived view and
//! projection transforms, frustum culling, movement primitives, and a
//! message-driven controller.

/// Message listener that drives a camera from input.
pub mod controller;
/// Camera pose, projection, and derived transforms.
pub mod core;
/// View frustum extraction and intersection tests.
pub mod frustum;
mod movement;


pub use self::controller::CameraController;
pub use self::core::{
    Camera, CameraUniform, DEFAULT_FAR_PLANE_DISTANCE, DEFAULT_FIELD_OF_VIEW,
    DEFAULT_NEAR_PLANE_DISTANCE, MAXIMUM_PITCH, MINIMUM_PITCH,
};
pub use self::frustum::{Frustum, Plane};
