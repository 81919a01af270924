use glam::DVec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera starting pose, projection, and control parameters.
pub struct CameraOptions {
    /// Where the camera is placed on reset.
    #[schemars(skip)]
    pub starting_location: DVec3,
    /// What the camera looks at on reset.
    #[schemars(skip)]
    pub starting_look_at: DVec3,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Divisor applied to the field of view.
    #[schemars(title = "Zoom", range(min = 0.25, max = 8.0), extend("step" = 0.25))]
    pub zoom_level: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Movement speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 0.5, max = 500.0), extend("step" = 0.5))]
    pub move_speed: f32,
    /// Mouse-look sensitivity in radians per pixel.
    #[schemars(title = "Look Speed", range(min = 0.0005, max = 0.02), extend("step" = 0.0005))]
    pub look_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            starting_location: DVec3::new(0.0, 0.0, 10.0),
            starting_look_at: DVec3::ZERO,
            fovy: 45.0,
            zoom_level: 1.0,
            znear: 1.0,
            zfar: 10_000.0,
            move_speed: 10.0,
            look_speed: 0.005,
        }
    }
}

impl CameraOptions {
    /// Push the projection settings to `camera` for a viewport of
    /// `aspect_ratio`.
    pub fn apply_projection(&self, camera: &mut Camera, aspect_ratio: f32) {
        camera.set_projection_parameters(
            self.fovy.to_radians(),
            self.zoom_level,
            aspect_ratio,
            self.znear,
            self.zfar,
        );
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use glam::Mat4;

    use super::*;
    use crate::options::Options;

    #[test]
    fn projection_settings_reach_the_camera() {
        let mut options = Options::default();
        options.camera.fovy = 60.0;
        options.camera.zoom_level = 2.0;
        options.camera.znear = 0.5;
        options.camera.zfar = 500.0;

        let mut camera = Camera::new(Rc::new(options.clone()));
        options.camera.apply_projection(&mut camera, 1.5);

        assert_eq!(camera.field_of_view(), 60.0_f32.to_radians());
        assert_eq!(camera.zoom_level(), 2.0);
        assert_eq!(camera.aspect_ratio(), 1.5);
        assert_eq!(camera.near_plane_distance(), 0.5);
        assert_eq!(camera.far_plane_distance(), 500.0);
        assert_eq!(
            camera.projection_transformation(),
            Mat4::perspective_rh(60.0_f32.to_radians() / 2.0, 1.5, 0.5, 500.0)
        );
    }

    #[test]
    fn default_start_looks_at_the_origin_from_positive_z() {
        let options = Options::default();
        let mut camera = Camera::new(Rc::new(options));
        camera.reset();

        assert_eq!(camera.location(), DVec3::new(0.0, 0.0, 10.0));
        assert_eq!(camera.yaw(), 0.0);
        assert_eq!(camera.pitch(), 0.0);
    }
}
