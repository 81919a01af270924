use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use std::rc::Rc;

use glam::{DMat4, DVec3, Mat3, Mat4, Vec3};

use crate::camera::frustum::Frustum;
use crate::options::Settings;

/// Highest pitch the camera may take, just short of straight up.
pub const MAXIMUM_PITCH: f32 = FRAC_PI_2 - 0.001;
/// Lowest pitch the camera may take, just short of straight down.
pub const MINIMUM_PITCH: f32 = -MAXIMUM_PITCH;

/// Vertical field of view (radians) used until projection parameters are
/// set.
pub const DEFAULT_FIELD_OF_VIEW: f32 = FRAC_PI_4;
/// Near clipping distance used until projection parameters are set.
pub const DEFAULT_NEAR_PLANE_DISTANCE: f32 = 1.0;
/// Far clipping distance used until projection parameters are set.
pub const DEFAULT_FAR_PLANE_DISTANCE: f32 = 10_000.0;

/// Free-look perspective camera.
///
/// Orientation is kept as yaw/pitch/roll in single precision; location is
/// double precision so large worlds stay stable. Every mutator recomputes the
/// derived transforms before returning, so reads are never stale.
///
/// Projection preconditions (not checked): `aspect_ratio > 0`,
/// `zoom_level > 0` and `0 < near < far`.
pub struct Camera {
    settings: Rc<dyn Settings>,

    location: DVec3,
    yaw: f32,
    pitch: f32,
    roll: f32,

    field_of_view: f32,
    zoom_level: f32,
    aspect_ratio: f32,
    near_plane_distance: f32,
    far_plane_distance: f32,

    forward: Vec3,
    origin_based_view_transformation: Mat4,
    view_transformation: Mat4,
    projection_transformation: Mat4,
    origin_based_view_frustum: Frustum,
    view_frustum: Frustum,
}

/// GPU uniform snapshot of a [`Camera`].
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Combined projection * view matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Projection * origin-based view, for skybox and far-field passes.
    pub origin_view_proj: [[f32; 4]; 4],
    /// Camera world-space position, narrowed to single precision.
    pub position: [f32; 3],
    /// Near clipping plane distance.
    pub near: f32,
    /// Unit look direction.
    pub forward: [f32; 3],
    /// Far clipping plane distance.
    pub far: f32,
}

/// Rotate the canonical forward by pitch then yaw, and the canonical up by
/// roll. The order matters for every non-zero combination of angles.
fn orientation_vectors(yaw: f32, pitch: f32, roll: f32) -> (Vec3, Vec3) {
    let yaw_matrix = Mat3::from_rotation_y(yaw);
    let pitch_matrix = Mat3::from_rotation_x(pitch);
    let roll_matrix = Mat3::from_rotation_z(roll);

    let forward = yaw_matrix * (pitch_matrix * Vec3::NEG_Z);
    let up = roll_matrix * Vec3::Y;
    (forward, up)
}

fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(MINIMUM_PITCH, MAXIMUM_PITCH)
}

impl Camera {
    /// Create a camera at the origin facing -Z with default projection.
    ///
    /// `settings` is only consulted by [`Camera::reset`].
    #[must_use]
    pub fn new(settings: Rc<dyn Settings>) -> Self {
        let mut camera = Self {
            settings,
            location: DVec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            field_of_view: DEFAULT_FIELD_OF_VIEW,
            zoom_level: 1.0,
            aspect_ratio: 1.0,
            near_plane_distance: DEFAULT_NEAR_PLANE_DISTANCE,
            far_plane_distance: DEFAULT_FAR_PLANE_DISTANCE,
            forward: Vec3::NEG_Z,
            origin_based_view_transformation: Mat4::IDENTITY,
            view_transformation: Mat4::IDENTITY,
            projection_transformation: Mat4::IDENTITY,
            origin_based_view_frustum: Frustum::new(
                Mat4::IDENTITY,
                Vec3::ZERO,
                Vec3::NEG_Z,
                DEFAULT_NEAR_PLANE_DISTANCE,
                DEFAULT_FAR_PLANE_DISTANCE,
            ),
            view_frustum: Frustum::new(
                Mat4::IDENTITY,
                Vec3::ZERO,
                Vec3::NEG_Z,
                DEFAULT_NEAR_PLANE_DISTANCE,
                DEFAULT_FAR_PLANE_DISTANCE,
            ),
        };
        camera.update_projection_transformation();
        camera.update_view_transformation();
        camera
    }

    // ── Pose mutators ──

    /// Set location and all three angles at once. Pitch is clamped.
    pub fn set_view_parameters(
        &mut self,
        location: DVec3,
        yaw: f32,
        pitch: f32,
        roll: f32,
    ) {
        self.location = location;
        self.yaw = yaw;
        self.pitch = clamp_pitch(pitch);
        self.roll = roll;
        self.update_view_transformation();
    }

    /// Place the camera at `location` looking toward `look_at`.
    ///
    /// Roll is always zero. Looking straight up or down yields yaw 0 and the
    /// respective pitch bound. `location == look_at` has no defined direction
    /// and produces NaN angles; [`Camera::reset`] guards that case itself.
    pub fn set_view_parameters_from_look_at(
        &mut self,
        location: DVec3,
        look_at: DVec3,
    ) {
        let direction = look_at - location;

        let yaw = if direction.x == 0.0 && direction.z == 0.0 {
            0.0
        } else {
            (-direction.x).atan2(-direction.z) as f32
        };
        let pitch = (direction.y / direction.length()).asin() as f32;

        self.set_view_parameters(location, yaw, pitch, 0.0);
    }

    /// Restore the starting pose from the settings.
    pub fn reset(&mut self) {
        let location = self.settings.camera_starting_location();
        let look_at = self.settings.camera_starting_look_at();

        if location == look_at {
            self.set_view_parameters(location, 0.0, 0.0, 0.0);
        } else {
            self.set_view_parameters_from_look_at(location, look_at);
        }
        log::debug!(
            "camera reset to {location} (yaw {}, pitch {})",
            self.yaw,
            self.pitch
        );
    }

    /// World-space position.
    #[must_use]
    pub fn location(&self) -> DVec3 {
        self.location
    }

    /// Move the camera to `location`, keeping its orientation.
    pub fn set_location(&mut self, location: DVec3) {
        self.location = location;
        self.update_view_transformation();
    }

    /// Rotation about world up, in radians. Zero faces -Z.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Set the yaw angle directly (in radians).
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
        self.update_view_transformation();
    }

    /// Rotation about the local right axis, in radians.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set the pitch angle directly (in radians, clamped to the pitch bounds).
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = clamp_pitch(pitch);
        self.update_view_transformation();
    }

    /// Rotation about the local forward axis, in radians.
    #[must_use]
    pub fn roll(&self) -> f32 {
        self.roll
    }

    /// Set the roll angle directly (in radians).
    pub fn set_roll(&mut self, roll: f32) {
        self.roll = roll;
        self.update_view_transformation();
    }

    /// Add `delta` radians to the yaw.
    pub fn change_yaw(&mut self, delta: f32) {
        self.set_yaw(self.yaw + delta);
    }

    /// Add `delta` radians to the pitch, then clamp.
    pub fn change_pitch(&mut self, delta: f32) {
        self.set_pitch(self.pitch + delta);
    }

    // ── Projection ──

    /// Set every projection input and rebuild projection and frustums.
    ///
    /// The effective vertical field of view is `field_of_view / zoom_level`.
    pub fn set_projection_parameters(
        &mut self,
        field_of_view: f32,
        zoom_level: f32,
        aspect_ratio: f32,
        near_plane_distance: f32,
        far_plane_distance: f32,
    ) {
        self.field_of_view = field_of_view;
        self.zoom_level = zoom_level;
        self.aspect_ratio = aspect_ratio;
        self.near_plane_distance = near_plane_distance;
        self.far_plane_distance = far_plane_distance;
        self.update_projection_transformation();
    }

    /// Change only the near and far clipping distances.
    pub fn set_clipping_planes(
        &mut self,
        near_plane_distance: f32,
        far_plane_distance: f32,
    ) {
        self.near_plane_distance = near_plane_distance;
        self.far_plane_distance = far_plane_distance;
        self.update_projection_transformation();
    }

    /// Vertical field of view in radians, before zoom.
    #[must_use]
    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    /// Zoom divisor applied to the field of view.
    #[must_use]
    pub fn zoom_level(&self) -> f32 {
        self.zoom_level
    }

    /// Viewport aspect ratio (width / height).
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Near clipping plane distance.
    #[must_use]
    pub fn near_plane_distance(&self) -> f32 {
        self.near_plane_distance
    }

    /// Far clipping plane distance.
    #[must_use]
    pub fn far_plane_distance(&self) -> f32 {
        self.far_plane_distance
    }

    // ── Derived state ──

    /// Unit look direction derived from yaw and pitch.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// View matrix with the eye at the world origin.
    ///
    /// Used for far-field passes (skybox, stars) where translating by a large
    /// location would only cost precision.
    #[must_use]
    pub fn origin_based_view_transformation(&self) -> Mat4 {
        self.origin_based_view_transformation
    }

    /// Full view matrix including translation by the camera location.
    #[must_use]
    pub fn view_transformation(&self) -> Mat4 {
        self.view_transformation
    }

    /// Perspective projection matrix.
    #[must_use]
    pub fn projection_transformation(&self) -> Mat4 {
        self.projection_transformation
    }

    /// Frustum of the origin-based view.
    #[must_use]
    pub fn origin_based_view_frustum(&self) -> &Frustum {
        &self.origin_based_view_frustum
    }

    /// Frustum of the full view, in world space.
    #[must_use]
    pub fn view_frustum(&self) -> &Frustum {
        &self.view_frustum
    }

    /// Pack the current transforms for GPU upload.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        let projection = self.projection_transformation;
        CameraUniform {
            view_proj: (projection * self.view_transformation)
                .to_cols_array_2d(),
            origin_view_proj: (projection
                * self.origin_based_view_transformation)
                .to_cols_array_2d(),
            position: self.location.as_vec3().to_array(),
            near: self.near_plane_distance,
            forward: self.forward.to_array(),
            far: self.far_plane_distance,
        }
    }

    fn update_view_transformation(&mut self) {
        let (forward, up) =
            orientation_vectors(self.yaw, self.pitch, self.roll);
        self.forward = forward;
        self.origin_based_view_transformation =
            Mat4::look_at_rh(Vec3::ZERO, forward, up);

        // Translate in double precision before narrowing
        self.view_transformation = (self
            .origin_based_view_transformation
            .as_dmat4()
            * DMat4::from_translation(-self.location))
        .as_mat4();

        self.update_frustums();
    }

    fn update_projection_transformation(&mut self) {
        self.projection_transformation = Mat4::perspective_rh(
            self.field_of_view / self.zoom_level,
            self.aspect_ratio,
            self.near_plane_distance,
            self.far_plane_distance,
        );
        self.update_frustums();
    }

    fn update_frustums(&mut self) {
        let projection = self.projection_transformation;
        self.origin_based_view_frustum = Frustum::new(
            projection * self.origin_based_view_transformation,
            Vec3::ZERO,
            self.forward,
            self.near_plane_distance,
            self.far_plane_distance,
        );
        self.view_frustum = Frustum::new(
            projection * self.view_transformation,
            self.location.as_vec3(),
            self.forward,
            self.near_plane_distance,
            self.far_plane_distance,
        );
    }
}

impl std::fmt::Debug for Camera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Camera")
            .field("location", &self.location)
            .field("yaw", &self.yaw)
            .field("pitch", &self.pitch)
            .field("roll", &self.roll)
            .field("field_of_view", &self.field_of_view)
            .field("zoom_level", &self.zoom_level)
            .field("aspect_ratio", &self.aspect_ratio)
            .field("near_plane_distance", &self.near_plane_distance)
            .field("far_plane_distance", &self.far_plane_distance)
            .finish_non_exhaustive()
    }
}
