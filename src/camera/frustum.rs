//! View frustum for culling
//!
//! Side planes are extracted from a view-projection matrix; the near and far
//! planes are built straight from the clipping distances so their offsets
//! match the caller's values exactly.

use glam::{Mat4, Vec3, Vec4};

/// A plane in 3D space: points `p` on the plane satisfy `normal · p + d = 0`.
///
/// Normals point out of the frustum, so a point is inside a plane when its
/// signed distance is non-positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal pointing out of the enclosed volume.
    pub normal: Vec3,
    /// Signed offset from the origin along the normal.
    pub d: f32,
}

impl Plane {
    /// Create a plane from a unit normal and offset.
    #[must_use]
    pub const fn new(normal: Vec3, d: f32) -> Self {
        Self { normal, d }
    }

    /// Create a plane from coefficients and normalize it
    #[must_use]
    pub fn from_coefficients(coefficients: Vec4) -> Self {
        let len = coefficients.truncate().length();
        if len > 0.0 {
            Self {
                normal: coefficients.truncate() / len,
                d: coefficients.w / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                d: 0.0,
            }
        }
    }

    /// Signed distance from point to plane (positive = outside, negative =
    /// inside)
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.d
    }
}

/// View frustum consisting of 6 planes with outward-facing normals.
#[derive(Debug, Clone, PartialEq)]
pub struct Frustum {
    /// Near clipping plane; faces back toward the eye.
    pub near: Plane,
    /// Far clipping plane; faces along the view direction.
    pub far: Plane,
    /// Left side plane.
    pub left: Plane,
    /// Right side plane.
    pub right: Plane,
    /// Top side plane.
    pub top: Plane,
    /// Bottom side plane.
    pub bottom: Plane,
}

impl Frustum {
    /// Build a frustum for a camera at `eye` looking along unit `forward`.
    ///
    /// `view_projection` supplies the four side planes (Gribb/Hartmann,
    /// right-handed, [0, 1] depth). Near and far planes come from the
    /// clipping distances, so an eye at the origin yields `near.d == near`
    /// and `far.d == -far` without rounding.
    #[must_use]
    pub fn new(
        view_projection: Mat4,
        eye: Vec3,
        forward: Vec3,
        near: f32,
        far: f32,
    ) -> Self {
        // glam stores column-major, so rows are read across the axes
        let vp = view_projection;
        let row0 = vp.row(0);
        let row1 = vp.row(1);
        let row3 = vp.row(3);

        // Negated so normals face outward
        let left = -(row3 + row0);
        let right = -(row3 - row0);
        let bottom = -(row3 + row1);
        let top = -(row3 - row1);

        let eye_offset = forward.dot(eye);

        Self {
            near: Plane::new(-forward, near + eye_offset),
            far: Plane::new(forward, -far - eye_offset),
            left: Plane::from_coefficients(left),
            right: Plane::from_coefficients(right),
            top: Plane::from_coefficients(top),
            bottom: Plane::from_coefficients(bottom),
        }
    }

    /// All six planes: near, far, left, right, top, bottom.
    #[must_use]
    pub const fn planes(&self) -> [Plane; 6] {
        [
            self.near,
            self.far,
            self.left,
            self.right,
            self.top,
            self.bottom,
        ]
    }

    /// Test if a point is inside the frustum
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes()
            .iter()
            .all(|plane| plane.distance_to_point(point) <= 0.0)
    }

    /// Test if a sphere intersects or is inside the frustum
    #[inline]
    #[must_use]
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes()
            .iter()
            .all(|plane| plane.distance_to_point(center) <= radius)
    }

    /// Test if a sphere is completely inside the frustum (not just
    /// intersecting)
    #[inline]
    #[must_use]
    pub fn contains_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes()
            .iter()
            .all(|plane| plane.distance_to_point(center) <= -radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn looking_down_negative_z(eye: Vec3) -> Frustum {
        let proj = Mat4::perspective_rh(45.0_f32.to_radians(), 1.0, 0.1, 100.0);
        let view = Mat4::look_at_rh(eye, eye + Vec3::NEG_Z, Vec3::Y);
        Frustum::new(proj * view, eye, Vec3::NEG_Z, 0.1, 100.0)
    }

    #[test]
    fn test_frustum_contains_point_ahead() {
        let frustum = looking_down_negative_z(Vec3::new(0.0, 0.0, 10.0));

        assert!(frustum.contains_point(Vec3::ZERO));
        // Behind the eye
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 20.0)));
        // Past the far plane
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, -200.0)));
        // Far off to the side
        assert!(!frustum.contains_point(Vec3::new(50.0, 0.0, 0.0)));
    }

    #[test]
    fn test_sphere_intersection() {
        let frustum = looking_down_negative_z(Vec3::new(0.0, 0.0, 10.0));

        assert!(frustum.intersects_sphere(Vec3::ZERO, 1.0));
        assert!(!frustum.intersects_sphere(Vec3::new(0.0, 0.0, 50.0), 1.0));
        // Straddles the far plane
        assert!(frustum.intersects_sphere(Vec3::new(0.0, 0.0, -90.5), 1.0));
        assert!(!frustum.contains_sphere(Vec3::new(0.0, 0.0, -90.5), 1.0));
    }

    #[test]
    fn test_contains_sphere() {
        let frustum = looking_down_negative_z(Vec3::new(0.0, 0.0, 10.0));

        assert!(frustum.contains_sphere(Vec3::ZERO, 0.5));
        assert!(!frustum.contains_sphere(Vec3::ZERO, 50.0));
    }

    #[test]
    fn test_clipping_plane_offsets_at_origin() {
        let frustum = looking_down_negative_z(Vec3::ZERO);

        assert_eq!(frustum.near.d, 0.1);
        assert_eq!(frustum.far.d, -100.0);
        assert_eq!(frustum.near.normal, Vec3::Z);
        assert_eq!(frustum.far.normal, Vec3::NEG_Z);
    }

    #[test]
    fn test_side_planes_are_unit_length() {
        let frustum = looking_down_negative_z(Vec3::new(3.0, -2.0, 7.0));
        for plane in frustum.planes() {
            assert!((plane.normal.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_degenerate_coefficients_collapse_to_zero_plane() {
        let plane = Plane::from_coefficients(Vec4::new(0.0, 0.0, 0.0, 5.0));
        assert_eq!(plane.normal, Vec3::ZERO);
        assert_eq!(plane.d, 0.0);
    }
}
