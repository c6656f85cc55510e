//! View frustum for visibility tests
//!
//! Extracts frustum planes from the view-projection matrix and provides
//! intersection tests for points and axis-aligned boxes.

use glam::{Mat4, Vec3, Vec4};

use super::bounds::BoundingBox;

/// A plane in 3D space, represented as (normal.x, normal.y, normal.z, distance)
/// where the plane equation is: ax + by + cz + d = 0
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed distance from origin (`n · p + d = 0`).
    pub distance: f32,
}

impl Plane {
    /// Create a plane from coefficients and normalize it
    #[must_use]
    pub fn from_coefficients(coefficients: Vec4) -> Self {
        let normal = coefficients.truncate();
        let len = normal.length();
        if len > 0.0 {
            Self {
                normal: normal / len,
                distance: coefficients.w / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Signed distance from point to plane (positive = in front, negative =
    /// behind)
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

/// View frustum consisting of 6 planes
#[derive(Debug, Clone)]
pub struct Frustum {
    /// Six clipping planes: left, right, bottom, top, near, far.
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    /// Uses the Gribb/Hartmann method for plane extraction.
    /// Planes point inward (positive half-space is inside the frustum).
    #[must_use]
    pub fn from_view_projection(vp: Mat4) -> Self {
        let row0 = vp.row(0);
        let row1 = vp.row(1);
        let row2 = vp.row(2);
        let row3 = vp.row(3);

        // Right-handed projections with [0,1] depth: near plane is just row2
        Self {
            planes: [
                Plane::from_coefficients(row3 + row0),
                Plane::from_coefficients(row3 - row0),
                Plane::from_coefficients(row3 + row1),
                Plane::from_coefficients(row3 - row1),
                Plane::from_coefficients(row2),
                Plane::from_coefficients(row3 - row2),
            ],
        }
    }

    /// Test if a point is inside the frustum
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(point) >= 0.0)
    }

    /// Test if a box is not fully outside the frustum.
    ///
    /// Conservative: a box near a frustum corner can be reported as
    /// intersecting while lying just outside.
    #[inline]
    #[must_use]
    pub fn intersects_box(&self, bbox: &BoundingBox) -> bool {
        self.planes.iter().all(|plane| {
            plane.distance_to_point(bbox.support(plane.normal)) >= 0.0
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn looking_at_origin() -> Frustum {
        let proj = Mat4::perspective_rh(45.0_f32.to_radians(), 1.0, 0.1, 100.0);
        let view =
            Mat4::look_at_rh(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        Frustum::from_view_projection(proj * view)
    }

    #[test]
    fn test_frustum_contains_origin() {
        let frustum = looking_at_origin();

        // Origin should be inside the frustum
        assert!(frustum.contains_point(Vec3::ZERO));

        // Point far behind camera should be outside
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 20.0)));
    }

    #[test]
    fn test_box_intersection() {
        let frustum = looking_at_origin();

        assert!(frustum.intersects_box(&BoundingBox::from_center(
            Vec3::ZERO,
            Vec3::ONE
        )));

        // Straddling the near plane still counts
        assert!(frustum.intersects_box(&BoundingBox::from_center(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::splat(0.5)
        )));

        // Behind the camera
        assert!(!frustum.intersects_box(&BoundingBox::from_center(
            Vec3::new(0.0, 0.0, 50.0),
            Vec3::ONE
        )));

        // Beyond the far plane
        assert!(!frustum.intersects_box(&BoundingBox::from_center(
            Vec3::new(0.0, 0.0, -200.0),
            Vec3::ONE
        )));

        // Off to the side
        assert!(!frustum.intersects_box(&BoundingBox::from_center(
            Vec3::new(100.0, 0.0, 0.0),
            Vec3::ONE
        )));
    }

    #[test]
    fn orthographic_volume_is_a_box() {
        let proj = Mat4::orthographic_rh(-5.0, 5.0, -5.0, 5.0, 0.1, 100.0);
        let view =
            Mat4::look_at_rh(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO, Vec3::NEG_Z);
        let frustum = Frustum::from_view_projection(proj * view);

        assert!(frustum.contains_point(Vec3::new(4.0, 0.0, -4.0)));
        assert!(!frustum.contains_point(Vec3::new(6.0, 0.0, 0.0)));
        assert!(!frustum.contains_point(Vec3::new(0.0, 20.0, 0.0)));
    }
}
