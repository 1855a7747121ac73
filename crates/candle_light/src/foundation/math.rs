//! Math utilities and types
//!
//! Provides the small set of 3D math types the scene graph needs.

pub use nalgebra::{Matrix4, Quaternion, Unit, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position relative to the parent node
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Set the same scale factor on all three axes
    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = Vec3::new(scale, scale, scale);
    }

    /// Replace the rotation with a rotation of `angle` radians about +Y
    pub fn set_rotation_y(&mut self, angle: f32) {
        self.rotation = Quat::from_axis_angle(&Vec3::y_axis(), angle);
    }

    /// Signed rotation about +Y in radians
    ///
    /// Only meaningful when the rotation is a pure yaw, which is the only kind
    /// of rotation the candle placement produces.
    pub fn yaw(&self) -> f32 {
        self.rotation.scaled_axis().y
    }

    /// Convert to a transformation matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Point3) -> Point3 {
        self.to_matrix().transform_point(&point)
    }

    /// Combine this (parent) transform with a child transform
    pub fn combine(&self, other: &Transform) -> Transform {
        Transform {
            position: self.position + self.rotation * (self.scale.component_mul(&other.position)),
            rotation: self.rotation * other.rotation,
            scale: self.scale.component_mul(&other.scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_identity_is_default() {
        let transform = Transform::identity();
        assert_eq!(transform.position, Vec3::zeros());
        assert_eq!(transform.scale, Vec3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(transform.yaw(), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_yaw_reports_y_rotation() {
        let mut transform = Transform::identity();
        transform.set_rotation_y(FRAC_PI_2);
        assert_relative_eq!(transform.yaw(), FRAC_PI_2, epsilon = EPSILON);

        transform.set_rotation_y(-0.75);
        assert_relative_eq!(transform.yaw(), -0.75, epsilon = EPSILON);
    }

    #[test]
    fn test_combine_scales_child_offset() {
        let mut parent = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        parent.set_uniform_scale(0.5);
        let child = Transform::from_position(Vec3::new(0.0, 1.0, 0.0));

        let world = parent.combine(&child);
        assert_relative_eq!(world.position, Vec3::new(1.0, 2.5, 3.0), epsilon = EPSILON);
        assert_relative_eq!(world.scale, Vec3::new(0.5, 0.5, 0.5), epsilon = EPSILON);
    }

    #[test]
    fn test_matrix_applies_scale_then_translation() {
        let mut transform = Transform::from_position(Vec3::new(1.0, -2.0, 0.5));
        transform.set_uniform_scale(0.2);

        let point = transform.to_matrix().transform_point(&Point3::new(0.0, 10.0, 0.0));
        assert_relative_eq!(point, Point3::new(1.0, 0.0, 0.5), epsilon = EPSILON);
    }

    #[test]
    fn test_transform_point_applies_rotation() {
        let mut transform = Transform::identity();
        transform.set_rotation_y(FRAC_PI_2);
        let rotated = transform.transform_point(Point3::new(1.0, 0.0, 0.0));
        // Right-handed Y-up: +X rotated 90 degrees about +Y lands on -Z
        assert_relative_eq!(rotated, Point3::new(0.0, 0.0, -1.0), epsilon = EPSILON);
    }
}
