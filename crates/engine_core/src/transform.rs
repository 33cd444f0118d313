//! Transform type and parent/child composition for orbital frames.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};

/// A 3D transform representing position, rotation, and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Create a new transform at the given position.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Create a new transform with position and rotation.
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Self::IDENTITY
        }
    }

    /// Return a copy with a uniform scale.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    /// Create the model matrix for this transform.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Compose `child` (expressed in this transform's local frame) into this frame.
    ///
    /// `parent.mul_transform(child)` is the world transform of a node whose parent
    /// has world transform `parent` and whose own local transform is `child`.
    pub fn mul_transform(&self, child: &Transform) -> Transform {
        Transform {
            position: self.transform_point(child.position),
            rotation: (self.rotation * child.rotation).normalize(),
            scale: self.scale * child.scale,
        }
    }

    /// Map a point from this transform's local frame into the parent frame.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.position + self.rotation * (self.scale * point)
    }

    /// Get the forward direction (negative Z in right-handed coordinates).
    pub fn forward(&self) -> Vec3 {
        self.rotation * -Vec3::Z
    }

    /// Get the right direction (positive X).
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Get the up direction (positive Y).
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Translate the transform by a delta.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Orient so that `forward()` points at `target`. Ignored when the target coincides with the position.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        let forward = target - self.position;
        if forward.length_squared() > 1e-8 {
            self.rotation = Quat::from_mat4(&Mat4::look_at_rh(self.position, target, up)).inverse();
        }
    }
}

/// Raw model matrix handed to the renderer's transform sink.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct TransformRaw {
    pub model: [[f32; 4]; 4],
}

impl From<&Transform> for TransformRaw {
    fn from(transform: &Transform) -> Self {
        Self {
            model: transform.to_matrix().to_cols_array_2d(),
        }
    }
}

impl From<Transform> for TransformRaw {
    fn from(transform: Transform) -> Self {
        Self::from(&transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn composing_with_identity_is_a_no_op() {
        let child = Transform::from_position_rotation(Vec3::new(1.0, 2.0, 3.0), Quat::from_rotation_y(0.4));
        let world = Transform::IDENTITY.mul_transform(&child);
        assert!(close(world.position, child.position));
        assert!(world.rotation.abs_diff_eq(child.rotation, 1e-5));
    }

    #[test]
    fn child_offset_is_rotated_by_parent() {
        let parent = Transform::from_position_rotation(
            Vec3::new(10.0, 0.0, 0.0),
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        );
        let child = Transform::from_position(Vec3::new(1.0, 0.0, 0.0));
        let world = parent.mul_transform(&child);
        // +X rotated a quarter turn about Y lands on -Z.
        assert!(close(world.position, Vec3::new(10.0, 0.0, -1.0)));
    }

    #[test]
    fn look_at_points_forward_at_target() {
        let mut t = Transform::from_position(Vec3::new(0.0, 0.0, 10.0));
        t.look_at(Vec3::ZERO, Vec3::Y);
        assert!(close(t.forward(), Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn raw_matrix_carries_translation() {
        let raw = TransformRaw::from(Transform::from_position(Vec3::new(4.0, 5.0, 6.0)));
        assert_eq!(raw.model[3][0], 4.0);
        assert_eq!(raw.model[3][1], 5.0);
        assert_eq!(raw.model[3][2], 6.0);
    }
}
