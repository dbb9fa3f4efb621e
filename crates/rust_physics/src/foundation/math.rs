//! Math utilities and types
//!
//! Provides the fundamental math types shared by the physics and collision code.

use std::cell::RefCell;
use std::rc::Rc;

pub use nalgebra::{
    Vector3,
    Quaternion,
    Unit,
};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Transform shared between the scene graph and the physics objects that follow it
///
/// The scene owns the transform; bodies and colliders only hold a handle to it.
pub type SharedTransform = Rc<RefCell<Transform>>;

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
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

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Wrap this transform in a shared handle
    pub fn shared(self) -> SharedTransform {
        Rc::new(RefCell::new(self))
    }

    /// Move by a world-space offset
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Apply a world-space rotation on top of the current orientation
    pub fn rotate(&mut self, rotation: Quat) {
        self.rotation = rotation * self.rotation;
    }

    /// Replace the scale factors
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.position + self.rotation * point.component_mul(&self.scale)
    }

    /// Apply this transform to a vector (ignores translation)
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.rotation * vector.component_mul(&self.scale)
    }

    /// Local X, Y and Z axes in world space
    pub fn axes(&self) -> [Vec3; 3] {
        [
            self.rotation * Vec3::x(),
            self.rotation * Vec3::y(),
            self.rotation * Vec3::z(),
        ]
    }
}

/// Math utility functions
pub mod utils {
    use super::Vec3;

    /// Squared length below which a direction is treated as zero
    pub const DEGENERATE_EPSILON: f32 = 1.0e-12;

    /// Normalize a vector, returning zero instead of NaN for zero-length input
    pub fn normalize_or_zero(v: Vec3) -> Vec3 {
        if v.norm_squared() <= DEGENERATE_EPSILON {
            Vec3::zeros()
        } else {
            v.normalize()
        }
    }

    /// Clamp each component of `v` to `[-extents, extents]`
    pub fn clamp_to_extents(v: Vec3, extents: Vec3) -> Vec3 {
        Vec3::new(
            v.x.clamp(-extents.x, extents.x),
            v.y.clamp(-extents.y, extents.y),
            v.z.clamp(-extents.z, extents.z),
        )
    }
}
