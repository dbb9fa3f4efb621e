//! Axis-angle accumulator for angular velocity and acceleration
//!
//! Angular rates are summed in axis·angle space rather than composed as
//! rotations. That is only accurate for the small per-tick deltas the
//! integrator produces, and it is the accumulation rule bodies rely on.

use std::ops::{Add, AddAssign, Mul};

use crate::foundation::math::{utils::DEGENERATE_EPSILON, Quat, Unit, Vec3};

/// Rotation rate or delta stored as a unit axis and a signed angle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleAxis {
    /// Rotation axis, unit length or zero
    pub axis: Vec3,
    /// Rotation magnitude in radians
    pub angle: f32,
    /// Direction flag maintained by torque application
    pub negative: bool,
}

impl Default for AngleAxis {
    fn default() -> Self {
        Self::identity()
    }
}

impl AngleAxis {
    /// No rotation: zero angle and zero axis
    pub fn identity() -> Self {
        Self {
            axis: Vec3::zeros(),
            angle: 0.0,
            negative: false,
        }
    }

    /// Build from an axis (normalized here) and an angle
    pub fn new(axis: Vec3, angle: f32) -> Self {
        if axis.norm_squared() <= DEGENERATE_EPSILON {
            return Self::identity();
        }

        Self {
            axis: axis.normalize(),
            angle,
            negative: false,
        }
    }

    /// Decompose a unit quaternion into axis and angle
    pub fn from_quaternion(rotation: &Quat) -> Self {
        let q = rotation.quaternion();
        let w = q.w.clamp(-1.0, 1.0);
        let angle = 2.0 * w.acos();
        let s = (1.0 - w * w).sqrt();

        if s <= f32::EPSILON {
            return Self::identity();
        }

        Self {
            axis: Vec3::new(q.i / s, q.j / s, q.k / s),
            angle,
            negative: false,
        }
    }

    /// Angular rate as a single vector (`axis * angle`)
    pub fn scaled_axis(&self) -> Vec3 {
        self.axis * self.angle
    }

    /// Whether this represents no rotation at all
    pub fn is_identity(&self) -> bool {
        self.angle == 0.0 || self.axis.norm_squared() <= DEGENERATE_EPSILON
    }

    /// Unit quaternion for the current axis and angle
    ///
    /// A zero axis always yields the identity, whatever the angle says.
    pub fn to_quaternion(&self) -> Quat {
        match Unit::try_new(self.axis, f32::EPSILON) {
            Some(axis) => Quat::from_axis_angle(&axis, self.angle),
            None => Quat::identity(),
        }
    }

    fn from_scaled_axis(v: Vec3, negative: bool) -> Self {
        let angle = v.norm();
        if angle * angle <= DEGENERATE_EPSILON {
            return Self { negative, ..Self::identity() };
        }

        Self {
            axis: v / angle,
            angle,
            negative,
        }
    }
}

impl Add for AngleAxis {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_scaled_axis(self.scaled_axis() + rhs.scaled_axis(), self.negative)
    }
}

impl AddAssign for AngleAxis {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<f32> for AngleAxis {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self {
            angle: self.angle * rhs,
            ..self
        }
    }
}

impl From<Quat> for AngleAxis {
    fn from(rotation: Quat) -> Self {
        Self::from_quaternion(&rotation)
    }
}
