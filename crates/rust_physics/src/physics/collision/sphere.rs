//! Bounding sphere collider

use crate::debug::DebugDraw;
use crate::foundation::math::{utils, SharedTransform, Vec3};
use crate::physics::error::PhysicsError;

use super::collider::{Collider, ColliderBase, ColliderType};
use super::mesh::{self, Vertex};
use super::projection::ProjectionData;

/// Default radius before a mesh fit
pub const DEFAULT_RADIUS: f32 = 0.5;

/// Sphere centered on the parent position plus offset
#[derive(Debug, Clone)]
pub struct SphereCollider {
    base: ColliderBase,
    radius: f32,
}

impl SphereCollider {
    /// Create a unit-diameter sphere following `parent`
    pub fn new(parent: SharedTransform) -> Self {
        Self::with_radius(parent, DEFAULT_RADIUS)
    }

    /// Create a sphere with the given radius
    pub fn with_radius(parent: SharedTransform, radius: f32) -> Self {
        let mut base = ColliderBase::new(parent);
        base.set_scale(Vec3::repeat(radius * 2.0));
        Self { base, radius }
    }

    /// Sphere radius
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Replace the radius
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }
}

impl Collider for SphereCollider {
    fn collider_type(&self) -> ColliderType {
        ColliderType::Sphere
    }

    fn base(&self) -> &ColliderBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ColliderBase {
        &mut self.base
    }

    fn generate_from_mesh(&mut self, vertices: &[Vertex]) -> Result<(), PhysicsError> {
        mesh::check_vertex_count(vertices)?;

        let positions = {
            let parent = self.base.parent_transform().borrow();
            mesh::body_frame_positions(vertices, &parent.rotation, &parent.scale)
        };
        let bounds = mesh::bounds_of(&positions).ok_or(PhysicsError::InsufficientGeometry {
            required: mesh::MIN_MESH_VERTICES,
            found: 0,
        })?;
        let normals = mesh::derive_face_normals(&positions);

        let center = bounds.center();
        self.radius = positions
            .iter()
            .map(|position| (position - center).norm())
            .fold(0.0, f32::max);
        self.base.set_normals(normals);

        self.base.set_scale(Vec3::repeat(self.radius * 2.0));
        self.base.set_offset(center);
        self.update();
        Ok(())
    }

    fn contains_point(&self, point: Vec3) -> bool {
        (point - self.center()).norm_squared() <= self.radius * self.radius
    }

    fn closest_to_point(&self, point: Vec3) -> Vec3 {
        let distance = point - self.center();
        if distance.norm_squared() <= self.radius * self.radius {
            return point;
        }
        self.center() + distance.normalize() * self.radius
    }

    fn project_onto_axis(&self, axis: Vec3) -> Result<ProjectionData, PhysicsError> {
        let direction = utils::normalize_or_zero(axis);
        let center = self.center();
        let extremes = [center + direction * self.radius, center - direction * self.radius];
        ProjectionData::from_points(&extremes, &axis)
    }

    fn find_surface_normal(&self, point: Vec3) -> Vec3 {
        utils::normalize_or_zero(point - self.center())
    }

    fn draw_handles(&self, debug: &mut dyn DebugDraw, color: Vec3) {
        debug.draw_wire_sphere(self.center(), self.radius, color, 0.0);
    }

    fn separating_axes(&self) -> Vec<Vec3> {
        Vec::new()
    }
}
