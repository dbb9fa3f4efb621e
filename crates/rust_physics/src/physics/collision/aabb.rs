//! Axis-aligned bounding box collider

use crate::debug::DebugDraw;
use crate::foundation::math::{utils, Quat, SharedTransform, Vec3};
use crate::physics::error::PhysicsError;

use super::collider::{Collider, ColliderBase, ColliderType};
use super::mesh::{self, Vertex};
use super::projection::ProjectionData;

/// Default half extents before a mesh fit (a unit cube)
pub const DEFAULT_EXTENTS: Vec3 = Vec3::new(0.5, 0.5, 0.5);

/// Box aligned with the world axes
///
/// The extents are fixed when the box is fitted; rotating the parent
/// afterwards moves the box but does not refit it.
#[derive(Debug, Clone)]
pub struct AabbCollider {
    base: ColliderBase,
    extents: Vec3,
}

impl AabbCollider {
    /// Create a unit box following `parent`
    pub fn new(parent: SharedTransform) -> Self {
        Self::with_extents(parent, DEFAULT_EXTENTS)
    }

    /// Create a box with the given half extents
    pub fn with_extents(parent: SharedTransform, extents: Vec3) -> Self {
        let mut base = ColliderBase::new(parent);
        base.set_scale(extents * 2.0);
        Self { base, extents }
    }

    /// Half extents along each world axis
    pub fn extents(&self) -> Vec3 {
        self.extents
    }

    /// Replace the half extents
    pub fn set_extents(&mut self, extents: Vec3) {
        self.extents = extents;
    }

    /// The eight world-space corners
    pub fn corners(&self) -> [Vec3; 8] {
        let center = self.center();
        let e = self.extents;
        [
            center + Vec3::new(e.x, e.y, e.z),
            center + Vec3::new(e.x, e.y, -e.z),
            center + Vec3::new(e.x, -e.y, e.z),
            center + Vec3::new(e.x, -e.y, -e.z),
            center + Vec3::new(-e.x, e.y, e.z),
            center + Vec3::new(-e.x, e.y, -e.z),
            center + Vec3::new(-e.x, -e.y, e.z),
            center + Vec3::new(-e.x, -e.y, -e.z),
        ]
    }
}

impl Collider for AabbCollider {
    fn collider_type(&self) -> ColliderType {
        ColliderType::Aabb
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
        self.extents = bounds.extents();
        self.base.set_normals(normals);

        self.base.set_scale(self.extents * 2.0);
        self.base.set_offset(center);
        self.update();
        Ok(())
    }

    fn contains_point(&self, point: Vec3) -> bool {
        let distance = point - self.center();
        distance.x.abs() < self.extents.x
            && distance.y.abs() < self.extents.y
            && distance.z.abs() < self.extents.z
    }

    fn closest_to_point(&self, point: Vec3) -> Vec3 {
        let distance = point - self.center();
        self.center() + utils::clamp_to_extents(distance, self.extents)
    }

    fn project_onto_axis(&self, axis: Vec3) -> Result<ProjectionData, PhysicsError> {
        ProjectionData::from_points(&self.corners(), &axis)
    }

    fn find_surface_normal(&self, point: Vec3) -> Vec3 {
        let direction = point - self.center();
        let mut normal = Vec3::zeros();

        for axis in 0..3 {
            if direction[axis] >= self.extents[axis] {
                normal[axis] += 1.0;
            } else if direction[axis] <= -self.extents[axis] {
                normal[axis] -= 1.0;
            }
        }

        utils::normalize_or_zero(normal)
    }

    fn draw_handles(&self, debug: &mut dyn DebugDraw, color: Vec3) {
        debug.draw_wire_cube(self.center(), Quat::identity(), self.extents * 2.0, color, 0.0);
    }

    fn separating_axes(&self) -> Vec<Vec3> {
        let mut axes = vec![Vec3::x(), Vec3::y(), Vec3::z()];
        axes.extend_from_slice(self.base.normals());
        axes
    }

    fn edge_directions(&self) -> Vec<Vec3> {
        vec![Vec3::x(), Vec3::y(), Vec3::z()]
    }
}
