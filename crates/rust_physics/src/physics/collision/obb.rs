//! Oriented bounding box collider
//!
//! Same box as [`super::aabb::AabbCollider`] but expressed in the parent's
//! local frame: the extents are fitted before rotation, and every query
//! moves the point into that frame first.

use crate::debug::DebugDraw;
use crate::foundation::math::{utils, Quat, SharedTransform, Vec3};
use crate::physics::error::PhysicsError;

use super::collider::{Collider, ColliderBase, ColliderType};
use super::mesh::{self, Vertex};
use super::projection::ProjectionData;

/// Default half extents before a mesh fit
pub const DEFAULT_EXTENTS: Vec3 = Vec3::new(0.5, 0.5, 0.5);

/// Box that rotates with its parent
#[derive(Debug, Clone)]
pub struct ObbCollider {
    base: ColliderBase,
    extents: Vec3,
}

impl ObbCollider {
    /// Create a unit box following `parent`
    pub fn new(parent: SharedTransform) -> Self {
        Self::with_extents(parent, DEFAULT_EXTENTS)
    }

    /// Create a box with the given local half extents
    pub fn with_extents(parent: SharedTransform, extents: Vec3) -> Self {
        let mut base = ColliderBase::new(parent);
        base.sync(true);
        base.set_scale(extents * 2.0);
        Self { base, extents }
    }

    /// Half extents along the local axes
    pub fn extents(&self) -> Vec3 {
        self.extents
    }

    /// Replace the local half extents
    pub fn set_extents(&mut self, extents: Vec3) {
        self.extents = extents;
    }

    /// Current orientation of the box
    pub fn rotation(&self) -> Quat {
        self.base.transform().rotation
    }

    /// Local X, Y and Z axes in world space
    pub fn axes(&self) -> [Vec3; 3] {
        self.base.transform().axes()
    }

    /// The eight world-space corners
    pub fn corners(&self) -> [Vec3; 8] {
        let center = self.center();
        let rotation = self.rotation();
        let e = self.extents;
        let mut corners = [Vec3::zeros(); 8];

        for (i, corner) in corners.iter_mut().enumerate() {
            let local = Vec3::new(
                if i & 1 == 0 { e.x } else { -e.x },
                if i & 2 == 0 { e.y } else { -e.y },
                if i & 4 == 0 { e.z } else { -e.z },
            );
            *corner = center + rotation * local;
        }
        corners
    }

    fn to_local(&self, point: Vec3) -> Vec3 {
        self.rotation().inverse_transform_vector(&(point - self.center()))
    }
}

impl Collider for ObbCollider {
    fn collider_type(&self) -> ColliderType {
        ColliderType::Obb
    }

    fn base(&self) -> &ColliderBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ColliderBase {
        &mut self.base
    }

    fn generate_from_mesh(&mut self, vertices: &[Vertex]) -> Result<(), PhysicsError> {
        mesh::check_vertex_count(vertices)?;

        // Fitted unrotated; the orientation comes from the parent at query time
        let positions = {
            let parent = self.base.parent_transform().borrow();
            mesh::body_frame_positions(vertices, &Quat::identity(), &parent.scale)
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
        let local = self.to_local(point);
        local.x.abs() < self.extents.x
            && local.y.abs() < self.extents.y
            && local.z.abs() < self.extents.z
    }

    fn closest_to_point(&self, point: Vec3) -> Vec3 {
        let clamped = utils::clamp_to_extents(self.to_local(point), self.extents);
        self.center() + self.rotation() * clamped
    }

    fn project_onto_axis(&self, axis: Vec3) -> Result<ProjectionData, PhysicsError> {
        ProjectionData::from_points(&self.corners(), &axis)
    }

    fn find_surface_normal(&self, point: Vec3) -> Vec3 {
        let local = self.to_local(point);
        let mut normal = Vec3::zeros();

        for axis in 0..3 {
            if local[axis] >= self.extents[axis] {
                normal[axis] += 1.0;
            } else if local[axis] <= -self.extents[axis] {
                normal[axis] -= 1.0;
            }
        }

        utils::normalize_or_zero(self.rotation() * normal)
    }

    fn draw_handles(&self, debug: &mut dyn DebugDraw, color: Vec3) {
        debug.draw_wire_cube(self.center(), self.rotation(), self.extents * 2.0, color, 0.0);
    }

    fn separating_axes(&self) -> Vec<Vec3> {
        let rotation = self.rotation();
        let mut axes = self.axes().to_vec();
        axes.extend(self.base.normals().iter().map(|normal| rotation * normal));
        axes
    }

    fn edge_directions(&self) -> Vec<Vec3> {
        self.axes().to_vec()
    }

    fn update(&mut self) {
        self.base.sync(true);
    }
}
