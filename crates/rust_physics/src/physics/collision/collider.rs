//! Collider contract shared by every bounding-volume shape
//!
//! A collider is owned by exactly one physics object and follows that
//! object's transform. The transform itself belongs to the scene; the
//! collider keeps a handle to it plus its own world-space cache, refreshed
//! by [`Collider::update`] once per tick.

use std::fmt;

use crate::debug::DebugDraw;
use crate::foundation::math::{SharedTransform, Transform, Vec3};
use crate::physics::error::PhysicsError;

use super::aabb::AabbCollider;
use super::mesh::Vertex;
use super::obb::ObbCollider;
use super::projection::ProjectionData;
use super::sphere::SphereCollider;

/// Shape tag used to pick a collider implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColliderType {
    /// Axis-aligned bounding box
    Aabb,
    /// Oriented (arbitrarily rotated) bounding box
    Obb,
    /// Bounding sphere
    Sphere,
}

/// State common to all collider shapes
#[derive(Debug, Clone)]
pub struct ColliderBase {
    parent: SharedTransform,
    offset: Vec3,
    normals: Vec<Vec3>,
    transform: Transform,
}

impl ColliderBase {
    /// Create state following `parent` with no offset
    pub fn new(parent: SharedTransform) -> Self {
        let mut base = Self {
            parent,
            offset: Vec3::zeros(),
            normals: Vec::new(),
            transform: Transform::identity(),
        };
        base.sync(false);
        base
    }

    /// Transform this collider follows
    pub fn parent_transform(&self) -> &SharedTransform {
        &self.parent
    }

    /// Follow a different transform
    pub fn set_parent_transform(&mut self, parent: SharedTransform) {
        self.parent = parent;
    }

    /// Offset of the shape center from the parent position
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Set the offset of the shape center from the parent position
    pub fn set_offset(&mut self, offset: Vec3) {
        self.offset = offset;
    }

    /// Face normals derived from the last mesh fit
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Replace the mesh-derived face normals
    pub fn set_normals(&mut self, normals: Vec<Vec3>) {
        self.normals = normals;
    }

    /// World-space cache of the shape's own transform
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Set the scale of the shape's own transform (used for drawing)
    pub fn set_scale(&mut self, scale: Vec3) {
        self.transform.set_scale(scale);
    }

    /// Refresh the world cache from the parent transform
    ///
    /// With `rotate_offset` the offset is expressed in the parent's local
    /// frame; otherwise it is already a world-aligned displacement.
    pub fn sync(&mut self, rotate_offset: bool) {
        let parent = self.parent.borrow();
        let offset = if rotate_offset {
            parent.rotation * self.offset
        } else {
            self.offset
        };

        self.transform.position = parent.position + offset;
        self.transform.rotation = parent.rotation;
    }
}

/// Geometry queries every bounding shape answers
pub trait Collider: fmt::Debug {
    /// Shape tag
    fn collider_type(&self) -> ColliderType;

    /// Shared collider state
    fn base(&self) -> &ColliderBase;

    /// Mutable shared collider state
    fn base_mut(&mut self) -> &mut ColliderBase;

    /// Fit the shape around a mesh given in the parent's model space
    ///
    /// Requires at least four vertices.
    fn generate_from_mesh(&mut self, vertices: &[Vertex]) -> Result<(), PhysicsError>;

    /// Whether `point` lies inside the shape
    fn contains_point(&self, point: Vec3) -> bool;

    /// Point of the shape closest to `point` (the point itself when inside)
    fn closest_to_point(&self, point: Vec3) -> Vec3;

    /// Project the shape's extremal points onto `axis`
    fn project_onto_axis(&self, axis: Vec3) -> Result<ProjectionData, PhysicsError>;

    /// Outward normal at a surface point, zero when the point is on no face
    ///
    /// The point is not checked to actually be on the surface.
    fn find_surface_normal(&self, point: Vec3) -> Vec3;

    /// Describe the shape to a debug-draw sink
    fn draw_handles(&self, debug: &mut dyn DebugDraw, color: Vec3);

    /// Candidate separating axes in world space
    fn separating_axes(&self) -> Vec<Vec3>;

    /// Edge directions used to build cross-product axes against other boxes
    fn edge_directions(&self) -> Vec<Vec3> {
        Vec::new()
    }

    /// Resync the world-space cache with the parent transform
    fn update(&mut self) {
        self.base_mut().sync(false);
    }

    /// World-space center of the shape
    fn center(&self) -> Vec3 {
        self.base().transform().position
    }

    /// Local offset of the shape from the parent position
    fn offset(&self) -> Vec3 {
        self.base().offset()
    }

    /// Move the shape relative to its parent and resync
    fn set_offset(&mut self, offset: Vec3) {
        self.base_mut().set_offset(offset);
        self.update();
    }

    /// Face normals derived from the last mesh fit
    fn normals(&self) -> &[Vec3] {
        self.base().normals()
    }
}

/// Build a collider of the requested shape following `parent`
pub fn create_collider(collider_type: ColliderType, parent: SharedTransform) -> Box<dyn Collider> {
    match collider_type {
        ColliderType::Aabb => Box::new(AabbCollider::new(parent)),
        ColliderType::Obb => Box::new(ObbCollider::new(parent)),
        ColliderType::Sphere => Box::new(SphereCollider::new(parent)),
    }
}
