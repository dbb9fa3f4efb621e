//! Mesh input for bounding-shape generation
//!
//! Colliders only read vertex positions, once, to fit themselves around a
//! mesh. Everything here works on those positions in the body's frame
//! (rotation and scale applied, translation never).

use crate::foundation::math::{Quat, Vec3};
use crate::physics::error::PhysicsError;

/// Minimum vertex count accepted by `generate_from_mesh`
pub const MIN_MESH_VERTICES: usize = 4;

/// Mesh vertex as seen by the physics code
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Model-space position
    pub position: Vec3,
}

impl Vertex {
    /// Create a vertex from a position
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }
}

impl From<Vec3> for Vertex {
    fn from(position: Vec3) -> Self {
        Self { position }
    }
}

/// Per-axis bounds of a point cloud
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshBounds {
    /// Component-wise minimum
    pub min: Vec3,
    /// Component-wise maximum
    pub max: Vec3,
}

impl MeshBounds {
    /// Midpoint of the bounds
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half extents around [`Self::center`]
    pub fn extents(&self) -> Vec3 {
        self.max - self.center()
    }
}

/// Reject meshes too small to fit a shape to
pub fn check_vertex_count(vertices: &[Vertex]) -> Result<(), PhysicsError> {
    if vertices.len() < MIN_MESH_VERTICES {
        return Err(PhysicsError::InsufficientGeometry {
            required: MIN_MESH_VERTICES,
            found: vertices.len(),
        });
    }
    Ok(())
}

/// Positions rotated by `rotation` and then scaled component-wise by `scale`
pub fn body_frame_positions(vertices: &[Vertex], rotation: &Quat, scale: &Vec3) -> Vec<Vec3> {
    vertices
        .iter()
        .map(|vertex| (rotation * vertex.position).component_mul(scale))
        .collect()
}

/// Component-wise bounds of `points`, `None` when empty
pub fn bounds_of(points: &[Vec3]) -> Option<MeshBounds> {
    let first = *points.first()?;
    let bounds = points.iter().skip(1).fold(
        MeshBounds { min: first, max: first },
        |bounds, point| MeshBounds {
            min: bounds.min.inf(point),
            max: bounds.max.sup(point),
        },
    );
    Some(bounds)
}

/// Face normals from the first four points
///
/// Each difference feeds the next one, so the third and fourth normals are
/// built from already-derived directions rather than raw points. Zero-length
/// differences (repeated vertices) yield no normal; fewer than four points
/// yield none at all.
pub fn derive_face_normals(points: &[Vec3]) -> Vec<Vec3> {
    let [_, p1, p2, p3, ..] = points else {
        return Vec::new();
    };

    let d0 = p1 - p2;
    let d1 = p2 - p3;
    let d2 = p3 - d0;
    let d3 = d0 - d1;

    [d0, d1, d2, d3]
        .into_iter()
        .filter_map(|direction| direction.try_normalize(f32::EPSILON))
        .collect()
}
