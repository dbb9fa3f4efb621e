//! Multi-body scenarios driven through the manager


use crate::foundation::math::{SharedTransform, Transform, Vec3};
use crate::physics::collision::Vertex;

/// Eight corners of an axis-aligned cube centered on the origin
pub(crate) fn cube_vertices(half_size: f32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(8);
    for x in [-half_size, half_size] {
        for y in [-half_size, half_size] {
            for z in [-half_size, half_size] {
                vertices.push(Vertex::new(Vec3::new(x, y, z)));
            }
        }
    }
    vertices
}

/// Scene transform at `position`, optionally scaled
pub(crate) fn scene_transform(position: Vec3, scale: Vec3) -> SharedTransform {
    let mut transform = Transform::from_position(position);
    transform.set_scale(scale);
    transform.shared()
}
