//! Bounding-volume colliders and SAT narrow phase
//!
//! # Architecture
//!
//! - **Fit Once**: shapes are fitted to a mesh a single time, in the body's frame
//! - **Follow Every Tick**: each collider resyncs a world-space cache from its parent transform
//! - **Query in World Space**: containment, closest point and projection all use that cache
//!
//! # Module Organization
//!
//! - [`collider`] - The [`Collider`] trait, shared state and factory
//! - [`aabb`], [`obb`], [`sphere`] - Shape implementations
//! - [`projection`] - Axis projection with tie retention
//! - [`mesh`] - Vertex input and bounds fitting helpers
//! - [`sat`] - Pairwise separating-axis test

pub mod aabb;
pub mod collider;
pub mod mesh;
pub mod obb;
pub mod projection;
pub mod sat;
pub mod sphere;

// Re-export commonly used types
pub use aabb::AabbCollider;
pub use collider::{create_collider, Collider, ColliderBase, ColliderType};
pub use mesh::{MeshBounds, Vertex};
pub use obb::ObbCollider;
pub use projection::ProjectionData;
pub use sat::{test_pair, CollisionData};
pub use sphere::SphereCollider;
