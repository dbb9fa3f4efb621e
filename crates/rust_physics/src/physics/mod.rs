//! Rigid-body simulation and collision detection
//!
//! Bodies ([`PhysicsObject`]) integrate their own motion each tick and own
//! one bounding-volume [`Collider`]. The [`PhysicsManager`] steps every body,
//! pairs them through a broad phase and runs SAT on each candidate pair.

pub mod angle_axis;
pub mod collision;
pub mod dimensions;
pub mod error;
pub mod layers;
pub mod physics_manager;
pub mod physics_object;

#[cfg(test)]
mod tests;

pub use angle_axis::AngleAxis;
pub use collision::{
    create_collider,
    AabbCollider,
    Collider,
    ColliderType,
    CollisionData,
    ObbCollider,
    ProjectionData,
    SphereCollider,
    Vertex,
};
pub use dimensions::{Dimension, DimensionSet};
pub use error::PhysicsError;
pub use layers::PhysicsLayer;
pub use physics_manager::{BroadPhase, CollisionPair, Contact, DimensionBroadPhase, PhysicsManager};
pub use physics_object::{PhysicsObject, TickContext};
