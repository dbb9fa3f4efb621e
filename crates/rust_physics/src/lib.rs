//! # Rust Physics
//!
//! Rigid-body integration and SAT collision detection for real-time 3D engines.
//!
//! ## Features
//!
//! - **Bounding Volumes**: Axis-aligned boxes, oriented boxes and spheres fitted from mesh vertices
//! - **Separating Axis Test**: Early-exit narrow phase with minimum-penetration contact data
//! - **Rigid Bodies**: Force, torque and gravity integration on scene-owned transforms
//! - **Broad Phase**: Dimension tags and physics layers filter candidate pairs
//! - **Debug Draw**: Velocity, acceleration and collider handles through an injected sink
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rust_physics::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut manager = PhysicsManager::new(PhysicsConfig::default())?;
//!
//!     let transform = Transform::from_position(Vec3::new(0.0, 5.0, 0.0)).shared();
//!     let body = PhysicsObject::new(transform, PhysicsLayer::Dynamic, ColliderType::Sphere, 1.0, true, true);
//!     manager.add(body);
//!
//!     let mut debug = NullDebugDraw;
//!     for _ in 0..60 {
//!         manager.step(1.0 / 60.0, &mut debug)?;
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod debug;
pub mod foundation;
pub mod physics;

/// Common imports for physics users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, PhysicsConfig},
        debug::{DebugDraw, DebugDrawSystem, NullDebugDraw},
        foundation::{
            collections::BodyHandle,
            math::{Quat, SharedTransform, Transform, Vec3},
        },
        physics::{
            AngleAxis, Collider, ColliderType, CollisionData, PhysicsError, PhysicsLayer,
            PhysicsManager, PhysicsObject, TickContext, Vertex,
        },
    };
}
