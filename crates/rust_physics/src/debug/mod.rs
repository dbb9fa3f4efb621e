//! Debug module for visualization hooks
//!
//! Provides the debug-draw sink that bodies and colliders report their
//! handles to, plus a collecting implementation for drivers that want one.

pub mod draw;

pub use draw::{DebugDraw, DebugDrawSystem, DebugShape, DebugShapeId, NullDebugDraw};
