//! Debug drawing primitives and sinks
//!
//! Physics code never renders anything itself. Bodies and colliders describe
//! their handles through the [`DebugDraw`] sink that the driver passes in each
//! tick, and the renderer drains whatever the sink collected.

use crate::foundation::math::{Quat, Vec3};
use std::collections::HashMap;

/// Unique identifier for persistent debug shapes
pub type DebugShapeId = String;

/// Fire-and-forget debug drawing interface
///
/// Colors are RGB in `[0, 1]`. A `duration` of zero means "this frame only".
pub trait DebugDraw {
    /// Draw a line segment
    fn draw_line(&mut self, start: Vec3, end: Vec3, color: Vec3, duration: f32);

    /// Draw a wireframe box of full edge lengths `size`
    fn draw_wire_cube(&mut self, center: Vec3, rotation: Quat, size: Vec3, color: Vec3, duration: f32);

    /// Draw a wireframe sphere
    fn draw_wire_sphere(&mut self, center: Vec3, radius: f32, color: Vec3, duration: f32);

    /// Whether physics objects should emit their handles at all
    fn draw_handles_enabled(&self) -> bool;
}

/// Sink that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDebugDraw;

impl DebugDraw for NullDebugDraw {
    fn draw_line(&mut self, _start: Vec3, _end: Vec3, _color: Vec3, _duration: f32) {}

    fn draw_wire_cube(&mut self, _center: Vec3, _rotation: Quat, _size: Vec3, _color: Vec3, _duration: f32) {}

    fn draw_wire_sphere(&mut self, _center: Vec3, _radius: f32, _color: Vec3, _duration: f32) {}

    fn draw_handles_enabled(&self) -> bool {
        false
    }
}

/// Debug shape primitives that can be rendered for visualization
#[derive(Clone, Debug, PartialEq)]
pub enum DebugShape {
    /// Line segment from start to end
    Line {
        /// Segment start
        start: Vec3,
        /// Segment end
        end: Vec3,
        /// RGB color
        color: Vec3,
        /// Remaining lifetime in seconds
        duration: f32,
    },

    /// Wireframe box at center with full edge lengths
    WireCube {
        /// Box center
        center: Vec3,
        /// Box orientation
        rotation: Quat,
        /// Full edge lengths
        size: Vec3,
        /// RGB color
        color: Vec3,
        /// Remaining lifetime in seconds
        duration: f32,
    },

    /// Wireframe sphere at center with radius
    WireSphere {
        /// Sphere center
        center: Vec3,
        /// Sphere radius
        radius: f32,
        /// RGB color
        color: Vec3,
        /// Remaining lifetime in seconds
        duration: f32,
    },
}

impl DebugShape {
    fn duration_mut(&mut self) -> &mut f32 {
        match self {
            DebugShape::Line { duration, .. }
            | DebugShape::WireCube { duration, .. }
            | DebugShape::WireSphere { duration, .. } => duration,
        }
    }

    /// Get remaining duration
    pub fn duration(&self) -> f32 {
        match self {
            DebugShape::Line { duration, .. }
            | DebugShape::WireCube { duration, .. }
            | DebugShape::WireSphere { duration, .. } => *duration,
        }
    }

    /// Decrease duration by delta_time, returns true if expired
    pub fn tick(&mut self, delta_time: f32) -> bool {
        let duration = self.duration_mut();
        *duration -= delta_time;
        *duration <= 0.0
    }
}

/// Collecting debug-draw sink
///
/// Temporary shapes live for their duration (at least until the next
/// `update`), persistent shapes until explicitly removed.
pub struct DebugDrawSystem {
    /// Temporary shapes that expire after their duration
    temporary_shapes: Vec<DebugShape>,

    /// Persistent shapes that remain until manually removed
    persistent_shapes: HashMap<DebugShapeId, DebugShape>,

    /// Master enable/disable flag
    pub enabled: bool,

    /// Whether bodies should emit velocity/acceleration/collider handles
    pub draw_handles: bool,
}

impl DebugDrawSystem {
    /// Create a new debug draw system
    pub fn new() -> Self {
        Self {
            temporary_shapes: Vec::new(),
            persistent_shapes: HashMap::new(),
            enabled: true,
            draw_handles: true,
        }
    }

    fn push(&mut self, shape: DebugShape) {
        if !self.enabled {
            return;
        }

        self.temporary_shapes.push(shape);
    }

    /// Draw a persistent shape (remains until removed)
    pub fn draw_persistent(&mut self, id: impl Into<DebugShapeId>, shape: DebugShape) {
        if !self.enabled {
            return;
        }

        self.persistent_shapes.insert(id.into(), shape);
    }

    /// Remove a persistent shape
    pub fn clear_persistent(&mut self, id: &str) {
        self.persistent_shapes.remove(id);
    }

    /// Update shape lifetimes and remove expired temporary shapes
    pub fn update(&mut self, delta_time: f32) {
        if !self.enabled {
            return;
        }

        self.temporary_shapes.retain_mut(|shape| !shape.tick(delta_time));
    }

    /// Get all shapes for rendering (both temporary and persistent)
    pub fn get_shapes(&self) -> Vec<&DebugShape> {
        if !self.enabled {
            return Vec::new();
        }

        self.temporary_shapes.iter()
            .chain(self.persistent_shapes.values())
            .collect()
    }

    /// Get the number of active shapes
    pub fn shape_count(&self) -> usize {
        self.temporary_shapes.len() + self.persistent_shapes.len()
    }

    /// Clear all shapes (temporary and persistent)
    pub fn clear(&mut self) {
        self.temporary_shapes.clear();
        self.persistent_shapes.clear();
    }
}

impl Default for DebugDrawSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugDraw for DebugDrawSystem {
    fn draw_line(&mut self, start: Vec3, end: Vec3, color: Vec3, duration: f32) {
        self.push(DebugShape::Line { start, end, color, duration });
    }

    fn draw_wire_cube(&mut self, center: Vec3, rotation: Quat, size: Vec3, color: Vec3, duration: f32) {
        self.push(DebugShape::WireCube { center, rotation, size, color, duration });
    }

    fn draw_wire_sphere(&mut self, center: Vec3, radius: f32, color: Vec3, duration: f32) {
        self.push(DebugShape::WireSphere { center, radius, color, duration });
    }

    fn draw_handles_enabled(&self) -> bool {
        self.enabled && self.draw_handles
    }
}
