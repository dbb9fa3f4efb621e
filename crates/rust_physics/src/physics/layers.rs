//! Physics layers for filtering collision response
//!
//! Based on Game Engine Architecture 3rd Edition, Section 13.3.8:
//! "Most games need to filter collisions... This is typically done via
//! collision layers or groups."

use serde::{Deserialize, Serialize};

/// How a body takes part in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PhysicsLayer {
    /// Immovable scenery; never accepts force or torque
    Static,
    /// Fully simulated body
    #[default]
    Dynamic,
    /// Reports overlaps but receives no collision response
    Trigger,
}

impl PhysicsLayer {
    /// Whether the layer accepts forces and torques
    pub fn accepts_forces(self) -> bool {
        !matches!(self, PhysicsLayer::Static)
    }

    /// Whether the layer gets pushed around by collision response
    pub fn receives_response(self) -> bool {
        matches!(self, PhysicsLayer::Dynamic)
    }

    /// Check if two layers should be tested against each other
    ///
    /// Two static bodies can never move into each other, so that pair is skipped.
    pub fn should_collide(a: PhysicsLayer, b: PhysicsLayer) -> bool {
        !(a == PhysicsLayer::Static && b == PhysicsLayer::Static)
    }

    /// Check if an overlapping pair should be resolved physically
    ///
    /// Triggers only report overlaps.
    pub fn should_resolve(a: PhysicsLayer, b: PhysicsLayer) -> bool {
        Self::should_collide(a, b) && a != PhysicsLayer::Trigger && b != PhysicsLayer::Trigger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_pairs_are_skipped() {
        assert!(!PhysicsLayer::should_collide(PhysicsLayer::Static, PhysicsLayer::Static));
        assert!(PhysicsLayer::should_collide(PhysicsLayer::Static, PhysicsLayer::Dynamic));
        assert!(PhysicsLayer::should_collide(PhysicsLayer::Trigger, PhysicsLayer::Static));
    }

    #[test]
    fn test_triggers_are_detected_but_not_resolved() {
        assert!(PhysicsLayer::should_collide(PhysicsLayer::Trigger, PhysicsLayer::Dynamic));
        assert!(!PhysicsLayer::should_resolve(PhysicsLayer::Trigger, PhysicsLayer::Dynamic));
        assert!(PhysicsLayer::should_resolve(PhysicsLayer::Dynamic, PhysicsLayer::Static));
    }

    #[test]
    fn test_only_static_rejects_forces() {
        assert!(!PhysicsLayer::Static.accepts_forces());
        assert!(PhysicsLayer::Dynamic.accepts_forces());
        assert!(PhysicsLayer::Trigger.accepts_forces());
        assert!(!PhysicsLayer::Trigger.receives_response());
    }
}
