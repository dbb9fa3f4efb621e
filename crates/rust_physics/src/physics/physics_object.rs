//! Rigid body state and per-tick integration
//!
//! # Integration Order
//!
//! Each live body runs, once per tick:
//! 1. gravity as a mass-independent force
//! 2. `v += a·dt`, then `a` is cleared
//! 3. `ω += α·dt`, then `α` is cleared
//! 4. translate by `v·dt`, rotate by `ω·dt`
//! 5. x-axis friction with a snap to zero near rest
//!
//! Dead bodies skip all of that but still resync their collider, so a body
//! moved by the scene keeps an accurate shape.

use crate::config::PhysicsConfig;
use crate::debug::DebugDraw;
use crate::foundation::math::{utils::DEGENERATE_EPSILON, Quat, SharedTransform, Vec3};

use super::angle_axis::AngleAxis;
use super::collision::{create_collider, Collider, ColliderType, Vertex};
use super::dimensions::{Dimension, DimensionSet};
use super::error::PhysicsError;
use super::layers::PhysicsLayer;

/// Induced torques at or below this magnitude are ignored
pub const DEFAULT_TORQUE_THRESHOLD: f32 = 0.001;

const VELOCITY_HANDLE_COLOR: Vec3 = Vec3::new(1.0, 1.0, 0.0);
const ACCELERATION_HANDLE_COLOR: Vec3 = Vec3::new(1.0, 0.0, 0.0);

/// Per-tick services handed to every body
pub struct TickContext<'a> {
    /// Seconds since the previous tick
    pub dt: f32,
    /// Simulation constants
    pub config: &'a PhysicsConfig,
    /// Debug-draw sink for handles
    pub debug: &'a mut dyn DebugDraw,
}

impl<'a> TickContext<'a> {
    /// Bundle the services for one tick
    pub fn new(dt: f32, config: &'a PhysicsConfig, debug: &'a mut dyn DebugDraw) -> Self {
        Self { dt, config, debug }
    }
}

/// A simulated body following a scene transform
#[derive(Debug)]
pub struct PhysicsObject {
    transform: SharedTransform,
    collider: Box<dyn Collider>,
    collider_color: Vec3,

    mass: f32,
    velocity: Vec3,
    acceleration: Vec3,
    angular_velocity: AngleAxis,
    angular_acceleration: AngleAxis,
    angular_speed: f32,
    torque_threshold: f32,

    layer: PhysicsLayer,
    affected_by_gravity: bool,
    alive: bool,
    dimensions: DimensionSet,
}

impl PhysicsObject {
    /// Create a body at rest with a default-sized collider of the given shape
    pub fn new(
        transform: SharedTransform,
        layer: PhysicsLayer,
        collider_type: ColliderType,
        mass: f32,
        affected_by_gravity: bool,
        alive: bool,
    ) -> Self {
        let collider = create_collider(collider_type, transform.clone());
        Self {
            transform,
            collider,
            collider_color: Vec3::new(1.0, 1.0, 1.0),
            mass,
            velocity: Vec3::zeros(),
            acceleration: Vec3::zeros(),
            angular_velocity: AngleAxis::identity(),
            angular_acceleration: AngleAxis::identity(),
            angular_speed: 0.0,
            torque_threshold: DEFAULT_TORQUE_THRESHOLD,
            layer,
            affected_by_gravity,
            alive,
            dimensions: DimensionSet::new(),
        }
    }

    // Transform and collider

    /// Transform this body moves
    pub fn transform(&self) -> &SharedTransform {
        &self.transform
    }

    /// Follow a different transform; the collider follows it too
    pub fn set_transform(&mut self, transform: SharedTransform) {
        self.collider.base_mut().set_parent_transform(transform.clone());
        self.transform = transform;
        self.collider.update();
    }

    /// Current world position
    pub fn position(&self) -> Vec3 {
        self.transform.borrow().position
    }

    /// Move the body directly, bypassing integration, and resync the collider
    pub fn translate(&mut self, offset: Vec3) {
        self.transform.borrow_mut().translate(offset);
        self.collider.update();
    }

    /// Current orientation
    pub fn rotation(&self) -> Quat {
        self.transform.borrow().rotation
    }

    /// Bounding shape
    pub fn collider(&self) -> &dyn Collider {
        self.collider.as_ref()
    }

    /// Mutable bounding shape
    pub fn collider_mut(&mut self) -> &mut dyn Collider {
        self.collider.as_mut()
    }

    /// Swap in a new collider, returning the old one
    ///
    /// The new collider is re-parented to this body's transform.
    pub fn set_collider(&mut self, mut collider: Box<dyn Collider>) -> Box<dyn Collider> {
        collider.base_mut().set_parent_transform(self.transform.clone());
        collider.update();
        std::mem::replace(&mut self.collider, collider)
    }

    /// Fit the collider around a mesh in this body's model space
    pub fn generate_collider(&mut self, vertices: &[Vertex]) -> Result<(), PhysicsError> {
        self.collider.generate_from_mesh(vertices)
    }

    /// Debug color of the collider handles
    pub fn collider_color(&self) -> Vec3 {
        self.collider_color
    }

    /// Set the debug color of the collider handles
    pub fn set_collider_color(&mut self, color: Vec3) {
        self.collider_color = color;
    }

    // Mass and motion

    /// Body mass
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Set the body mass
    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass;
    }

    /// Inverse mass as seen by collision response
    ///
    /// Zero for bodies that are not pushed by contacts, and for zero mass.
    pub fn inverse_mass(&self) -> f32 {
        if !self.layer.receives_response() || self.mass.abs() <= f32::EPSILON {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    /// Linear velocity
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Set the linear velocity
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Acceleration accumulated since the last tick
    pub fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    /// Angular velocity as a rotation per second
    pub fn angular_velocity(&self) -> Quat {
        self.angular_velocity.to_quaternion()
    }

    /// Set the angular velocity from a rotation per second
    pub fn set_angular_velocity(&mut self, rotation: Quat) {
        self.angular_velocity = AngleAxis::from_quaternion(&rotation);
    }

    /// Angular velocity in axis-angle form
    pub fn angular_velocity_axis(&self) -> AngleAxis {
        self.angular_velocity
    }

    /// Set the angular velocity in axis-angle form
    pub fn set_angular_velocity_axis(&mut self, angular_velocity: AngleAxis) {
        self.angular_velocity = angular_velocity;
    }

    /// Angular acceleration accumulated since the last tick
    pub fn angular_acceleration(&self) -> AngleAxis {
        self.angular_acceleration
    }

    /// Scalar angular speed
    ///
    /// Stored for gameplay code; integration does not read it.
    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }

    /// Set the scalar angular speed
    pub fn set_angular_speed(&mut self, speed: f32) {
        self.angular_speed = speed;
    }

    /// Set the threshold below which induced torques are dropped
    pub fn set_torque_threshold(&mut self, threshold: f32) {
        self.torque_threshold = threshold;
    }

    // Flags

    /// Simulation layer
    pub fn layer(&self) -> PhysicsLayer {
        self.layer
    }

    /// Whether the body integrates each tick
    pub fn alive(&self) -> bool {
        self.alive
    }

    /// Start or stop integrating
    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    /// Whether gravity is applied
    pub fn affected_by_gravity(&self) -> bool {
        self.affected_by_gravity
    }

    /// Enable or disable gravity for this body
    pub fn set_affected_by_gravity(&mut self, affected: bool) {
        self.affected_by_gravity = affected;
    }

    // Dimensions

    /// Dimension tags of this body
    pub fn dimensions(&self) -> &DimensionSet {
        &self.dimensions
    }

    /// Place the body in a dimension
    pub fn add_dimension(&mut self, dimension: Dimension) {
        self.dimensions.add(dimension);
    }

    /// Take the body out of a dimension
    pub fn remove_dimension(&mut self, dimension: Dimension) -> bool {
        self.dimensions.remove(dimension)
    }

    /// Whether the body is in a dimension
    pub fn contains_dimension(&self, dimension: Dimension) -> bool {
        self.dimensions.contains(dimension)
    }

    /// Whether two bodies can meet in the broad phase
    pub fn shares_dimension(&self, other: &PhysicsObject) -> bool {
        self.dimensions.shares(&other.dimensions)
    }

    // Forces

    fn divide_by_mass(&self, value: Vec3) -> Vec3 {
        if self.mass.abs() <= f32::EPSILON {
            value
        } else {
            value / self.mass
        }
    }

    fn rejects_forces(&self) -> bool {
        if self.layer.accepts_forces() {
            return false;
        }
        log::warn!("Tried to apply force to a static physics object");
        true
    }

    /// Add a force through the center of mass
    ///
    /// With `apply_mass` the force is divided by the mass first; otherwise
    /// it is taken as an acceleration.
    pub fn apply_force(&mut self, force: Vec3, apply_mass: bool) {
        if self.rejects_forces() {
            return;
        }

        let force = if apply_mass { self.divide_by_mass(force) } else { force };
        self.acceleration += force;
    }

    /// Add a force at a world-space point
    ///
    /// The full force still goes into linear acceleration. The component
    /// perpendicular to the lever arm additionally induces a torque.
    pub fn apply_force_at_point(&mut self, force: Vec3, point: Vec3, apply_mass: bool) {
        if self.rejects_forces() {
            return;
        }

        let force = if apply_mass { self.divide_by_mass(force) } else { force };
        let lever = point - self.position();
        let lever_sqr = lever.dot(&lever);

        if lever_sqr > DEGENERATE_EPSILON {
            if let Some(axis) = (-lever).cross(&force).try_normalize(DEGENERATE_EPSILON) {
                let perpendicular = force - lever * (lever.dot(&force) / lever_sqr);
                let magnitude = perpendicular.norm() * lever_sqr.sqrt();

                // Mass was already divided out above
                if magnitude > self.torque_threshold {
                    self.apply_torque(AngleAxis::new(axis, magnitude), false);
                }
            }
        }

        self.acceleration += force;
    }

    /// Add a torque
    ///
    /// Without `apply_mass` the accumulator's `negative` flag is refreshed
    /// from the sign of the torque's quaternion z component.
    pub fn apply_torque(&mut self, torque: AngleAxis, apply_mass: bool) {
        if self.rejects_forces() {
            return;
        }

        if apply_mass {
            let scaled = if self.mass.abs() <= f32::EPSILON {
                torque
            } else {
                torque * (1.0 / self.mass)
            };
            self.angular_acceleration += scaled;
        } else {
            self.angular_acceleration += torque;
            let z = torque.to_quaternion().quaternion().k;
            self.angular_acceleration.negative = z >= 0.0;
        }
    }

    /// Velocity of a world-space point rigidly attached to the body
    ///
    /// Falls back to the linear velocity at the body origin, when there is
    /// no angular velocity, or when the point lies on the rotation axis.
    pub fn velocity_at_point(&self, point: Vec3) -> Vec3 {
        let offset = point - self.position();
        let distance = offset.norm();

        if distance <= f32::EPSILON || self.angular_velocity.angle == 0.0 {
            return self.velocity;
        }

        let direction = offset / distance;
        match self.angular_velocity.axis.cross(&direction).try_normalize(DEGENERATE_EPSILON) {
            Some(tangent) => self.velocity + tangent * distance * self.angular_velocity.angle,
            None => self.velocity,
        }
    }

    // Tick

    fn apply_friction(&mut self, config: &PhysicsConfig) {
        let threshold = config.friction_threshold;
        let vx = &mut self.velocity.x;

        if *vx > threshold {
            *vx -= config.friction;
        } else if *vx < -threshold {
            *vx += config.friction;
        }

        if vx.abs() < threshold {
            *vx = 0.0;
        }
    }

    /// Advance the body by one tick
    pub fn update(&mut self, ctx: &mut TickContext<'_>) {
        if self.alive {
            if self.affected_by_gravity {
                self.apply_force(ctx.config.gravity_vector(), false);
            }

            self.velocity += self.acceleration * ctx.dt;
            self.acceleration = Vec3::zeros();
            self.angular_velocity += self.angular_acceleration * ctx.dt;
            self.angular_acceleration = AngleAxis::identity();

            {
                let mut transform = self.transform.borrow_mut();
                transform.translate(self.velocity * ctx.dt);
                transform.rotate((self.angular_velocity * ctx.dt).to_quaternion());
            }

            self.apply_friction(ctx.config);
            log::trace!(
                "Body at {:?}: velocity {:?}, angular {:?}",
                self.position(),
                self.velocity,
                self.angular_velocity
            );
        }

        self.collider.update();

        if ctx.config.draw_handles || ctx.debug.draw_handles_enabled() {
            self.draw_handles(ctx.debug);
        }
    }

    /// Emit velocity, acceleration and collider handles
    pub fn draw_handles(&self, debug: &mut dyn DebugDraw) {
        let position = self.position();
        let velocity_tip = position + self.velocity;

        debug.draw_line(position, velocity_tip, VELOCITY_HANDLE_COLOR, 0.0);
        debug.draw_line(velocity_tip, velocity_tip + self.acceleration, ACCELERATION_HANDLE_COLOR, 0.0);
        self.collider.draw_handles(debug, self.collider_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug::{DebugDrawSystem, DebugShape, NullDebugDraw};
    use crate::foundation::math::Transform;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    fn body(layer: PhysicsLayer, mass: f32) -> PhysicsObject {
        PhysicsObject::new(Transform::identity().shared(), layer, ColliderType::Aabb, mass, false, true)
    }

    fn no_gravity() -> PhysicsConfig {
        PhysicsConfig { gravity: 0.0, ..PhysicsConfig::default() }
    }

    #[test]
    fn test_force_is_divided_by_mass() {
        let mut object = body(PhysicsLayer::Dynamic, 4.0);

        object.apply_force(Vec3::new(2.0, -8.0, 1.0), true);
        assert_relative_eq!(object.acceleration(), Vec3::new(0.5, -2.0, 0.25), epsilon = EPSILON);

        object.apply_force(Vec3::new(1.0, 0.0, 0.0), false);
        assert_relative_eq!(object.acceleration(), Vec3::new(1.5, -2.0, 0.25), epsilon = EPSILON);
    }

    #[test]
    fn test_zero_mass_is_never_a_divisor() {
        let mut object = body(PhysicsLayer::Dynamic, 0.0);
        object.apply_force(Vec3::new(3.0, 0.0, 0.0), true);
        object.apply_torque(AngleAxis::new(Vec3::z(), 1.0), true);

        assert_eq!(object.acceleration(), Vec3::new(3.0, 0.0, 0.0));
        assert_relative_eq!(object.angular_acceleration().angle, 1.0, epsilon = EPSILON);
        assert_eq!(object.inverse_mass(), 0.0);
    }

    #[test]
    fn test_static_body_rejects_forces() {
        let mut object = body(PhysicsLayer::Static, 1.0);

        object.apply_force(Vec3::new(1.0, 2.0, 3.0), true);
        object.apply_force(Vec3::new(1.0, 2.0, 3.0), false);
        object.apply_force_at_point(Vec3::x(), Vec3::y(), false);
        object.apply_torque(AngleAxis::new(Vec3::z(), 1.0), false);

        assert_eq!(object.acceleration(), Vec3::zeros());
        assert!(object.angular_acceleration().is_identity());
    }

    #[test]
    fn test_off_center_force_induces_torque() {
        let mut object = body(PhysicsLayer::Dynamic, 1.0);

        // axis = normalize(cross(-lever, force))
        object.apply_force_at_point(Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0), false);

        assert_eq!(object.acceleration(), Vec3::new(2.0, 0.0, 0.0));
        let torque = object.angular_acceleration();
        assert_relative_eq!(torque.axis, Vec3::z(), epsilon = EPSILON);
        assert_relative_eq!(torque.angle, 2.0, epsilon = EPSILON);
    }

    #[test]
    fn test_force_through_center_induces_no_torque() {
        let mut object = body(PhysicsLayer::Dynamic, 1.0);

        object.apply_force_at_point(Vec3::new(0.0, 3.0, 0.0), Vec3::new(0.0, 2.0, 0.0), false);
        object.apply_force_at_point(Vec3::new(1.0, 0.0, 0.0), Vec3::zeros(), false);

        assert_eq!(object.acceleration(), Vec3::new(1.0, 3.0, 0.0));
        assert!(object.angular_acceleration().is_identity());
    }

    #[test]
    fn test_tiny_torque_is_dropped() {
        let mut object = body(PhysicsLayer::Dynamic, 1.0);

        object.apply_force_at_point(Vec3::new(0.0005, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0), false);
        assert!(object.angular_acceleration().is_identity());
    }

    #[test]
    fn test_torque_sets_negative_flag_from_z_sign() {
        let mut object = body(PhysicsLayer::Dynamic, 1.0);

        object.apply_torque(AngleAxis::new(-Vec3::z(), 0.5), false);
        assert!(!object.angular_acceleration().negative);

        object.apply_torque(AngleAxis::new(Vec3::z(), 2.0), false);
        assert!(object.angular_acceleration().negative);

        // No z component counts as non-negative
        object.apply_torque(AngleAxis::new(Vec3::x(), 1.0), false);
        assert!(object.angular_acceleration().negative);
    }

    #[test]
    fn test_integration_translates_before_friction() {
        let mut object = body(PhysicsLayer::Dynamic, 1.0);
        object.set_velocity(Vec3::new(1.0, 0.0, 0.0));

        let config = no_gravity();
        let mut debug = NullDebugDraw;
        object.update(&mut TickContext::new(1.0, &config, &mut debug));

        assert_relative_eq!(object.position().x, 1.0, epsilon = EPSILON);
        assert_relative_eq!(object.velocity().x, 0.998, epsilon = EPSILON);
        assert_eq!(object.acceleration(), Vec3::zeros());
    }

    #[test]
    fn test_slow_motion_snaps_to_rest() {
        let mut object = body(PhysicsLayer::Dynamic, 1.0);
        let config = no_gravity();
        let mut debug = NullDebugDraw;

        object.set_velocity(Vec3::new(0.006, 0.0, 0.0));
        object.update(&mut TickContext::new(0.1, &config, &mut debug));
        assert_eq!(object.velocity().x, 0.0);

        object.set_velocity(Vec3::new(-0.5, 0.3, 0.0));
        object.update(&mut TickContext::new(0.1, &config, &mut debug));
        assert_relative_eq!(object.velocity(), Vec3::new(-0.498, 0.3, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_gravity_accelerates_falling_body() {
        let mut object = PhysicsObject::new(
            Transform::from_position(Vec3::new(0.0, 10.0, 0.0)).shared(),
            PhysicsLayer::Dynamic,
            ColliderType::Sphere,
            2.0,
            true,
            true,
        );
        let config = PhysicsConfig::default();
        let mut debug = NullDebugDraw;

        object.update(&mut TickContext::new(0.5, &config, &mut debug));

        // Gravity ignores mass
        assert_relative_eq!(object.velocity().y, -9.81 * 0.5, epsilon = 1e-5);
        assert_relative_eq!(object.position().y, 10.0 - 9.81 * 0.25, epsilon = 1e-5);
        assert_relative_eq!(object.collider().center().y, object.position().y, epsilon = 1e-5);
    }

    #[test]
    fn test_angular_velocity_rotates_transform() {
        let mut object = body(PhysicsLayer::Dynamic, 1.0);
        object.set_angular_velocity_axis(AngleAxis::new(Vec3::z(), std::f32::consts::FRAC_PI_2));

        let config = no_gravity();
        let mut debug = NullDebugDraw;
        object.update(&mut TickContext::new(1.0, &config, &mut debug));

        assert_relative_eq!(object.rotation() * Vec3::x(), Vec3::y(), epsilon = 1e-5);
    }

    #[test]
    fn test_dead_body_still_syncs_collider() {
        let parent = Transform::identity().shared();
        let mut object =
            PhysicsObject::new(parent.clone(), PhysicsLayer::Dynamic, ColliderType::Aabb, 1.0, true, false);
        object.set_velocity(Vec3::new(5.0, 0.0, 0.0));

        parent.borrow_mut().translate(Vec3::new(0.0, 3.0, 0.0));
        let config = PhysicsConfig::default();
        let mut debug = NullDebugDraw;
        object.update(&mut TickContext::new(1.0, &config, &mut debug));

        assert_eq!(object.position(), Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(object.velocity(), Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(object.collider().center(), Vec3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn test_velocity_at_point() {
        let mut object = body(PhysicsLayer::Dynamic, 1.0);
        object.set_velocity(Vec3::new(1.0, 0.0, 0.0));

        // No spin: every point moves with the body
        assert_eq!(object.velocity_at_point(Vec3::new(0.0, 2.0, 0.0)), Vec3::new(1.0, 0.0, 0.0));

        object.set_angular_velocity_axis(AngleAxis::new(Vec3::z(), 2.0));
        assert_relative_eq!(
            object.velocity_at_point(Vec3::new(0.0, 2.0, 0.0)),
            Vec3::new(-3.0, 0.0, 0.0),
            epsilon = 1e-5
        );

        // Origin and points on the axis get no tangential part and no NaN
        assert_eq!(object.velocity_at_point(Vec3::zeros()), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(object.velocity_at_point(Vec3::new(0.0, 0.0, 4.0)), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_draw_handles_emits_lines_and_collider() {
        let mut object = body(PhysicsLayer::Dynamic, 1.0);
        object.set_velocity(Vec3::new(0.0, 2.0, 0.0));
        object.apply_force(Vec3::new(1.0, 0.0, 0.0), false);

        let mut debug = DebugDrawSystem::new();
        object.draw_handles(&mut debug);
        let shapes = debug.get_shapes();

        assert_eq!(shapes.len(), 3);
        assert_eq!(
            *shapes[0],
            DebugShape::Line {
                start: Vec3::zeros(),
                end: Vec3::new(0.0, 2.0, 0.0),
                color: VELOCITY_HANDLE_COLOR,
                duration: 0.0,
            }
        );
        assert_eq!(
            *shapes[1],
            DebugShape::Line {
                start: Vec3::new(0.0, 2.0, 0.0),
                end: Vec3::new(1.0, 2.0, 0.0),
                color: ACCELERATION_HANDLE_COLOR,
                duration: 0.0,
            }
        );
        assert!(matches!(shapes[2], DebugShape::WireCube { .. }));
    }

    #[test]
    fn test_update_draws_only_when_enabled() {
        let mut object = body(PhysicsLayer::Dynamic, 1.0);
        let config = no_gravity();

        let mut debug = DebugDrawSystem::new();
        debug.draw_handles = false;
        object.update(&mut TickContext::new(0.1, &config, &mut debug));
        assert_eq!(debug.shape_count(), 0);

        debug.draw_handles = true;
        object.update(&mut TickContext::new(0.1, &config, &mut debug));
        assert_eq!(debug.shape_count(), 3);
    }

    #[test]
    fn test_swapping_collider_reparents_it() {
        let mut object = body(PhysicsLayer::Dynamic, 1.0);
        object.transform().borrow_mut().translate(Vec3::new(0.0, 0.0, 7.0));

        let replacement = create_collider(ColliderType::Sphere, Transform::identity().shared());
        let old = object.set_collider(replacement);

        assert_eq!(old.collider_type(), ColliderType::Aabb);
        assert_eq!(object.collider().collider_type(), ColliderType::Sphere);
        assert_eq!(object.collider().center(), Vec3::new(0.0, 0.0, 7.0));
    }

    #[test]
    fn test_dimension_helpers() {
        let mut a = body(PhysicsLayer::Dynamic, 1.0);
        let mut b = body(PhysicsLayer::Dynamic, 1.0);
        assert!(a.shares_dimension(&b));

        a.add_dimension(1);
        b.add_dimension(2);
        assert!(!a.shares_dimension(&b));
        assert!(a.contains_dimension(1));

        b.add_dimension(1);
        assert!(a.shares_dimension(&b));
    }
}
