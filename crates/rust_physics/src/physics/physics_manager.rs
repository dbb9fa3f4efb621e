//! Body registry, broad phase and collision response
//!
//! Based on Game Engine Architecture 3rd Edition, Chapter 13:
//! "The collision detection system is typically split into two phases:
//! broad-phase and narrow-phase."
//!
//! A tick runs in three passes over the registered bodies:
//! 1. integrate every body in registration order
//! 2. collect candidate pairs from the [`BroadPhase`] and run SAT on each
//! 3. push overlapping pairs apart with an impulse and a positional correction

use std::collections::HashSet;

use crate::config::{ConfigError, PhysicsConfig};
use crate::debug::DebugDraw;
use crate::foundation::collections::{BodyHandle, BodyMap};
use crate::foundation::math::Vec3;

use super::collision::{sat, CollisionData};
use super::error::PhysicsError;
use super::layers::PhysicsLayer;
use super::physics_object::{PhysicsObject, TickContext};

/// Two bodies selected for, or found in, collision
///
/// `first` was registered before `second`; contact normals point from
/// `first` toward `second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionPair {
    /// Earlier-registered body
    pub first: BodyHandle,
    /// Later-registered body
    pub second: BodyHandle,
}

impl CollisionPair {
    /// Create a pair in the given order
    pub fn new(first: BodyHandle, second: BodyHandle) -> Self {
        Self { first, second }
    }

    /// Whether the pair involves `handle`
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.first == handle || self.second == handle
    }
}

/// An overlapping pair with its SAT result
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    /// Bodies involved
    pub pair: CollisionPair,
    /// Normal, depth and contact points
    pub data: CollisionData,
}

/// Broad-phase interface selecting which pairs reach the narrow phase
///
/// GEA 13.3.2: "The broad phase quickly identifies pairs of objects that might
/// be colliding using some kind of spatial partitioning scheme."
pub trait BroadPhase {
    /// Candidate pairs, each with the earlier-registered body first
    fn candidate_pairs(&self, bodies: &BodyMap<PhysicsObject>, order: &[BodyHandle]) -> Vec<CollisionPair>;
}

/// All-pairs broad phase filtered by liveness, layer and shared dimension
#[derive(Debug, Default, Clone, Copy)]
pub struct DimensionBroadPhase;

impl BroadPhase for DimensionBroadPhase {
    fn candidate_pairs(&self, bodies: &BodyMap<PhysicsObject>, order: &[BodyHandle]) -> Vec<CollisionPair> {
        let mut pairs = Vec::new();

        for (i, &first) in order.iter().enumerate() {
            let Some(a) = bodies.get(first) else { continue };
            if !a.alive() {
                continue;
            }

            for &second in &order[i + 1..] {
                let Some(b) = bodies.get(second) else { continue };
                if !b.alive()
                    || !PhysicsLayer::should_collide(a.layer(), b.layer())
                    || !a.shares_dimension(b)
                {
                    continue;
                }
                pairs.push(CollisionPair::new(first, second));
            }
        }

        pairs
    }
}

/// Owns the simulated bodies and steps them
pub struct PhysicsManager {
    config: PhysicsConfig,
    bodies: BodyMap<PhysicsObject>,
    order: Vec<BodyHandle>,
    broad_phase: Box<dyn BroadPhase>,
    contacts: Vec<Contact>,
    current_pairs: HashSet<CollisionPair>,
    previous_pairs: HashSet<CollisionPair>,
}

impl PhysicsManager {
    /// Create a manager using the dimension broad phase
    ///
    /// Fails when `config` does not pass [`PhysicsConfig::validate`].
    pub fn new(config: PhysicsConfig) -> Result<Self, ConfigError> {
        Self::with_broad_phase(config, Box::new(DimensionBroadPhase))
    }

    /// Create a manager with a custom broad phase
    pub fn with_broad_phase(config: PhysicsConfig, broad_phase: Box<dyn BroadPhase>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            bodies: BodyMap::with_key(),
            order: Vec::new(),
            broad_phase,
            contacts: Vec::new(),
            current_pairs: HashSet::new(),
            previous_pairs: HashSet::new(),
        })
    }

    // Registry

    /// Register a body; it is integrated after every body added before it
    pub fn add(&mut self, mut body: PhysicsObject) -> BodyHandle {
        body.set_torque_threshold(self.config.torque_threshold);
        let handle = self.bodies.insert(body);
        self.order.push(handle);
        log::debug!("Registered physics body {:?} ({} total)", handle, self.order.len());
        handle
    }

    /// Unregister a body and hand it back
    pub fn remove(&mut self, handle: BodyHandle) -> Result<PhysicsObject, PhysicsError> {
        let body = self.bodies.remove(handle).ok_or(PhysicsError::UnknownBody(handle))?;
        self.order.retain(|&h| h != handle);
        self.contacts.retain(|contact| !contact.pair.contains(handle));
        self.current_pairs.retain(|pair| !pair.contains(handle));
        self.previous_pairs.retain(|pair| !pair.contains(handle));
        Ok(body)
    }

    /// Look up a body
    pub fn get(&self, handle: BodyHandle) -> Option<&PhysicsObject> {
        self.bodies.get(handle)
    }

    /// Look up a body mutably
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut PhysicsObject> {
        self.bodies.get_mut(handle)
    }

    /// Look up a body, failing for stale handles
    pub fn body(&self, handle: BodyHandle) -> Result<&PhysicsObject, PhysicsError> {
        self.get(handle).ok_or(PhysicsError::UnknownBody(handle))
    }

    /// Look up a body mutably, failing for stale handles
    pub fn body_mut(&mut self, handle: BodyHandle) -> Result<&mut PhysicsObject, PhysicsError> {
        self.get_mut(handle).ok_or(PhysicsError::UnknownBody(handle))
    }

    /// Handles in registration order
    pub fn handles(&self) -> &[BodyHandle] {
        &self.order
    }

    /// Number of registered bodies
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no bodies are registered
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // Configuration

    /// Simulation constants
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Replace the simulation constants, keeping the old ones if invalid
    pub fn set_config(&mut self, config: PhysicsConfig) -> Result<(), ConfigError> {
        config.validate()?;
        for body in self.bodies.values_mut() {
            body.set_torque_threshold(config.torque_threshold);
        }
        self.config = config;
        Ok(())
    }

    /// Gravity magnitude
    pub fn gravity(&self) -> f32 {
        self.config.gravity
    }

    /// Set the gravity magnitude
    pub fn set_gravity(&mut self, gravity: f32) {
        self.config.gravity = gravity;
    }

    /// Gravity direction
    pub fn gravity_direction(&self) -> Vec3 {
        self.config.gravity_direction
    }

    /// Set the gravity direction; the zero vector is rejected
    pub fn set_gravity_direction(&mut self, direction: Vec3) -> Result<(), ConfigError> {
        self.set_config(PhysicsConfig {
            gravity_direction: direction,
            ..self.config.clone()
        })
    }

    // Simulation

    /// Advance every body by `dt`, then detect and resolve collisions
    pub fn step(&mut self, dt: f32, debug: &mut dyn DebugDraw) -> Result<(), PhysicsError> {
        self.integrate(dt, debug);
        self.detect_collisions()?;

        if self.config.resolve_collisions {
            self.resolve_contacts(dt);
        }
        Ok(())
    }

    /// Integrate every body in registration order
    pub fn integrate(&mut self, dt: f32, debug: &mut dyn DebugDraw) {
        let mut ctx = TickContext::new(dt, &self.config, debug);
        for handle in &self.order {
            if let Some(body) = self.bodies.get_mut(*handle) {
                body.update(&mut ctx);
            }
        }
    }

    /// Run the broad and narrow phases, replacing the current contacts
    ///
    /// On error the contacts and pair sets of the previous pass are kept.
    pub fn detect_collisions(&mut self) -> Result<&[Contact], PhysicsError> {
        let mut pairs = HashSet::new();
        let mut contacts = Vec::new();

        for pair in self.broad_phase.candidate_pairs(&self.bodies, &self.order) {
            let (Some(a), Some(b)) = (self.bodies.get(pair.first), self.bodies.get(pair.second)) else {
                continue;
            };

            if let Some(data) = sat::test_pair(a.collider(), b.collider())? {
                pairs.insert(pair);
                contacts.push(Contact { pair, data });
            }
        }

        self.previous_pairs = std::mem::replace(&mut self.current_pairs, pairs);
        self.contacts = contacts;

        for pair in self.current_pairs.difference(&self.previous_pairs) {
            log::debug!("Collision entered: {:?} <-> {:?}", pair.first, pair.second);
        }
        for pair in self.previous_pairs.difference(&self.current_pairs) {
            log::debug!("Collision exited: {:?} <-> {:?}", pair.first, pair.second);
        }

        Ok(&self.contacts)
    }

    /// Apply collision response to every current contact
    pub fn resolve_contacts(&mut self, dt: f32) {
        for contact in &self.contacts {
            resolve_contact(&mut self.bodies, contact, &self.config, dt);
        }
    }

    /// Contacts found by the last detection pass
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// All pairs overlapping after the last detection pass
    pub fn current_collisions(&self) -> &HashSet<CollisionPair> {
        &self.current_pairs
    }

    /// Pairs that started overlapping in the last detection pass
    pub fn collisions_entered(&self) -> Vec<CollisionPair> {
        self.current_pairs
            .difference(&self.previous_pairs)
            .copied()
            .collect()
    }

    /// Pairs that stopped overlapping in the last detection pass
    pub fn collisions_exited(&self) -> Vec<CollisionPair> {
        self.previous_pairs
            .difference(&self.current_pairs)
            .copied()
            .collect()
    }
}

/// Impulse along the contact normal plus a positional push-out
///
/// The impulse is delivered as a force over the next tick, applied at the
/// contact center so off-center hits also spin the bodies.
fn resolve_contact(bodies: &mut BodyMap<PhysicsObject>, contact: &Contact, config: &PhysicsConfig, dt: f32) {
    let (Some(a), Some(b)) = (bodies.get(contact.pair.first), bodies.get(contact.pair.second)) else {
        return;
    };
    if !PhysicsLayer::should_resolve(a.layer(), b.layer()) {
        return;
    }

    let inverse_a = a.inverse_mass();
    let inverse_b = b.inverse_mass();
    let inverse_sum = inverse_a + inverse_b;
    if inverse_sum <= f32::EPSILON || dt <= 0.0 {
        return;
    }

    let normal = contact.data.normal;
    let point = contact
        .data
        .contact_center()
        .unwrap_or_else(|| (a.position() + b.position()) * 0.5);

    let relative = b.velocity_at_point(point) - a.velocity_at_point(point);
    let approach = relative.dot(&normal);

    let penetration = (contact.data.depth - config.penetration_slop).max(0.0);
    let correction = normal * (penetration * config.correction_percent / inverse_sum);

    // Forces are divided by mass when applied, so the impulse stays unscaled here
    let force = if approach < 0.0 {
        let impulse = -(1.0 + config.restitution) * approach / inverse_sum;
        Some(normal * (impulse / dt))
    } else {
        None
    };

    if inverse_a > 0.0 {
        if let Some(body) = bodies.get_mut(contact.pair.first) {
            if let Some(force) = force {
                body.apply_force_at_point(-force, point, true);
            }
            body.translate(-correction * inverse_a);
        }
    }
    if inverse_b > 0.0 {
        if let Some(body) = bodies.get_mut(contact.pair.second) {
            if let Some(force) = force {
                body.apply_force_at_point(force, point, true);
            }
            body.translate(correction * inverse_b);
        }
    }
}
