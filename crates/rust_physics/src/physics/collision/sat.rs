//! Separating Axis Theorem narrow phase
//!
//! Two convex shapes are disjoint exactly when some axis separates their
//! projections. Candidate axes are tried in a fixed order and the test stops
//! at the first separating one. When every axis overlaps, the axis with the
//! smallest overlap becomes the contact normal.
//!
//! Candidate order:
//! 1. the first shape's face axes, then the second's
//! 2. for spheres, the direction from the center to the other shape's closest point
//! 3. for box pairs, cross products of the edge directions
//!
//! Near-parallel duplicates are dropped, so earlier axes win ties.

use crate::foundation::math::{utils::DEGENERATE_EPSILON, Vec3};
use crate::physics::error::PhysicsError;

use super::collider::{Collider, ColliderType};
use super::mesh;

/// Two unit axes are the same axis when `|dot|` exceeds this
pub const PARALLEL_TOLERANCE: f32 = 1.0e-6;

/// Result of an overlapping pair
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionData {
    /// Unit contact normal pointing from the first shape toward the second
    pub normal: Vec3,
    /// Overlap along `normal`
    pub depth: f32,
    /// Extremal points touching along `normal`
    pub contact_points: Vec<Vec3>,
}

impl CollisionData {
    /// Average of the contact points, `None` when there are none
    pub fn contact_center(&self) -> Option<Vec3> {
        if self.contact_points.is_empty() {
            return None;
        }
        let sum: Vec3 = self.contact_points.iter().sum();
        Some(sum / self.contact_points.len() as f32)
    }
}

/// Ordered set of unit axes with near-duplicates removed
#[derive(Debug, Default)]
struct AxisSet {
    axes: Vec<Vec3>,
}

impl AxisSet {
    fn push_unit(&mut self, axis: Vec3) {
        let duplicate = self
            .axes
            .iter()
            .any(|existing| existing.dot(&axis).abs() > 1.0 - PARALLEL_TOLERANCE);
        if !duplicate {
            self.axes.push(axis);
        }
    }

    /// Face axes must be usable; a zero one means the shape is broken
    fn push_face(&mut self, axis: Vec3) -> Result<(), PhysicsError> {
        let unit = axis
            .try_normalize(DEGENERATE_EPSILON)
            .ok_or(PhysicsError::DegenerateAxis)?;
        self.push_unit(unit);
        Ok(())
    }

    /// Derived axes (sphere directions, edge crosses) are simply skipped when zero
    fn push_derived(&mut self, axis: Vec3) {
        if let Some(unit) = axis.try_normalize(DEGENERATE_EPSILON) {
            self.push_unit(unit);
        }
    }
}

/// Direction from a sphere's center toward the other shape
fn sphere_axis(sphere: &dyn Collider, other: &dyn Collider) -> Vec3 {
    let center = sphere.center();
    let target = match other.collider_type() {
        ColliderType::Sphere => other.center(),
        ColliderType::Aabb | ColliderType::Obb => other.closest_to_point(center),
    };
    target - center
}

/// Every axis tested for the pair, in test order
pub fn candidate_axes(a: &dyn Collider, b: &dyn Collider) -> Result<Vec<Vec3>, PhysicsError> {
    let mut set = AxisSet::default();

    for axis in a.separating_axes().into_iter().chain(b.separating_axes()) {
        set.push_face(axis)?;
    }

    if a.collider_type() == ColliderType::Sphere {
        set.push_derived(sphere_axis(a, b));
    }
    if b.collider_type() == ColliderType::Sphere {
        set.push_derived(-sphere_axis(b, a));
    }

    let b_edges = b.edge_directions();
    for edge_a in a.edge_directions() {
        for edge_b in &b_edges {
            set.push_derived(edge_a.cross(edge_b));
        }
    }

    // Concentric spheres have no direction at all; any axis will do
    if set.axes.is_empty() {
        set.axes.push(Vec3::x());
    }

    Ok(set.axes)
}

/// Diagonal of the points' bounds, squared
fn spread(points: &[Vec3]) -> f32 {
    mesh::bounds_of(points).map_or(0.0, |bounds| (bounds.max - bounds.min).norm_squared())
}

/// The contact patch can be no larger than the smaller touching feature
///
/// Fewer points wins; with equal counts the tighter cluster wins, and the
/// first shape's points win a full tie.
fn touching_feature(a_points: Vec<Vec3>, b_points: Vec<Vec3>) -> Vec<Vec3> {
    let b_is_smaller = b_points.len() < a_points.len()
        || (b_points.len() == a_points.len() && spread(&b_points) < spread(&a_points));
    if b_is_smaller {
        b_points
    } else {
        a_points
    }
}

/// Run SAT on a pair of shapes
///
/// Returns `Ok(None)` as soon as a separating axis is found. Touching
/// shapes count as overlapping with zero depth.
pub fn test_pair(a: &dyn Collider, b: &dyn Collider) -> Result<Option<CollisionData>, PhysicsError> {
    let axes = candidate_axes(a, b)?;
    let mut best: Option<CollisionData> = None;

    for axis in axes {
        let projection_a = a.project_onto_axis(axis)?;
        let projection_b = b.project_onto_axis(axis)?;

        if !projection_a.overlaps(&projection_b) {
            log::trace!("SAT: separated along {:?}", axis);
            return Ok(None);
        }

        let forward = projection_a.max - projection_b.min;
        let backward = projection_b.max - projection_a.min;

        let candidate = if forward <= backward {
            CollisionData {
                normal: axis,
                depth: forward,
                contact_points: touching_feature(projection_a.max_points, projection_b.min_points),
            }
        } else {
            CollisionData {
                normal: -axis,
                depth: backward,
                contact_points: touching_feature(projection_a.min_points, projection_b.max_points),
            }
        };

        if best.as_ref().map_or(true, |current| candidate.depth < current.depth) {
            best = Some(candidate);
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug::DebugDraw;
    use crate::foundation::math::{Quat, Transform};
    use crate::physics::collision::aabb::AabbCollider;
    use crate::physics::collision::collider::ColliderBase;
    use crate::physics::collision::mesh::Vertex;
    use crate::physics::collision::obb::ObbCollider;
    use crate::physics::collision::projection::ProjectionData;
    use crate::physics::collision::sphere::SphereCollider;
    use approx::assert_relative_eq;
    use std::cell::Cell;

    const EPSILON: f32 = 1e-5;

    fn aabb_at(position: Vec3) -> AabbCollider {
        AabbCollider::new(Transform::from_position(position).shared())
    }

    fn sphere_at(position: Vec3, radius: f32) -> SphereCollider {
        SphereCollider::with_radius(Transform::from_position(position).shared(), radius)
    }

    /// Wraps a collider and counts projection calls
    #[derive(Debug)]
    struct CountingCollider<C: Collider> {
        inner: C,
        projections: Cell<usize>,
    }

    impl<C: Collider> CountingCollider<C> {
        fn new(inner: C) -> Self {
            Self { inner, projections: Cell::new(0) }
        }
    }

    impl<C: Collider> Collider for CountingCollider<C> {
        fn collider_type(&self) -> ColliderType {
            self.inner.collider_type()
        }

        fn base(&self) -> &ColliderBase {
            self.inner.base()
        }

        fn base_mut(&mut self) -> &mut ColliderBase {
            self.inner.base_mut()
        }

        fn generate_from_mesh(&mut self, vertices: &[Vertex]) -> Result<(), PhysicsError> {
            self.inner.generate_from_mesh(vertices)
        }

        fn contains_point(&self, point: Vec3) -> bool {
            self.inner.contains_point(point)
        }

        fn closest_to_point(&self, point: Vec3) -> Vec3 {
            self.inner.closest_to_point(point)
        }

        fn project_onto_axis(&self, axis: Vec3) -> Result<ProjectionData, PhysicsError> {
            self.projections.set(self.projections.get() + 1);
            self.inner.project_onto_axis(axis)
        }

        fn find_surface_normal(&self, point: Vec3) -> Vec3 {
            self.inner.find_surface_normal(point)
        }

        fn draw_handles(&self, debug: &mut dyn DebugDraw, color: Vec3) {
            self.inner.draw_handles(debug, color);
        }

        fn separating_axes(&self) -> Vec<Vec3> {
            self.inner.separating_axes()
        }

        fn edge_directions(&self) -> Vec<Vec3> {
            self.inner.edge_directions()
        }
    }

    #[test]
    fn test_stops_at_first_separating_axis() {
        let a = CountingCollider::new(aabb_at(Vec3::zeros()));
        let b = CountingCollider::new(aabb_at(Vec3::new(5.0, 0.0, 0.0)));

        let result = test_pair(&a, &b).expect("valid shapes");

        assert!(result.is_none());
        assert_eq!(a.projections.get(), 1);
        assert_eq!(b.projections.get(), 1);
    }

    #[test]
    fn test_overlapping_pair_tests_every_axis() {
        let a = CountingCollider::new(aabb_at(Vec3::zeros()));
        let b = CountingCollider::new(aabb_at(Vec3::new(0.5, 0.0, 0.0)));

        let axes = candidate_axes(&a, &b).expect("valid shapes");
        assert!(test_pair(&a, &b).expect("valid shapes").is_some());

        // Two world-aligned boxes share their three face axes
        assert_eq!(axes.len(), 3);
        assert_eq!(a.projections.get(), axes.len());
    }

    #[test]
    fn test_concentric_cubes_pick_first_axis() {
        let a = aabb_at(Vec3::zeros());
        let b = aabb_at(Vec3::zeros());

        let collision = test_pair(&a, &b).expect("valid shapes").expect("overlapping");

        assert_relative_eq!(collision.depth, 1.0, epsilon = EPSILON);
        assert_eq!(collision.normal, Vec3::x());
        assert_eq!(collision.contact_points.len(), 4);
    }

    #[test]
    fn test_normal_points_from_first_to_second() {
        let a = aabb_at(Vec3::zeros());
        let b = aabb_at(Vec3::new(0.8, 0.0, 0.0));

        let forward = test_pair(&a, &b).expect("valid shapes").expect("overlapping");
        assert_relative_eq!(forward.depth, 0.2, epsilon = EPSILON);
        assert_eq!(forward.normal, Vec3::x());

        let backward = test_pair(&b, &a).expect("valid shapes").expect("overlapping");
        assert_relative_eq!(backward.depth, 0.2, epsilon = EPSILON);
        assert_eq!(backward.normal, -Vec3::x());
    }

    #[test]
    fn test_contact_uses_tighter_face_on_equal_counts() {
        let floor = AabbCollider::with_extents(Transform::identity().shared(), Vec3::new(5.0, 0.5, 5.0));
        let cube = aabb_at(Vec3::new(3.0, 0.9, 0.0));

        let collision = test_pair(&floor, &cube).expect("valid shapes").expect("overlapping");

        assert_eq!(collision.normal, Vec3::y());
        assert_eq!(collision.contact_points.len(), 4);
        assert_relative_eq!(
            collision.contact_center().expect("points"),
            Vec3::new(3.0, 0.4, 0.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_touching_boxes_collide_with_zero_depth() {
        let a = aabb_at(Vec3::zeros());
        let b = aabb_at(Vec3::new(0.0, 1.0, 0.0));

        let collision = test_pair(&a, &b).expect("valid shapes").expect("touching");
        assert_eq!(collision.depth, 0.0);
        assert_eq!(collision.normal, Vec3::y());
    }

    #[test]
    fn test_sphere_resting_on_box() {
        let sphere = sphere_at(Vec3::new(0.0, 0.9, 0.0), 0.5);
        let floor = aabb_at(Vec3::zeros());

        let collision = test_pair(&sphere, &floor).expect("valid shapes").expect("overlapping");

        assert_relative_eq!(collision.depth, 0.1, epsilon = EPSILON);
        assert_relative_eq!(collision.normal, -Vec3::y(), epsilon = EPSILON);
        assert_eq!(collision.contact_points.len(), 1);
        assert_relative_eq!(collision.contact_points[0], Vec3::new(0.0, 0.4, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_sphere_above_box_is_separated() {
        let sphere = sphere_at(Vec3::new(0.0, 1.2, 0.0), 0.5);
        let floor = aabb_at(Vec3::zeros());

        assert!(test_pair(&sphere, &floor).expect("valid shapes").is_none());
        assert!(test_pair(&floor, &sphere).expect("valid shapes").is_none());
    }

    #[test]
    fn test_sphere_near_box_corner_uses_closest_point_axis() {
        // Inside every face slab but outside the rounded corner region
        let sphere = sphere_at(Vec3::new(0.8, 0.8, 0.0), 0.4);
        let cube = aabb_at(Vec3::zeros());

        assert!(test_pair(&sphere, &cube).expect("valid shapes").is_none());
    }

    #[test]
    fn test_sphere_pair() {
        let a = sphere_at(Vec3::zeros(), 1.0);
        let b = sphere_at(Vec3::new(1.5, 0.0, 0.0), 1.0);

        let collision = test_pair(&a, &b).expect("valid shapes").expect("overlapping");
        assert_relative_eq!(collision.depth, 0.5, epsilon = EPSILON);
        assert_relative_eq!(collision.normal, Vec3::x(), epsilon = EPSILON);
        assert_relative_eq!(collision.contact_points[0], Vec3::new(1.0, 0.0, 0.0), epsilon = EPSILON);

        let far = sphere_at(Vec3::new(0.0, 0.0, 2.5), 1.0);
        assert!(test_pair(&a, &far).expect("valid shapes").is_none());
    }

    #[test]
    fn test_concentric_spheres_fall_back_to_x() {
        let a = sphere_at(Vec3::zeros(), 1.0);
        let b = sphere_at(Vec3::zeros(), 0.5);

        assert_eq!(candidate_axes(&a, &b).expect("valid shapes"), vec![Vec3::x()]);
        let collision = test_pair(&a, &b).expect("valid shapes").expect("overlapping");
        assert_relative_eq!(collision.depth, 1.5, epsilon = EPSILON);
    }

    #[test]
    fn test_shared_edge_direction_collapses_cross_axes() {
        let rotation = Quat::from_axis_angle(&Vec3::z_axis(), std::f32::consts::FRAC_PI_4);
        let obb = ObbCollider::new(Transform::from_position_rotation(Vec3::zeros(), rotation).shared());
        let aabb = aabb_at(Vec3::zeros());

        let axes = candidate_axes(&aabb, &obb).expect("valid shapes");

        // 3 world faces + 2 rotated faces; z and every edge cross are duplicates
        assert_eq!(axes.len(), 5);
    }

    #[test]
    fn test_general_rotation_adds_all_cross_axes() {
        let rotation = Quat::from_euler_angles(0.3, 0.5, 0.7);
        let obb = ObbCollider::new(Transform::from_position_rotation(Vec3::zeros(), rotation).shared());
        let aabb = aabb_at(Vec3::zeros());

        let axes = candidate_axes(&aabb, &obb).expect("valid shapes");

        assert_eq!(axes.len(), 15);
        for axis in &axes {
            assert_relative_eq!(axis.norm(), 1.0, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_degenerate_face_axis_is_an_error() {
        let mut aabb = aabb_at(Vec3::zeros());
        aabb.base_mut().set_normals(vec![Vec3::zeros()]);
        let other = aabb_at(Vec3::zeros());

        assert_eq!(test_pair(&aabb, &other), Err(PhysicsError::DegenerateAxis));
    }

    #[test]
    fn test_rotated_box_separation() {
        let rotation = Quat::from_axis_angle(&Vec3::z_axis(), std::f32::consts::FRAC_PI_4);
        let aabb = aabb_at(Vec3::zeros());

        let near = ObbCollider::new(
            Transform::from_position_rotation(Vec3::new(1.1, 0.0, 0.0), rotation).shared(),
        );
        let collision = test_pair(&aabb, &near).expect("valid shapes").expect("corner overlap");
        assert_relative_eq!(collision.normal, Vec3::x(), epsilon = EPSILON);

        let far = ObbCollider::new(
            Transform::from_position_rotation(Vec3::new(1.3, 0.0, 0.0), rotation).shared(),
        );
        assert!(test_pair(&aabb, &far).expect("valid shapes").is_none());
    }

    #[test]
    fn test_contact_center_averages_points() {
        let collision = CollisionData {
            normal: Vec3::y(),
            depth: 0.1,
            contact_points: vec![Vec3::new(1.0, 0.0, 0.0), Vec3::new(-1.0, 2.0, 0.0)],
        };

        assert_eq!(collision.contact_center(), Some(Vec3::new(0.0, 1.0, 0.0)));
        assert_eq!(CollisionData { contact_points: vec![], ..collision }.contact_center(), None);
    }
}
