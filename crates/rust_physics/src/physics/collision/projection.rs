//! Projection of shape extremal points onto an axis

use crate::foundation::math::{utils::DEGENERATE_EPSILON, Vec3};
use crate::physics::error::PhysicsError;

/// Interval covered by a shape along an axis
///
/// Every point that reaches an extremum is kept, so a face lying flat
/// against the axis contributes all of its corners.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionData {
    /// Smallest scalar projection
    pub min: f32,
    /// Largest scalar projection
    pub max: f32,
    /// World-space points projecting to `min`
    pub min_points: Vec<Vec3>,
    /// World-space points projecting to `max`
    pub max_points: Vec<Vec3>,
}

impl ProjectionData {
    /// Project `points` onto `axis` using `dot(p, axis) / dot(axis, axis)`
    ///
    /// Ties use exact float equality.
    #[allow(clippy::float_cmp)]
    pub fn from_points(points: &[Vec3], axis: &Vec3) -> Result<Self, PhysicsError> {
        let sqr_length = axis.dot(axis);
        if sqr_length <= DEGENERATE_EPSILON {
            return Err(PhysicsError::DegenerateAxis);
        }

        let mut data = Self {
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
            min_points: Vec::new(),
            max_points: Vec::new(),
        };

        for point in points {
            let projection = point.dot(axis) / sqr_length;

            if projection < data.min {
                data.min = projection;
                data.min_points.clear();
                data.min_points.push(*point);
            } else if projection == data.min {
                data.min_points.push(*point);
            }

            if projection > data.max {
                data.max = projection;
                data.max_points.clear();
                data.max_points.push(*point);
            } else if projection == data.max {
                data.max_points.push(*point);
            }
        }

        Ok(data)
    }

    /// Length of the projected interval
    pub fn length(&self) -> f32 {
        self.max - self.min
    }

    /// Whether the two intervals touch or overlap
    pub fn overlaps(&self, other: &ProjectionData) -> bool {
        self.max >= other.min && other.max >= self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_are_kept() {
        let points = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 5.0, 0.0),
            Vec3::new(-2.0, 0.0, 0.0),
            Vec3::new(-2.0, 0.0, 7.0),
            Vec3::new(0.0, 0.0, 0.0),
        ];
        let data = ProjectionData::from_points(&points, &Vec3::x()).expect("valid axis");

        assert_eq!(data.min, -2.0);
        assert_eq!(data.max, 1.0);
        assert_eq!(data.min_points, vec![points[2], points[3]]);
        assert_eq!(data.max_points, vec![points[0], points[1]]);
    }

    #[test]
    fn test_projection_is_normalized_by_axis_length() {
        let points = [Vec3::new(4.0, 0.0, 0.0)];
        let data = ProjectionData::from_points(&points, &Vec3::new(2.0, 0.0, 0.0)).expect("valid axis");

        assert_eq!(data.min, 2.0);
        assert_eq!(data.max, 2.0);
        assert_eq!(data.min_points.len(), 1);
        assert_eq!(data.max_points.len(), 1);
    }

    #[test]
    fn test_zero_axis_is_rejected() {
        let result = ProjectionData::from_points(&[Vec3::x()], &Vec3::zeros());
        assert_eq!(result, Err(PhysicsError::DegenerateAxis));
    }

    #[test]
    fn test_touching_intervals_overlap() {
        let a = ProjectionData { min: 0.0, max: 1.0, min_points: vec![], max_points: vec![] };
        let b = ProjectionData { min: 1.0, max: 2.0, min_points: vec![], max_points: vec![] };
        let c = ProjectionData { min: 1.5, max: 2.0, min_points: vec![], max_points: vec![] };

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert_eq!(c.length(), 0.5);
    }
}
