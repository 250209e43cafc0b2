// Imports
use p2d::bounding_volume::Aabb;

/// Extension trait for [`na::Vector2<f64>`].
pub trait Vector2Ext
where
    Self: Sized,
{
    /// The orthogonal vector, normalized to length 1
    fn orth_unit(&self) -> Self;
    /// The z component of the cross product, positive when `other` is counter clockwise of self
    fn perp_dot(&self, other: &Self) -> f64;
    /// Converts to kurbo::Point
    fn to_kurbo_point(&self) -> kurbo::Point;
    /// Converts from kurbo::Point
    fn from_kurbo_point(kurbo_point: kurbo::Point) -> Self;
    /// Approximate equality
    fn approx_eq(&self, other: &Self) -> bool;
}

impl Vector2Ext for na::Vector2<f64> {
    fn orth_unit(&self) -> Self {
        let rot_90deg = na::Rotation2::new(std::f64::consts::PI * 0.5);

        let normalized = if self.magnitude() > 0.0 {
            self.normalize()
        } else {
            return na::Vector2::from_element(0.0);
        };

        rot_90deg * normalized
    }

    fn perp_dot(&self, other: &Self) -> f64 {
        self[0] * other[1] - self[1] * other[0]
    }

    fn to_kurbo_point(&self) -> kurbo::Point {
        kurbo::Point {
            x: self[0],
            y: self[1],
        }
    }

    fn from_kurbo_point(kurbo_point: kurbo::Point) -> Self {
        na::vector![kurbo_point.x, kurbo_point.y]
    }

    fn approx_eq(&self, other: &Self) -> bool {
        approx::relative_eq!(self[0], other[0]) && approx::relative_eq!(self[1], other[1])
    }
}

/// Extension trait for [p2d::bounding_volume::Aabb].
pub trait AabbExt
where
    Self: Sized,
{
    /// New Aabb, ensuring its mins, maxs are valid (maxs >= mins)
    fn new_positive(start: na::Point2<f64>, end: na::Point2<f64>) -> Self;
    /// extends on every side by the given size
    fn extend_by(&self, extend_by: na::Vector2<f64>) -> Self;
    /// Scales the Aabb by the scale vector
    fn scale_non_uniform(&self, scale: na::Vector2<f64>) -> Self;
}

impl AabbExt for Aabb {
    fn new_positive(start: na::Point2<f64>, end: na::Point2<f64>) -> Self {
        Aabb::new(
            na::point![start[0].min(end[0]), start[1].min(end[1])],
            na::point![start[0].max(end[0]), start[1].max(end[1])],
        )
    }

    fn extend_by(&self, extend_by: na::Vector2<f64>) -> Aabb {
        Aabb::new(
            (self.mins.coords - extend_by).into(),
            (self.maxs.coords + extend_by).into(),
        )
    }

    fn scale_non_uniform(&self, scale: na::Vector2<f64>) -> Aabb {
        Aabb::new(
            self.mins.coords.component_mul(&scale).into(),
            self.maxs.coords.component_mul(&scale).into(),
        )
    }
}
