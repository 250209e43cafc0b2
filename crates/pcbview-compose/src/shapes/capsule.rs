// Imports
use crate::ext::{AabbExt, Vector2Ext};
use crate::shapes::Shapeable;
use p2d::bounding_volume::Aabb;
use p2d::query::PointQuery;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
/// A thick line segment.
///
/// The collision reach of a capsule is its radius, plus a gap that is kept free around it.
pub struct Capsule {
    /// Start coordinate.
    pub start: na::Vector2<f64>,
    /// End coordinate.
    pub end: na::Vector2<f64>,
    /// The radius around the segment.
    pub radius: f64,
    /// The clearance that is kept around the radius.
    pub gap: f64,
}

impl Shapeable for Capsule {
    /// The bounds of both end points, extended by the reach on every side.
    fn bounds(&self) -> Aabb {
        let reach = self.reach();
        Aabb::new_positive(self.start.into(), self.end.into())
            .extend_by(na::vector![reach, reach])
    }
}

impl Capsule {
    /// A new capsule.
    pub fn new(start: na::Vector2<f64>, end: na::Vector2<f64>, radius: f64, gap: f64) -> Self {
        Self {
            start,
            end,
            radius,
            gap,
        }
    }

    /// A zero-length capsule at the given position, without a gap.
    pub fn new_at_point(pos: na::Vector2<f64>, radius: f64) -> Self {
        Self::new(pos, pos, radius, 0.0)
    }

    /// Radius plus gap.
    pub fn reach(&self) -> f64 {
        self.radius + self.gap
    }

    /// Whether the coordinates, radius and gap are all finite.
    pub fn is_finite(&self) -> bool {
        self.start.iter().chain(self.end.iter()).all(|v| v.is_finite())
            && self.radius.is_finite()
            && self.gap.is_finite()
    }

    /// The capsule moved by the offset.
    pub fn translated(mut self, offset: na::Vector2<f64>) -> Self {
        self.start += offset;
        self.end += offset;
        self
    }

    /// The distance two capsules need to stay apart for not colliding.
    ///
    /// Radii are summed, but only the larger of the two gaps counts.
    pub fn combined_radius(&self, other: &Self) -> f64 {
        self.radius + other.radius + self.gap.max(other.gap)
    }

    /// Whether the capsules collide.
    pub fn collides_w(&self, other: &Self) -> bool {
        thick_segments_collide(
            self.start,
            self.end,
            other.start,
            other.end,
            self.combined_radius(other),
        )
    }
}

/// Checks if the segments `a1 - a2` and `b1 - b2` come closer to each other than the given radius.
pub fn thick_segments_collide(
    a1: na::Vector2<f64>,
    a2: na::Vector2<f64>,
    b1: na::Vector2<f64>,
    b2: na::Vector2<f64>,
    radius: f64,
) -> bool {
    if segments_cross(a1, a2, b1, b2) {
        return true;
    }

    let seg_a = p2d::shape::Segment::new(a1.into(), a2.into());
    let seg_b = p2d::shape::Segment::new(b1.into(), b2.into());

    // Without a crossing, the closest distance is found at one of the end points.
    let dist = [
        seg_b.distance_to_local_point(&a1.into(), true),
        seg_b.distance_to_local_point(&a2.into(), true),
        seg_a.distance_to_local_point(&b1.into(), true),
        seg_a.distance_to_local_point(&b2.into(), true),
    ]
    .into_iter()
    .fold(f64::INFINITY, f64::min);

    dist < radius
}

/// Whether the segments properly cross each other.
fn segments_cross(
    a1: na::Vector2<f64>,
    a2: na::Vector2<f64>,
    b1: na::Vector2<f64>,
    b2: na::Vector2<f64>,
) -> bool {
    let a = a2 - a1;
    let b = b2 - b1;
    let d1 = a.perp_dot(&(b1 - a1));
    let d2 = a.perp_dot(&(b2 - a1));
    let d3 = b.perp_dot(&(a1 - b1));
    let d4 = b.perp_dot(&(a2 - b1));

    d1 * d2 < 0.0 && d3 * d4 < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bounds_include_reach() {
        let capsule = Capsule::new(na::vector![5.0, 2.0], na::vector![1.0, 4.0], 1.0, 0.5);
        let bounds = capsule.bounds();

        assert_relative_eq!(bounds.mins, na::point![-0.5, 0.5]);
        assert_relative_eq!(bounds.maxs, na::point![6.5, 5.5]);
    }

    #[test]
    fn translated_keeps_radius_and_gap() {
        let capsule = Capsule::new(na::vector![1.0, 2.0], na::vector![3.0, 4.0], 1.5, 0.5)
            .translated(na::vector![10.0, -2.0]);

        assert_eq!(
            capsule,
            Capsule::new(na::vector![11.0, 0.0], na::vector![13.0, 2.0], 1.5, 0.5)
        );
        assert!(capsule.is_finite());
        assert!(!capsule.translated(na::vector![f64::NAN, 0.0]).is_finite());
        assert!(!Capsule::new_at_point(na::vector![0.0, 0.0], f64::INFINITY).is_finite());
    }

    #[test]
    fn crossing_segments_collide_without_radius() {
        assert!(thick_segments_collide(
            na::vector![0.0, 0.0],
            na::vector![10.0, 10.0],
            na::vector![0.0, 10.0],
            na::vector![10.0, 0.0],
            0.0
        ));
    }

    #[test]
    fn parallel_segments() {
        let a1 = na::vector![0.0, 0.0];
        let a2 = na::vector![10.0, 0.0];
        let b1 = na::vector![0.0, 2.0];
        let b2 = na::vector![10.0, 2.0];

        assert!(thick_segments_collide(a1, a2, b1, b2, 2.5));
        assert!(!thick_segments_collide(a1, a2, b1, b2, 2.0));
        assert!(!thick_segments_collide(a1, a2, b1, b2, 1.5));
    }

    #[test]
    fn point_against_segment() {
        let p = na::vector![5.0, 3.0];
        let a1 = na::vector![0.0, 0.0];
        let a2 = na::vector![10.0, 0.0];

        assert!(thick_segments_collide(p, p, a1, a2, 3.01));
        assert!(!thick_segments_collide(p, p, a1, a2, 2.99));
        // beyond the end point the distance is measured to the end point
        let q = na::vector![13.0, 4.0];
        assert!(thick_segments_collide(q, q, a1, a2, 5.01));
        assert!(!thick_segments_collide(q, q, a1, a2, 4.99));
    }

    #[test]
    fn combined_radius_uses_larger_gap() {
        let a = Capsule::new(na::vector![0.0, 0.0], na::vector![10.0, 0.0], 1.0, 0.5);
        let b = Capsule::new(na::vector![0.0, 4.0], na::vector![10.0, 4.0], 1.0, 2.5);

        assert_relative_eq!(a.combined_radius(&b), 4.5);
        assert!(a.collides_w(&b));
        assert!(!a.collides_w(&Capsule { gap: 1.0, ..b }));
    }
}
