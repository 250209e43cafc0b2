// Imports
use crate::ext::Vector2Ext;
use crate::shapes::Shapeable;
use crate::Points;
use kurbo::Shape;
use p2d::bounding_volume::Aabb;

#[derive(Debug, Default, Clone, Copy)]
/// A cubic bezier curve.
pub struct CubicBezier {
    /// Start coordinate.
    pub start: na::Vector2<f64>,
    /// First control point coordinate.
    pub cp1: na::Vector2<f64>,
    /// Second control point coordinate.
    pub cp2: na::Vector2<f64>,
    /// End coordinate.
    pub end: na::Vector2<f64>,
}

impl Shapeable for CubicBezier {
    fn bounds(&self) -> Aabb {
        let rect = self.to_kurbo().bounding_box();
        Aabb::new(na::point![rect.x0, rect.y0], na::point![rect.x1, rect.y1])
    }
}

impl CubicBezier {
    /// The smallest flattening tolerance. Smaller values are clamped to it.
    pub const FLATTEN_TOLERANCE_MIN: f64 = 1e-3;

    /// A new cubic bezier curve.
    pub fn new(
        start: na::Vector2<f64>,
        cp1: na::Vector2<f64>,
        cp2: na::Vector2<f64>,
        end: na::Vector2<f64>,
    ) -> Self {
        Self {
            start,
            cp1,
            cp2,
            end,
        }
    }

    /// Converts to [kurbo::CubicBez].
    pub fn to_kurbo(&self) -> kurbo::CubicBez {
        kurbo::CubicBez::new(
            self.start.to_kurbo_point(),
            self.cp1.to_kurbo_point(),
            self.cp2.to_kurbo_point(),
            self.end.to_kurbo_point(),
        )
    }

    /// Approximate the curve with a polyline that deviates at most by `tolerance` from it.
    ///
    /// The first point is the curve start, the last point the curve end.
    pub fn flattened(&self, tolerance: f64) -> Points {
        let tolerance = if tolerance.is_finite() {
            tolerance.max(Self::FLATTEN_TOLERANCE_MIN)
        } else {
            Self::FLATTEN_TOLERANCE_MIN
        };
        let elements = [
            kurbo::PathEl::MoveTo(self.start.to_kurbo_point()),
            kurbo::PathEl::CurveTo(
                self.cp1.to_kurbo_point(),
                self.cp2.to_kurbo_point(),
                self.end.to_kurbo_point(),
            ),
        ];

        let mut points = Vec::new();
        kurbo::flatten(elements, tolerance, |el| match el {
            kurbo::PathEl::MoveTo(p) | kurbo::PathEl::LineTo(p) => {
                points.push(na::Vector2::from_kurbo_point(p))
            }
            _ => {}
        });

        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn curve() -> CubicBezier {
        CubicBezier::new(
            na::vector![0.0, 0.0],
            na::vector![0.0, -100.0],
            na::vector![100.0, 0.0],
            na::vector![100.0, -100.0],
        )
    }

    #[test]
    fn flattened_keeps_end_points() {
        let points = curve().flattened(1.0);

        assert!(points.len() > 2);
        assert_relative_eq!(points[0], na::vector![0.0, 0.0]);
        assert_relative_eq!(points[points.len() - 1], na::vector![100.0, -100.0]);
    }

    #[test]
    fn flattened_finer_tolerance_gives_more_points() {
        let coarse = curve().flattened(5.0);
        let fine = curve().flattened(0.1);

        assert!(fine.len() > coarse.len());
        // clamped, so this does not explode
        assert!(curve().flattened(0.0).len() >= fine.len());
    }

    #[test]
    fn flattened_points_stay_within_bounds() {
        let bounds = curve().bounds();

        for p in curve().flattened(1.0) {
            assert!(p[0] >= bounds.mins[0] - 1e-9 && p[0] <= bounds.maxs[0] + 1e-9);
            assert!(p[1] >= bounds.mins[1] - 1e-9 && p[1] <= bounds.maxs[1] + 1e-9);
        }
    }
}
