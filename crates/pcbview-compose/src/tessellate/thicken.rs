// Imports
use super::{append_strip, convex_polygon_as_tristrip, RESOLUTION_MIN};
use crate::ext::Vector2Ext;
use crate::style::{CapStyle, JoinStyle};
use crate::Points;
use std::f64::consts::PI;

/// Miter joins longer than this multiple of the radius fall back to bevel joins.
pub const MITER_LIMIT: f64 = 4.0;

/// Thickens the path by the radius into a triangle strip.
///
/// Every segment, join and cap is a separate piece, the pieces are stitched together with degenerate triangles.
/// `resolution` is the number of segments a full circle would be approximated with,
/// round caps and joins use the matching share of it.
pub fn thicken_path_as_tristrip(
    path: &[na::Vector2<f64>],
    radius: f64,
    cap: CapStyle,
    join: JoinStyle,
    resolution: u32,
) -> Points {
    let resolution = resolution.max(RESOLUTION_MIN);
    let mut strip = Vec::new();

    if radius.is_nan() || radius <= 0.0 {
        tracing::debug!("Thickening path with non-positive radius {radius}, strip is empty");
        return strip;
    }

    let mut points: Vec<na::Vector2<f64>> = Vec::with_capacity(path.len());
    for p in path {
        if points.last().map_or(true, |last| !last.approx_eq(p)) {
            points.push(*p);
        }
    }

    match points.as_slice() {
        [] => {}
        [p] => {
            if let Some(dot) = dot_polygon(*p, radius, cap, resolution) {
                append_strip(&mut strip, &convex_polygon_as_tristrip(&dot));
            }
        }
        points => {
            let first_dir = (points[1] - points[0]).normalize();
            if let Some(start_cap) = cap_polygon(points[0], -first_dir, radius, cap, resolution) {
                append_strip(&mut strip, &convex_polygon_as_tristrip(&start_cap));
            }

            for (i, seg) in points.windows(2).enumerate() {
                let (start, end) = (seg[0], seg[1]);
                let offset = (end - start).orth_unit() * radius;
                append_strip(
                    &mut strip,
                    &[start + offset, start - offset, end + offset, end - offset],
                );

                if let Some(next) = points.get(i + 2) {
                    if let Some(corner) = join_polygon(start, end, *next, radius, join, resolution)
                    {
                        append_strip(&mut strip, &convex_polygon_as_tristrip(&corner));
                    }
                }
            }

            let last = points.len() - 1;
            let last_dir = (points[last] - points[last - 1]).normalize();
            if let Some(end_cap) = cap_polygon(points[last], last_dir, radius, cap, resolution) {
                append_strip(&mut strip, &convex_polygon_as_tristrip(&end_cap));
            }
        }
    }

    strip
}

/// The convex outline of the cap at `pos`, bulging in the direction of `outward`.
fn cap_polygon(
    pos: na::Vector2<f64>,
    outward: na::Vector2<f64>,
    radius: f64,
    cap: CapStyle,
    resolution: u32,
) -> Option<Points> {
    let side = outward.orth_unit() * radius;
    let out = outward * radius;

    match cap {
        CapStyle::Butt => None,
        CapStyle::Square => Some(vec![
            pos + side,
            pos + side + out,
            pos - side + out,
            pos - side,
        ]),
        CapStyle::Triangle => Some(vec![pos + side, pos + out, pos - side]),
        CapStyle::Round => {
            let steps = resolution.div_ceil(2).max(1);
            Some(arc(pos, side[1].atan2(side[0]), -PI, radius, steps))
        }
    }
}

/// The convex outline drawn for a path consisting of a single point.
fn dot_polygon(
    pos: na::Vector2<f64>,
    radius: f64,
    cap: CapStyle,
    resolution: u32,
) -> Option<Points> {
    match cap {
        CapStyle::Butt => None,
        CapStyle::Square => Some(vec![
            pos + na::vector![-radius, -radius],
            pos + na::vector![radius, -radius],
            pos + na::vector![radius, radius],
            pos + na::vector![-radius, radius],
        ]),
        CapStyle::Triangle => Some(vec![
            pos + na::vector![radius, 0.0],
            pos + na::vector![0.0, radius],
            pos + na::vector![-radius, 0.0],
            pos + na::vector![0.0, -radius],
        ]),
        CapStyle::Round => {
            let mut circle = arc(pos, 0.0, 2.0 * PI, radius, resolution);
            // arc end coincides with its start
            circle.pop();
            Some(circle)
        }
    }
}

/// The convex outline filling the outer corner at `vertex`.
///
/// Returns `None` when the segments continue in a straight line.
fn join_polygon(
    prev: na::Vector2<f64>,
    vertex: na::Vector2<f64>,
    next: na::Vector2<f64>,
    radius: f64,
    join: JoinStyle,
    resolution: u32,
) -> Option<Points> {
    let d1 = (vertex - prev).normalize();
    let d2 = (next - vertex).normalize();
    let cross = d1.perp_dot(&d2);
    if cross.abs() <= f64::EPSILON && d1.dot(&d2) > 0.0 {
        return None;
    }

    // The outer corner lies on the right side for counter clockwise turns.
    let outer_sign = if cross > 0.0 { -1.0 } else { 1.0 };
    let n1 = d1.orth_unit() * outer_sign;
    let n2 = d2.orth_unit() * outer_sign;
    let o1 = vertex + n1 * radius;
    let o2 = vertex + n2 * radius;

    match join {
        JoinStyle::Bevel => Some(vec![vertex, o1, o2]),
        JoinStyle::Miter => {
            let bisector = n1 + n2;
            if bisector.magnitude() <= f64::EPSILON {
                return Some(vec![vertex, o1, o2]);
            }
            let bisector = bisector.normalize();
            let miter_len = 1.0 / n1.dot(&bisector);
            if miter_len > MITER_LIMIT {
                return Some(vec![vertex, o1, o2]);
            }
            Some(vec![vertex, o1, vertex + bisector * radius * miter_len, o2])
        }
        JoinStyle::Round => {
            let start_angle = n1[1].atan2(n1[0]);
            let mut sweep = n2[1].atan2(n2[0]) - start_angle;
            if sweep > PI {
                sweep -= 2.0 * PI;
            } else if sweep < -PI {
                sweep += 2.0 * PI;
            }
            let steps = ((f64::from(resolution) * sweep.abs() / (2.0 * PI)).ceil() as u32).max(1);

            let mut polygon = vec![vertex];
            polygon.extend(arc(vertex, start_angle, sweep, radius, steps));
            Some(polygon)
        }
    }
}

/// Points on the arc around `center`, including both the start and the end.
fn arc(center: na::Vector2<f64>, start_angle: f64, sweep: f64, radius: f64, steps: u32) -> Points {
    (0..=steps)
        .map(|i| {
            let angle = start_angle + sweep * f64::from(i) / f64::from(steps);
            center + na::vector![angle.cos(), angle.sin()] * radius
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::thick_segments_collide;
    use approx::assert_relative_eq;

    fn contains_approx(strip: &[na::Vector2<f64>], point: na::Vector2<f64>) -> bool {
        strip.iter().any(|p| (p - point).magnitude() < 1e-9)
    }

    /// Whether the point is within the distance of the polyline.
    fn near_path(path: &[na::Vector2<f64>], point: na::Vector2<f64>, dist: f64) -> bool {
        path.windows(2)
            .any(|seg| thick_segments_collide(point, point, seg[0], seg[1], dist))
    }

    #[test]
    fn straight_butt_line_is_a_quad() {
        let path = [na::vector![0.0, 0.0], na::vector![10.0, 0.0]];
        let strip = thicken_path_as_tristrip(&path, 1.0, CapStyle::Butt, JoinStyle::Miter, 16);

        assert_eq!(strip.len(), 4);
        assert_relative_eq!(strip[0], na::vector![0.0, 1.0], epsilon = 1e-12);
        assert_relative_eq!(strip[1], na::vector![0.0, -1.0], epsilon = 1e-12);
        assert_relative_eq!(strip[2], na::vector![10.0, 1.0], epsilon = 1e-12);
        assert_relative_eq!(strip[3], na::vector![10.0, -1.0], epsilon = 1e-12);
    }

    #[test]
    fn empty_and_degenerate_paths() {
        assert!(thicken_path_as_tristrip(&[], 1.0, CapStyle::Round, JoinStyle::Round, 16).is_empty());
        let dot = [na::vector![3.0, 3.0], na::vector![3.0, 3.0]];
        assert!(thicken_path_as_tristrip(&dot, 1.0, CapStyle::Butt, JoinStyle::Round, 16).is_empty());

        let disc = thicken_path_as_tristrip(&dot, 2.0, CapStyle::Round, JoinStyle::Round, 16);
        assert_eq!(disc.len(), 16);
        for p in disc {
            assert_relative_eq!((p - na::vector![3.0, 3.0]).magnitude(), 2.0, epsilon = 1e-9);
        }

        let path = [na::vector![0.0, 0.0], na::vector![10.0, 0.0]];
        assert!(thicken_path_as_tristrip(&path, 0.0, CapStyle::Round, JoinStyle::Round, 16).is_empty());
    }

    #[test]
    fn square_cap_extends_past_end_points() {
        let path = [na::vector![0.0, 0.0], na::vector![10.0, 0.0]];
        let strip = thicken_path_as_tristrip(&path, 1.0, CapStyle::Square, JoinStyle::Bevel, 16);

        assert!(contains_approx(&strip, na::vector![-1.0, 1.0]));
        assert!(contains_approx(&strip, na::vector![-1.0, -1.0]));
        assert!(contains_approx(&strip, na::vector![11.0, 1.0]));
        assert!(contains_approx(&strip, na::vector![11.0, -1.0]));
    }

    #[test]
    fn miter_join_on_right_angle() {
        let path = [
            na::vector![0.0, 0.0],
            na::vector![10.0, 0.0],
            na::vector![10.0, 10.0],
        ];
        let miter = thicken_path_as_tristrip(&path, 1.0, CapStyle::Butt, JoinStyle::Miter, 16);
        let bevel = thicken_path_as_tristrip(&path, 1.0, CapStyle::Butt, JoinStyle::Bevel, 16);

        assert!(contains_approx(&miter, na::vector![11.0, -1.0]));
        assert!(!contains_approx(&bevel, na::vector![11.0, -1.0]));
        assert!(contains_approx(&bevel, na::vector![10.0, -1.0]));
        assert!(contains_approx(&bevel, na::vector![11.0, 0.0]));
    }

    #[test]
    fn sharp_miter_falls_back_to_bevel() {
        let path = [
            na::vector![0.0, 0.0],
            na::vector![10.0, 0.0],
            na::vector![0.0, 0.5],
        ];
        let strip = thicken_path_as_tristrip(&path, 1.0, CapStyle::Butt, JoinStyle::Miter, 16);

        for p in strip {
            assert!(near_path(&path, p, 1.0 + 1e-9));
        }
    }

    #[test]
    fn round_style_stays_within_radius() {
        let path = [
            na::vector![0.0, 100.0],
            na::vector![50.0, 100.0],
            na::vector![50.0, 50.0],
            na::vector![25.0, 50.0],
            na::vector![40.0, 80.0],
        ];
        let strip = thicken_path_as_tristrip(&path, 10.0, CapStyle::Round, JoinStyle::Round, 16);

        assert!(strip.len() > 4 * (path.len() - 1));
        for p in strip {
            assert!(near_path(&path, p, 10.0 + 1e-9));
        }
    }
}
