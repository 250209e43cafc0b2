// Imports
use super::RESOLUTION_MIN;
use crate::Points;
use std::f64::consts::PI;

/// A ring as triangle strip, alternating between the outer and inner radius.
///
/// An inner radius of zero produces a filled disc. `resolution` is the number of segments along the circumference.
pub fn circle_as_tristrip(
    center: na::Vector2<f64>,
    outer_radius: f64,
    inner_radius: f64,
    resolution: u32,
) -> Points {
    let resolution = resolution.max(RESOLUTION_MIN);

    (0..=resolution)
        .flat_map(|i| {
            let dir = unit_at(i, resolution);
            [center + dir * outer_radius, center + dir * inner_radius]
        })
        .collect()
}

/// A closed polygon approximating the circle. The last point repeats the first.
pub fn circle_as_lines(center: na::Vector2<f64>, radius: f64, resolution: u32) -> Points {
    let resolution = resolution.max(RESOLUTION_MIN);

    (0..=resolution)
        .map(|i| center + unit_at(i, resolution) * radius)
        .collect()
}

fn unit_at(i: u32, resolution: u32) -> na::Vector2<f64> {
    // the last step lands exactly on the first point
    let angle = if i == resolution {
        0.0
    } else {
        2.0 * PI * f64::from(i) / f64::from(resolution)
    };
    na::vector![angle.cos(), angle.sin()]
}
