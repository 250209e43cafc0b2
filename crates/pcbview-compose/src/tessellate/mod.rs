// Modules
mod circle;
mod thicken;

// Re-exports
pub use circle::{circle_as_lines, circle_as_tristrip};
pub use thicken::thicken_path_as_tristrip;

// Imports
use crate::Points;

/// The minimum number of segments used to approximate a full circle.
pub(crate) const RESOLUTION_MIN: u32 = 3;

/// Orders the vertices of a convex polygon so that they form a triangle strip covering it.
///
/// Vertices are taken alternately from the front and the back, `v0, v1, vn, v2, vn-1, ..`.
pub(crate) fn convex_polygon_as_tristrip(polygon: &[na::Vector2<f64>]) -> Points {
    let mut strip = Vec::with_capacity(polygon.len());
    if polygon.is_empty() {
        return strip;
    }
    strip.push(polygon[0]);

    let (mut front, mut back) = (1, polygon.len() - 1);
    let mut take_front = true;
    while front <= back {
        if take_front {
            strip.push(polygon[front]);
            front += 1;
        } else {
            strip.push(polygon[back]);
            back -= 1;
        }
        take_front = !take_front;
    }

    strip
}

/// Appends a piece to a triangle strip, stitching them together with degenerate triangles.
pub(crate) fn append_strip(strip: &mut Points, piece: &[na::Vector2<f64>]) {
    if piece.is_empty() {
        return;
    }
    if let Some(last) = strip.last().copied() {
        strip.push(last);
        strip.push(piece[0]);
    }
    strip.extend_from_slice(piece);
}
