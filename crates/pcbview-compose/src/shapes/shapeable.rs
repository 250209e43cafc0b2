// Imports
use p2d::bounding_volume::Aabb;

/// Types that behave as a shape.
pub trait Shapeable {
    /// The bounds of the shape.
    fn bounds(&self) -> Aabb;
}
