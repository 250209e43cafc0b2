// Modules
mod capsule;
/// cubic bezier curves
pub mod cubbez;
mod shapeable;

// Re-exports
pub use capsule::{thick_segments_collide, Capsule};
pub use cubbez::CubicBezier;
pub use shapeable::Shapeable;
