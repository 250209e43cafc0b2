#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![allow(clippy::single_match)]

//! the pcbview-compose crate provides pcbview with the geometry building blocks: bezier flattening,
//! thickening paths into triangle strips, circle tessellation and the thick segment collision test.

// Modules
/// colors
pub mod color;
/// module for extension traits for foreign types
pub mod ext;
/// module for shapes
pub mod shapes;
/// module for cap and join styles
pub mod style;
/// module for turning paths and circles into vertex sequences
pub mod tessellate;

// Re-exports
pub use color::Color;
pub use shapes::{Capsule, CubicBezier};
pub use style::{CapStyle, JoinStyle};

// Renames
extern crate nalgebra as na;
extern crate parry2d_f64 as p2d;

/// An ordered sequence of points.
pub type Points = Vec<na::Vector2<f64>>;
