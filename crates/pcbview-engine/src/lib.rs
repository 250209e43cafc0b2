#![warn(missing_debug_implementations)]
#![allow(clippy::single_match)]

//! The pcbview-engine crate is the core of pcbview. It holds the spatial grid used for hit testing,
//! the registry of paths and strips feeding it, and the scene of draggable shapes.
//!
//! The main entry point is the [Scene] struct.

// Modules
pub mod config;
pub mod grid;
pub mod registry;
pub mod scene;

// Re-exports
pub use config::RegistryConfig;
pub use grid::{OwnerId, SpatialGrid};
pub use registry::{PathKey, PathRegistry, RegistryError, StripKey};
pub use scene::{DrawItem, PointerEvent, Scene, SceneError, ShapeId, ShapeInstance};

// Renames
extern crate nalgebra as na;
