// Imports
use crate::SpatialGrid;
use serde::{Deserialize, Serialize};

/// Configuration of the path registry and its collision grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "registry_config")]
pub struct RegistryConfig {
    /// Canvas width.
    #[serde(rename = "width")]
    pub width: u32,
    /// Canvas height.
    #[serde(rename = "height")]
    pub height: u32,
    /// The edge length of a grid cell, in canvas units.
    #[serde(rename = "cell_size")]
    pub cell_size: u32,
    /// The radius of the capsule that is used for hit testing positions.
    #[serde(rename = "hit_tolerance")]
    pub hit_tolerance: f64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            cell_size: 10,
            hit_tolerance: 0.01,
        }
    }
}

impl RegistryConfig {
    /// The number of columns and rows of cells covering the canvas.
    ///
    /// Both are at least one.
    pub fn cells(&self) -> (u32, u32) {
        let cell_size = self.cell_size.max(1);
        (
            (self.width / cell_size).max(1),
            (self.height / cell_size).max(1),
        )
    }

    /// A new empty grid covering the canvas.
    ///
    /// The grid has an extra column and row, so that positions on the far canvas edges get cells of their own.
    pub fn new_grid(&self) -> SpatialGrid {
        let (cols, rows) = self.cells();

        SpatialGrid::new(
            cols as usize + 1,
            rows as usize + 1,
            f64::from(cols) / f64::from(self.width.max(1)),
            f64::from(rows) / f64::from(self.height.max(1)),
        )
    }
}
