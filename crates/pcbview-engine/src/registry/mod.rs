// Modules
mod collision_comp;
mod path_comp;
mod strip_comp;

// Imports
use crate::{RegistryConfig, SpatialGrid};
use pcbview_compose::Points;
use slotmap::HopSlotMap;
use thiserror::Error;
use tracing::debug;

slotmap::new_key_type! {
    /// The key of a path in the registry.
    pub struct PathKey;
    /// The key of a strip in the registry.
    pub struct StripKey;
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    #[error("path with key {0:?} does not exist")]
    PathNotFound(PathKey),
    #[error("strip with key {0:?} does not exist")]
    StripNotFound(StripKey),
}

/// PathRegistry owns the paths and the strips derived from them, and the grid their collidables are inserted into.
///
/// Paths are polylines that only grow by appending to them, until they are deleted as a whole.
/// Strips are triangle strips, created once from a path or a circle and only used for rendering.
///
/// The methods are loosely categorized into components:
///     * 'path_comp': building paths
///     * 'strip_comp': creating strips
///     * 'collision_comp': placing paths in the grid, hit testing
///
/// Keys of deleted paths and strips never become valid again, even when their slot is reused.
#[derive(Debug)]
pub struct PathRegistry {
    config: RegistryConfig,
    paths: HopSlotMap<PathKey, Points>,
    strips: HopSlotMap<StripKey, Points>,
    grid: SpatialGrid,
}

impl Default for PathRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl PathRegistry {
    /// A new empty registry with a grid sized by the config.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            grid: config.new_grid(),
            config,
            paths: HopSlotMap::with_key(),
            strips: HopSlotMap::with_key(),
        }
    }

    /// The config the registry was created with.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// The grid holding the placed collidables.
    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    /// Creates a new empty path.
    pub fn create_path(&mut self) -> PathKey {
        let key = self.paths.insert(Vec::new());
        debug!(?key, "Created path");
        key
    }

    /// Deletes the path. Collidables placed from it stay in the grid.
    pub fn delete_path(&mut self, key: PathKey) -> Result<(), RegistryError> {
        self.paths
            .remove(key)
            .ok_or(RegistryError::PathNotFound(key))?;
        debug!(?key, "Deleted path");
        Ok(())
    }

    /// The points of the path.
    pub fn path(&self, key: PathKey) -> Result<&[na::Vector2<f64>], RegistryError> {
        self.paths
            .get(key)
            .map(|path| path.as_slice())
            .ok_or(RegistryError::PathNotFound(key))
    }

    /// The points of the strip.
    pub fn strip(&self, key: StripKey) -> Result<&[na::Vector2<f64>], RegistryError> {
        self.strips
            .get(key)
            .map(|strip| strip.as_slice())
            .ok_or(RegistryError::StripNotFound(key))
    }

    pub fn path_keys(&self) -> Vec<PathKey> {
        self.paths.keys().collect()
    }

    pub fn strip_keys(&self) -> Vec<StripKey> {
        self.strips.keys().collect()
    }

    fn path_mut(&mut self, key: PathKey) -> Result<&mut Points, RegistryError> {
        self.paths
            .get_mut(key)
            .ok_or(RegistryError::PathNotFound(key))
    }
}
