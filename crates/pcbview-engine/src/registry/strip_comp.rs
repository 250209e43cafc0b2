// Imports
use super::{PathKey, PathRegistry, RegistryError, StripKey};
use pcbview_compose::tessellate;
use pcbview_compose::{CapStyle, JoinStyle};
use tracing::debug;

/// Systems that create and delete strips
impl PathRegistry {
    /// Creates a strip by thickening the current points of the path.
    ///
    /// Appending to the path afterwards does not change the strip.
    pub fn create_strip(
        &mut self,
        path_key: PathKey,
        radius: f64,
        cap: CapStyle,
        join: JoinStyle,
        resolution: u32,
    ) -> Result<StripKey, RegistryError> {
        let points = tessellate::thicken_path_as_tristrip(
            self.path(path_key)?,
            radius,
            cap,
            join,
            resolution,
        );
        let n_points = points.len();
        let key = self.strips.insert(points);

        debug!(?key, ?path_key, n_points, "Created strip from path");
        Ok(key)
    }

    /// Creates a ring shaped strip.
    pub fn create_circle_strip(
        &mut self,
        center: na::Vector2<f64>,
        outer_radius: f64,
        inner_radius: f64,
        resolution: u32,
    ) -> StripKey {
        let key = self.strips.insert(tessellate::circle_as_tristrip(
            center,
            outer_radius,
            inner_radius,
            resolution,
        ));

        debug!(?key, "Created circle strip");
        key
    }

    /// Deletes the strip.
    pub fn delete_strip(&mut self, key: StripKey) -> Result<(), RegistryError> {
        self.strips
            .remove(key)
            .ok_or(RegistryError::StripNotFound(key))?;
        debug!(?key, "Deleted strip");
        Ok(())
    }
}
