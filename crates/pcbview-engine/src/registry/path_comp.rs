// Imports
use super::{PathKey, PathRegistry, RegistryError};
use pcbview_compose::CubicBezier;

/// Systems that build paths
impl PathRegistry {
    /// Appends the displacements one after another, starting from the last point of the path.
    ///
    /// An empty path starts at the origin, which is inserted as its first point.
    pub fn append_relative(
        &mut self,
        key: PathKey,
        displacements: &[na::Vector2<f64>],
    ) -> Result<(), RegistryError> {
        let path = self.path_mut(key)?;
        let start = match path.last() {
            Some(last) => *last,
            None => {
                path.push(na::Vector2::zeros());
                na::Vector2::zeros()
            }
        };

        path.extend(displacements.iter().scan(start, |pos, displacement| {
            *pos += displacement;
            Some(*pos)
        }));
        Ok(())
    }

    /// Appends the points, which are relative to the last point of the path.
    ///
    /// The first point coincides with the last point of the path, so it is skipped unless the path is empty.
    pub fn append_absolute(
        &mut self,
        key: PathKey,
        points: &[na::Vector2<f64>],
    ) -> Result<(), RegistryError> {
        let path = self.path_mut(key)?;
        let (origin, skip) = match path.last() {
            Some(last) => (*last, 1),
            None => (na::Vector2::zeros(), 0),
        };

        path.extend(points.iter().skip(skip).map(|p| p + origin));
        Ok(())
    }

    /// Appends the cubic bezier curve starting at the last point of the path, flattened to the given tolerance.
    ///
    /// The control points and the end are relative to the last point of the path.
    pub fn append_bezier(
        &mut self,
        key: PathKey,
        cp1: na::Vector2<f64>,
        cp2: na::Vector2<f64>,
        end: na::Vector2<f64>,
        flatness: f64,
    ) -> Result<(), RegistryError> {
        let points = CubicBezier::new(na::Vector2::zeros(), cp1, cp2, end).flattened(flatness);
        self.append_absolute(key, &points)
    }
}
