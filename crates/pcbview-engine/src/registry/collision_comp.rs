// Imports
use super::{PathKey, PathRegistry, RegistryError};
use crate::grid::OwnerId;
use itertools::Itertools;
use pcbview_compose::Capsule;
use tracing::trace;

/// Systems that place paths into the collision grid
impl PathRegistry {
    /// Inserts a capsule for every segment of the path, moved by the offset, into the grid.
    pub fn place_collidable(
        &mut self,
        offset: na::Vector2<f64>,
        path_key: PathKey,
        radius: f64,
        gap: f64,
        owner: OwnerId,
    ) -> Result<(), RegistryError> {
        let path = self
            .paths
            .get(path_key)
            .ok_or(RegistryError::PathNotFound(path_key))?;

        for capsule in segment_capsules(path, offset, radius, gap) {
            self.grid.insert(capsule, owner);
        }
        trace!(?path_key, owner, "Placed collidable");
        Ok(())
    }

    /// Removes the capsules inserted by [PathRegistry::place_collidable].
    ///
    /// The offset, radius and gap must be exactly the ones used when placing,
    /// segments that don't match are silently left in the grid.
    pub fn remove_collidable(
        &mut self,
        offset: na::Vector2<f64>,
        path_key: PathKey,
        radius: f64,
        gap: f64,
        owner: OwnerId,
    ) -> Result<(), RegistryError> {
        let path = self
            .paths
            .get(path_key)
            .ok_or(RegistryError::PathNotFound(path_key))?;

        for capsule in segment_capsules(path, offset, radius, gap) {
            self.grid.remove(&capsule, owner);
        }
        trace!(?path_key, owner, "Removed collidable");
        Ok(())
    }

    /// The owner of a collidable at the position, within the configured hit tolerance.
    pub fn hit_test(&mut self, pos: na::Vector2<f64>) -> Option<OwnerId> {
        self.grid
            .query(&Capsule::new_at_point(pos, self.config.hit_tolerance))
    }
}

fn segment_capsules(
    path: &[na::Vector2<f64>],
    offset: na::Vector2<f64>,
    radius: f64,
    gap: f64,
) -> impl Iterator<Item = Capsule> + '_ {
    path.iter()
        .tuple_windows()
        .map(move |(start, end)| Capsule::new(*start, *end, radius, gap).translated(offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RegistryConfig;

    fn registry_w_line() -> (PathRegistry, PathKey) {
        let mut registry = PathRegistry::default();
        let path = registry.create_path();
        registry
            .append_relative(path, &[na::vector![50.0, 0.0], na::vector![0.0, 50.0]])
            .unwrap();
        (registry, path)
    }

    #[test]
    fn place_hit_remove() {
        let (mut registry, path) = registry_w_line();
        let offset = na::vector![100.0, 100.0];
        registry
            .place_collidable(offset, path, 5.0, 0.0, 7)
            .unwrap();

        assert_eq!(registry.grid().len(), 2);
        assert_eq!(registry.hit_test(na::vector![125.0, 103.0]), Some(7));
        assert_eq!(registry.hit_test(na::vector![153.0, 130.0]), Some(7));
        assert_eq!(registry.hit_test(na::vector![125.0, 110.0]), None);
        assert_eq!(registry.hit_test(na::vector![25.0, 3.0]), None);

        registry
            .remove_collidable(offset, path, 5.0, 0.0, 7)
            .unwrap();
        assert!(registry.grid().is_empty());
        assert_eq!(registry.hit_test(na::vector![125.0, 103.0]), None);
    }

    #[test]
    fn remove_w_other_params_leaves_collidable() {
        let (mut registry, path) = registry_w_line();
        let offset = na::vector![100.0, 100.0];
        registry
            .place_collidable(offset, path, 5.0, 0.0, 7)
            .unwrap();

        registry
            .remove_collidable(na::vector![100.0, 101.0], path, 5.0, 0.0, 7)
            .unwrap();
        registry
            .remove_collidable(offset, path, 4.0, 0.0, 7)
            .unwrap();
        registry
            .remove_collidable(offset, path, 5.0, 0.0, 8)
            .unwrap();

        assert_eq!(registry.grid().len(), 2);
        assert_eq!(registry.hit_test(na::vector![125.0, 103.0]), Some(7));
    }

    #[test]
    fn moving_a_collidable() {
        let (mut registry, path) = registry_w_line();
        let old = na::vector![100.0, 100.0];
        let new = na::vector![400.0, 300.0];
        registry.place_collidable(old, path, 5.0, 1.0, 3).unwrap();

        registry.remove_collidable(old, path, 5.0, 1.0, 3).unwrap();
        registry.place_collidable(new, path, 5.0, 1.0, 3).unwrap();

        assert_eq!(registry.hit_test(na::vector![125.0, 100.0]), None);
        assert_eq!(registry.hit_test(na::vector![425.0, 300.0]), Some(3));
        assert_eq!(registry.grid().len(), 2);
    }

    #[test]
    fn single_point_path_has_no_collidable() {
        let mut registry = PathRegistry::default();
        let path = registry.create_path();
        registry
            .append_absolute(path, &[na::vector![10.0, 10.0]])
            .unwrap();
        registry
            .place_collidable(na::vector![0.0, 0.0], path, 5.0, 0.0, 1)
            .unwrap();

        assert!(registry.grid().is_empty());
    }

    #[test]
    fn hit_test_uses_configured_tolerance() {
        let mut registry = PathRegistry::new(RegistryConfig {
            hit_tolerance: 4.0,
            ..Default::default()
        });
        let path = registry.create_path();
        registry
            .append_relative(path, &[na::vector![50.0, 0.0]])
            .unwrap();
        registry
            .place_collidable(na::vector![100.0, 100.0], path, 1.0, 0.0, 9)
            .unwrap();

        // within radius plus tolerance
        assert_eq!(registry.hit_test(na::vector![125.0, 104.5]), Some(9));
        assert_eq!(registry.hit_test(na::vector![154.5, 100.0]), Some(9));
        assert_eq!(registry.hit_test(na::vector![125.0, 105.5]), None);

        let mut default_registry = PathRegistry::default();
        let path = default_registry.create_path();
        default_registry
            .append_relative(path, &[na::vector![50.0, 0.0]])
            .unwrap();
        default_registry
            .place_collidable(na::vector![100.0, 100.0], path, 1.0, 0.0, 9)
            .unwrap();
        assert_eq!(default_registry.hit_test(na::vector![125.0, 104.5]), None);
    }

    #[test]
    fn collidable_of_missing_path() {
        let (mut registry, path) = registry_w_line();
        registry.delete_path(path).unwrap();

        assert_eq!(
            registry.place_collidable(na::vector![0.0, 0.0], path, 1.0, 0.0, 1),
            Err(RegistryError::PathNotFound(path))
        );
        assert_eq!(
            registry.remove_collidable(na::vector![0.0, 0.0], path, 1.0, 0.0, 1),
            Err(RegistryError::PathNotFound(path))
        );
    }
}
