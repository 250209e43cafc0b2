// Imports
use crate::grid::OwnerId;
use crate::registry::{PathKey, PathRegistry, RegistryError, StripKey};
use crate::RegistryConfig;
use pcbview_compose::tessellate;
use pcbview_compose::{CapStyle, Color, JoinStyle};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, warn};

/// The id of a shape in the scene, also used as the owner of its collidables in the grid.
pub type ShapeId = OwnerId;

/// A placed instance of a path, drawn with its strip as fill and the path as outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeInstance {
    pub path: PathKey,
    pub strip: StripKey,
    pub offset: na::Vector2<f64>,
    pub color: Color,
    /// The radius of the collidable capsules placed along the path.
    pub radius: f64,
    /// The gap that is kept to other collidables.
    pub gap: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// The pointer button is held down at the position.
    Pressed { pos: na::Vector2<f64> },
    /// The pointer button is up.
    Released,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    #[error("shape with id {0} does not exist")]
    ShapeNotFound(ShapeId),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// The geometry and color needed to draw a shape.
#[derive(Debug, Clone, Copy)]
pub struct DrawItem<'a> {
    pub id: ShapeId,
    pub color: Color,
    pub offset: na::Vector2<f64>,
    pub fill: &'a [na::Vector2<f64>],
    pub outline: &'a [na::Vector2<f64>],
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    id: ShapeId,
    /// The pointer position relative to the shape offset when it was grabbed.
    grab_offset: na::Vector2<f64>,
}

/// Shapes that can be dragged around with the pointer.
#[derive(Debug)]
pub struct Scene {
    registry: PathRegistry,
    shapes: BTreeMap<ShapeId, ShapeInstance>,
    drag: Option<Drag>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl Scene {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            registry: PathRegistry::new(config),
            shapes: BTreeMap::new(),
            drag: None,
        }
    }

    /// A scene with a stroke, a bezier and a circle path, placed six times.
    pub fn demo(config: RegistryConfig) -> Result<Self, SceneError> {
        let mut scene = Self::new(config);
        let registry = &mut scene.registry;

        let stroke_path = registry.create_path();
        registry.append_relative(
            stroke_path,
            &[
                na::vector![0.0, 100.0],
                na::vector![50.0, 0.0],
                na::vector![0.0, -50.0],
                na::vector![-25.0, 0.0],
            ],
        )?;
        registry.append_bezier(
            stroke_path,
            na::vector![0.0, -100.0],
            na::vector![100.0, 0.0],
            na::vector![100.0, -100.0],
            1.0,
        )?;
        registry.append_relative(
            stroke_path,
            &[
                na::vector![50.0, 0.0],
                na::vector![0.0, 100.0],
                na::vector![50.0, 0.0],
                na::vector![0.0, -50.0],
                na::vector![-25.0, 0.0],
            ],
        )?;
        registry.append_bezier(
            stroke_path,
            na::vector![0.0, -100.0],
            na::vector![100.0, 0.0],
            na::vector![100.0, -100.0],
            1.0,
        )?;
        let stroke_strip =
            registry.create_strip(stroke_path, 10.0, CapStyle::Round, JoinStyle::Round, 16)?;

        let bez_path = registry.create_path();
        registry.append_bezier(
            bez_path,
            na::vector![900.0, 0.0],
            na::vector![0.0, 700.0],
            na::vector![900.0, 700.0],
            1.0,
        )?;
        let bez_strip =
            registry.create_strip(bez_path, 15.0, CapStyle::Round, JoinStyle::Miter, 16)?;

        let circle_path = registry.create_path();
        registry.append_absolute(
            circle_path,
            &tessellate::circle_as_lines(na::vector![0.0, 0.0], 75.0, 64),
        )?;
        let circle_strip = registry.create_circle_strip(na::vector![0.0, 0.0], 100.0, 50.0, 64);

        let shapes = [
            (bez_path, bez_strip, na::vector![25.0, 25.0], Color::WHITE, 15.0),
            (circle_path, circle_strip, na::vector![200.0, 300.0], Color::RED, 25.0),
            (
                circle_path,
                circle_strip,
                na::vector![250.0, 550.0],
                Color::new(1.0, 0.0, 1.0, 1.0),
                25.0,
            ),
            (
                stroke_path,
                stroke_strip,
                na::vector![600.0, 300.0],
                Color::new(1.0, 1.0, 0.0, 1.0),
                10.0,
            ),
            (
                stroke_path,
                stroke_strip,
                na::vector![600.0, 500.0],
                Color::new(0.0, 1.0, 1.0, 1.0),
                10.0,
            ),
            (circle_path, circle_strip, na::vector![800.0, 100.0], Color::GREEN, 25.0),
        ];
        for (id, (path, strip, offset, color, radius)) in (0..).zip(shapes) {
            scene.insert_shape(
                id,
                ShapeInstance {
                    path,
                    strip,
                    offset,
                    color,
                    radius,
                    gap: 0.0,
                },
            )?;
        }

        Ok(scene)
    }

    pub fn registry(&self) -> &PathRegistry {
        &self.registry
    }

    /// Paths and strips can be added through the registry. Collidables should only be placed through the scene.
    pub fn registry_mut(&mut self) -> &mut PathRegistry {
        &mut self.registry
    }

    pub fn shapes(&self) -> &BTreeMap<ShapeId, ShapeInstance> {
        &self.shapes
    }

    pub fn shape(&self, id: ShapeId) -> Result<&ShapeInstance, SceneError> {
        self.shapes.get(&id).ok_or(SceneError::ShapeNotFound(id))
    }

    /// The shape currently being dragged.
    pub fn dragged(&self) -> Option<ShapeId> {
        self.drag.map(|drag| drag.id)
    }

    /// Inserts the shape and places its collidable. A shape with the same id is replaced.
    ///
    /// On error the scene is left unchanged.
    pub fn insert_shape(&mut self, id: ShapeId, shape: ShapeInstance) -> Result<(), SceneError> {
        // placing can't fail once the path is known to exist
        self.registry.path(shape.path)?;
        if let Some(old) = self.shapes.get(&id) {
            self.registry
                .remove_collidable(old.offset, old.path, old.radius, old.gap, id)?;
            warn!(id, "Replacing existing shape");
        }
        self.registry.place_collidable(
            shape.offset,
            shape.path,
            shape.radius,
            shape.gap,
            id,
        )?;
        self.shapes.insert(id, shape);
        debug!(id, "Inserted shape");
        Ok(())
    }

    /// Removes the shape and its collidable.
    ///
    /// On error the scene is left unchanged.
    pub fn remove_shape(&mut self, id: ShapeId) -> Result<ShapeInstance, SceneError> {
        let shape = *self.shape(id)?;
        self.registry
            .remove_collidable(shape.offset, shape.path, shape.radius, shape.gap, id)?;
        self.shapes.remove(&id);
        if self.drag.is_some_and(|drag| drag.id == id) {
            self.drag = None;
        }
        debug!(id, "Removed shape");
        Ok(shape)
    }

    /// Moves the shape and its collidable to the new offset.
    pub fn move_shape(
        &mut self,
        id: ShapeId,
        offset: na::Vector2<f64>,
    ) -> Result<(), SceneError> {
        let shape = self
            .shapes
            .get_mut(&id)
            .ok_or(SceneError::ShapeNotFound(id))?;
        self.registry
            .remove_collidable(shape.offset, shape.path, shape.radius, shape.gap, id)?;
        shape.offset = offset;
        self.registry
            .place_collidable(shape.offset, shape.path, shape.radius, shape.gap, id)?;
        Ok(())
    }

    /// Handles a pointer event. Returns true when a shape was moved and the scene needs to be redrawn.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<bool, SceneError> {
        match (event, self.drag) {
            (PointerEvent::Pressed { pos }, None) => {
                let Some(id) = self.registry.hit_test(pos) else {
                    return Ok(false);
                };
                let shape = self.shape(id)?;
                self.drag = Some(Drag {
                    id,
                    grab_offset: pos - shape.offset,
                });
                debug!(id, "Grabbed shape");
                Ok(false)
            }
            (PointerEvent::Pressed { pos }, Some(drag)) => {
                let offset = pos - drag.grab_offset;
                if self.shape(drag.id)?.offset == offset {
                    return Ok(false);
                }
                self.move_shape(drag.id, offset)?;
                Ok(true)
            }
            (PointerEvent::Released, drag) => {
                if let Some(drag) = drag {
                    debug!(id = drag.id, "Released shape");
                }
                self.drag = None;
                Ok(false)
            }
        }
    }

    /// The shapes to draw, in ascending id order.
    pub fn draw_list(&self) -> Result<Vec<DrawItem<'_>>, SceneError> {
        self.shapes
            .iter()
            .map(|(&id, shape)| {
                Ok(DrawItem {
                    id,
                    color: shape.color,
                    offset: shape.offset,
                    fill: self.registry.strip(shape.strip)?,
                    outline: self.registry.path(shape.path)?,
                })
            })
            .collect()
    }
}
