//! Scene root: the top of the visible shape tree.

use crate::shapes::{Group, Shape, ShapeId, ShapeTrait};
use crate::surface::Surface;
use kurbo::{Point, Rect, Vec2};
use std::collections::HashSet;
use thiserror::Error;

/// Scene mutation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("Shape already in scene: {0}")]
    DuplicateId(ShapeId),
    #[error("Shape not found: {0}")]
    NotFound(ShapeId),
    #[error("Shape is not a group: {0}")]
    NotAGroup(ShapeId),
    #[error("Cannot move shape {0} into its own subtree")]
    CyclicTransfer(ShapeId),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// The root group a host builds, paints and clicks into.
///
/// Identifiers are checked when shapes enter through [`Scene::add`] or
/// [`Scene::extend`], so no identifier occurs twice in the tree. Shapes
/// edited in place through [`Scene::find_shape_mut`] bypass that check.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    root: Group,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// The root group.
    pub fn root(&self) -> &Group {
        &self.root
    }

    /// Identifier of the root group, usable as a [`Scene::transfer`] target.
    pub fn root_id(&self) -> ShapeId {
        self.root.id()
    }

    /// Append a top-level shape.
    ///
    /// Fails if the shape, or anything inside it, shares an identifier with
    /// a shape already in the scene.
    pub fn add(&mut self, shape: impl Into<Shape>) -> SceneResult<ShapeId> {
        let shape = shape.into();
        let mut known = self.known_ids();
        Self::check_new_ids(&mut known, &shape)?;
        Ok(self.root.add(shape))
    }

    /// Append several top-level shapes. Nothing is added if any is rejected.
    pub fn extend<I>(&mut self, shapes: I) -> SceneResult<()>
    where
        I: IntoIterator,
        I::Item: Into<Shape>,
    {
        let shapes: Vec<Shape> = shapes.into_iter().map(Into::into).collect();
        let mut known = self.known_ids();
        for shape in &shapes {
            Self::check_new_ids(&mut known, shape)?;
        }
        self.root.extend(shapes);
        Ok(())
    }

    /// Replace the whole scene content with one shape.
    ///
    /// A rejected shape leaves the current content in place.
    pub fn load(&mut self, shape: impl Into<Shape>) -> SceneResult<ShapeId> {
        let shape = shape.into();
        Self::check_new_ids(&mut HashSet::new(), &shape)?;
        self.root.clear();
        Ok(self.root.add(shape))
    }

    /// Remove a top-level shape. Missing identifiers are a no-op.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        self.root.remove(id)
    }

    /// Remove several top-level shapes.
    pub fn remove_all(&mut self, ids: &[ShapeId]) -> Vec<Shape> {
        self.root.remove_all(ids)
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.root.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Number of top-level shapes.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Aggregate bounds of the scene (`Rect::ZERO` when empty).
    pub fn bounds(&self) -> Rect {
        self.root.bounds()
    }

    pub fn x(&self) -> f64 {
        self.root.x()
    }

    pub fn y(&self) -> f64 {
        self.root.y()
    }

    pub fn width(&self) -> f64 {
        self.root.width()
    }

    pub fn height(&self) -> f64 {
        self.root.height()
    }

    /// Translate the whole scene.
    pub fn translate(&mut self, delta: Vec2) {
        self.root.translate(delta);
    }

    /// Paint every shape in insertion order.
    pub fn paint(&self, surface: &mut dyn Surface) {
        self.root.paint(surface);
    }

    /// Clear every selection flag in the tree.
    pub fn unselect(&mut self) {
        self.root.unselect();
    }

    /// Select the first top-level shape containing `point`.
    pub fn select_child_at(&mut self, point: Point) -> bool {
        self.root.select_child_at(point)
    }

    /// Click-to-select: clear the whole selection, then select the first
    /// top-level shape containing `point`.
    pub fn click(&mut self, point: Point) -> Option<ShapeId> {
        self.root.unselect();
        let picked = self.root.pick_child_at(point);
        if picked.is_none() {
            log::debug!("Click at ({}, {}) hit nothing", point.x, point.y);
        }
        picked
    }

    /// IDs of every selected shape, depth-first.
    pub fn selected_ids(&self) -> Vec<ShapeId> {
        self.root.selected_ids()
    }

    /// Find a shape anywhere in the tree.
    pub fn find_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.root.find_shape(id)
    }

    /// Find a mutable shape anywhere in the tree.
    pub fn find_shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.root.find_shape_mut(id)
    }

    /// Move a shape from wherever it is in the tree to the end of the group
    /// `target`. The root group is a valid target.
    ///
    /// The tree is unchanged when an error is returned.
    pub fn transfer(&mut self, id: ShapeId, target: ShapeId) -> SceneResult<()> {
        let shape = self.root.find_shape(id).ok_or(SceneError::NotFound(id))?;
        if id == target || shape.as_group().is_some_and(|g| g.find_shape(target).is_some()) {
            log::warn!("Rejected transfer of {id} into its own subtree");
            return Err(SceneError::CyclicTransfer(id));
        }
        if target != self.root.id() {
            let target_shape = self
                .root
                .find_shape(target)
                .ok_or(SceneError::NotFound(target))?;
            if !target_shape.is_group() {
                return Err(SceneError::NotAGroup(target));
            }
        }

        let shape = self.root.take_shape(id).ok_or(SceneError::NotFound(id))?;
        if target == self.root.id() {
            self.root.add(shape);
        } else if let Some(group) = self
            .root
            .find_shape_mut(target)
            .and_then(Shape::as_group_mut)
        {
            group.add(shape);
        } else {
            // Checked above; keep the shape in the tree regardless.
            self.root.add(shape);
            return Err(SceneError::NotFound(target));
        }
        log::debug!("Moved {id} into group {target}");
        Ok(())
    }

    fn known_ids(&self) -> HashSet<ShapeId> {
        self.root.all_shape_ids().into_iter().collect()
    }

    fn check_new_ids(known: &mut HashSet<ShapeId>, shape: &Shape) -> SceneResult<()> {
        for id in shape.all_ids() {
            if !known.insert(id) {
                log::warn!("Rejected shape with duplicate id {id}");
                return Err(SceneError::DuplicateId(id));
            }
        }
        Ok(())
    }
}
