//! Group shape for combining multiple shapes.

use super::{Shape, ShapeColor, ShapeId, ShapeTrait, apply_paint_style};
use crate::surface::Surface;
use kurbo::{Point, Rect, Vec2};
use uuid::Uuid;

/// A group of shapes that can be manipulated as a single unit.
/// Groups can contain other groups, enabling nested hierarchies.
///
/// Children keep their insertion order, which is also the paint and
/// hit-test order. Geometry is derived from the children on every read.
#[derive(Debug, Clone)]
pub struct Group {
    pub(crate) id: ShapeId,
    children: Vec<Shape>,
    /// Color the group restores after drawing its selection frame.
    color: ShapeColor,
    /// The group's own flag; independent of the children's flags.
    selected: bool,
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Group {
    /// Create a new empty group.
    pub fn new() -> Self {
        Self::with_children(Vec::new())
    }

    /// Create a new group from a list of shapes.
    pub fn with_children(children: Vec<Shape>) -> Self {
        Self::with_id(Uuid::new_v4(), children)
    }

    /// Create a new group with a specific ID.
    pub fn with_id(id: ShapeId, children: Vec<Shape>) -> Self {
        Self {
            id,
            children,
            color: ShapeColor::black(),
            selected: false,
        }
    }

    /// Get the children of this group.
    pub fn children(&self) -> &[Shape] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Shape] {
        &mut self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Append a child. Returns its identifier.
    pub fn add(&mut self, shape: impl Into<Shape>) -> ShapeId {
        let shape = shape.into();
        let id = shape.id();
        self.children.push(shape);
        id
    }

    /// Append several children, keeping their order.
    pub fn extend<I>(&mut self, shapes: I)
    where
        I: IntoIterator,
        I::Item: Into<Shape>,
    {
        self.children.extend(shapes.into_iter().map(Into::into));
    }

    /// Remove a direct child by identifier.
    ///
    /// Returns `None` when no direct child has that identifier.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.children.iter().position(|child| child.id() == id)?;
        Some(self.children.remove(index))
    }

    /// Remove every direct child whose identifier is listed.
    ///
    /// Removed shapes are returned in their former child order; unknown
    /// identifiers are ignored.
    pub fn remove_all(&mut self, ids: &[ShapeId]) -> Vec<Shape> {
        let (removed, kept): (Vec<Shape>, Vec<Shape>) = std::mem::take(&mut self.children)
            .into_iter()
            .partition(|child| ids.contains(&child.id()));
        self.children = kept;
        removed
    }

    /// Remove all children.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Dissolve this group and return its children.
    pub fn ungroup(self) -> Vec<Shape> {
        self.children
    }

    /// Get all shape IDs in this group (including nested groups).
    pub fn all_shape_ids(&self) -> Vec<ShapeId> {
        let mut ids = vec![self.id];
        for child in &self.children {
            if let Shape::Group(group) = child {
                ids.extend(group.all_shape_ids());
            } else {
                ids.push(child.id());
            }
        }
        ids
    }

    /// Find a shape by ID within this group (including nested groups).
    pub fn find_shape(&self, id: ShapeId) -> Option<&Shape> {
        for child in &self.children {
            if child.id() == id {
                return Some(child);
            }
            if let Shape::Group(group) = child {
                if let Some(found) = group.find_shape(id) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Find a mutable shape by ID within this group (including nested groups).
    pub fn find_shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        for child in &mut self.children {
            if child.id() == id {
                return Some(child);
            }
            if let Shape::Group(group) = child {
                if let Some(found) = group.find_shape_mut(id) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Detach a shape from anywhere in this subtree.
    pub fn take_shape(&mut self, id: ShapeId) -> Option<Shape> {
        if let Some(shape) = self.remove(id) {
            return Some(shape);
        }
        self.children
            .iter_mut()
            .filter_map(Shape::as_group_mut)
            .find_map(|group| group.take_shape(id))
    }

    /// Select the first direct child containing `point` and return its ID.
    ///
    /// Only one level is searched: a nested group is selected as a whole and
    /// its own children are left untouched.
    pub fn pick_child_at(&mut self, point: Point) -> Option<ShapeId> {
        let child = self
            .children
            .iter_mut()
            .find(|child| child.hit_test(point))?;
        child.select();
        log::debug!("Selected {} at ({}, {})", child.id(), point.x, point.y);
        Some(child.id())
    }

    /// Select the first direct child containing `point`.
    ///
    /// Returns false, selecting nothing, when no child contains the point.
    pub fn select_child_at(&mut self, point: Point) -> bool {
        self.pick_child_at(point).is_some()
    }

    /// IDs of every shape in this subtree whose own selection flag is set,
    /// in depth-first order.
    pub fn selected_ids(&self) -> Vec<ShapeId> {
        let mut ids = Vec::new();
        if self.selected {
            ids.push(self.id);
        }
        for child in &self.children {
            match child {
                Shape::Group(group) => ids.extend(group.selected_ids()),
                _ if child.is_selected() => ids.push(child.id()),
                _ => {}
            }
        }
        ids
    }
}

impl ShapeTrait for Group {
    fn id(&self) -> ShapeId {
        self.id
    }

    /// Smallest box with its origin at the minimum child origin that reaches
    /// every child's right and bottom edge. Empty groups are `Rect::ZERO`.
    fn bounds(&self) -> Rect {
        let child_bounds: Vec<Rect> = self.children.iter().map(Shape::bounds).collect();
        let Some(first) = child_bounds.first() else {
            return Rect::ZERO;
        };

        let (x, y) = child_bounds
            .iter()
            .fold((first.x0, first.y0), |(x, y), b| (x.min(b.x0), y.min(b.y0)));

        let mut width: f64 = 0.0;
        let mut height: f64 = 0.0;
        for b in &child_bounds {
            width = width.max(b.x1 - x);
            height = height.max(b.y1 - y);
        }
        Rect::new(x, y, x + width, y + height)
    }

    fn color(&self) -> ShapeColor {
        self.color
    }

    fn translate(&mut self, delta: Vec2) {
        for child in &mut self.children {
            child.translate(delta);
        }
    }

    fn hit_test(&self, point: Point) -> bool {
        // Hit if any child is hit
        self.children.iter().any(|child| child.hit_test(point))
    }

    fn select(&mut self) {
        self.selected = true;
    }

    /// Clears this group's flag and every descendant's.
    fn unselect(&mut self) {
        self.selected = false;
        for child in &mut self.children {
            child.unselect();
        }
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn paint(&self, surface: &mut dyn Surface) {
        if self.selected {
            let b = self.bounds();
            apply_paint_style(surface, true, self.color);
            surface.stroke_rect(Rect::new(b.x0 - 1.0, b.y0 - 1.0, b.x1, b.y1));
            apply_paint_style(surface, false, self.color);
        }
        for child in &self.children {
            child.paint(surface);
        }
    }
}
