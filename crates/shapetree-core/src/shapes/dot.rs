//! Dot marker shape.

use super::{ShapeColor, ShapeId, ShapeTrait, apply_paint_style};
use crate::surface::Surface;
use kurbo::{Point, Rect, Size, Vec2};
use uuid::Uuid;

/// A small filled square marker of fixed size.
#[derive(Debug, Clone)]
pub struct Dot {
    pub(crate) id: ShapeId,
    position: Point,
    color: ShapeColor,
    selected: bool,
}

impl Dot {
    /// Side length of every dot.
    pub const SIZE: f64 = 3.0;

    /// Create a new dot with its top-left corner at `position`.
    pub fn new(position: Point, color: ShapeColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            color,
            selected: false,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

impl ShapeTrait for Dot {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, Size::new(Self::SIZE, Self::SIZE))
    }

    fn color(&self) -> ShapeColor {
        self.color
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    fn select(&mut self) {
        self.selected = true;
    }

    fn unselect(&mut self) {
        self.selected = false;
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn paint(&self, surface: &mut dyn Surface) {
        apply_paint_style(surface, self.selected, self.color);
        surface.fill_rect(self.bounds());
    }
}
