//! Shape definitions for the shape tree.

mod circle;
mod dot;
mod group;
mod rectangle;

pub use circle::Circle;
pub use dot::Dot;
pub use group::Group;
pub use rectangle::Rectangle;

use crate::surface::{StrokeStyle, Surface};
use kurbo::{Point, Rect, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ShapeColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub const fn red() -> Self {
        Self::new(255, 0, 0, 255)
    }

    pub const fn green() -> Self {
        Self::new(0, 255, 0, 255)
    }

    pub const fn blue() -> Self {
        Self::new(0, 0, 255, 255)
    }

    pub const fn light_gray() -> Self {
        Self::new(192, 192, 192, 255)
    }
}

impl From<Color> for ShapeColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<ShapeColor> for Color {
    fn from(color: ShapeColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Outline color used for selected shapes.
pub const SELECTION_COLOR: ShapeColor = ShapeColor::light_gray();

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Switch the surface to the selection style or back to the shape's own color.
pub(crate) fn apply_paint_style(surface: &mut dyn Surface, selected: bool, color: ShapeColor) {
    if selected {
        surface.set_color(SELECTION_COLOR);
        surface.set_stroke_style(StrokeStyle::Dashed);
    } else {
        surface.set_color(color);
        surface.set_stroke_style(StrokeStyle::Solid);
    }
}

/// Common trait for all shapes, leaves and groups alike.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the bounding box in scene coordinates.
    fn bounds(&self) -> Rect;

    /// Get the base color.
    fn color(&self) -> ShapeColor;

    /// Translate by `delta`, keeping the geometry otherwise unchanged.
    fn translate(&mut self, delta: Vec2);

    /// Check whether a point lies inside this shape.
    ///
    /// Leaves test their own bounds, half-open on the far edges; groups
    /// override this.
    fn hit_test(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    /// Mark this shape selected.
    fn select(&mut self);

    /// Clear the selection flag.
    fn unselect(&mut self);

    fn is_selected(&self) -> bool;

    /// Paint onto a host surface.
    fn paint(&self, surface: &mut dyn Surface);

    /// Left edge of the bounding box.
    fn x(&self) -> f64 {
        self.bounds().x0
    }

    /// Top edge of the bounding box.
    fn y(&self) -> f64 {
        self.bounds().y0
    }

    fn width(&self) -> f64 {
        self.bounds().width()
    }

    fn height(&self) -> f64 {
        self.bounds().height()
    }
}

/// Enum wrapper for all shape types.
///
/// Cloning keeps the identifier; call [`Shape::regenerate_ids`] before
/// inserting a clone next to its original.
#[derive(Debug, Clone)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Dot(Dot),
    Group(Group),
}

impl Shape {
    /// Check if this shape is a group.
    pub fn is_group(&self) -> bool {
        matches!(self, Shape::Group(_))
    }

    /// Get the group if this shape is a group.
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Shape::Group(g) => Some(g),
            _ => None,
        }
    }

    /// Get the mutable group if this shape is a group.
    pub fn as_group_mut(&mut self) -> Option<&mut Group> {
        match self {
            Shape::Group(g) => Some(g),
            _ => None,
        }
    }

    /// All identifiers in this subtree, starting with this shape's own.
    pub fn all_ids(&self) -> Vec<ShapeId> {
        match self {
            Shape::Group(g) => g.all_shape_ids(),
            _ => vec![self.id()],
        }
    }

    /// Give this shape and every descendant a fresh identifier.
    pub fn regenerate_ids(&mut self) {
        let new_id = Uuid::new_v4();
        match self {
            Shape::Circle(s) => s.id = new_id,
            Shape::Rectangle(s) => s.id = new_id,
            Shape::Dot(s) => s.id = new_id,
            Shape::Group(s) => {
                s.id = new_id;
                for child in s.children_mut() {
                    child.regenerate_ids();
                }
            }
        }
    }
}

impl ShapeTrait for Shape {
    fn id(&self) -> ShapeId {
        match self {
            Shape::Circle(s) => s.id(),
            Shape::Rectangle(s) => s.id(),
            Shape::Dot(s) => s.id(),
            Shape::Group(s) => s.id(),
        }
    }

    fn bounds(&self) -> Rect {
        match self {
            Shape::Circle(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
            Shape::Dot(s) => s.bounds(),
            Shape::Group(s) => s.bounds(),
        }
    }

    fn color(&self) -> ShapeColor {
        match self {
            Shape::Circle(s) => s.color(),
            Shape::Rectangle(s) => s.color(),
            Shape::Dot(s) => s.color(),
            Shape::Group(s) => s.color(),
        }
    }

    fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Circle(s) => s.translate(delta),
            Shape::Rectangle(s) => s.translate(delta),
            Shape::Dot(s) => s.translate(delta),
            Shape::Group(s) => s.translate(delta),
        }
    }

    fn hit_test(&self, point: Point) -> bool {
        match self {
            Shape::Circle(s) => s.hit_test(point),
            Shape::Rectangle(s) => s.hit_test(point),
            Shape::Dot(s) => s.hit_test(point),
            Shape::Group(s) => s.hit_test(point),
        }
    }

    fn select(&mut self) {
        match self {
            Shape::Circle(s) => s.select(),
            Shape::Rectangle(s) => s.select(),
            Shape::Dot(s) => s.select(),
            Shape::Group(s) => s.select(),
        }
    }

    fn unselect(&mut self) {
        match self {
            Shape::Circle(s) => s.unselect(),
            Shape::Rectangle(s) => s.unselect(),
            Shape::Dot(s) => s.unselect(),
            Shape::Group(s) => s.unselect(),
        }
    }

    fn is_selected(&self) -> bool {
        match self {
            Shape::Circle(s) => s.is_selected(),
            Shape::Rectangle(s) => s.is_selected(),
            Shape::Dot(s) => s.is_selected(),
            Shape::Group(s) => s.is_selected(),
        }
    }

    fn paint(&self, surface: &mut dyn Surface) {
        match self {
            Shape::Circle(s) => s.paint(surface),
            Shape::Rectangle(s) => s.paint(surface),
            Shape::Dot(s) => s.paint(surface),
            Shape::Group(s) => s.paint(surface),
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Dot> for Shape {
    fn from(dot: Dot) -> Self {
        Shape::Dot(dot)
    }
}

impl From<Group> for Shape {
    fn from(group: Group) -> Self {
        Shape::Group(group)
    }
}
