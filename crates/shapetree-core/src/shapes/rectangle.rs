//! Rectangle shape.

use super::{ShapeColor, ShapeId, ShapeTrait, apply_paint_style};
use crate::surface::Surface;
use kurbo::{Point, Rect, Size, Vec2};
use uuid::Uuid;

/// An axis-aligned rectangle.
#[derive(Debug, Clone)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    position: Point,
    size: Size,
    color: ShapeColor,
    selected: bool,
}

impl Rectangle {
    /// Create a new rectangle with its top-left corner at `position`.
    pub fn new(position: Point, width: f64, height: f64, color: ShapeColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            size: Size::new(width, height),
            color,
            selected: false,
        }
    }

    /// Create a rectangle from two corner points.
    pub fn from_corners(p1: Point, p2: Point, color: ShapeColor) -> Self {
        let rect = Rect::from_points(p1, p2);
        Self::new(rect.origin(), rect.width(), rect.height(), color)
    }

    /// Top-left corner.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl ShapeTrait for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
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
        surface.stroke_rect(self.bounds());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{Op, Recorder};

    #[test]
    fn test_rectangle_creation() {
        let rect = Rectangle::new(Point::new(10.0, 20.0), 100.0, 50.0, ShapeColor::black());
        assert!((rect.x() - 10.0).abs() < f64::EPSILON);
        assert!((rect.y() - 20.0).abs() < f64::EPSILON);
        assert!((rect.width() - 100.0).abs() < f64::EPSILON);
        assert!((rect.height() - 50.0).abs() < f64::EPSILON);
        assert!(!rect.is_selected());
    }

    #[test]
    fn test_rectangle_from_corners() {
        let rect = Rectangle::from_corners(
            Point::new(100.0, 100.0),
            Point::new(50.0, 50.0),
            ShapeColor::black(),
        );
        assert_eq!(rect.position(), Point::new(50.0, 50.0));
        assert!((rect.width() - 50.0).abs() < f64::EPSILON);
        assert!((rect.height() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test() {
        let rect = Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0, ShapeColor::black());
        assert!(rect.hit_test(Point::new(5.0, 5.0)));
        assert!(rect.hit_test(Point::new(0.0, 0.0)));
        assert!(rect.hit_test(Point::new(9.5, 9.5)));
        assert!(!rect.hit_test(Point::new(10.0, 5.0)));
        assert!(!rect.hit_test(Point::new(5.0, 10.0)));
        assert!(!rect.hit_test(Point::new(-0.1, 5.0)));
        assert!(!rect.hit_test(Point::new(15.0, 5.0)));
    }

    #[test]
    fn test_zero_size_hits_nothing() {
        let rect = Rectangle::new(Point::new(0.0, 0.0), 0.0, 0.0, ShapeColor::black());
        assert!(!rect.hit_test(Point::ZERO));
    }

    #[test]
    fn test_select_and_unselect() {
        let mut rect = Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0, ShapeColor::black());
        rect.select();
        assert!(rect.is_selected());
        rect.unselect();
        assert!(!rect.is_selected());
    }

    #[test]
    fn test_paint_strokes_bounds() {
        let rect = Rectangle::new(Point::new(1.0, 2.0), 3.0, 4.0, ShapeColor::red());
        let mut surface = Recorder::default();
        rect.paint(&mut surface);
        assert_eq!(
            surface.primitives(),
            vec![Op::StrokeRect(Rect::new(1.0, 2.0, 4.0, 6.0))]
        );
    }
}
