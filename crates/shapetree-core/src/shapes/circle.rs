//! Circle shape.

use super::{ShapeColor, ShapeId, ShapeTrait, apply_paint_style};
use crate::surface::Surface;
use kurbo::{Point, Rect, Size, Vec2};
use uuid::Uuid;

/// A circle, positioned by the top-left corner of its bounding square.
#[derive(Debug, Clone)]
pub struct Circle {
    pub(crate) id: ShapeId,
    position: Point,
    radius: f64,
    color: ShapeColor,
    selected: bool,
}

impl Circle {
    /// Create a new circle whose bounding square starts at `position`.
    pub fn new(position: Point, radius: f64, color: ShapeColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            radius,
            color,
            selected: false,
        }
    }

    /// Top-left corner of the bounding square.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Center point.
    pub fn center(&self) -> Point {
        self.position + Vec2::new(self.radius, self.radius)
    }
}

impl ShapeTrait for Circle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        let diameter = self.radius * 2.0;
        Rect::from_origin_size(self.position, Size::new(diameter, diameter))
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
        surface.stroke_ellipse(self.bounds());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::StrokeStyle;
    use crate::surface::recording::{Op, Recorder};

    #[test]
    fn test_circle_bounds() {
        let circle = Circle::new(Point::new(20.0, 20.0), 5.0, ShapeColor::blue());
        assert!((circle.x() - 20.0).abs() < f64::EPSILON);
        assert!((circle.y() - 20.0).abs() < f64::EPSILON);
        assert!((circle.width() - 10.0).abs() < f64::EPSILON);
        assert!((circle.height() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_center() {
        let circle = Circle::new(Point::new(10.0, 10.0), 10.0, ShapeColor::blue());
        assert_eq!(circle.center(), Point::new(20.0, 20.0));
    }

    #[test]
    fn test_hit_test_uses_bounding_square() {
        let circle = Circle::new(Point::new(20.0, 20.0), 5.0, ShapeColor::blue());
        assert!(circle.hit_test(Point::new(25.0, 25.0)));
        // Corner of the bounding square counts as inside.
        assert!(circle.hit_test(Point::new(20.0, 20.0)));
        assert!(!circle.hit_test(Point::new(30.0, 25.0)));
    }

    #[test]
    fn test_translate_keeps_radius() {
        let mut circle = Circle::new(Point::new(0.0, 0.0), 4.0, ShapeColor::red());
        circle.translate(Vec2::new(3.0, -2.0));
        assert_eq!(circle.position(), Point::new(3.0, -2.0));
        assert!((circle.radius() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_paint_normal_and_selected() {
        let mut circle = Circle::new(Point::new(0.0, 0.0), 5.0, ShapeColor::blue());
        let mut surface = Recorder::default();
        circle.paint(&mut surface);
        assert_eq!(
            surface.ops,
            vec![
                Op::Color(ShapeColor::blue()),
                Op::Stroke(StrokeStyle::Solid),
                Op::StrokeEllipse(Rect::new(0.0, 0.0, 10.0, 10.0)),
            ]
        );

        circle.select();
        let mut surface = Recorder::default();
        circle.paint(&mut surface);
        assert_eq!(surface.ops[1], Op::Stroke(StrokeStyle::Dashed));
        assert_eq!(surface.ops[0], Op::Color(ShapeColor::light_gray()));
    }
}
