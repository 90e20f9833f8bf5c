//! Abstract paint target.
//!
//! Shapes never draw pixels themselves. They set a paint state and emit
//! primitive calls against a [`Surface`] supplied by the host.

use crate::shapes::ShapeColor;
use kurbo::Rect;

/// Stroke style for outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeStyle {
    #[default]
    Solid,
    /// Used to mark selected shapes.
    Dashed,
}

/// Drawing primitives the shape tree needs from its host.
///
/// The paint state (color and stroke style) is sticky: it applies to every
/// following primitive until it is changed again.
pub trait Surface {
    /// Set the color for subsequent primitives.
    fn set_color(&mut self, color: ShapeColor);

    /// Set the stroke style for subsequent outlines.
    fn set_stroke_style(&mut self, style: StrokeStyle);

    /// Stroke the outline of a rectangle.
    fn stroke_rect(&mut self, rect: Rect);

    /// Stroke the ellipse inscribed in `bounds`.
    fn stroke_ellipse(&mut self, bounds: Rect);

    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect);
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// One recorded surface call.
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Op {
        Color(ShapeColor),
        Stroke(StrokeStyle),
        StrokeRect(Rect),
        StrokeEllipse(Rect),
        FillRect(Rect),
    }

    /// Surface that records calls in order.
    #[derive(Debug, Default)]
    pub(crate) struct Recorder {
        pub(crate) ops: Vec<Op>,
    }

    impl Recorder {
        /// Only the drawing primitives, without paint state changes.
        pub(crate) fn primitives(&self) -> Vec<Op> {
            self.ops
                .iter()
                .filter(|op| !matches!(op, Op::Color(_) | Op::Stroke(_)))
                .cloned()
                .collect()
        }
    }

    impl Surface for Recorder {
        fn set_color(&mut self, color: ShapeColor) {
            self.ops.push(Op::Color(color));
        }

        fn set_stroke_style(&mut self, style: StrokeStyle) {
            self.ops.push(Op::Stroke(style));
        }

        fn stroke_rect(&mut self, rect: Rect) {
            self.ops.push(Op::StrokeRect(rect));
        }

        fn stroke_ellipse(&mut self, bounds: Rect) {
            self.ops.push(Op::StrokeEllipse(bounds));
        }

        fn fill_rect(&mut self, rect: Rect) {
            self.ops.push(Op::FillRect(rect));
        }
    }
}
