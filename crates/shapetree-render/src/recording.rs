//! Surface that records draw calls.

use crate::renderer::{RenderContext, RenderResult, Renderer};
use kurbo::{Rect, Vec2};
use shapetree_core::{ShapeColor, StrokeStyle, Surface};

/// A single recorded draw call, in viewport coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetColor(ShapeColor),
    SetStrokeStyle(StrokeStyle),
    StrokeRect(Rect),
    StrokeEllipse(Rect),
    FillRect(Rect),
}

impl DrawCommand {
    /// Check if this command draws something (as opposed to changing state).
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            DrawCommand::StrokeRect(_) | DrawCommand::StrokeEllipse(_) | DrawCommand::FillRect(_)
        )
    }
}

/// Keeps the draw calls of the last frame in order.
///
/// Useful for headless hosts and for asserting on paint output.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    offset: Vec2,
    frames: usize,
}

impl RecordingSurface {
    /// Create a new empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the current frame.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Only the commands that draw.
    pub fn primitives(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| c.is_primitive())
    }

    /// Number of frames built through [`Renderer::build_scene`].
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Drop all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn set_color(&mut self, color: ShapeColor) {
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn set_stroke_style(&mut self, style: StrokeStyle) {
        self.commands.push(DrawCommand::SetStrokeStyle(style));
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::StrokeRect(rect + self.offset));
    }

    fn stroke_ellipse(&mut self, bounds: Rect) {
        self.commands
            .push(DrawCommand::StrokeEllipse(bounds + self.offset));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect(rect + self.offset));
    }
}

impl Renderer for RecordingSurface {
    fn build_scene(&mut self, ctx: &RenderContext<'_>) -> RenderResult<()> {
        self.commands.clear();
        self.offset = ctx.scene_offset();
        ctx.scene.paint(self);
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Size};
    use shapetree_core::{Circle, Group, Rectangle, Scene, ShapeTrait};

    fn sample_scene() -> Scene {
        let mut scene = Scene::new();
        scene
            .add(Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0, ShapeColor::black()))
            .unwrap();
        scene
            .add(Circle::new(Point::new(20.0, 20.0), 5.0, ShapeColor::blue()))
            .unwrap();
        scene
    }

    #[test]
    fn test_records_in_paint_order() {
        let scene = sample_scene();
        let mut surface = RecordingSurface::new();
        scene.paint(&mut surface);

        let primitives: Vec<&DrawCommand> = surface.primitives().collect();
        assert_eq!(
            primitives,
            vec![
                &DrawCommand::StrokeRect(Rect::new(0.0, 0.0, 10.0, 10.0)),
                &DrawCommand::StrokeEllipse(Rect::new(20.0, 20.0, 30.0, 30.0)),
            ]
        );
    }

    #[test]
    fn test_build_scene_applies_padding_and_resets() {
        let scene = sample_scene();
        let mut surface = RecordingSurface::new();
        let ctx = RenderContext::new(&scene, Size::new(60.0, 60.0)).with_padding(10.0);

        surface.build_scene(&ctx).unwrap();
        surface.build_scene(&ctx).unwrap();

        assert_eq!(surface.frames(), 2);
        assert_eq!(surface.primitives().count(), 2);
        assert_eq!(
            surface.primitives().next(),
            Some(&DrawCommand::StrokeRect(Rect::new(10.0, 10.0, 20.0, 20.0)))
        );
    }

    #[test]
    fn test_selected_group_frame_is_dashed() {
        let mut group = Group::with_children(vec![
            Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0, ShapeColor::black()).into(),
        ]);
        group.select();
        let mut surface = RecordingSurface::new();
        group.paint(&mut surface);

        assert_eq!(
            &surface.commands()[..3],
            &[
                DrawCommand::SetColor(ShapeColor::light_gray()),
                DrawCommand::SetStrokeStyle(StrokeStyle::Dashed),
                DrawCommand::StrokeRect(Rect::new(-1.0, -1.0, 10.0, 10.0)),
            ]
        );
    }
}
