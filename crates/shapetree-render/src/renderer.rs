//! Renderer trait abstraction.

use kurbo::{Size, Vec2};
use peniko::Color;
use shapetree_core::Scene;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Render failed: {0}")]
    RenderFailed(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
#[derive(Debug)]
pub struct RenderContext<'a> {
    /// The scene to render.
    pub scene: &'a Scene,
    /// Output size, including padding.
    pub viewport_size: Size,
    /// Background color.
    pub background_color: Color,
    /// Empty border between the viewport edge and scene coordinate (0, 0).
    pub padding: f64,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(scene: &'a Scene, viewport_size: Size) -> Self {
        Self {
            scene,
            viewport_size,
            background_color: Color::from_rgba8(192, 192, 192, 255),
            padding: 0.0,
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the padding around the scene.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Offset from scene coordinates to viewport coordinates.
    pub fn scene_offset(&self) -> Vec2 {
        Vec2::new(self.padding, self.padding)
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Paint one frame of the scene in `ctx`.
    ///
    /// Called by the host once per redraw; the previous frame is discarded.
    fn build_scene(&mut self, ctx: &RenderContext<'_>) -> RenderResult<()>;

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext<'_>) -> Color {
        ctx.background_color
    }
}
