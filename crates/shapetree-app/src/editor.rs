//! Editor host around a scene.

use crate::config::EditorConfig;
use kurbo::{Point, Size, Vec2};
use shapetree_core::{Scene, SceneResult, Shape, ShapeId};
use shapetree_render::{RenderContext, RenderResult, Renderer};

/// Drives a [`Scene`] the way a window would: it sizes the canvas from the
/// scene bounds, turns mouse presses into click-to-select, and repaints on
/// request.
///
/// Window coordinates place scene coordinate (0, 0) at
/// `(padding, padding)`.
#[derive(Debug)]
pub struct Editor {
    scene: Scene,
    config: EditorConfig,
    needs_repaint: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    /// Create an editor with an empty scene.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            scene: Scene::new(),
            config,
            needs_repaint: true,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Replace the scene content with `shape`.
    pub fn load_shapes(&mut self, shape: impl Into<Shape>) -> SceneResult<ShapeId> {
        let id = self.scene.load(shape)?;
        log::info!("Loaded shapes, canvas is now {:?}", self.canvas_size());
        self.request_repaint();
        Ok(id)
    }

    /// Add a top-level shape to the scene.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) -> SceneResult<ShapeId> {
        let id = self.scene.add(shape)?;
        self.request_repaint();
        Ok(id)
    }

    /// Size of the drawing area: the scene's far edges plus padding.
    pub fn canvas_size(&self) -> Size {
        let padding = self.config.padding;
        Size::new(
            self.scene.x() + self.scene.width() + padding,
            self.scene.y() + self.scene.height() + padding,
        )
    }

    /// Size of the window: the canvas with a padding border on the top and left.
    pub fn window_size(&self) -> Size {
        self.canvas_size() + Size::new(self.config.padding, self.config.padding)
    }

    /// Convert a window point into scene coordinates.
    pub fn window_to_scene(&self, point: Point) -> Point {
        point - Vec2::new(self.config.padding, self.config.padding)
    }

    /// Handle a mouse press at a window point.
    ///
    /// Clears the selection, selects the top-level shape under the point, and
    /// requests a repaint. Returns the selected shape, if any.
    pub fn mouse_pressed(&mut self, window_point: Point) -> Option<ShapeId> {
        let point = self.window_to_scene(window_point);
        let picked = self.scene.click(point);
        self.request_repaint();
        picked
    }

    /// Ask for the next [`Editor::repaint`] to draw.
    pub fn request_repaint(&mut self) {
        self.needs_repaint = true;
    }

    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Paint the scene if a repaint was requested.
    ///
    /// Returns whether a frame was built.
    pub fn repaint(&mut self, renderer: &mut dyn Renderer) -> RenderResult<bool> {
        if !self.needs_repaint {
            return Ok(false);
        }
        let ctx = RenderContext::new(&self.scene, self.window_size())
            .with_background(self.config.background.into())
            .with_padding(self.config.padding);
        renderer.build_scene(&ctx)?;
        self.needs_repaint = false;
        log::info!("Repainted {} top-level shapes", self.scene.len());
        Ok(true)
    }

    /// Paint the scene whether or not a repaint was requested.
    pub fn force_repaint(&mut self, renderer: &mut dyn Renderer) -> RenderResult<()> {
        self.request_repaint();
        self.repaint(renderer)?;
        Ok(())
    }
}
