//! ShapeTree Render Library
//!
//! Paint surfaces a host can hand to a [`shapetree_core::Scene`]: a recorder
//! that keeps the ordered draw calls, and an SVG renderer.

mod recording;
mod renderer;
mod svg;

pub use recording::{DrawCommand, RecordingSurface};
pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};
pub use svg::SvgRenderer;
