//! SVG renderer.

use crate::renderer::{RenderContext, RenderResult, Renderer, RendererError};
use kurbo::{Rect, Size, Vec2};
use peniko::Color;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use shapetree_core::{ShapeColor, StrokeStyle, Surface};
use std::io::Write;

/// SVG namespace URI.
const SVG_NS_URI: &str = "http://www.w3.org/2000/svg";

/// Dash length for selection outlines.
const DASH_LENGTH: f64 = 2.0;

/// Renders a scene into a standalone SVG document.
#[derive(Debug)]
pub struct SvgRenderer {
    elements: Vec<BytesStart<'static>>,
    size: Size,
    background: Color,
    offset: Vec2,
    color: Color,
    stroke_style: StrokeStyle,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgRenderer {
    /// Create a new renderer with an empty frame.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            size: Size::ZERO,
            background: Color::from_rgba8(255, 255, 255, 255),
            offset: Vec2::ZERO,
            color: Color::from_rgba8(0, 0, 0, 255),
            stroke_style: StrokeStyle::Solid,
        }
    }

    /// Number of shape elements in the current frame.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Write the current frame as an SVG document.
    pub fn write_svg<W: Write>(&self, out: W) -> RenderResult<()> {
        let mut writer = Writer::new_with_indent(out, b' ', 2);
        let (width, height) = (self.size.width.to_string(), self.size.height.to_string());

        let mut svg = BytesStart::new("svg");
        svg.push_attribute(("xmlns", SVG_NS_URI));
        svg.push_attribute(("width", width.as_str()));
        svg.push_attribute(("height", height.as_str()));
        svg.push_attribute(("viewBox", format!("0 0 {width} {height}").as_str()));
        writer
            .write_event(Event::Start(svg))
            .map_err(|e| RendererError::RenderFailed(e.to_string()))?;

        let background = element(
            "rect",
            &[
                ("x", "0".to_string()),
                ("y", "0".to_string()),
                ("width", width),
                ("height", height),
                ("fill", css_color(self.background)),
            ],
        );
        for elem in std::iter::once(&background).chain(&self.elements) {
            writer
                .write_event(Event::Empty(elem.borrow()))
                .map_err(|e| RendererError::RenderFailed(e.to_string()))?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("svg")))
            .map_err(|e| RendererError::RenderFailed(e.to_string()))?;
        Ok(())
    }

    /// Render the current frame to a string.
    pub fn to_svg_string(&self) -> RenderResult<String> {
        let mut buf = Vec::new();
        self.write_svg(&mut buf)?;
        String::from_utf8(buf).map_err(|e| RendererError::RenderFailed(e.to_string()))
    }

    /// Attributes for an unfilled outline in the current paint state.
    fn stroke_attrs(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            ("fill", "none".to_string()),
            ("stroke", css_color(self.color)),
        ];
        if self.stroke_style == StrokeStyle::Dashed {
            attrs.push(("stroke-dasharray", DASH_LENGTH.to_string()));
        }
        attrs
    }
}

/// Build an empty element with the given attributes.
fn element(name: &'static str, attrs: &[(&'static str, String)]) -> BytesStart<'static> {
    let mut elem = BytesStart::new(name);
    for (key, value) in attrs {
        elem.push_attribute((*key, value.as_str()));
    }
    elem
}

/// Position and size attributes of a rectangle.
fn rect_attrs(r: Rect) -> Vec<(&'static str, String)> {
    vec![
        ("x", r.x0.to_string()),
        ("y", r.y0.to_string()),
        ("width", r.width().to_string()),
        ("height", r.height().to_string()),
    ]
}

/// CSS `rgba()` notation for a color.
fn css_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!(
        "rgba({},{},{},{:.3})",
        rgba.r,
        rgba.g,
        rgba.b,
        f64::from(rgba.a) / 255.0
    )
}

impl Surface for SvgRenderer {
    fn set_color(&mut self, color: ShapeColor) {
        self.color = color.into();
    }

    fn set_stroke_style(&mut self, style: StrokeStyle) {
        self.stroke_style = style;
    }

    fn stroke_rect(&mut self, rect: Rect) {
        let mut attrs = rect_attrs(rect + self.offset);
        attrs.extend(self.stroke_attrs());
        self.elements.push(element("rect", &attrs));
    }

    fn stroke_ellipse(&mut self, bounds: Rect) {
        let r = bounds + self.offset;
        let center = r.center();
        let mut attrs = vec![
            ("cx", center.x.to_string()),
            ("cy", center.y.to_string()),
            ("rx", (r.width() / 2.0).to_string()),
            ("ry", (r.height() / 2.0).to_string()),
        ];
        attrs.extend(self.stroke_attrs());
        self.elements.push(element("ellipse", &attrs));
    }

    fn fill_rect(&mut self, rect: Rect) {
        let mut attrs = rect_attrs(rect + self.offset);
        attrs.push(("fill", css_color(self.color)));
        self.elements.push(element("rect", &attrs));
    }
}

impl Renderer for SvgRenderer {
    fn build_scene(&mut self, ctx: &RenderContext<'_>) -> RenderResult<()> {
        self.elements.clear();
        self.size = ctx.viewport_size;
        self.background = self.background_color(ctx);
        self.offset = ctx.scene_offset();
        self.color = Color::from_rgba8(0, 0, 0, 255);
        self.stroke_style = StrokeStyle::Solid;
        ctx.scene.paint(self);
        log::debug!("Built SVG frame with {} elements", self.elements.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use shapetree_core::{Circle, Dot, Rectangle, Scene};

    #[test]
    fn test_css_color() {
        assert_eq!(
            css_color(Color::from_rgba8(0, 0, 255, 255)),
            "rgba(0,0,255,1.000)"
        );
    }

    #[test]
    fn test_empty_scene_has_only_background() {
        let scene = Scene::new();
        let mut renderer = SvgRenderer::new();
        renderer
            .build_scene(&RenderContext::new(&scene, Size::new(20.0, 20.0)))
            .unwrap();
        let svg = renderer.to_svg_string().unwrap();

        assert_eq!(renderer.element_count(), 0);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="20" height="20" fill="rgba(192,192,192,1.000)""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_shapes_become_elements() {
        let mut scene = Scene::new();
        scene
            .add(Circle::new(Point::new(10.0, 10.0), 10.0, ShapeColor::blue()))
            .unwrap();
        scene
            .add(Rectangle::new(Point::new(0.0, 0.0), 5.0, 5.0, ShapeColor::black()))
            .unwrap();
        scene
            .add(Dot::new(Point::new(40.0, 40.0), ShapeColor::red()))
            .unwrap();

        let mut renderer = SvgRenderer::new();
        let ctx = RenderContext::new(&scene, Size::new(70.0, 70.0)).with_padding(10.0);
        renderer.build_scene(&ctx).unwrap();
        let svg = renderer.to_svg_string().unwrap();

        assert_eq!(renderer.element_count(), 3);
        assert!(svg.contains(r#"<ellipse cx="30" cy="30" rx="10" ry="10" fill="none" stroke="rgba(0,0,255,1.000)"/>"#));
        assert!(svg.contains(r#"<rect x="10" y="10" width="5" height="5" fill="none""#));
        assert!(svg.contains(r#"<rect x="50" y="50" width="3" height="3" fill="rgba(255,0,0,1.000)"/>"#));
        assert!(!svg.contains("stroke-dasharray"));
    }

    #[test]
    fn test_selected_shape_is_dashed() {
        let mut scene = Scene::new();
        scene
            .add(Rectangle::new(Point::new(0.0, 0.0), 5.0, 5.0, ShapeColor::black()))
            .unwrap();
        scene.click(Point::new(1.0, 1.0));

        let mut renderer = SvgRenderer::new();
        renderer
            .build_scene(&RenderContext::new(&scene, Size::new(5.0, 5.0)))
            .unwrap();
        let svg = renderer.to_svg_string().unwrap();
        assert!(svg.contains(r#"stroke="rgba(192,192,192,1.000)" stroke-dasharray="2""#));
    }
}
