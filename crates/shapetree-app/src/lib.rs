//! ShapeTree App Library
//!
//! Editor host for a ShapeTree scene: configuration, canvas sizing,
//! click-to-select and repainting through a renderer.

mod config;
mod editor;

pub use config::{ConfigError, DEFAULT_PADDING, EditorConfig};
pub use editor::Editor;

use clap::Parser;
use kurbo::Point;
use shapetree_core::{Circle, Dot, Group, Rectangle, SceneError, Shape, ShapeColor};
use shapetree_render::RendererError;
use std::path::PathBuf;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
    #[error("Render error: {0}")]
    Render(#[from] RendererError),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Apply clicks to the demo picture and print the final frame as SVG.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Editor config file (JSON)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Clicks in window coordinates, each as `x,y`
    #[arg(value_parser = parse_point)]
    pub clicks: Vec<Point>,
}

/// The demo picture: a blue circle, a nested group, and a frame.
pub fn demo_shapes() -> Vec<Shape> {
    let markers = Group::with_children(vec![
        Dot::new(Point::new(70.0, 45.0), ShapeColor::green()).into(),
        Dot::new(Point::new(80.0, 55.0), ShapeColor::green()).into(),
    ]);
    let cluster = Group::with_children(vec![
        Rectangle::new(Point::new(40.0, 40.0), 25.0, 20.0, ShapeColor::red()).into(),
        markers.into(),
    ]);
    vec![
        Circle::new(Point::new(10.0, 10.0), 10.0, ShapeColor::blue()).into(),
        cluster.into(),
        Rectangle::new(Point::new(10.0, 80.0), 80.0, 15.0, ShapeColor::black()).into(),
    ]
}

/// Parse a click argument of the form `x,y`.
pub fn parse_point(arg: &str) -> Result<Point, AppError> {
    let invalid = || AppError::InvalidArgument(format!("expected x,y but got {arg:?}"));
    let (x, y) = arg.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse::<f64>().map_err(|_| invalid())?;
    let y = y.trim().parse::<f64>().map_err(|_| invalid())?;
    Ok(Point::new(x, y))
}
