//! Main application entry point.
//!
//! Usage: `shapetree [--config <PATH>] [x,y ...]`
//!
//! Loads the demo picture, applies each `x,y` click in window coordinates,
//! and writes the final frame as SVG to stdout.

use clap::Parser;
use shapetree_app::{AppError, Cli, Editor, EditorConfig, demo_shapes};
use shapetree_render::SvgRenderer;

fn main() {
    env_logger::init();
    log::info!("Starting ShapeTree");

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = match &cli.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };

    let mut editor = Editor::new(config);
    let mut shapes = demo_shapes().into_iter();
    if let Some(first) = shapes.next() {
        editor.load_shapes(first)?;
    }
    for shape in shapes {
        editor.add_shape(shape)?;
    }

    let mut renderer = SvgRenderer::new();
    for point in cli.clicks {
        match editor.mouse_pressed(point) {
            Some(id) => log::info!("Click at {point:?} selected {id}"),
            None => log::info!("Click at {point:?} selected nothing"),
        }
        editor.repaint(&mut renderer)?;
    }
    editor.force_repaint(&mut renderer)?;

    renderer.write_svg(std::io::stdout().lock())?;
    Ok(())
}
