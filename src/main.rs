//! hollowcube command-line entry point

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use hollowcube::config::RenderConfig;
use hollowcube::domain::ShapeColor;
use hollowcube::output;
use hollowcube::render::{PixmapCanvas, render_scene};

#[derive(Parser, Debug)]
#[command(name = "hollowcube")]
#[command(about = "Render a recursive Sierpinski cube fractal to PNG", long_about = None)]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output PNG path (default: timestamped file in the Pictures folder)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Recursion depth (leaves = 20^depth)
    #[arg(short, long)]
    depth: Option<u32>,

    /// Edge length of the root cube
    #[arg(long)]
    size: Option<f64>,

    /// Projection scale
    #[arg(long)]
    focal_length: Option<f64>,

    /// Camera offset along Z
    #[arg(long)]
    observer_distance: Option<f64>,

    /// Rotation about X in degrees
    #[arg(long, allow_negative_numbers = true)]
    rotate_x: Option<f64>,

    /// Rotation about Y in degrees
    #[arg(long, allow_negative_numbers = true)]
    rotate_y: Option<f64>,

    /// Lattice spacing used to match shared edges
    #[arg(long)]
    precision: Option<f64>,

    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Print render statistics as JSON
    #[arg(long)]
    stats: bool,
}

impl Cli {
    /// Fold command-line overrides into the base config
    fn apply(&self, mut config: RenderConfig) -> RenderConfig {
        if let Some(depth) = self.depth {
            config.recursion_depth = depth;
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(f) = self.focal_length {
            config.focal_length = f;
        }
        if let Some(d) = self.observer_distance {
            config.observer_distance = d;
        }
        if let Some(deg) = self.rotate_x {
            config.rotation_angle_x = deg.to_radians();
        }
        if let Some(deg) = self.rotate_y {
            config.rotation_angle_y = deg.to_radians();
        }
        if let Some(p) = self.precision {
            config.edge_quantization_precision = p;
        }
        if let Some(w) = self.width {
            config.width = w;
        }
        if let Some(h) = self.height {
            config.height = h;
        }
        config
    }
}

fn run(cli: Cli) -> Result<()> {
    let base = match &cli.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    let config = cli.apply(base);
    config.validate().context("Invalid configuration")?;

    let mut canvas = PixmapCanvas::new(
        config.mapping(),
        config.line_width as f32,
        ShapeColor::WHITE,
    )?;
    log::debug!(
        "Rendering depth {} onto {}x{} canvas",
        config.recursion_depth,
        canvas.width(),
        canvas.height()
    );

    let stats = render_scene(&config, &mut canvas);
    let img = canvas.into_image()?;

    let path = cli.output.clone().unwrap_or_else(output::default_output_path);
    output::save_rgba(&img, &path)?;
    println!("Saved {}", path.display());

    if cli.stats {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    run(Cli::parse())
}
