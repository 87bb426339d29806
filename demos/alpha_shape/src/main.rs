use std::io::Read;
use std::path::PathBuf;

use alpha_shapes::algorithms::alpha_shape;
use alpha_shapes::config::AlphaConfig;
use alpha_shapes::data::Point;
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Compute the alpha shape of a JSON array of `[x, y]` points.
#[derive(Parser)]
#[command(name = "alpha_shape")]
struct Cmd {
  /// Zero computes the convex hull.
  #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
  alpha: f64,

  /// Disk membership slack, relative to the extent of the input.
  #[arg(long)]
  tolerance: Option<f64>,

  /// Include the triangulation in the output.
  #[arg(long)]
  triangulation: bool,

  /// Include every candidate disk in the output.
  #[arg(long)]
  disks: bool,

  /// Input file. Reads stdin if absent.
  #[arg(long)]
  input: Option<PathBuf>,

  /// Treat input as screen coordinates, y pointing down in a canvas of this
  /// height.
  #[arg(long)]
  flip_y: Option<f64>,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_target(false)
    .with_writer(std::io::stderr)
    .init();
  let cmd = Cmd::parse();

  let text = match &cmd.input {
    Some(path) => {
      std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    }
    None => {
      let mut buf = String::new();
      std::io::stdin().read_to_string(&mut buf)?;
      buf
    }
  };
  let mut points: Vec<Point<f64>> = serde_json::from_str(&text).context("parsing points")?;
  if let Some(height) = cmd.flip_y {
    for pt in points.iter_mut() {
      pt.array[1] = height - pt.array[1];
    }
  }

  let mut config = AlphaConfig::new(cmd.alpha)
    .with_triangulation(cmd.triangulation)
    .with_disks(cmd.disks);
  if let Some(tolerance) = cmd.tolerance {
    config = config.with_tolerance(tolerance);
  }
  tracing::info!(points = points.len(), alpha = cmd.alpha, "input");

  let shape = alpha_shape(&points, &config)?;
  tracing::info!(edges = shape.edges().len(), "done");
  println!("{}", serde_json::to_string_pretty(&shape)?);
  Ok(())
}
