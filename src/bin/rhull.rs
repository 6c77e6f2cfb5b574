use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use rhull::algorithms::convex_hull::{Collinear, MonotoneChain};
use rhull::data::{PointSet, Polygon, Sampler};
use rhull::Predicate;

#[derive(Parser)]
#[command(name = "rhull")]
#[command(about = "Convex hull of a planar point set")]
struct Cmd {
  /// Read points from a file, one `x y` pair per line. Use `-` for stdin.
  #[arg(long, conflicts_with_all = ["seed", "count"])]
  input: Option<PathBuf>,

  /// Seed for the random point set.
  #[arg(long, default_value_t = 0)]
  seed: u64,

  /// Number of random points to draw.
  #[arg(long, default_value_t = 10)]
  count: usize,

  /// Keep points that lie on a hull edge.
  #[arg(long)]
  include_collinear: bool,

  /// Use plain floating-point orientation tests instead of exact ones. Safe for
  /// integer coordinates; near-collinear real input may give a non-convex hull.
  #[arg(long)]
  fast: bool,

  /// Print JSON instead of one vertex per line.
  #[arg(long)]
  json: bool,

  /// More logging. Repeat for trace output.
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

fn main() -> Result<()> {
  let cmd = Cmd::parse();
  let level = match cmd.verbose {
    0 => Level::WARN,
    1 => Level::DEBUG,
    _ => Level::TRACE,
  };
  SubscriberBuilder::default()
    .with_max_level(level)
    .with_target(false)
    .with_writer(std::io::stderr)
    .init();

  let points = load(&cmd)?;
  let hull = builder(&cmd)
    .hull(&points)
    .context("cannot compute convex hull")?;
  tracing::info!(points = points.len(), vertices = hull.len(), "done");
  print!("{}", render(&points, &hull, cmd.json)?);
  Ok(())
}

fn builder(cmd: &Cmd) -> MonotoneChain {
  MonotoneChain::new()
    .with_predicate(if cmd.fast {
      Predicate::Fast
    } else {
      Predicate::Exact
    })
    .with_collinear(if cmd.include_collinear {
      Collinear::Include
    } else {
      Collinear::Exclude
    })
}

fn render(points: &PointSet, hull: &Polygon, json: bool) -> Result<String> {
  if json {
    let vertices: Vec<[f64; 2]> = hull
      .iter()
      .map(|pt| [pt.x_coord(), pt.y_coord()])
      .collect();
    let out = serde_json::json!({
      "points": points.len(),
      "hull": vertices,
      "area": hull.signed_area(),
    });
    Ok(format!("{}\n", serde_json::to_string_pretty(&out)?))
  } else {
    Ok(
      hull
        .iter()
        .map(|pt| format!("{} {}\n", pt.x_coord(), pt.y_coord()))
        .collect(),
    )
  }
}

fn load(cmd: &Cmd) -> Result<PointSet> {
  let Some(path) = &cmd.input else {
    tracing::debug!(seed = cmd.seed, count = cmd.count, "sampling points");
    return Ok(Sampler::default().seeded(cmd.count, cmd.seed));
  };
  let text = if path.as_os_str() == "-" {
    let mut buf = String::new();
    std::io::stdin()
      .read_to_string(&mut buf)
      .context("cannot read stdin")?;
    buf
  } else {
    std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?
  };
  text
    .parse::<PointSet>()
    .with_context(|| format!("cannot parse points from {}", path.display()))
}
