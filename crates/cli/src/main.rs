//! Problem runner for the fold solver.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use origami::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

mod problem;

#[derive(Parser)]
#[command(name = "origami-cli")]
#[command(about = "Fold a unit square into a convex silhouette")]
struct Cmd {
    /// Safety bound on folding passes per problem.
    #[arg(long, default_value_t = 64)]
    max_passes: usize,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a single problem file.
    Solve {
        #[arg(long)]
        input: PathBuf,
    },
    /// Discover and solve every problem file in a directory.
    Batch {
        #[arg(long)]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = SolveCfg {
        max_passes: cmd.max_passes,
        ..SolveCfg::default()
    };
    match cmd.action {
        Action::Solve { input } => solve_file(&input, cfg),
        Action::Batch { dir } => batch(&dir, cfg),
    }
}

fn solve_file(input: &Path, cfg: SolveCfg) -> Result<()> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let polys = problem::parse_problem(&text)?;
    let target = applicable_target(polys)?;
    let state = solve(&target, cfg)
        .with_context(|| format!("solving {}", input.display()))?;
    let layers: f64 = state.fragments.iter().map(|f| f.poly.area()).sum();
    tracing::info!(
        input = %input.display(),
        fragments = state.fragments.len(),
        stacked_area = layers,
        "solved"
    );
    Ok(())
}

fn batch(dir: &Path, cfg: SolveCfg) -> Result<()> {
    let files = problem::discover(dir)?;
    if files.is_empty() {
        bail!("no problem files in {}", dir.display());
    }
    let mut solved = 0usize;
    let mut failed = 0usize;
    for file in &files {
        match solve_file(file, cfg) {
            Ok(()) => solved += 1,
            Err(e) => {
                failed += 1;
                tracing::warn!(input = %file.display(), error = %e, "skipped");
            }
        }
    }
    tracing::info!(total = files.len(), solved, failed, "batch done");
    Ok(())
}

/// This solver handles exactly one convex silhouette polygon; everything
/// else is rejected as not applicable rather than solved badly.
fn applicable_target(mut polys: Vec<Polygon>) -> Result<Polygon> {
    if polys.len() != 1 {
        bail!("expected a single silhouette polygon, found {}", polys.len());
    }
    let target = polys.remove(0);
    if !is_convex(&target, GeomCfg::default().eps_side) {
        bail!("silhouette is not convex; this solver does not apply");
    }
    Ok(target)
}
