//! Silhouette problem files: parsing and discovery.
//!
//! Format: polygon count, then per polygon a vertex count followed by one
//! `x,y` line per vertex. Coordinates are decimals or rationals `p/q`.
//! A trailing skeleton section (segment count plus segment lines) may
//! follow; it is accepted and ignored — the solver works from the
//! silhouette alone.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use origami::prelude::{Polygon, Vec2};

/// Parse one coordinate: a decimal or a rational `p/q`.
fn parse_scalar(s: &str) -> Result<f64> {
    let s = s.trim();
    if let Some((num, den)) = s.split_once('/') {
        let num: f64 = num
            .trim()
            .parse()
            .with_context(|| format!("bad numerator in {s:?}"))?;
        let den: f64 = den
            .trim()
            .parse()
            .with_context(|| format!("bad denominator in {s:?}"))?;
        if den == 0.0 {
            bail!("zero denominator in {s:?}");
        }
        Ok(num / den)
    } else {
        s.parse().with_context(|| format!("bad coordinate {s:?}"))
    }
}

/// Parse an `x,y` vertex line.
fn parse_vertex(line: &str) -> Result<Vec2<f64>> {
    let (x, y) = line
        .trim()
        .split_once(',')
        .with_context(|| format!("expected `x,y`, got {line:?}"))?;
    Ok(Vec2::new(parse_scalar(x)?, parse_scalar(y)?))
}

/// Parse a whole problem file into its silhouette polygons.
pub fn parse_problem(text: &str) -> Result<Vec<Polygon>> {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    let mut next = |what: &str| {
        lines
            .next()
            .with_context(|| format!("unexpected end of file, expected {what}"))
    };
    let n_polys: usize = next("polygon count")?
        .parse()
        .context("bad polygon count")?;
    let mut polys = Vec::with_capacity(n_polys);
    for i in 0..n_polys {
        let n_verts: usize = next("vertex count")?
            .parse()
            .with_context(|| format!("bad vertex count for polygon {i}"))?;
        let mut pts = Vec::with_capacity(n_verts);
        for _ in 0..n_verts {
            pts.push(parse_vertex(next("vertex")?)?);
        }
        polys.push(Polygon::new(pts));
    }
    // Trailing skeleton section, if present, is ignored.
    Ok(polys)
}

/// List `*.txt` problem files under `dir`, sorted by path.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        if path.extension().is_some_and(|e| e == "txt") {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}
