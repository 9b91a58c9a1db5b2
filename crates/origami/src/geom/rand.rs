//! Random convex silhouettes (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic sampler for convex target polygons that fit the unit
//!   square, used by the convergence tests and the solve bench. The model
//!   is radial: `n` roughly equally spaced angles with bounded angular and
//!   radial jitter, convex hull, then a rescale/translate into `[0, 1]²`.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Polygon;
use super::util::convex_hull;

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct TargetCfg {
    /// Number of base angles before hulling (>= 3).
    pub vertices: usize,
    /// Angular jitter as a fraction of the base spacing 2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter amplitude; radii are `1 + u` with `u ∈ [-r, r]`.
    pub radial_jitter: f64,
    /// Fraction of the unit square the silhouette's larger extent fills, in (0, 1].
    pub fill: f64,
}

impl Default for TargetCfg {
    fn default() -> Self {
        Self {
            vertices: 8,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            fill: 0.8,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random convex target polygon inside the unit square (CCW).
///
/// Returns `None` only when jitter collapses the hull (pathological cfg).
pub fn draw_target_radial(cfg: TargetCfg, tok: ReplayToken) -> Option<Polygon> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertices.max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let delta = std::f64::consts::TAU / n as f64;
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            phase + k as f64 * delta + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let pts: Vec<Vector2<f64>> = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6);
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    let hull = convex_hull(&pts)?;
    Some(fit_unit_square(Polygon::new(hull), cfg.fill))
}

/// Uniformly scale and translate so the larger bbox extent equals `fill`
/// and the silhouette is centered in the unit square.
fn fit_unit_square(poly: Polygon, fill: f64) -> Polygon {
    let fill = fill.clamp(1e-3, 1.0);
    let Some((lo, hi)) = poly.bbox() else {
        return poly;
    };
    let extent = (hi.x - lo.x).max(hi.y - lo.y).max(1e-12);
    let s = fill / extent;
    let scaled = Polygon::new(poly.pts.iter().map(|p| (p - lo) * s).collect());
    // After rescaling the bbox min sits at the origin; center inside [0, 1]².
    let span = (hi - lo) * s;
    let offset = Vector2::new((1.0 - span.x) * 0.5, (1.0 - span.y) * 0.5);
    scaled.translate(offset)
}
