//! Data types for the fold solver: history, fragments, sheet state,
//! configuration, errors, and the tracing hook.
//!
//! Kept small and explicit to make `step` and `solver` easy to read.

use nalgebra::Vector2;
use thiserror::Error;

use crate::geom::{unit_square, GeomCfg, Polygon, Segment};

/// One recorded operation in a fragment's history.
///
/// A `FoldLeft`/`FoldRight` crease names the side of the directed crease
/// segment whose material was reflected onto the other side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fold {
    /// Rigid shift mapping the origin to the vector.
    Translate(Vector2<f64>),
    /// Material on the left of the crease was reflected across it.
    FoldLeft(Segment),
    /// Material on the right of the crease was reflected across it.
    FoldRight(Segment),
}

/// One connected piece of paper tracked through the fold sequence.
///
/// `folds` is ordered most-recent-first: index 0 is the newest operation.
/// Consumers that need the original order (replay, unfolding) iterate the
/// list in reverse. Invariant: replaying `folds` against the matching base
/// shape reproduces `poly` (see `replay`).
#[derive(Clone, Debug)]
pub struct Fragment {
    pub folds: Vec<Fold>,
    pub poly: Polygon,
}

impl Fragment {
    /// Fresh fragment with an empty history.
    #[inline]
    pub fn base(poly: Polygon) -> Self {
        Self {
            folds: Vec::new(),
            poly,
        }
    }

    /// Prepend `fold` (histories are most-recent-first).
    #[inline]
    pub fn record(&mut self, fold: Fold) {
        self.folds.insert(0, fold);
    }
}

/// The paper's current folded configuration: an unordered collection of
/// fragments. Fragment order carries no meaning; only the multiset of
/// shapes and histories does.
#[derive(Clone, Debug)]
pub struct SheetState {
    pub fragments: Vec<Fragment>,
}

impl SheetState {
    /// Initial state: one fragment, empty history, unit-square outline.
    pub fn new() -> Self {
        Self {
            fragments: vec![Fragment::base(unit_square())],
        }
    }

    /// Shift every fragment rigidly by `v`, recording the translate in each
    /// history. Histories stay structurally identical across fragments.
    pub fn translate_all(&mut self, v: Vector2<f64>) {
        for frag in &mut self.fragments {
            frag.poly = frag.poly.translate(v);
            frag.record(Fold::Translate(v));
        }
    }

    /// All current vertices — the silhouette tested for containment.
    pub fn silhouette_points(&self) -> Vec<Vector2<f64>> {
        self.fragments
            .iter()
            .flat_map(|f| f.poly.pts.iter().copied())
            .collect()
    }

    /// Drop numerically degenerate slivers (< 3 vertices).
    pub fn prune_degenerate(&mut self) {
        self.fragments.retain(|f| !f.poly.is_degenerate());
    }
}

impl Default for SheetState {
    fn default() -> Self {
        Self::new()
    }
}

/// Solver configuration.
#[derive(Clone, Copy, Debug)]
pub struct SolveCfg {
    /// Safety bound on full passes over the target's edges. The fold loop
    /// has no intrinsic cap, so exceeding this is reported as failure
    /// rather than truncated silently.
    pub max_passes: usize,
    pub geom: GeomCfg,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            max_passes: 64,
            geom: GeomCfg::default(),
        }
    }
}

/// Solver failures. All-or-nothing per target: no partial state escapes.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum SolveError {
    /// The target's bounding box exceeds the unit square along some axis;
    /// rotation/rescaling to fit is the caller's business.
    #[error("target extent {width} x {height} exceeds the unit square")]
    TargetTooLarge { width: f64, height: f64 },
    /// Containment never held within the configured pass bound; either a
    /// non-convex target slipped past the caller's check or the geometry is
    /// numerically degenerate.
    #[error("silhouette not contained after {passes} folding passes")]
    NoConvergence { passes: usize },
}

/// Side-effect-free observer for fold progress.
///
/// Replaces ad-hoc debug printing: tests inject an implementation to
/// capture before/after geometry without global state. All methods default
/// to no-ops.
pub trait FoldTrace {
    /// One crease was applied across the whole state.
    fn fold_applied(&mut self, edge_index: usize, crease: &Segment, state: &SheetState) {
        let _ = (edge_index, crease, state);
    }

    /// One full pass over all target edges completed.
    fn pass_done(&mut self, pass: usize, fragment_count: usize) {
        let _ = (pass, fragment_count);
    }
}

/// The default observer: observes nothing.
pub struct NullTrace;

impl FoldTrace for NullTrace {}
