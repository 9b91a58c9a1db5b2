//! Auto-fold policy and the convergence loop.
//!
//! Purpose
//! - Drive the per-fragment fold step once per target edge per pass until
//!   the whole silhouette sits inside the target polygon.
//!
//! Policy
//! - Each target edge is elongated to a unit-square chord and used as a
//!   crease. The side of the crease away from the target's centroid is the
//!   one folded over: material beyond a target edge's line can never belong
//!   to the final silhouette.
//! - Containment is the convex half-plane test over all fragment vertices,
//!   checked after each full pass. A configured pass bound guards against
//!   non-convergence on degenerate or mis-validated inputs.

use tracing::{debug, trace};

use crate::geom::{elongate, encloses_points, Polygon, Segment, Side};

use super::step::{fold_left, fold_right};
use super::types::{FoldTrace, NullTrace, SheetState, SolveCfg, SolveError};

/// Fold the unit square until it fits inside `target`.
///
/// `target` must be a single convex polygon whose bounding box fits the
/// unit square (the caller validates convexity; the extent is checked
/// here). On success the returned state holds the final fragments; their
/// histories reconstruct both folded and original placements via `replay`.
pub fn solve(target: &Polygon, cfg: SolveCfg) -> Result<SheetState, SolveError> {
    solve_traced(target, cfg, &mut NullTrace)
}

/// As [`solve`], reporting every crease application and pass to `tr`.
pub fn solve_traced(
    target: &Polygon,
    cfg: SolveCfg,
    tr: &mut impl FoldTrace,
) -> Result<SheetState, SolveError> {
    let (lo, hi) = match target.bbox() {
        Some(b) => b,
        None => return Err(SolveError::NoConvergence { passes: 0 }),
    };
    let width = hi.x - lo.x;
    let height = hi.y - lo.y;
    if width > 1.0 + cfg.geom.eps_point || height > 1.0 + cfg.geom.eps_point {
        return Err(SolveError::TargetTooLarge { width, height });
    }

    // Shared frame: the target's minimum corner moves to the origin, and
    // every fragment records the same translate.
    let shift = -lo;
    let local = target.translate(shift);
    let mut state = SheetState::new();
    state.translate_all(shift);
    debug!(?shift, width, height, "fold setup");

    let creases: Vec<Segment> = local.edges().map(|e| elongate(&e)).collect();
    let centroid = match local.centroid() {
        Some(c) => c,
        None => return Err(SolveError::NoConvergence { passes: 0 }),
    };

    for pass in 1..=cfg.max_passes {
        for (i, crease) in creases.iter().enumerate() {
            // Fold the outer side (away from the centroid) onto the inner.
            let fold_right_side = crease.side_of(centroid, cfg.geom.eps_side) == Side::Left;
            let mut next = Vec::with_capacity(state.fragments.len());
            for frag in &state.fragments {
                let pieces = if fold_right_side {
                    fold_right(crease, frag, cfg.geom)
                } else {
                    fold_left(crease, frag, cfg.geom)
                };
                next.extend(pieces);
            }
            state.fragments = next;
            trace!(
                edge = i,
                right_side = fold_right_side,
                fragments = state.fragments.len(),
                "crease applied"
            );
            tr.fold_applied(i, crease, &state);
        }
        tr.pass_done(pass, state.fragments.len());
        debug!(pass, fragments = state.fragments.len(), "fold pass done");
        if encloses_points(&local, &state.silhouette_points(), cfg.geom) {
            state.prune_degenerate();
            debug!(pass, fragments = state.fragments.len(), "converged");
            return Ok(state);
        }
    }
    Err(SolveError::NoConvergence {
        passes: cfg.max_passes,
    })
}
