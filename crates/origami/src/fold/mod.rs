//! The fold-solving engine.
//!
//! Purpose
//! - Track the paper as a collection of fragments (shape + transform
//!   history), fold it along every target edge per pass, and stop once the
//!   silhouette sits inside the target. After the loop, each fragment's
//!   history reconstructs its original and folded placements.
//!
//! Layout
//! - `types`: history, fragments, sheet state, config, errors, trace hook.
//! - `step`: cut-and-reflect over one fragment.
//! - `solver`: auto-fold direction policy and the convergence loop.
//! - `replay`: unfold / replay walks over a fragment's history.

mod replay;
mod solver;
mod step;
mod types;

pub use solver::{solve, solve_traced};
pub use step::{fold_left, fold_right};
pub use types::{Fold, FoldTrace, Fragment, NullTrace, SheetState, SolveCfg, SolveError};
