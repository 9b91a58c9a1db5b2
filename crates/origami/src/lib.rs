//! Fold solver for convex paper-folding silhouettes.
//!
//! Given a convex target polygon that fits in the unit square (after
//! translation), compute a sequence of physically valid folds of a unit
//! square sheet that brings the sheet's outline entirely inside the target,
//! while recording enough history per fragment to reconstruct both its
//! original (pre-fold) and fully folded placements.
//!
//! - [`geom`] is the 2D kernel: cutting, reflection, elongation, and the
//!   polygon arithmetic around them.
//! - [`fold`] is the engine: fragments, the auto-fold policy, the
//!   convergence loop, and transform replay.

pub mod fold;
pub mod geom;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-export: `Vec2` is the point type used throughout.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::fold::{
        solve, solve_traced, Fold, FoldTrace, Fragment, NullTrace, SheetState, SolveCfg,
        SolveError,
    };
    pub use crate::geom::{
        cut, elongate, encloses_points, is_convex, reflect, unit_square, GeomCfg, Polygon,
        Segment, Side,
    };
    pub use nalgebra::Vector2 as Vec2;
}
