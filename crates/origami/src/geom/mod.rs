//! 2D geometry kernel for the fold engine.
//!
//! Purpose
//! - Provide the small set of operations the solver consumes: point-vs-line
//!   classification, polygon cutting by a crease line, reflection across a
//!   crease, edge elongation to a unit-square chord, and the polygon
//!   arithmetic (area, centroid, bounding box, convexity) around them.
//! - Keep the API minimal and numerically explicit (eps-aware via `GeomCfg`).
//!
//! Convention
//! - Segments are directed; `Side::Left` is the positive cross-product side
//!   of `b - a`. Cuts and fold directions are named by this convention.

pub mod cut;
pub mod rand;
mod types;
mod util;

pub use cut::{cut, elongate, reflect, reflect_point};
pub use types::{GeomCfg, Polygon, Segment, Side};
pub use util::{convex_hull, encloses_points, is_convex, unit_square};
