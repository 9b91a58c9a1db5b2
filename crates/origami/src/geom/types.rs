//! Basic 2D types and tolerances for the fold engine.
//!
//! - `GeomCfg`: centralizes epsilons for side classification and point
//!   coincidence checks.
//! - `Side`: canonical point-vs-directed-line classification.
//! - `Segment`: directed pair of points; the direction `b - a` fixes the
//!   left/right convention used by cuts and fold directions.
//! - `Polygon`: ordered vertex loop with the small arithmetic the solver
//!   needs (translate, area, centroid, bounding box).

use nalgebra::Vector2;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Slack for point-vs-line classification (cross-product magnitude).
    pub eps_side: f64,
    /// Slack for point coincidence and degenerate-extent checks.
    pub eps_point: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_side: 1e-9,
            eps_point: 1e-9,
        }
    }
}

/// Which side of a directed line a point lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    On,
}

/// Directed segment from `a` to `b`.
///
/// Undirected for purely geometric purposes (reflection, cutting), but the
/// direction disambiguates `Side::Left` vs `Side::Right`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.b - self.a
    }

    /// Classify `p` against the infinite line through this segment.
    ///
    /// Positive cross product of `b - a` with `p - a` is `Left`; magnitudes
    /// within `eps` are `On`.
    #[inline]
    pub fn side_of(&self, p: Vector2<f64>, eps: f64) -> Side {
        let d = self.direction();
        let r = p - self.a;
        let cross = d.x * r.y - d.y * r.x;
        if cross > eps {
            Side::Left
        } else if cross < -eps {
            Side::Right
        } else {
            Side::On
        }
    }
}

/// Ordered vertex loop; the edge from the last point back to the first is
/// implicit. Fewer than 3 points is degenerate (and legitimately produced by
/// cuts); callers prune such polygons rather than treating them as errors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub pts: Vec<Vector2<f64>>,
}

impl Polygon {
    #[inline]
    pub fn new(pts: Vec<Vector2<f64>>) -> Self {
        Self { pts }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.pts.len() < 3
    }

    /// Edges in loop order, wrapping from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.pts.len();
        (0..n).map(move |i| Segment::new(self.pts[i], self.pts[(i + 1) % n]))
    }

    /// Rigid shift by `v` (returns the shifted polygon).
    pub fn translate(&self, v: Vector2<f64>) -> Polygon {
        Polygon::new(self.pts.iter().map(|p| p + v).collect())
    }

    /// Shoelace area with orientation sign (CCW positive).
    pub fn signed_area(&self) -> f64 {
        let n = self.pts.len();
        if n < 3 {
            return 0.0;
        }
        let mut acc = 0.0;
        for i in 0..n {
            let p = self.pts[i];
            let q = self.pts[(i + 1) % n];
            acc += p.x * q.y - q.x * p.y;
        }
        acc * 0.5
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Area centroid; falls back to the vertex mean when the shoelace area
    /// vanishes (slivers). `None` only for an empty polygon.
    pub fn centroid(&self) -> Option<Vector2<f64>> {
        if self.pts.is_empty() {
            return None;
        }
        let a = self.signed_area();
        if a.abs() > 1e-18 {
            let n = self.pts.len();
            let mut cx = 0.0;
            let mut cy = 0.0;
            for i in 0..n {
                let p = self.pts[i];
                let q = self.pts[(i + 1) % n];
                let cross = p.x * q.y - q.x * p.y;
                cx += (p.x + q.x) * cross;
                cy += (p.y + q.y) * cross;
            }
            return Some(Vector2::new(cx / (6.0 * a), cy / (6.0 * a)));
        }
        let sum: Vector2<f64> = self.pts.iter().sum();
        Some(sum / self.pts.len() as f64)
    }

    /// Axis-aligned bounding box `(min, max)`; `None` for an empty polygon.
    pub fn bbox(&self) -> Option<(Vector2<f64>, Vector2<f64>)> {
        let first = *self.pts.first()?;
        let mut lo = first;
        let mut hi = first;
        for p in &self.pts[1..] {
            lo.x = lo.x.min(p.x);
            lo.y = lo.y.min(p.y);
            hi.x = hi.x.max(p.x);
            hi.y = hi.y.max(p.y);
        }
        Some((lo, hi))
    }
}
