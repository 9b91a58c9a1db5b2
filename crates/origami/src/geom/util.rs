//! Free-standing polygon predicates and helpers.

use nalgebra::Vector2;

use super::types::{GeomCfg, Polygon, Side};

/// The paper's initial outline: the unit square, CCW from the origin.
pub fn unit_square() -> Polygon {
    Polygon::new(vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(0.0, 1.0),
    ])
}

/// Convexity test: all non-collinear turns share one orientation.
///
/// Used only as an applicability gate; degenerate polygons are not convex.
pub fn is_convex(poly: &Polygon, eps: f64) -> bool {
    let n = poly.pts.len();
    if n < 3 {
        return false;
    }
    let mut seen_left = false;
    let mut seen_right = false;
    for i in 0..n {
        let p = poly.pts[i];
        let q = poly.pts[(i + 1) % n];
        let r = poly.pts[(i + 2) % n];
        let d = q - p;
        let e = r - q;
        let cross = d.x * e.y - d.y * e.x;
        if cross > eps {
            seen_left = true;
        } else if cross < -eps {
            seen_right = true;
        }
        if seen_left && seen_right {
            return false;
        }
    }
    true
}

/// Convex-interior containment of a point set, edge by edge.
///
/// For every edge of `target`, all points must lie in the edge's closed
/// inner half-plane: either none strictly right, or none strictly left.
/// This is the convergence predicate of the fold loop.
pub fn encloses_points(target: &Polygon, points: &[Vector2<f64>], cfg: GeomCfg) -> bool {
    for edge in target.edges() {
        let mut seen_left = false;
        let mut seen_right = false;
        for &p in points {
            match edge.side_of(p, cfg.eps_side) {
                Side::Left => seen_left = true,
                Side::Right => seen_right = true,
                Side::On => {}
            }
            if seen_left && seen_right {
                return false;
            }
        }
    }
    true
}

/// Andrew's monotone chain convex hull (CCW order, deduped).
///
/// Only the random target sampler needs a hull; keep it here next to the
/// other free helpers.
pub fn convex_hull(points: &[Vector2<f64>]) -> Option<Vec<Vector2<f64>>> {
    if points.len() < 3 {
        return None;
    }
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| {
        (a.x, a.y)
            .partial_cmp(&(b.x, b.y))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if pts.len() < 3 {
        return None;
    }
    let turn = |o: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>| {
        let oa = a - o;
        let ob = b - o;
        oa.x * ob.y - oa.y * ob.x
    };
    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2 && turn(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && turn(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    if lower.len() >= 3 {
        Some(lower)
    } else {
        None
    }
}
