//! Kernel operations: polygon cutting, reflection, edge elongation.
//!
//! Purpose
//! - `cut` splits a polygon by the infinite line through a crease segment
//!   into its left-side and right-side halves, deterministically: every
//!   vertex lands in exactly one half, on-line vertices are shared by both,
//!   and edge/line crossings insert the intersection point into both halves.
//! - `reflect` mirrors a polygon across the crease line (involutive,
//!   order-preserving up to orientation reversal).
//! - `elongate` extends a short target edge to a full chord of the unit
//!   square so a single crease can cut all current paper material.

use nalgebra::Vector2;

use super::types::{GeomCfg, Polygon, Segment, Side};

/// Split `poly` by the line through `seg` into `(left, right)`.
///
/// Either half may come out degenerate (< 3 vertices) when the line misses
/// or merely grazes the polygon; callers decide what to do with slivers.
pub fn cut(seg: &Segment, poly: &Polygon, cfg: GeomCfg) -> (Polygon, Polygon) {
    let n = poly.pts.len();
    let mut left: Vec<Vector2<f64>> = Vec::with_capacity(n + 2);
    let mut right: Vec<Vector2<f64>> = Vec::with_capacity(n + 2);
    for i in 0..n {
        let p = poly.pts[i];
        let q = poly.pts[(i + 1) % n];
        let sp = seg.side_of(p, cfg.eps_side);
        let sq = seg.side_of(q, cfg.eps_side);
        match sp {
            Side::Left => left.push(p),
            Side::Right => right.push(p),
            Side::On => {
                left.push(p);
                right.push(p);
            }
        }
        // Strict crossing: insert the intersection point into both halves.
        if (sp == Side::Left && sq == Side::Right) || (sp == Side::Right && sq == Side::Left) {
            let x = line_edge_intersection(seg, p, q);
            left.push(x);
            right.push(x);
        }
    }
    (Polygon::new(left), Polygon::new(right))
}

/// Intersection of the line through `seg` with the edge `p -> q`.
///
/// Callers guarantee `p` and `q` lie strictly on opposite sides, so the
/// signed distances differ and the denominator is nonzero.
fn line_edge_intersection(seg: &Segment, p: Vector2<f64>, q: Vector2<f64>) -> Vector2<f64> {
    let d = seg.direction();
    let cp = d.x * (p.y - seg.a.y) - d.y * (p.x - seg.a.x);
    let cq = d.x * (q.y - seg.a.y) - d.y * (q.x - seg.a.x);
    let t = cp / (cp - cq);
    p + (q - p) * t
}

/// Mirror a point across the line through `seg`.
#[inline]
pub fn reflect_point(seg: &Segment, p: Vector2<f64>) -> Vector2<f64> {
    let d = seg.direction();
    let len2 = d.norm_squared();
    if len2 <= f64::EPSILON {
        // Zero-length crease: mirror through the point itself.
        return seg.a * 2.0 - p;
    }
    let t = (p - seg.a).dot(&d) / len2;
    let foot = seg.a + d * t;
    foot * 2.0 - p
}

/// Mirror every vertex across the line through `seg`.
///
/// Involutive; vertex order is preserved, so the loop's orientation
/// reverses geometrically.
pub fn reflect(seg: &Segment, poly: &Polygon) -> Polygon {
    Polygon::new(poly.pts.iter().map(|&p| reflect_point(seg, p)).collect())
}

/// Extend an edge to a full chord of the unit square, collinear with and
/// directed like the input.
///
/// Vertical edges extend to `x = const` over `y ∈ [0, 1]`, horizontal ones
/// to `y = const` over `x ∈ [0, 1]`; otherwise the parametrization axis is
/// chosen by slope magnitude (`|slope| > 1` parametrizes by `y`) so the
/// division stays well conditioned near axis-aligned creases.
pub fn elongate(seg: &Segment) -> Segment {
    let d = seg.direction();
    if d.x == 0.0 {
        let lo = Vector2::new(seg.a.x, 0.0);
        let hi = Vector2::new(seg.a.x, 1.0);
        return oriented(lo, hi, d);
    }
    if d.y == 0.0 {
        let lo = Vector2::new(0.0, seg.a.y);
        let hi = Vector2::new(1.0, seg.a.y);
        return oriented(lo, hi, d);
    }
    let slope = d.y / d.x;
    if slope.abs() > 1.0 {
        // x as a function of y over the full [0, 1] span.
        let x_at = |y: f64| seg.a.x + (y - seg.a.y) * d.x / d.y;
        oriented(Vector2::new(x_at(0.0), 0.0), Vector2::new(x_at(1.0), 1.0), d)
    } else {
        let y_at = |x: f64| seg.a.y + (x - seg.a.x) * slope;
        oriented(Vector2::new(0.0, y_at(0.0)), Vector2::new(1.0, y_at(1.0)), d)
    }
}

/// Order the chord endpoints so the result points the same way as `d`,
/// keeping the left/right convention of the original edge.
#[inline]
fn oriented(lo: Vector2<f64>, hi: Vector2<f64>, d: Vector2<f64>) -> Segment {
    if (hi - lo).dot(&d) >= 0.0 {
        Segment::new(lo, hi)
    } else {
        Segment::new(hi, lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn unit_square() -> Polygon {
        Polygon::new(vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ])
    }

    #[test]
    fn cut_square_by_vertical_line() {
        let seg = Segment::new(vector![0.5, 0.0], vector![0.5, 1.0]);
        let (left, right) = cut(&seg, &unit_square(), GeomCfg::default());
        // Direction is +y, so left is x < 0.5.
        assert!((left.area() - 0.5).abs() < 1e-12);
        assert!((right.area() - 0.5).abs() < 1e-12);
        assert!(left.pts.iter().all(|p| p.x <= 0.5 + 1e-12));
        assert!(right.pts.iter().all(|p| p.x >= 0.5 - 1e-12));
    }

    #[test]
    fn cut_misses_polygon_entirely() {
        let seg = Segment::new(vector![2.0, 0.0], vector![2.0, 1.0]);
        let (left, right) = cut(&seg, &unit_square(), GeomCfg::default());
        assert!((left.area() - 1.0).abs() < 1e-12);
        assert!(right.is_degenerate());
    }

    #[test]
    fn cut_along_boundary_keeps_one_side() {
        // Crease on the square's bottom edge: the square is entirely left.
        let seg = Segment::new(vector![0.0, 0.0], vector![1.0, 0.0]);
        let (left, right) = cut(&seg, &unit_square(), GeomCfg::default());
        assert!((left.area() - 1.0).abs() < 1e-12);
        assert!(right.area() < 1e-12);
    }

    #[test]
    fn cut_preserves_every_vertex() {
        let seg = Segment::new(vector![0.0, 0.25], vector![1.0, 0.75]);
        let poly = unit_square();
        let cfg = GeomCfg::default();
        let (left, right) = cut(&seg, &poly, cfg);
        for &p in &poly.pts {
            let s = seg.side_of(p, cfg.eps_side);
            let in_left = left.pts.iter().any(|&q| (q - p).norm() < 1e-12);
            let in_right = right.pts.iter().any(|&q| (q - p).norm() < 1e-12);
            match s {
                Side::Left => assert!(in_left && !in_right),
                Side::Right => assert!(in_right && !in_left),
                Side::On => assert!(in_left && in_right),
            }
        }
        // Total area is conserved by the split.
        assert!((left.area() + right.area() - poly.area()).abs() < 1e-12);
    }

    #[test]
    fn reflect_involution() {
        let seg = Segment::new(vector![0.3, -1.0], vector![0.7, 2.0]);
        let poly = unit_square();
        let twice = reflect(&seg, &reflect(&seg, &poly));
        for (p, q) in poly.pts.iter().zip(twice.pts.iter()) {
            assert!((p - q).norm() < 1e-12);
        }
    }

    #[test]
    fn reflect_preserves_area() {
        let seg = Segment::new(vector![0.0, 0.0], vector![1.0, 1.0]);
        let poly = unit_square();
        assert!((reflect(&seg, &poly).area() - poly.area()).abs() < 1e-12);
    }

    #[test]
    fn elongate_axis_aligned() {
        let v = elongate(&Segment::new(vector![0.4, 0.2], vector![0.4, 0.3]));
        assert!((v.a - vector![0.4, 0.0]).norm() < 1e-12);
        assert!((v.b - vector![0.4, 1.0]).norm() < 1e-12);
        let h = elongate(&Segment::new(vector![0.8, 0.6], vector![0.2, 0.6]));
        // Direction (-x) preserved.
        assert!((h.a - vector![1.0, 0.6]).norm() < 1e-12);
        assert!((h.b - vector![0.0, 0.6]).norm() < 1e-12);
    }

    #[test]
    fn elongate_sloped_keeps_sides() {
        let seg = Segment::new(vector![0.25, 0.25], vector![0.5, 0.5]);
        let long = elongate(&seg);
        // Chord of the square along y = x, same direction.
        assert!((long.a - vector![0.0, 0.0]).norm() < 1e-12);
        assert!((long.b - vector![1.0, 1.0]).norm() < 1e-12);
        // A probe point keeps its side under elongation.
        let p = vector![0.1, 0.9];
        assert_eq!(
            seg.side_of(p, 1e-9),
            long.side_of(p, 1e-9),
        );
    }

    #[test]
    fn elongate_steep_parametrizes_by_y() {
        let seg = Segment::new(vector![0.5, 0.8], vector![0.51, 0.2]);
        let long = elongate(&seg);
        // Endpoints on y = 0 and y = 1, direction -y preserved.
        assert!((long.a.y - 1.0).abs() < 1e-12);
        assert!((long.b.y - 0.0).abs() < 1e-12);
    }
}
