//! Cut-and-reflect over a single fragment.
//!
//! A fold cuts the fragment's polygon along the crease line and reflects
//! the material on the named side onto the other side. Zero, one, or two
//! fragments come out: both kept when the crease truly splits the piece,
//! one when the crease misses it, none when only slivers remain.

use crate::geom::{cut, reflect, GeomCfg, Polygon, Segment};

use super::types::{Fold, Fragment};

/// Fold the material left of `crease` onto the right side.
pub fn fold_left(crease: &Segment, frag: &Fragment, cfg: GeomCfg) -> Vec<Fragment> {
    let (left, right) = cut(crease, &frag.poly, cfg);
    apply_fold(crease, frag, left, right, Fold::FoldLeft(*crease))
}

/// Fold the material right of `crease` onto the left side (mirror policy).
pub fn fold_right(crease: &Segment, frag: &Fragment, cfg: GeomCfg) -> Vec<Fragment> {
    let (left, right) = cut(crease, &frag.poly, cfg);
    apply_fold(crease, frag, right, left, Fold::FoldRight(*crease))
}

/// Shared body: `moved` is reflected across the crease (recording `fold`),
/// `kept` stays in place with the history untouched.
fn apply_fold(
    crease: &Segment,
    frag: &Fragment,
    moved: Polygon,
    kept: Polygon,
    fold: Fold,
) -> Vec<Fragment> {
    let mut out = Vec::with_capacity(2);
    if moved.is_degenerate() {
        // The crease had no material to move: the fragment passes through
        // untouched and no vacuous crease enters the history.
        if !kept.is_degenerate() {
            out.push(frag.clone());
        }
        return out;
    }
    let mut folded = Fragment {
        folds: frag.folds.clone(),
        poly: reflect(crease, &moved),
    };
    folded.record(fold);
    out.push(folded);
    if !kept.is_degenerate() {
        out.push(Fragment {
            folds: frag.folds.clone(),
            poly: kept,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::unit_square;
    use nalgebra::vector;

    fn base() -> Fragment {
        Fragment::base(unit_square())
    }

    #[test]
    fn split_produces_two_fragments() {
        let crease = Segment::new(vector![0.5, 0.0], vector![0.5, 1.0]);
        let out = fold_left(&crease, &base(), GeomCfg::default());
        assert_eq!(out.len(), 2);
        // Reflected half carries the crease, kept half does not.
        assert_eq!(out[0].folds.len(), 1);
        assert!(matches!(out[0].folds[0], Fold::FoldLeft(_)));
        assert!(out[1].folds.is_empty());
        // Both halves land right of the crease (direction +y).
        for f in &out {
            assert!(f.poly.pts.iter().all(|p| p.x >= 0.5 - 1e-12));
        }
    }

    #[test]
    fn empty_moved_side_is_a_no_op() {
        // Everything is right of a crease along the left square edge (+y).
        let crease = Segment::new(vector![0.0, 0.0], vector![0.0, 1.0]);
        let out = fold_left(&crease, &base(), GeomCfg::default());
        assert_eq!(out.len(), 1);
        assert!(out[0].folds.is_empty());
        assert_eq!(out[0].poly, unit_square());
    }

    #[test]
    fn empty_kept_side_reflects_everything() {
        let crease = Segment::new(vector![0.0, 0.0], vector![0.0, 1.0]);
        // Right-fold moves the whole square across the crease.
        let out = fold_right(&crease, &base(), GeomCfg::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].folds.len(), 1);
        assert!(matches!(out[0].folds[0], Fold::FoldRight(_)));
        assert!(out[0].poly.pts.iter().all(|p| p.x <= 1e-12));
        assert!((out[0].poly.area() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn fold_conserves_total_area() {
        let crease = Segment::new(vector![0.0, 0.25], vector![1.0, 0.75]);
        let out = fold_right(&crease, &base(), GeomCfg::default());
        let total: f64 = out.iter().map(|f| f.poly.area()).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }
}
