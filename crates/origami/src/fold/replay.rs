//! Transform replay: reconstruct a fragment's pre-fold shape, or re-derive
//! a shape from a base, by walking the recorded history.
//!
//! Both walks process the history oldest-to-newest and share the per-step
//! formulas: a recorded `Translate(v)` contributes a translate by `-v`, and
//! a recorded crease contributes a reflection across the same segment
//! (reflection is self-inverse). Unfolding and replaying deliberately use
//! the identical composition order; callers relying on this symmetry should
//! not be handed a "corrected" reverse-order variant.

use crate::geom::{reflect, Polygon};

use super::types::{Fold, Fragment};

impl Fragment {
    /// Reconstruct this fragment's placement in the original unfolded sheet
    /// from its current shape.
    pub fn unfold(&self) -> Polygon {
        self.walk(self.poly.clone())
    }

    /// Re-derive a shape from `base` with the same walk as [`unfold`].
    pub fn replay(&self, base: &Polygon) -> Polygon {
        self.walk(base.clone())
    }

    /// Oldest-to-newest history walk (the list is stored most-recent-first,
    /// hence the reverse iteration).
    fn walk(&self, start: Polygon) -> Polygon {
        let mut shape = start;
        for fold in self.folds.iter().rev() {
            shape = match fold {
                Fold::Translate(v) => shape.translate(-v),
                Fold::FoldLeft(seg) | Fold::FoldRight(seg) => reflect(seg, &shape),
            };
        }
        shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{unit_square, Segment};
    use nalgebra::vector;

    #[test]
    fn empty_history_is_identity() {
        let frag = Fragment::base(unit_square());
        assert_eq!(frag.unfold(), unit_square());
    }

    #[test]
    fn translate_is_undone() {
        let mut frag = Fragment::base(unit_square().translate(vector![0.25, -0.5]));
        frag.record(Fold::Translate(vector![0.25, -0.5]));
        let back = frag.unfold();
        for (p, q) in back.pts.iter().zip(unit_square().pts.iter()) {
            assert!((p - q).norm() < 1e-12);
        }
    }

    #[test]
    fn single_reflection_is_undone() {
        let seg = Segment::new(vector![0.5, 0.0], vector![0.5, 1.0]);
        let shape = crate::geom::reflect(&seg, &unit_square());
        let mut frag = Fragment::base(shape);
        frag.record(Fold::FoldLeft(seg));
        let back = frag.unfold();
        for (p, q) in back.pts.iter().zip(unit_square().pts.iter()) {
            assert!((p - q).norm() < 1e-12);
        }
    }

    #[test]
    fn walk_order_is_oldest_to_newest() {
        // Two creases that do not commute: the walk must apply the older
        // one first. History is most-recent-first, so `second` sits at
        // index 0 after both records.
        let first = Segment::new(vector![0.0, 0.0], vector![0.0, 1.0]); // x -> -x
        let second = Segment::new(vector![0.0, 0.0], vector![1.0, 1.0]); // swap x/y
        let mut frag = Fragment::base(Polygon::default());
        frag.record(Fold::FoldLeft(first));
        frag.record(Fold::FoldRight(second));
        let p = Polygon::new(vec![vector![2.0, 5.0], vector![3.0, 5.0], vector![2.0, 6.0]]);
        let out = frag.replay(&p);
        // Oldest first: (2,5) -> (-2,5) -> (5,-2).
        assert!((out.pts[0] - vector![5.0, -2.0]).norm() < 1e-12);
    }

    #[test]
    fn replay_matches_unfold_formulas() {
        let seg = Segment::new(vector![0.2, 0.0], vector![0.2, 1.0]);
        let mut frag = Fragment::base(unit_square());
        frag.record(Fold::Translate(vector![0.1, 0.1]));
        frag.record(Fold::FoldRight(seg));
        // Same history, same walk: replaying the current shape equals unfold.
        let via_replay = frag.replay(&frag.poly.clone());
        assert_eq!(frag.unfold(), via_replay);
    }
}
