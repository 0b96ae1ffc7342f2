//! Least upper bound.
//!
//! Used by the driving analysis at control-flow merge points.

use super::Interval;
use crate::bound::Bound;
use crate::num::DomainInt;

/// Join (⊔): the smallest interval containing both operands.
///
/// The cases are tried in order and only ever look at the extremes of `l`
/// before those of `r`:
///
/// ```text
/// lub(full(), r)                 = full()
/// lub(empty(), r)                = r
/// lub([-inf, a], [b, +inf])      = full()
/// lub([-inf, a], [b, c])         = [-inf, max(a, c)]
/// lub([a, +inf], [b, c])         = [min(a, b), +inf]
/// lub([a, b], [c, d])            = [min(a, c), max(b, d)]
/// ```
///
/// Because `min`/`max` run over the extended ordering, the left-first
/// dispatch agrees with the symmetric join on well-formed operands,
/// including when `r` is bottom.
pub fn lub<T: DomainInt>(l: Interval<T>, r: Interval<T>) -> Interval<T> {
    if l.is_top() {
        Interval::full()
    } else if l.is_bottom() {
        r
    } else if l.lower == Bound::NegInf && r.upper == Bound::PosInf {
        Interval::full()
    } else if l.lower == Bound::NegInf {
        Interval::make(Bound::NegInf, l.upper.max(r.upper))
    } else if l.upper == Bound::PosInf {
        Interval::make(l.lower.min(r.lower), Bound::PosInf)
    } else {
        Interval::make(l.lower.min(r.lower), l.upper.max(r.upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(lo: i32, hi: i32) -> Interval {
        Interval::make(lo, hi)
    }

    #[test]
    fn test_lub_bottom_is_identity() {
        assert_eq!(lub(Interval::empty(), iv(3, 4)), iv(3, 4));
        assert_eq!(lub(iv(3, 4), Interval::empty()), iv(3, 4));
        assert_eq!(
            lub(Interval::<i32>::empty(), Interval::empty()),
            Interval::empty()
        );
    }

    #[test]
    fn test_lub_top_is_absorbing() {
        assert_eq!(lub(Interval::full(), iv(3, 4)), Interval::full());
        assert_eq!(lub(iv(3, 4), Interval::full()), Interval::full());
        assert_eq!(lub(Interval::full(), Interval::empty()), Interval::<i32>::full());
    }

    #[test]
    fn test_lub_finite_hull() {
        assert_eq!(lub(iv(1, 2), iv(5, 9)), iv(1, 9));
        assert_eq!(lub(iv(-4, 0), iv(-1, 3)), iv(-4, 3));
        assert_eq!(lub(iv(2, 8), iv(3, 4)), iv(2, 8));
    }

    #[test]
    fn test_lub_half_open() {
        let below = Interval::<i32>::make(Bound::NegInf, 3);
        let above = Interval::<i32>::make(5, Bound::PosInf);
        assert_eq!(lub(below, iv(1, 10)), Interval::make(Bound::NegInf, 10));
        assert_eq!(lub(above, iv(1, 2)), Interval::make(1, Bound::PosInf));
        assert_eq!(lub(below, above), Interval::full());
    }

    #[test]
    fn test_lub_argument_order_takes_different_branches() {
        // [-inf,3] first hits the "lower(l) is -inf" branches; [5,+inf]
        // first hits the "upper(l) is +inf" branch. The results agree.
        let below = Interval::<i32>::make(Bound::NegInf, 3);
        let above = Interval::<i32>::make(5, Bound::PosInf);
        assert_eq!(lub(below, above), lub(above, below));

        // Left operand half-open, right finite, and the reverse.
        assert_eq!(lub(below, iv(7, 8)), lub(iv(7, 8), below));
        assert_eq!(lub(above, iv(-7, 0)), lub(iv(-7, 0), above));

        // Degenerate infinite points.
        let neg_point = Interval::<i32>::make(Bound::NegInf, Bound::NegInf);
        let pos_point = Interval::<i32>::make(Bound::PosInf, Bound::PosInf);
        assert_eq!(lub(neg_point, pos_point), Interval::full());
        assert_eq!(lub(pos_point, neg_point), Interval::full());
    }
}
