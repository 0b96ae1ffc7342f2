//! Three-valued comparisons.
//!
//! Each operator answers with a sub-interval of `{0, 1}`:
//! `[1,1]` definitely true, `[0,0]` definitely false, `unit()` unknown.
//!
//! A bottom operand answers unknown rather than bottom. The driving analysis
//! relies on that imprecision, so it is kept.

use super::Interval;
use crate::num::DomainInt;

/// `l < r`.
pub fn lt<T: DomainInt>(l: Interval<T>, r: Interval<T>) -> Interval<T> {
    if l.is_bottom() || r.is_bottom() {
        return Interval::unit();
    }
    if l.upper < r.lower {
        Interval::definitely_true()
    } else if l.lower > r.upper {
        Interval::definitely_false()
    } else {
        Interval::unit()
    }
}

/// `l > r`.
pub fn gt<T: DomainInt>(l: Interval<T>, r: Interval<T>) -> Interval<T> {
    if l.is_bottom() || r.is_bottom() {
        return Interval::unit();
    }
    if l.upper < r.lower {
        Interval::definitely_false()
    } else if l.lower > r.upper {
        Interval::definitely_true()
    } else {
        Interval::unit()
    }
}

/// `l == r`.
///
/// Equality is never proven against an open-ended range: any infinite bound
/// on either side answers unknown. Bottom has infinite bounds and is covered
/// by the same check.
pub fn eq<T: DomainInt>(l: Interval<T>, r: Interval<T>) -> Interval<T> {
    match finite_equality(l, r) {
        Some(known) => Interval::from_truth(known),
        None => Interval::unit(),
    }
}

/// `l != r`, the complement of [`eq`] on its definite answers.
pub fn ne<T: DomainInt>(l: Interval<T>, r: Interval<T>) -> Interval<T> {
    match finite_equality(l, r) {
        Some(known) => Interval::from_truth(!known),
        None => Interval::unit(),
    }
}

fn finite_equality<T: DomainInt>(l: Interval<T>, r: Interval<T>) -> Option<bool> {
    if l.has_infinite_bound() || r.has_infinite_bound() {
        return None;
    }
    if l == r && l.is_singleton() {
        Some(true)
    } else if l.upper < r.lower || l.lower > r.upper {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::Bound;

    fn iv(lo: i32, hi: i32) -> Interval {
        Interval::make(lo, hi)
    }

    #[test]
    fn test_lt() {
        assert_eq!(lt(iv(1, 1), iv(2, 2)), iv(1, 1));
        assert_eq!(lt(iv(5, 9), iv(1, 4)), iv(0, 0));
        assert_eq!(lt(iv(1, 5), iv(3, 3)), Interval::unit());
        // Touching ranges are not disjoint
        assert_eq!(lt(iv(1, 3), iv(3, 5)), Interval::unit());
    }

    #[test]
    fn test_gt() {
        assert_eq!(gt(iv(1, 1), iv(2, 2)), iv(0, 0));
        assert_eq!(gt(iv(5, 9), iv(1, 4)), iv(1, 1));
        assert_eq!(gt(iv(1, 5), iv(3, 3)), Interval::unit());
    }

    #[test]
    fn test_lt_gt_with_infinite_bounds() {
        let below = Interval::<i32>::make(Bound::NegInf, 0);
        let above = Interval::<i32>::make(1, Bound::PosInf);
        assert_eq!(lt(below, above), iv(1, 1));
        assert_eq!(gt(above, below), iv(1, 1));
        assert_eq!(lt(Interval::full(), iv(1, 1)), Interval::unit());
    }

    #[test]
    fn test_bottom_is_unknown() {
        let bottom = Interval::<i32>::empty();
        assert_eq!(lt(bottom, iv(1, 1)), Interval::unit());
        assert_eq!(gt(iv(1, 1), bottom), Interval::unit());
        assert_eq!(eq(bottom, bottom), Interval::unit());
        assert_eq!(ne(bottom, iv(1, 1)), Interval::unit());
    }

    #[test]
    fn test_eq() {
        assert_eq!(eq(iv(4, 4), iv(4, 4)), iv(1, 1));
        assert_eq!(eq(iv(1, 2), iv(5, 6)), iv(0, 0));
        assert_eq!(eq(iv(1, 5), iv(3, 8)), Interval::unit());
        // Same range but more than one value
        assert_eq!(eq(iv(1, 2), iv(1, 2)), Interval::unit());
    }

    #[test]
    fn test_eq_infinite_bound_is_unknown() {
        let above = Interval::<i32>::make(10, Bound::PosInf);
        // Disjoint, but an open-ended operand is never decided
        assert_eq!(eq(above, iv(1, 1)), Interval::unit());
        assert_eq!(eq(iv(1, 1), Interval::full()), Interval::unit());
    }

    #[test]
    fn test_ne() {
        assert_eq!(ne(iv(4, 4), iv(4, 4)), iv(0, 0));
        assert_eq!(ne(iv(1, 2), iv(5, 6)), iv(1, 1));
        assert_eq!(ne(iv(1, 5), iv(3, 8)), Interval::unit());
        assert_eq!(
            ne(Interval::make(Bound::NegInf, 0), iv(5, 5)),
            Interval::unit()
        );
    }
}
