//! Overflow-safe interval arithmetic.
//!
//! Every operation checks for bottom first. Bound arithmetic never wraps: an
//! out-of-range result saturates to the infinity on its side, which keeps the
//! result a sound over-approximation.

use super::Interval;
use crate::bound::{checked_add_saturating, checked_div_saturating, Bound};
use crate::diagnostics::{emit_widening, WideningReason};
use crate::num::DomainInt;

/// Interval of negated values.
pub fn neg<T: DomainInt>(i: Interval<T>) -> Interval<T> {
    let (lo, hi) = (i.lower, i.upper);
    match (lo, hi) {
        (Bound::NegInf, Bound::PosInf) => Interval::full(),
        (Bound::PosInf, Bound::NegInf) => Interval::empty(),
        (Bound::NegInf, Bound::NegInf) => Interval::make(Bound::PosInf, Bound::PosInf),
        (Bound::PosInf, Bound::PosInf) => Interval::make(Bound::NegInf, Bound::NegInf),
        (_, Bound::PosInf) => Interval::make(Bound::NegInf, lo.saturating_neg()),
        (Bound::NegInf, _) => Interval::make(hi.saturating_neg(), Bound::PosInf),
        _ => {
            let (a, b) = (hi.saturating_neg(), lo.saturating_neg());
            Interval::make(a.min(b), a.max(b))
        }
    }
}

/// Interval sum. Each bound is computed independently.
pub fn add<T: DomainInt>(l: Interval<T>, r: Interval<T>) -> Interval<T> {
    if l.is_bottom() || r.is_bottom() {
        return Interval::empty();
    }

    let lower = match (l.lower, r.lower) {
        (Bound::NegInf, _) | (_, Bound::NegInf) => Bound::NegInf,
        (Bound::PosInf, _) | (_, Bound::PosInf) => Bound::PosInf,
        (Bound::Finite(x), Bound::Finite(y)) => checked_add_saturating(x, y),
    };

    let upper = match (l.upper, r.upper) {
        (Bound::PosInf, _) | (_, Bound::PosInf) => Bound::PosInf,
        (Bound::NegInf, _) | (_, Bound::NegInf) => Bound::NegInf,
        (Bound::Finite(x), Bound::Finite(y)) => checked_add_saturating(x, y),
    };

    Interval::make(lower, upper)
}

/// `l - r`, computed as `l + (-r)`.
pub fn sub<T: DomainInt>(l: Interval<T>, r: Interval<T>) -> Interval<T> {
    add(l, neg(r))
}

/// Interval product.
///
/// The extremes of `x * y` over a box are attained at its corners, so the
/// result spans the smallest and largest of the four corner products.
pub fn mul<T: DomainInt>(l: Interval<T>, r: Interval<T>) -> Interval<T> {
    if l.is_bottom() || r.is_bottom() {
        return Interval::empty();
    }

    let corners = [
        l.lower.saturating_mul(r.lower),
        l.lower.saturating_mul(r.upper),
        l.upper.saturating_mul(r.lower),
        l.upper.saturating_mul(r.upper),
    ];
    hull(corners)
}

/// Interval quotient.
///
/// A divisor that excludes zero scales `l` by its reciprocal interval. A
/// divisor with zero as an endpoint is open-ended on that side. A divisor
/// with zero strictly inside could be exactly zero, so the result is widened
/// to `l * full()`.
pub fn div<T: DomainInt>(l: Interval<T>, r: Interval<T>) -> Interval<T> {
    if l.is_bottom() || r.is_bottom() {
        return Interval::empty();
    }

    let zero = Bound::zero();
    let (r_lo, r_hi) = (r.lower, r.upper);

    if (r_lo < zero && r_hi < zero) || (r_lo > zero && r_hi > zero) {
        return scale(l, Reciprocal::of(r_hi), Reciprocal::of(r_lo));
    }
    if r_hi == zero {
        return scale(l, Reciprocal::Infinite { negative: true }, Reciprocal::of(r_lo));
    }
    if r_lo == zero {
        return scale(l, Reciprocal::of(r_hi), Reciprocal::Infinite { negative: false });
    }

    let widened = mul(l, Interval::full());
    emit_widening(WideningReason::DivisorMayBeZero, "div", || widened.to_string());
    widened
}

/// One end of the reciprocal interval `[1/hi, 1/lo]` of a divisor.
#[derive(Clone, Copy, Debug)]
enum Reciprocal<T> {
    /// `1 / d` for a nonzero bound `d`. Zero when `d` is an infinity.
    Of(Bound<T>),
    /// `1 / 0` approached from below or above.
    Infinite { negative: bool },
}

impl<T: DomainInt> Reciprocal<T> {
    fn of(d: Bound<T>) -> Self {
        if d.is_zero() {
            Reciprocal::Infinite { negative: false }
        } else {
            Reciprocal::Of(d)
        }
    }

    /// `n * self`, rounded to the nearest integer. Zero times anything is zero.
    fn times(self, n: Bound<T>) -> Bound<T> {
        if n.is_zero() {
            return Bound::zero();
        }
        match (n, self) {
            (_, Reciprocal::Infinite { negative }) => Bound::infinity(n.is_negative() != negative),
            (_, Reciprocal::Of(d)) if d.is_infinite() => Bound::zero(),
            (Bound::Finite(x), Reciprocal::Of(Bound::Finite(d))) => checked_div_saturating(x, d),
            (_, Reciprocal::Of(d)) => Bound::infinity(n.is_negative() != d.is_negative()),
        }
    }
}

/// Multiply `l` by the reciprocal interval `[d_lo, d_hi]`. Finite corners are
/// exact integer quotients rounded to the nearest integer.
fn scale<T: DomainInt>(l: Interval<T>, d_lo: Reciprocal<T>, d_hi: Reciprocal<T>) -> Interval<T> {
    hull([
        d_lo.times(l.lower),
        d_hi.times(l.lower),
        d_lo.times(l.upper),
        d_hi.times(l.upper),
    ])
}

fn hull<T: DomainInt>(bounds: [Bound<T>; 4]) -> Interval<T> {
    let [a, b, c, d] = bounds;
    Interval::make(a.min(b).min(c.min(d)), a.max(b).max(c.max(d)))
}
