//! Extended integers: machine integers plus -inf and +inf.
//!
//! The ordering is `NegInf < Finite(_) < PosInf`, with finite values ordered as
//! integers. Because infinity is its own variant, a finite value equal to
//! `T::max_value()` is never confused with `PosInf`.
//!
//! Scalar arithmetic here never wraps. A result that does not fit the machine
//! integer saturates to the infinity matching the sign of the true result and
//! records a widening diagnostic.

use crate::diagnostics::{emit_widening, WideningReason};
use crate::num::DomainInt;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One end of an interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Bound<T> {
    /// Minus infinity
    NegInf,
    /// An ordinary machine integer
    Finite(T),
    /// Plus infinity
    PosInf,
}

impl<T: DomainInt> Bound<T> {
    /// Zero as a bound.
    pub fn zero() -> Self {
        Bound::Finite(T::zero())
    }

    /// Returns `true` for `NegInf` and `PosInf`.
    pub fn is_infinite(self) -> bool {
        !self.is_finite()
    }

    /// Returns `true` for `Finite(_)`.
    pub fn is_finite(self) -> bool {
        matches!(self, Bound::Finite(_))
    }

    /// The finite value, if any.
    pub fn finite(self) -> Option<T> {
        match self {
            Bound::Finite(n) => Some(n),
            _ => None,
        }
    }

    /// Strictly below zero.
    pub fn is_negative(self) -> bool {
        match self {
            Bound::NegInf => true,
            Bound::Finite(n) => n < T::zero(),
            Bound::PosInf => false,
        }
    }

    /// Exactly zero.
    pub fn is_zero(self) -> bool {
        self == Self::zero()
    }

    /// Negate, mapping each infinity to the other.
    ///
    /// `-T::min_value()` is not representable and saturates to `PosInf`.
    pub fn saturating_neg(self) -> Self {
        match self {
            Bound::NegInf => Bound::PosInf,
            Bound::PosInf => Bound::NegInf,
            Bound::Finite(n) => match n.checked_neg() {
                Some(v) => Bound::Finite(v),
                None => {
                    emit_widening(WideningReason::NegOverflow, "neg", || "+inf".to_string());
                    Bound::PosInf
                }
            },
        }
    }

    /// Multiply two bounds.
    ///
    /// Zero times an infinity is zero; any other product with an infinity
    /// follows the sign rule. Finite products saturate on overflow.
    pub fn saturating_mul(self, other: Self) -> Self {
        match (self, other) {
            (Bound::Finite(a), Bound::Finite(b)) => checked_mul_saturating(a, b),
            (a, b) if a.is_zero() || b.is_zero() => Self::zero(),
            (a, b) => Self::infinity(a.is_negative() != b.is_negative()),
        }
    }

    /// The infinity on the negative or positive side.
    pub(crate) fn infinity(negative: bool) -> Self {
        if negative {
            Bound::NegInf
        } else {
            Bound::PosInf
        }
    }
}

impl<T> From<T> for Bound<T> {
    fn from(value: T) -> Self {
        Bound::Finite(value)
    }
}

impl<T: fmt::Display> fmt::Display for Bound<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::NegInf => write!(f, "-inf"),
            Bound::Finite(n) => write!(f, "{}", n),
            Bound::PosInf => write!(f, "+inf"),
        }
    }
}

/// Add two finite values, saturating to an infinity instead of wrapping.
///
/// Overflow is only possible when both operands share a sign, so the sign of
/// `x` picks the infinity.
pub fn checked_add_saturating<T: DomainInt>(x: T, y: T) -> Bound<T> {
    match x.checked_add(&y) {
        Some(sum) => Bound::Finite(sum),
        None => {
            let saturated = Bound::infinity(x < T::zero());
            emit_widening(WideningReason::AddOverflow, "add", || saturated.to_string());
            saturated
        }
    }
}

/// Multiply two finite values, saturating to an infinity instead of wrapping.
pub fn checked_mul_saturating<T: DomainInt>(x: T, y: T) -> Bound<T> {
    match x.checked_mul(&y) {
        Some(product) => Bound::Finite(product),
        None => {
            let saturated = Bound::infinity((x < T::zero()) != (y < T::zero()));
            emit_widening(WideningReason::MulOverflow, "mul", || saturated.to_string());
            saturated
        }
    }
}

/// Divide two finite values, rounding to the nearest integer with ties away
/// from zero. `MIN / -1` saturates to `PosInf`.
pub fn checked_div_saturating<T: DomainInt>(x: T, y: T) -> Bound<T> {
    match x.checked_div_round(y) {
        Some(quotient) => Bound::Finite(quotient),
        None => {
            let saturated = Bound::infinity((x < T::zero()) != (y < T::zero()));
            emit_widening(WideningReason::DivOverflow, "div", || saturated.to_string());
            saturated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extended_ordering() {
        assert!(Bound::<i32>::NegInf < Bound::Finite(i32::MIN));
        assert!(Bound::Finite(i32::MAX) < Bound::PosInf);
        assert!(Bound::Finite(-3) < Bound::Finite(2));
        assert_eq!(
            std::cmp::max(Bound::Finite(4), Bound::NegInf),
            Bound::Finite(4)
        );
    }

    #[test]
    fn test_finite_max_is_not_infinity() {
        assert_ne!(Bound::Finite(i32::MAX), Bound::PosInf);
        assert!(Bound::Finite(i32::MAX).is_finite());
    }

    #[test]
    fn test_add_saturates_instead_of_wrapping() {
        assert_eq!(checked_add_saturating(2i32, 3), Bound::Finite(5));
        assert_eq!(checked_add_saturating(i32::MAX - 1, 1), Bound::Finite(i32::MAX));
        assert_eq!(checked_add_saturating(i32::MAX - 1, i32::MAX - 1), Bound::PosInf);
        assert_eq!(checked_add_saturating(i32::MIN, -1), Bound::NegInf);
        assert_eq!(checked_add_saturating(i32::MIN, i32::MAX), Bound::Finite(-1));
    }

    #[test]
    fn test_mul_sign_combinations() {
        assert_eq!(checked_mul_saturating(6i8, 7), Bound::Finite(42));
        assert_eq!(checked_mul_saturating(100i8, 2), Bound::PosInf);
        assert_eq!(checked_mul_saturating(-100i8, -2), Bound::PosInf);
        assert_eq!(checked_mul_saturating(-100i8, 2), Bound::NegInf);
        assert_eq!(checked_mul_saturating(100i8, -2), Bound::NegInf);
        assert_eq!(checked_mul_saturating(-128i8, -1), Bound::PosInf);
        assert_eq!(checked_mul_saturating(-64i8, 2), Bound::Finite(-128));
    }

    #[test]
    fn test_mul_with_infinities() {
        let zero = Bound::<i32>::zero();
        assert_eq!(Bound::PosInf.saturating_mul(zero), zero);
        assert_eq!(zero.saturating_mul(Bound::NegInf), zero);
        assert_eq!(Bound::PosInf.saturating_mul(Bound::Finite(-2)), Bound::NegInf);
        assert_eq!(Bound::<i32>::NegInf.saturating_mul(Bound::NegInf), Bound::PosInf);
        assert_eq!(Bound::Finite(3i32).saturating_mul(Bound::PosInf), Bound::PosInf);
    }

    #[test]
    fn test_neg() {
        assert_eq!(Bound::<i32>::NegInf.saturating_neg(), Bound::PosInf);
        assert_eq!(Bound::<i32>::PosInf.saturating_neg(), Bound::NegInf);
        assert_eq!(Bound::Finite(5i32).saturating_neg(), Bound::Finite(-5));
        assert_eq!(Bound::Finite(i32::MIN).saturating_neg(), Bound::PosInf);
    }

    #[test]
    fn test_div_rounds_and_saturates() {
        assert_eq!(checked_div_saturating(10i32, 4), Bound::Finite(3));
        assert_eq!(checked_div_saturating(-10i32, 4), Bound::Finite(-3));
        assert_eq!(checked_div_saturating(9i32, 4), Bound::Finite(2));
        assert_eq!(checked_div_saturating(i8::MIN, -1), Bound::PosInf);
        assert_eq!(checked_div_saturating(i8::MIN, 1), Bound::Finite(i8::MIN));
    }

    #[test]
    fn test_div_exact_for_wide_integers() {
        assert_eq!(checked_div_saturating(i64::MAX, 1), Bound::Finite(i64::MAX));
        assert_eq!(
            checked_div_saturating((1i64 << 53) + 1, 1),
            Bound::Finite((1i64 << 53) + 1)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Bound::<i32>::NegInf.to_string(), "-inf");
        assert_eq!(Bound::<i32>::PosInf.to_string(), "+inf");
        assert_eq!(Bound::Finite(-12i32).to_string(), "-12");
    }
}
