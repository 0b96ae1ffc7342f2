//! Machine integer types the interval domain is generic over.
//!
//! Every finite bound in the domain is a value of one fixed-width signed
//! integer type. `DomainInt` gathers the num-traits bounds the arithmetic
//! needs (checked add/mul/neg/div) so the rest of the crate can stay generic
//! without repeating them.

use num_traits::{CheckedNeg, CheckedRem, PrimInt, Signed};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A fixed-width signed machine integer usable as a finite interval bound.
pub trait DomainInt:
    PrimInt + Signed + CheckedNeg + CheckedRem + Display + Debug + Hash + Send + Sync + 'static
{
    /// Exact quotient rounded to the nearest integer, ties away from zero.
    ///
    /// Returns `None` when `rhs` is zero or the quotient is not representable
    /// (`MIN / -1`).
    fn checked_div_round(self, rhs: Self) -> Option<Self> {
        let zero = Self::zero();
        let quotient = self.checked_div(&rhs)?;
        let remainder = self.checked_rem(&rhs)?;
        if remainder == zero {
            return Some(quotient);
        }

        // |remainder| < |rhs|, so neither side below can overflow.
        let rem_abs = remainder.abs();
        let rest = if rhs > zero {
            rhs - rem_abs
        } else {
            -(rhs + rem_abs)
        };
        if rem_abs < rest {
            return Some(quotient);
        }

        if (self < zero) != (rhs < zero) {
            quotient.checked_sub(&Self::one())
        } else {
            quotient.checked_add(&Self::one())
        }
    }
}

macro_rules! impl_domain_int {
    ($($t:ty),*) => {
        $(
            impl DomainInt for $t {}
        )*
    };
}

impl_domain_int!(i8, i16, i32, i64, i128, isize);
