//! The interval value type and its lattice constants.
//!
//! An `Interval` is a pair of extended-integer bounds. The lattice is:
//!
//! ```text
//! full()   = [-inf,+inf]   (top: any value)
//!   ↑
//! [l, u]   with l <= u
//!   ↑
//! empty()  = [+inf,-inf]   (bottom: no value, unreachable)
//! ```
//!
//! Bottom deliberately violates `lower <= upper` so it stays distinguishable
//! from every ordinary interval; each operation checks for it before touching
//! the bounds.
//!
//! # Module structure
//!
//! - `join`: least upper bound
//! - `arith`: negation, addition, subtraction, multiplication, division
//! - `relational`: three-valued `lt`, `gt`, `eq`, `ne`

pub mod arith;
pub mod join;
pub mod relational;

use crate::bound::Bound;
use crate::error::IntervalError;
use crate::num::DomainInt;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A range of possible values of a program expression.
///
/// Equality is structural on the bound pair. Intervals are small `Copy`
/// values with no identity of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval<T = i32> {
    lower: Bound<T>,
    upper: Bound<T>,
}

impl<T: DomainInt> Interval<T> {
    /// Build an interval without checking `lower <= upper`.
    ///
    /// Passing an inverted pair other than `(PosInf, NegInf)` yields an
    /// interval whose behaviour under later operations is unspecified. Prefer
    /// [`Interval::new`] at trust boundaries.
    pub fn make(lower: impl Into<Bound<T>>, upper: impl Into<Bound<T>>) -> Self {
        Interval {
            lower: lower.into(),
            upper: upper.into(),
        }
    }

    /// Build an interval, rejecting `lower > upper`.
    ///
    /// Use [`Interval::empty`] for the unreachable interval.
    pub fn new(
        lower: impl Into<Bound<T>>,
        upper: impl Into<Bound<T>>,
    ) -> Result<Self, IntervalError> {
        let (lower, upper) = (lower.into(), upper.into());
        if lower > upper {
            return Err(IntervalError::inverted(lower, upper));
        }
        Ok(Interval { lower, upper })
    }

    /// Finite range `[lo, hi]`.
    pub fn range(lo: T, hi: T) -> Result<Self, IntervalError> {
        Self::new(lo, hi)
    }

    /// The single value `[n, n]`.
    pub fn singleton(n: T) -> Self {
        Self::make(n, n)
    }

    /// Top: any value.
    pub fn full() -> Self {
        Self::make(Bound::NegInf, Bound::PosInf)
    }

    /// Bottom: no value.
    pub fn empty() -> Self {
        Self::make(Bound::PosInf, Bound::NegInf)
    }

    /// `[0, 1]`, the "unknown" boolean.
    pub fn unit() -> Self {
        Self::make(T::zero(), T::one())
    }

    /// Definitely false, `[0, 0]`.
    pub fn definitely_false() -> Self {
        Self::singleton(T::zero())
    }

    /// Definitely true, `[1, 1]`.
    pub fn definitely_true() -> Self {
        Self::singleton(T::one())
    }

    /// Lower bound.
    pub fn lower(self) -> Bound<T> {
        self.lower
    }

    /// Upper bound.
    pub fn upper(self) -> Bound<T> {
        self.upper
    }

    /// Equal to `full()`.
    pub fn is_top(self) -> bool {
        self == Self::full()
    }

    /// Equal to `empty()`.
    pub fn is_bottom(self) -> bool {
        self == Self::empty()
    }

    /// A single finite value.
    pub fn is_singleton(self) -> bool {
        self.lower.is_finite() && self.lower == self.upper
    }

    /// Whether `n` is one of the values this interval admits.
    pub fn contains(self, n: T) -> bool {
        let n = Bound::Finite(n);
        self.lower <= n && n <= self.upper
    }

    /// Any bound is an infinity. Bottom counts, since both of its bounds are.
    pub fn has_infinite_bound(self) -> bool {
        self.lower.is_infinite() || self.upper.is_infinite()
    }

    /// Decode a three-valued comparison result.
    ///
    /// Returns `Some(false)` for `[0,0]`, `Some(true)` for `[1,1]` and `None`
    /// for anything else, in particular `unit()`.
    pub fn as_truth(self) -> Option<bool> {
        if self == Self::definitely_false() {
            Some(false)
        } else if self == Self::definitely_true() {
            Some(true)
        } else {
            None
        }
    }

    /// Encode a known boolean as `[0,0]` or `[1,1]`.
    pub fn from_truth(value: bool) -> Self {
        if value {
            Self::definitely_true()
        } else {
            Self::definitely_false()
        }
    }

    /// See [`join::lub`].
    pub fn lub(self, other: Self) -> Self {
        join::lub(self, other)
    }
}

impl<T: DomainInt> Default for Interval<T> {
    /// Bottom, the identity of `lub`, so folds over `lub` can start from it.
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: DomainInt> From<T> for Interval<T> {
    fn from(value: T) -> Self {
        Self::singleton(value)
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.lower, self.upper)
    }
}

/// Free-function form of [`Interval::make`].
pub fn make<T: DomainInt>(lower: impl Into<Bound<T>>, upper: impl Into<Bound<T>>) -> Interval<T> {
    Interval::make(lower, upper)
}

/// Lower bound accessor.
pub fn lower<T: DomainInt>(i: Interval<T>) -> Bound<T> {
    i.lower()
}

/// Upper bound accessor.
pub fn upper<T: DomainInt>(i: Interval<T>) -> Bound<T> {
    i.upper()
}

/// Top, `[-inf,+inf]`.
pub fn full<T: DomainInt>() -> Interval<T> {
    Interval::full()
}

/// Bottom, `[+inf,-inf]`.
pub fn empty<T: DomainInt>() -> Interval<T> {
    Interval::empty()
}

/// Unknown truth value, `[0,1]`.
pub fn unit<T: DomainInt>() -> Interval<T> {
    Interval::unit()
}

/// Diagnostic rendering `"[L,U]"` with `-inf`/`+inf` for infinite bounds.
///
/// Nothing parses this format back.
pub fn str<T: DomainInt>(i: Interval<T>) -> String {
    i.to_string()
}

macro_rules! impl_binary_operator {
    ($trait_name:ident, $method:ident, $func:path) => {
        impl<T: DomainInt> std::ops::$trait_name for Interval<T> {
            type Output = Interval<T>;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                $func(self, rhs)
            }
        }
    };
}

impl_binary_operator!(Add, add, arith::add);
impl_binary_operator!(Sub, sub, arith::sub);
impl_binary_operator!(Mul, mul, arith::mul);
impl_binary_operator!(Div, div, arith::div);

impl<T: DomainInt> std::ops::Neg for Interval<T> {
    type Output = Interval<T>;

    #[inline]
    fn neg(self) -> Self::Output {
        arith::neg(self)
    }
}
