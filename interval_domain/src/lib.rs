//! Integer interval abstract domain.
//!
//! Value-range analyses model each program value as an interval of machine
//! integers extended with -inf and +inf. This crate provides that domain as a
//! `Copy` value type and a set of pure, total functions over it:
//!
//! - Lattice: `full()` (top), `empty()` (bottom), `unit()` and `lub`
//! - Arithmetic: `neg`, `add`, `sub`, `mul`, `div`, saturating instead of
//!   wrapping when a bound overflows
//! - Relational: `lt`, `gt`, `eq`, `ne`, answering definitely-true `[1,1]`,
//!   definitely-false `[0,0]` or unknown `[0,1]`
//! - Rendering: `str`, e.g. `[-inf,+inf]`
//!
//! Parsing programs, walking control flow and fixpoint iteration belong to
//! the driving analysis, not to this crate.
//!
//! # Example
//! ```
//! use interval_domain::{add, lt, Bound, Interval};
//!
//! let x: Interval = Interval::make(1, 5);
//! let y = Interval::make(10, Bound::PosInf);
//! assert_eq!(add(x, y).to_string(), "[11,+inf]");
//! assert_eq!(lt(x, y).as_truth(), Some(true));
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod bound;
pub mod diagnostics;
pub mod error;
pub mod interval;
pub mod num;

pub use bound::Bound;
pub use diagnostics::{DiagnosticsCollector, WideningDiagnostic, WideningReason};
pub use error::IntervalError;
pub use interval::arith::{add, div, mul, neg, sub};
pub use interval::join::lub;
pub use interval::relational::{eq, gt, lt, ne};
pub use interval::{empty, full, lower, make, str, unit, upper, Interval};
pub use num::DomainInt;
