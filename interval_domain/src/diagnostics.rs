//! Precision-loss diagnostics for interval arithmetic.
//!
//! Domain operations never fail, but some of them give up precision: a bound
//! that overflows the machine integer saturates to an infinity, and a division
//! whose divisor may be zero widens to top. Those events are sound, yet an
//! analysis author usually wants to know where they happen.
//!
//! # Usage
//!
//! Diagnostics are disabled by default so the hot arithmetic paths stay quiet.
//! - `DiagnosticsCollector::enable()` - start collecting on the current thread
//! - `DiagnosticsCollector::disable()` - stop collecting
//! - `DiagnosticsCollector::take()` - retrieve and clear collected diagnostics
//!
//! ## Debug Logging
//!
//! Set `INTERVAL_DOMAIN_TRACE=1` to also write every emitted diagnostic to
//! stderr, whether or not collection is enabled.

use once_cell::sync::Lazy;
use std::cell::RefCell;

/// Environment variable that turns on stderr tracing of widening events.
pub const TRACE_ENV_VAR: &str = "INTERVAL_DOMAIN_TRACE";

/// Most diagnostics kept per thread between calls to `take` or `clear`.
/// Events past this limit are still traced but not collected.
pub const MAX_COLLECTED: usize = 4096;

static TRACE_ENABLED: Lazy<bool> = Lazy::new(|| std::env::var(TRACE_ENV_VAR).is_ok());

/// Reason a bound or a whole interval was widened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WideningReason {
    /// A finite sum left the representable range.
    AddOverflow,
    /// Negating the most negative finite value.
    NegOverflow,
    /// A finite product left the representable range.
    MulOverflow,
    /// A rounded quotient left the representable range.
    DivOverflow,
    /// The divisor interval contains zero in its interior.
    DivisorMayBeZero,
}

impl std::fmt::Display for WideningReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WideningReason::AddOverflow => write!(f, "addition overflowed the machine integer"),
            WideningReason::NegOverflow => write!(f, "negation overflowed the machine integer"),
            WideningReason::MulOverflow => {
                write!(f, "multiplication overflowed the machine integer")
            }
            WideningReason::DivOverflow => {
                write!(f, "division overflowed the machine integer")
            }
            WideningReason::DivisorMayBeZero => write!(f, "divisor may be zero"),
        }
    }
}

/// A single widening event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WideningDiagnostic {
    /// Why precision was lost.
    pub reason: WideningReason,
    /// Domain operation that lost it (`"add"`, `"div"`, ...).
    pub operation: &'static str,
    /// Rendered bound or interval that was produced instead.
    pub widened_to: String,
}

impl WideningDiagnostic {
    /// Create a new diagnostic.
    pub fn new(reason: WideningReason, operation: &'static str) -> Self {
        Self {
            reason,
            operation,
            widened_to: String::new(),
        }
    }

    /// Record what the result was widened to.
    pub fn with_widened_to(mut self, widened_to: impl Into<String>) -> Self {
        self.widened_to = widened_to.into();
        self
    }
}

impl std::fmt::Display for WideningDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "interval widening in {}: {}", self.operation, self.reason)?;
        if !self.widened_to.is_empty() {
            write!(f, " -> {}", self.widened_to)?;
        }
        Ok(())
    }
}

thread_local! {
    static DIAGNOSTICS_ENABLED: RefCell<bool> = const { RefCell::new(false) };
    static DIAGNOSTICS: RefCell<Vec<WideningDiagnostic>> = const { RefCell::new(Vec::new()) };
}

/// Collector for widening diagnostics.
///
/// Uses thread-local storage, so concurrent analyses on different threads
/// never see each other's events. Domain results never depend on it.
#[derive(Debug)]
pub struct DiagnosticsCollector;

impl DiagnosticsCollector {
    /// Enable diagnostics collection on the current thread.
    ///
    /// Collected events stay buffered until `take` or `clear`, up to
    /// [`MAX_COLLECTED`] of them.
    pub fn enable() {
        DIAGNOSTICS_ENABLED.with(|enabled| {
            *enabled.borrow_mut() = true;
        });
    }

    /// Disable diagnostics collection on the current thread.
    pub fn disable() {
        DIAGNOSTICS_ENABLED.with(|enabled| {
            *enabled.borrow_mut() = false;
        });
    }

    /// Check if diagnostics collection is enabled.
    pub fn is_enabled() -> bool {
        DIAGNOSTICS_ENABLED.with(|enabled| *enabled.borrow())
    }

    /// Add a diagnostic to the collection (if enabled and not full).
    pub fn emit(diagnostic: WideningDiagnostic) {
        if *TRACE_ENABLED {
            trace(format_args!("{diagnostic}"));
        }
        if Self::is_enabled() {
            DIAGNOSTICS.with(|diags| {
                let mut diags = diags.borrow_mut();
                if diags.len() < MAX_COLLECTED {
                    diags.push(diagnostic);
                }
            });
        }
    }

    /// Take all collected diagnostics, clearing the collection.
    pub fn take() -> Vec<WideningDiagnostic> {
        DIAGNOSTICS.with(|diags| std::mem::take(&mut *diags.borrow_mut()))
    }

    /// Clear all collected diagnostics without returning them.
    pub fn clear() {
        DIAGNOSTICS.with(|diags| {
            diags.borrow_mut().clear();
        });
    }

    /// Get the number of collected diagnostics.
    pub fn count() -> usize {
        DIAGNOSTICS.with(|diags| diags.borrow().len())
    }
}

fn trace(args: std::fmt::Arguments<'_>) {
    use std::io::Write;
    let _ = writeln!(std::io::stderr(), "{args}");
}

/// Record a widening event.
///
/// Skips building the rendered result when nobody is listening.
pub(crate) fn emit_widening(
    reason: WideningReason,
    operation: &'static str,
    widened_to: impl FnOnce() -> String,
) {
    if *TRACE_ENABLED || DiagnosticsCollector::is_enabled() {
        DiagnosticsCollector::emit(
            WideningDiagnostic::new(reason, operation).with_widened_to(widened_to()),
        );
    }
}
