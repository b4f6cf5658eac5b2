//! Search instrumentation (zero-cost when the `tracing` feature is disabled).
//!
//! Every public search entry point opens one span carrying the needle and
//! haystack dimensions, and emits one event once the scan is over with the
//! derived thresholds, the number of candidate placements and the outcome.

/// Open a debug-level span for a search over `$needle` inside `$haystack`.
///
/// Extra `key = value` fields are appended after the four dimension fields.
/// Without the `tracing` feature this yields a [`NoopSpan`] and the buffers
/// are not touched.
#[cfg(feature = "tracing")]
macro_rules! search_span {
    ($name:literal, $needle:expr, $haystack:expr $(, $key:ident = $value:expr)* $(,)?) => {
        tracing::debug_span!(
            $name,
            needle_width = $needle.width(),
            needle_height = $needle.height(),
            haystack_width = $haystack.width(),
            haystack_height = $haystack.height()
            $(, $key = $value)*
        )
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! search_span {
    ($name:literal, $needle:expr, $haystack:expr $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::trace::NoopSpan
    };
}

/// Record the end of a scan described by a `ScanPlan`.
///
/// Logs the plan's thresholds and candidate count plus the given outcome
/// fields. Without the feature the expressions are evaluated and dropped.
#[cfg(feature = "tracing")]
macro_rules! scan_event {
    ($plan:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::debug!(
            max_invalid_pixels = $plan.thresholds.max_invalid_pixels,
            tolerance_squared = $plan.thresholds.tolerance_squared,
            candidates = $plan.candidates(),
            $($key = $value,)+
            "scan complete"
        )
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! scan_event {
    ($plan:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($plan.candidates(), $($value,)+);
    };
}

pub(crate) use scan_event;
pub(crate) use search_span;

/// Span guard returned by `search_span!` when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Mirrors `Span::entered()` so call sites need no `cfg`.
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
