//! Instrumentation shorthands
//!
//! The macros expand to `$crate::tracing` paths so callers only need this crate in scope.

/// Start a [`PerformanceSpan`](crate::performance::PerformanceSpan) with extra span fields.
///
/// ```rust
/// use splitwave_tracing::perf_span;
///
/// {
///     let _span = perf_span!("sieve_build", max_n = 1680u64);
///     // ... work ...
/// } // duration logged here
/// ```
#[macro_export]
macro_rules! perf_span {
    ($name:expr) => {{
        $crate::performance::PerformanceSpan::new($name, None)
    }};
    ($name:expr, $($field:tt = $value:expr),+ $(,)?) => {{
        let span = $crate::tracing::debug_span!("perf", name = $name, $($field = $value),+);
        $crate::performance::PerformanceSpan::from_span($name, None, span)
    }};
}

/// Emit a debug event tagged with `event = $name`
///
/// ```rust
/// use splitwave_tracing::perf_event;
///
/// perf_event!("table_rebuild", records = 3361usize, dimension = 2usize);
/// ```
#[macro_export]
macro_rules! perf_event {
    ($name:expr, $($field:tt = $value:expr),+ $(,)?) => {
        $crate::tracing::debug!(event = $name, $($field = $value),+)
    };
}

/// Evaluate a block and return `(result, duration_us)`, logging the duration
///
/// ```rust
/// use splitwave_tracing::timed_block;
///
/// let (sum, _duration_us) = timed_block!("sum", { (1..=100).sum::<i32>() });
/// assert_eq!(sum, 5050);
/// ```
#[macro_export]
macro_rules! timed_block {
    ($name:expr, $block:block) => {{
        let start = ::std::time::Instant::now();
        let result = $block;
        let duration_us = start.elapsed().as_micros() as u64;
        $crate::tracing::debug!(
            operation = $name,
            duration_us = duration_us,
            duration_ms = duration_us as f64 / 1000.0,
            "timed_block_complete"
        );
        (result, duration_us)
    }};
}
