//! Performance instrumentation
//!
//! [`PerformanceSpan`] is an RAII timer that logs its duration on drop, subject to the
//! process-wide switches installed by [`crate::init_global_tracing`]. The `record_*`
//! functions emit one standardized debug event per engine phase.
//!
//! ```rust
//! use splitwave_tracing::performance::{record_precompute, PerformanceSpan};
//!
//! let span = PerformanceSpan::new("sieve_build", Some(100));
//! // ... work ...
//! drop(span); // logged only when it took at least 100μs
//!
//! record_precompute(3361, 0, 1200);
//! ```

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

static ENABLED: AtomicBool = AtomicBool::new(true);
// u64::MAX encodes "no global threshold"
static GLOBAL_THRESHOLD_US: AtomicU64 = AtomicU64::new(u64::MAX);

/// Set the process-wide performance switches
pub fn configure(enabled: bool, threshold_us: Option<u64>) {
    ENABLED.store(enabled, Ordering::Relaxed);
    GLOBAL_THRESHOLD_US.store(threshold_us.unwrap_or(u64::MAX), Ordering::Relaxed);
}

/// Whether performance spans currently log
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

fn global_threshold_us() -> Option<u64> {
    match GLOBAL_THRESHOLD_US.load(Ordering::Relaxed) {
        u64::MAX => None,
        threshold => Some(threshold),
    }
}

/// Times its own lifetime and logs the duration on drop.
///
/// Nothing is logged when performance tracing is disabled, or when the duration stays
/// below the span's threshold (falling back to the global threshold).
pub struct PerformanceSpan {
    name: String,
    threshold_us: Option<u64>,
    start_time: Instant,
    span: tracing::Span,
}

impl PerformanceSpan {
    /// Debug-level span; `threshold_us = None` defers to the global threshold
    pub fn new(name: impl Into<String>, threshold_us: Option<u64>) -> Self {
        let name = name.into();
        let span = tracing::debug_span!("perf", name = %name);
        Self::from_span(name, threshold_us, span)
    }

    /// Wrap a span the caller built (used by [`perf_span!`](crate::perf_span) to attach fields)
    pub fn from_span(name: impl Into<String>, threshold_us: Option<u64>, span: tracing::Span) -> Self {
        Self {
            name: name.into(),
            threshold_us,
            start_time: Instant::now(),
            span,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn threshold_us(&self) -> Option<u64> {
        self.threshold_us
    }

    pub fn elapsed_us(&self) -> u64 {
        self.start_time.elapsed().as_micros() as u64
    }

    fn should_log(&self, elapsed_us: u64) -> bool {
        is_enabled()
            && self
                .threshold_us
                .or_else(global_threshold_us)
                .is_none_or(|threshold| elapsed_us >= threshold)
    }
}

impl Drop for PerformanceSpan {
    fn drop(&mut self) {
        let elapsed_us = self.elapsed_us();
        if self.should_log(elapsed_us) {
            let _entered = self.span.enter();
            tracing::debug!(
                duration_us = elapsed_us,
                duration_ms = elapsed_us as f64 / 1000.0,
                "performance_span_complete"
            );
        }
    }
}

fn per_second(count: usize, duration_us: u64) -> f64 {
    if duration_us > 0 {
        (count as f64 / duration_us as f64) * 1_000_000.0
    } else {
        0.0
    }
}

/// Sieve construction for one `MAX_N`
pub fn record_sieve_build(max_n: u64, primes: u32, duration_us: u64) {
    tracing::debug!(
        event = "sieve_build",
        max_n = max_n,
        primes = primes,
        duration_us = duration_us,
        duration_ms = duration_us as f64 / 1000.0,
        "sieve_tables_built"
    );
}

/// One bulk classification pass
pub fn record_precompute(records: usize, dimension: usize, duration_us: u64) {
    tracing::debug!(
        event = "precompute",
        records = records,
        dimension = dimension,
        duration_us = duration_us,
        duration_ms = duration_us as f64 / 1000.0,
        records_per_sec = per_second(records, duration_us),
        "range_precomputed"
    );
}

/// Generic element throughput of a named operation
pub fn record_throughput(operation: &str, elements: usize, duration_us: u64) {
    let elements_per_sec = per_second(elements, duration_us);
    tracing::debug!(
        event = "throughput",
        operation = operation,
        elements = elements,
        duration_us = duration_us,
        elements_per_sec = elements_per_sec,
        kelems_per_sec = elements_per_sec / 1_000.0,
        "operation_throughput"
    );
}
