//! Shared tracing setup for the splitwave workspace.
//!
//! Binaries, integration tests and benches install their `tracing` subscriber through this
//! crate so that filter resolution, output format and the performance-span switches behave
//! the same everywhere.

pub mod performance;

#[macro_use]
pub mod macros;

use std::env;
use std::error::Error;
use std::fmt;
#[doc(hidden)]
pub use tracing;
pub use tracing::{debug, error, info, trace, warn};

use tracing::Subscriber;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt as tracing_fmt, EnvFilter, Registry};

/// Crates whose spans the performance preset raises to debug
const ENGINE_TARGETS: &str = "splitwave_core=debug,splitwave_cli=debug";

/// How the shared subscriber should behave
#[derive(Clone, Debug)]
pub struct TracingConfig {
    /// Explicit filter directives (e.g. `splitwave_core=debug,info`). When absent the
    /// filter comes from `RUST_LOG`, then from [`TracingConfig::default_directive`].
    pub directives: Option<String>,
    /// Fallback directive when neither `directives` nor `RUST_LOG` yield a filter
    pub default_directive: String,
    /// Show event targets (module paths)
    pub include_targets: bool,
    /// ANSI colouring. Off for CI logs.
    pub ansi: bool,
    /// Span lifecycle events to emit
    pub span_events: FmtSpan,
    pub output: TracingOutput,
    /// When false, [`performance::PerformanceSpan`] guards never log
    pub enable_performance_tracing: bool,
    /// Minimum duration a performance span must reach before it is logged
    pub performance_threshold_us: Option<u64>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::for_local()
    }
}

impl TracingConfig {
    /// Pretty, coloured output for local development
    pub fn for_local() -> Self {
        Self {
            directives: None,
            default_directive: "info".to_string(),
            include_targets: true,
            ansi: true,
            span_events: FmtSpan::NONE,
            output: TracingOutput::Pretty,
            enable_performance_tracing: cfg!(debug_assertions),
            performance_threshold_us: None,
        }
    }

    /// JSON without ANSI for CI and log collection
    pub fn for_ci() -> Self {
        Self {
            directives: None,
            default_directive: "info".to_string(),
            include_targets: true,
            ansi: false,
            span_events: FmtSpan::NONE,
            output: TracingOutput::Json,
            enable_performance_tracing: false,
            performance_threshold_us: None,
        }
    }

    /// JSON with span close events and debug-level engine spans, for timing sieve builds
    /// and bulk precomputation.
    pub fn for_performance() -> Self {
        Self {
            directives: Some(ENGINE_TARGETS.to_string()),
            default_directive: "info".to_string(),
            include_targets: true,
            ansi: false,
            span_events: FmtSpan::CLOSE,
            output: TracingOutput::Json,
            enable_performance_tracing: true,
            performance_threshold_us: None,
        }
    }

    /// Compact stderr-friendly output whose default level follows a `-v` count:
    /// 0 → warn, 1 → info, 2 → debug, 3+ → trace.
    pub fn for_cli(verbosity: u8) -> Self {
        let default_directive = match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        Self {
            directives: None,
            default_directive: default_directive.to_string(),
            include_targets: verbosity >= 2,
            ansi: true,
            span_events: FmtSpan::NONE,
            output: TracingOutput::Compact,
            enable_performance_tracing: verbosity >= 2,
            performance_threshold_us: None,
        }
    }

    /// Start from `base` and apply environment overrides.
    ///
    /// # Environment Variables
    ///
    /// - `SPLITWAVE_TRACING_PROFILE` - replaces `base` with a preset: `local`, `ci` or `performance`
    /// - `SPLITWAVE_TRACING_DIRECTIVES` - filter directives
    /// - `SPLITWAVE_TRACING_FORMAT` - `pretty`, `compact` or `json`
    /// - `SPLITWAVE_PERF_TRACING` - `true`/`1`/`yes` enables performance spans, anything else disables
    /// - `SPLITWAVE_PERF_THRESHOLD_US` - minimum logged performance span duration
    pub fn with_env_overrides(base: Self) -> Self {
        let mut config = match env::var("SPLITWAVE_TRACING_PROFILE")
            .map(|profile| profile.to_ascii_lowercase())
            .as_deref()
        {
            Ok("local") => Self::for_local(),
            Ok("ci") => Self::for_ci(),
            Ok("performance") => Self::for_performance(),
            _ => base,
        };

        if let Ok(directives) = env::var("SPLITWAVE_TRACING_DIRECTIVES") {
            if !directives.trim().is_empty() {
                config.directives = Some(directives);
            }
        }

        if let Ok(format) = env::var("SPLITWAVE_TRACING_FORMAT") {
            if let Some(parsed) = TracingOutput::from_env_value(&format) {
                config.output = parsed;
                if config.output == TracingOutput::Json {
                    config.ansi = false;
                }
            }
        }

        if let Ok(perf_tracing) = env::var("SPLITWAVE_PERF_TRACING") {
            config.enable_performance_tracing = perf_tracing.eq_ignore_ascii_case("true")
                || perf_tracing == "1"
                || perf_tracing.eq_ignore_ascii_case("yes");
        }

        if let Ok(threshold) = env::var("SPLITWAVE_PERF_THRESHOLD_US") {
            if let Ok(threshold_us) = threshold.trim().parse::<u64>() {
                config.performance_threshold_us = Some(threshold_us);
            }
        }

        config
    }

    /// [`TracingConfig::with_env_overrides`] on top of the local preset
    pub fn from_env() -> Self {
        Self::with_env_overrides(Self::for_local())
    }

    fn resolve_filter(&self) -> Result<EnvFilter, TracingSetupError> {
        if let Some(directives) = &self.directives {
            EnvFilter::try_new(directives).map_err(|err| TracingSetupError::InvalidFilter(err.to_string()))
        } else {
            Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_directive)))
        }
    }
}

/// Errors surfaced while configuring the shared subscriber
#[derive(Debug)]
pub enum TracingSetupError {
    /// The directive string could not be parsed
    InvalidFilter(String),
    /// A global subscriber is already installed
    SubscriberInit(tracing_subscriber::util::TryInitError),
}

impl fmt::Display for TracingSetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TracingSetupError::InvalidFilter(msg) => write!(f, "invalid tracing directive: {msg}"),
            TracingSetupError::SubscriberInit(err) => {
                write!(f, "failed to install global tracing subscriber: {err}")
            }
        }
    }
}

impl Error for TracingSetupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TracingSetupError::SubscriberInit(err) => Some(err),
            TracingSetupError::InvalidFilter(_) => None,
        }
    }
}

/// Build a subscriber from `config` without installing it
pub fn build_subscriber(config: &TracingConfig) -> Result<impl Subscriber + Send + Sync, TracingSetupError> {
    let (filter, fmt_layer) = subscriber_layers(config)?;
    Ok(Registry::default().with(fmt_layer).with(filter))
}

/// Filter and formatting layers for callers composing their own registry
pub fn subscriber_layers(
    config: &TracingConfig,
) -> Result<(EnvFilter, Box<dyn Layer<Registry> + Send + Sync>), TracingSetupError> {
    let filter = config.resolve_filter()?;
    let span_events = config.span_events.clone();

    // every layer writes to stderr so command output on stdout stays machine-readable
    let layer: Box<dyn Layer<Registry> + Send + Sync> = match config.output {
        TracingOutput::Compact => Box::new(
            tracing_fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_target(config.include_targets)
                .with_ansi(config.ansi)
                .with_span_events(span_events),
        ),
        TracingOutput::Pretty => Box::new(
            tracing_fmt::layer()
                .pretty()
                .with_writer(std::io::stderr)
                .with_target(config.include_targets)
                .with_ansi(config.ansi)
                .with_span_events(span_events),
        ),
        TracingOutput::Json => Box::new(
            tracing_fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(config.include_targets)
                .with_span_events(span_events)
                .with_ansi(false),
        ),
    };

    Ok((filter, layer))
}

/// Install the configured subscriber as the process-wide default and apply the
/// performance-span switches.
pub fn init_global_tracing(config: &TracingConfig) -> Result<(), TracingSetupError> {
    build_subscriber(config)?
        .try_init()
        .map_err(TracingSetupError::SubscriberInit)?;
    performance::configure(config.enable_performance_tracing, config.performance_threshold_us);
    Ok(())
}

/// Output format of the formatter layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TracingOutput {
    Compact,
    Pretty,
    Json,
}

impl TracingOutput {
    fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Some(Self::Compact),
            "pretty" => Some(Self::Pretty),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}
