//! # Splitwave Core – Integer Classification Engine
//!
//! `splitwave-core` classifies every integer in a bounded range along several derived
//! numeric axes and bundles the result into a single [`ClassificationRecord`]:
//!
//! - the **17-split**, a constant-sum decomposition of where an integer sits across four
//!   triangle waves of periods 2, 3, 5 and 7 (see [`wave`]),
//! - a **colour taxonomy** of 16 labels driven by divisibility and factorization (see
//!   [`color`] and [`rules`]),
//! - **transparency** and the **polarity axis**, derived from the prime-count parity,
//! - the **prime-bending** relation over the 210-cycle (see [`bending`]).
//!
//! ## Architecture Overview
//!
//! - [`SieveTables`] are built once per [`Engine`] for its configured `MAX_N` and are
//!   immutable afterwards, so an engine can be shared across threads without locking.
//! - Pure functions ([`wave_left`], [`get_split`], [`factorize`], [`prime_bending`]) need
//!   no tables; everything primality-dependent goes through the engine and is range-checked.
//! - [`Engine::precompute_range`] is the bulk variant, partitioned across the rayon pool for
//!   large ranges. [`TableCache`] keeps one live [`ClassificationTable`] and rebuilds it
//!   when the dimension or the negative toggle changes.
//!
//! ## Quick Start
//!
//! ```
//! use splitwave_core::{Color, Dimension, Engine};
//!
//! let engine = Engine::new(1680).unwrap();
//!
//! let record = engine.classify(7, Dimension::D0).unwrap();
//! assert_eq!(record.color, Color::Red);
//! assert!(record.is_prime);
//! assert_eq!(record.split.l + record.split.r, 17);
//!
//! let bent = splitwave_core::prime_bending(17);
//! assert_eq!(bent.counterpart, 193);
//! assert!(bent.quad_anchor);
//! ```

pub mod bending;
pub mod color;
pub mod constants;
pub mod dimension;
pub mod engine;
pub mod factor;
pub mod precompute;
pub mod query;
pub mod rules;
pub mod serialize;
pub mod sieve;
pub mod wave;

use std::sync::OnceLock;

pub use bending::*;
pub use color::*;
pub use constants::*;
pub use dimension::*;
pub use engine::*;
pub use factor::*;
pub use precompute::*;
pub use query::*;
pub use rules::PolarityAxis;
pub use serialize::*;
pub use sieve::*;
pub use wave::*;

/// Access the process-wide engine sized for [`DEFAULT_MAX_N`].
///
/// The sieve tables are built on first use and shared for the lifetime of the program.
/// Callers that need a different `MAX_N` construct their own [`Engine`].
pub fn default_engine() -> &'static Engine {
    static ENGINE: OnceLock<Engine> = OnceLock::new();
    ENGINE.get_or_init(|| Engine::from_tables(SieveTables::new(DEFAULT_MAX_N as u64)))
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur in engine operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid dimension: {0} (must be in [0, 5])")]
    InvalidDimension(i64),

    #[error("Invalid MAX_N: {0} (must be in [0, {max}])", max = crate::MAX_SUPPORTED_N)]
    InvalidMaxN(i64),

    #[error("Invalid range: min {min} exceeds max {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("Integer {n} out of range: magnitude exceeds MAX_N = {max_n}")]
    OutOfRange { n: i64, max_n: u64 },

    #[error("Unknown colour label: {0}")]
    UnknownColor(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl EngineError {
    /// True for errors raised by misconfiguration rather than by the queried integer.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidDimension(_) | EngineError::InvalidMaxN(_) | EngineError::InvalidRange { .. }
        )
    }
}
