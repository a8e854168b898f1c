//! Engine context and the single-integer query primitive
//!
//! An [`Engine`] owns the sieve tables for one `MAX_N`. It is immutable once built and
//! `Send + Sync`, so it can be shared read-only across any number of callers.

use crate::rules::{self, PolarityAxis};
use crate::{
    factorize, get_split, is_prime_power, prime_bending, Color, ColorStyle, Dimension, EngineError, Factorization,
    PrimeBending, Result, SieveTables, Split, DEFAULT_MAX_N, MAX_SUPPORTED_N,
};
use serde::{Deserialize, Serialize};
use splitwave_tracing::perf_span;
use splitwave_tracing::performance::record_sieve_build;
use std::env;
use std::time::Instant;

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Largest classifiable magnitude
    pub max_n: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { max_n: DEFAULT_MAX_N }
    }
}

impl EngineConfig {
    /// Build a configuration from `SPLITWAVE_MAX_N`, falling back to the default when the
    /// variable is absent or unparsable.
    pub fn from_env() -> Self {
        let max_n = env::var("SPLITWAVE_MAX_N")
            .ok()
            .and_then(|value| value.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_MAX_N);
        Self { max_n }
    }

    /// Reject negative bounds and bounds above [`MAX_SUPPORTED_N`]
    pub fn validate(&self) -> Result<u64> {
        if !(0..=MAX_SUPPORTED_N).contains(&self.max_n) {
            return Err(EngineError::InvalidMaxN(self.max_n));
        }
        Ok(self.max_n as u64)
    }
}

/// Complete classification of one integer in one dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    pub n: i64,
    pub magnitude: u64,
    pub dimension: Dimension,
    pub split: Split,
    pub color: Color,
    pub transparent: bool,
    pub polarity: PolarityAxis,
    pub factorization: Factorization,
    pub is_prime: bool,
    pub is_prime_power: bool,
    pub bending: PrimeBending,
}

impl ClassificationRecord {
    /// Presentation triple of the record's colour
    pub fn style(&self) -> ColorStyle {
        self.color.style()
    }
}

/// Classification context for one `MAX_N`
#[derive(Debug, Clone)]
pub struct Engine {
    sieve: SieveTables,
}

impl Engine {
    /// Build an engine whose sieve covers `[0, max_n]`.
    ///
    /// Fails with [`EngineError::InvalidMaxN`] before any table is built when `max_n` is
    /// negative or above [`MAX_SUPPORTED_N`].
    pub fn new(max_n: i64) -> Result<Self> {
        Self::with_config(&EngineConfig { max_n })
    }

    pub fn with_config(config: &EngineConfig) -> Result<Self> {
        let max_n = config.validate()?;
        let start = Instant::now();
        let sieve = {
            let _span = perf_span!("sieve_build", max_n = max_n);
            SieveTables::new(max_n)
        };
        record_sieve_build(max_n, sieve.total_primes(), start.elapsed().as_micros() as u64);
        tracing::info!(max_n = max_n, primes = sieve.total_primes(), "sieve tables built");
        Ok(Self::from_tables(sieve))
    }

    /// Wrap prebuilt tables
    pub fn from_tables(sieve: SieveTables) -> Self {
        Self { sieve }
    }

    pub fn max_n(&self) -> u64 {
        self.sieve.max_n()
    }

    pub fn sieve(&self) -> &SieveTables {
        &self.sieve
    }

    /// `|n|`, or [`EngineError::OutOfRange`] when it exceeds `MAX_N`
    pub fn checked_magnitude(&self, n: i64) -> Result<u64> {
        self.sieve.checked_magnitude(n)
    }

    pub fn is_prime(&self, n: i64) -> Result<bool> {
        let magnitude = self.checked_magnitude(n)?;
        Ok(self.sieve.is_prime(magnitude) == Some(true))
    }

    /// Number of primes `<= |n|`
    pub fn prime_count(&self, n: i64) -> Result<u32> {
        let magnitude = self.checked_magnitude(n)?;
        Ok(self.sieve.prime_count(magnitude).unwrap_or(0))
    }

    pub fn is_transparent(&self, n: i64) -> Result<bool> {
        rules::is_transparent(&self.sieve, n)
    }

    pub fn polarity_axis(&self, n: i64) -> Result<PolarityAxis> {
        rules::polarity_axis(&self.sieve, n)
    }

    pub fn is_colorless(&self, n: i64) -> Result<bool> {
        rules::is_colorless(&self.sieve, n)
    }

    pub fn color_info(&self, n: i64, dimension: Dimension) -> Result<Color> {
        rules::color_of(&self.sieve, n, dimension)
    }

    /// Factorization of `|n|`, range-checked like every other engine query
    pub fn factorize(&self, n: i64) -> Result<Factorization> {
        self.checked_magnitude(n)?;
        Ok(factorize(n))
    }

    /// Classify one integer in one dimension frame
    pub fn classify(&self, n: i64, dimension: Dimension) -> Result<ClassificationRecord> {
        let magnitude = self.checked_magnitude(n)?;
        Ok(ClassificationRecord {
            n,
            magnitude,
            dimension,
            split: get_split(n, dimension),
            color: rules::color_of(&self.sieve, n, dimension)?,
            transparent: rules::is_transparent(&self.sieve, n)?,
            polarity: rules::polarity_axis(&self.sieve, n)?,
            factorization: factorize(n),
            is_prime: self.sieve.is_prime(magnitude) == Some(true),
            is_prime_power: is_prime_power(magnitude),
            bending: prime_bending(n),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_max_n_rejected() {
        assert_eq!(Engine::new(-1).unwrap_err(), EngineError::InvalidMaxN(-1));
    }

    #[test]
    fn test_zero_max_n_classifies_zero_only() {
        let engine = Engine::new(0).unwrap();
        let record = engine.classify(0, Dimension::D0).unwrap();
        assert_eq!(record.color, Color::Zero);
        assert_eq!(
            engine.classify(1, Dimension::D0).unwrap_err(),
            EngineError::OutOfRange { n: 1, max_n: 0 }
        );
    }

    #[test]
    fn test_out_of_range_both_signs() {
        let engine = Engine::new(100).unwrap();
        assert!(engine.classify(100, Dimension::D2).is_ok());
        assert!(engine.classify(-100, Dimension::D2).is_ok());
        assert!(matches!(engine.classify(101, Dimension::D2), Err(EngineError::OutOfRange { .. })));
        assert!(matches!(engine.is_prime(-101), Err(EngineError::OutOfRange { .. })));
        assert!(matches!(engine.classify(i64::MIN, Dimension::D0), Err(EngineError::OutOfRange { .. })));
    }

    #[test]
    fn test_record_fields_agree_with_queries() {
        let engine = Engine::new(1680).unwrap();
        for n in [-97, -12, 0, 1, 9, 17, 210, 1331] {
            let record = engine.classify(n, Dimension::D1).unwrap();
            assert_eq!(record.transparent, engine.is_transparent(n).unwrap());
            assert_eq!(record.polarity, engine.polarity_axis(n).unwrap());
            assert_eq!(record.color, engine.color_info(n, Dimension::D1).unwrap());
            assert_eq!(record.is_prime, engine.is_prime(n).unwrap());
            assert_eq!(record.factorization, engine.factorize(n).unwrap());
            assert_eq!(record.magnitude, n.unsigned_abs());
        }
    }

    #[test]
    fn test_engines_with_different_bounds_coexist() {
        let small = Engine::new(10).unwrap();
        let large = Engine::new(1000).unwrap();
        assert!(small.classify(11, Dimension::D0).is_err());
        assert!(large.classify(11, Dimension::D0).unwrap().is_prime);
        assert_eq!(small.prime_count(10).unwrap(), 4);
        assert_eq!(large.prime_count(-10).unwrap(), 4);
    }

    #[test]
    fn test_config_from_env() {
        // only this test touches SPLITWAVE_MAX_N
        env::set_var("SPLITWAVE_MAX_N", " 420 ");
        assert_eq!(EngineConfig::from_env().max_n, 420);
        env::set_var("SPLITWAVE_MAX_N", "lots");
        assert_eq!(EngineConfig::from_env().max_n, DEFAULT_MAX_N);
        env::set_var("SPLITWAVE_MAX_N", "-7");
        assert_eq!(Engine::with_config(&EngineConfig::from_env()).unwrap_err(), EngineError::InvalidMaxN(-7));
        env::remove_var("SPLITWAVE_MAX_N");
        assert_eq!(EngineConfig::from_env(), EngineConfig::default());
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(EngineConfig::default().validate(), Ok(1680));
        assert_eq!(EngineConfig { max_n: -5 }.validate(), Err(EngineError::InvalidMaxN(-5)));
        assert_eq!(
            EngineConfig { max_n: MAX_SUPPORTED_N }.validate(),
            Ok(MAX_SUPPORTED_N as u64)
        );
    }

    #[test]
    fn test_oversized_max_n_rejected() {
        assert_eq!(
            Engine::new(MAX_SUPPORTED_N + 1).unwrap_err(),
            EngineError::InvalidMaxN(MAX_SUPPORTED_N + 1)
        );
        assert_eq!(Engine::new(i64::MAX).unwrap_err(), EngineError::InvalidMaxN(i64::MAX));
        assert!(Engine::with_config(&EngineConfig { max_n: i64::MAX }).is_err());
    }
}
