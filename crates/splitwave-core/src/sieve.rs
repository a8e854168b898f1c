//! Sieve tables over `[0, MAX_N]`
//!
//! Two immutable tables built once per engine: an Eratosthenes primality table and the
//! prime-count prefix sums used by the transparency rule.

use crate::{EngineError, Result};

/// Primality and prime-count tables for a fixed `MAX_N`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SieveTables {
    max_n: u64,
    is_prime: Vec<bool>,
    prime_count: Vec<u32>,
}

impl SieveTables {
    /// Build both tables for `[0, max_n]`.
    ///
    /// O(N log log N) for the sieve, O(N) for the prefix counts. Memory is about 5 bytes
    /// per integer; [`Engine`](crate::Engine) caps `max_n` at
    /// [`MAX_SUPPORTED_N`](crate::MAX_SUPPORTED_N) before building.
    pub fn new(max_n: u64) -> Self {
        let len = max_n as usize + 1;
        let mut is_prime = vec![true; len];
        is_prime[0] = false;
        if len > 1 {
            is_prime[1] = false;
        }

        let mut p = 2usize;
        while p * p < len {
            if is_prime[p] {
                let mut multiple = p * p;
                while multiple < len {
                    is_prime[multiple] = false;
                    multiple += p;
                }
            }
            p += 1;
        }

        let mut prime_count = Vec::with_capacity(len);
        let mut running = 0u32;
        for &prime in &is_prime {
            if prime {
                running += 1;
            }
            prime_count.push(running);
        }

        Self {
            max_n,
            is_prime,
            prime_count,
        }
    }

    /// Largest magnitude covered by the tables
    pub fn max_n(&self) -> u64 {
        self.max_n
    }

    /// Whether `magnitude` is covered by the tables
    pub fn covers(&self, magnitude: u64) -> bool {
        magnitude <= self.max_n
    }

    /// `|n|`, or [`EngineError::OutOfRange`] when the tables do not reach it
    pub fn checked_magnitude(&self, n: i64) -> Result<u64> {
        let magnitude = n.unsigned_abs();
        if !self.covers(magnitude) {
            return Err(EngineError::OutOfRange { n, max_n: self.max_n });
        }
        Ok(magnitude)
    }

    /// Primality lookup; `None` beyond `MAX_N`
    pub fn is_prime(&self, magnitude: u64) -> Option<bool> {
        self.is_prime.get(magnitude as usize).copied()
    }

    /// Number of primes `<= magnitude`; `None` beyond `MAX_N`
    pub fn prime_count(&self, magnitude: u64) -> Option<u32> {
        self.prime_count.get(magnitude as usize).copied()
    }

    /// Total number of primes in the table
    pub fn total_primes(&self) -> u32 {
        self.prime_count.last().copied().unwrap_or(0)
    }

    /// Iterate primes in ascending order
    pub fn primes(&self) -> impl Iterator<Item = u64> + '_ {
        self.is_prime
            .iter()
            .enumerate()
            .filter(|(_, &prime)| prime)
            .map(|(value, _)| value as u64)
    }
}
