//! Trial-division factorization
//!
//! O(sqrt(n)) trial division is plenty for the bounded domain. Results are keyed by prime
//! in ascending order so records serialize deterministically.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Prime → exponent mapping of a magnitude (empty for magnitudes below 2)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Factorization {
    factors: BTreeMap<u64, u32>,
}

impl Factorization {
    /// Factor `|n|` by trial division
    pub fn of(n: i64) -> Self {
        let mut remaining = n.unsigned_abs();
        let mut factors = BTreeMap::new();
        if remaining < 2 {
            return Self { factors };
        }

        let mut p = 2u64;
        while p * p <= remaining {
            while remaining % p == 0 {
                *factors.entry(p).or_insert(0) += 1;
                remaining /= p;
            }
            p += 1;
        }
        if remaining > 1 {
            *factors.entry(remaining).or_insert(0) += 1;
        }

        Self { factors }
    }

    /// Exponent of `prime`, 0 when absent
    pub fn exponent(&self, prime: u64) -> u32 {
        self.factors.get(&prime).copied().unwrap_or(0)
    }

    /// Number of distinct prime bases
    pub fn distinct(&self) -> usize {
        self.factors.len()
    }

    /// Sum of all exponents (prime factors counted with multiplicity)
    pub fn total_factors(&self) -> u32 {
        self.factors.values().sum()
    }

    /// `(p, q)` when the magnitude is `p^q` for a single prime `p`
    pub fn single_prime_power(&self) -> Option<(u64, u32)> {
        if self.factors.len() == 1 {
            self.factors.iter().next().map(|(&p, &q)| (p, q))
        } else {
            None
        }
    }

    /// Product of `p^e` over all entries (1 for the empty map)
    pub fn product(&self) -> u64 {
        self.factors
            .iter()
            .map(|(&p, &e)| p.pow(e))
            .product()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Iterate `(prime, exponent)` pairs in ascending prime order
    pub fn iter(&self) -> impl Iterator<Item = (u64, u32)> + '_ {
        self.factors.iter().map(|(&p, &e)| (p, e))
    }
}

/// Factor `|n|` into its prime → exponent mapping
pub fn factorize(n: i64) -> Factorization {
    Factorization::of(n)
}

/// True iff `magnitude` is `p^k` for some prime `p` and `k >= 1`.
///
/// Finds the smallest prime dividing the magnitude, divides it out completely and checks
/// that nothing remains.
pub fn is_prime_power(magnitude: u64) -> bool {
    if magnitude < 2 {
        return false;
    }

    let mut p = 2u64;
    while p * p <= magnitude && magnitude % p != 0 {
        p += 1;
    }
    if magnitude % p != 0 {
        // no divisor up to sqrt: the magnitude is itself prime
        return true;
    }

    let mut rest = magnitude;
    while rest % p == 0 {
        rest /= p;
    }
    rest == 1
}

impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.factors.is_empty() {
            return write!(f, "1");
        }
        for (index, (p, e)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " × ")?;
            }
            if e == 1 {
                write!(f, "{p}")?;
            } else {
                write!(f, "{p}^{e}")?;
            }
        }
        Ok(())
    }
}
