//! Classification rules
//!
//! Transparency, polarity axis, the colourless sub-classification and the ordered colour
//! rule chain. Every public rule range-checks `n` against the sieve it is handed and
//! fails with [`EngineError::OutOfRange`](crate::EngineError::OutOfRange) beyond it.
//!
//! # Colour precedence
//!
//! First match wins, in this order:
//!
//! 1. `0` → Zero, `1` → One
//! 2. divisible by 2, 3, 5 and 7 → Golden Brown
//! 3. divisible by 2 and 5 → Gold
//! 4. divisible by 5 → Silver
//! 5. divisible by 2, 3 and 7 → Brown; pairs of {2, 3, 7} → the mix of their base colours
//!    for positive `n`, the base colour of the absent third factor for negative `n`
//! 6. bare 2, 3, 7 → their base colour
//! 7. colourless → Colorless
//! 8. prime → Prime
//! 9. prime power → PrimePow
//! 10. anything else → Composite

use crate::{factorize, is_prime_power, Color, ColorRoles, Dimension, Result, SieveTables};
use serde::{Deserialize, Serialize};
use std::fmt;

/// True iff `|n| > 1` and the number of primes `<= |n|` is odd
pub fn is_transparent(sieve: &SieveTables, n: i64) -> Result<bool> {
    let magnitude = sieve.checked_magnitude(n)?;
    Ok(transparent_magnitude(sieve, magnitude))
}

// callers have range-checked `magnitude`
fn transparent_magnitude(sieve: &SieveTables, magnitude: u64) -> bool {
    magnitude > 1 && sieve.prime_count(magnitude).is_some_and(|count| count % 2 == 1)
}

/// Position on the polarity cross
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PolarityAxis {
    #[serde(rename = "ORIGIN")]
    Origin,
    #[serde(rename = "TOP")]
    Top,
    #[serde(rename = "BOTTOM")]
    Bottom,
    #[serde(rename = "RIGHT+")]
    RightPositive,
    #[serde(rename = "LEFT+")]
    LeftPositive,
    #[serde(rename = "LEFT−")]
    LeftNegative,
    #[serde(rename = "RIGHT−")]
    RightNegative,
}

impl PolarityAxis {
    pub const ALL: [PolarityAxis; 7] = [
        PolarityAxis::Origin,
        PolarityAxis::Top,
        PolarityAxis::Bottom,
        PolarityAxis::RightPositive,
        PolarityAxis::LeftPositive,
        PolarityAxis::LeftNegative,
        PolarityAxis::RightNegative,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            PolarityAxis::Origin => "ORIGIN",
            PolarityAxis::Top => "TOP",
            PolarityAxis::Bottom => "BOTTOM",
            PolarityAxis::RightPositive => "RIGHT+",
            PolarityAxis::LeftPositive => "LEFT+",
            PolarityAxis::LeftNegative => "LEFT−",
            PolarityAxis::RightNegative => "RIGHT−",
        }
    }
}

impl fmt::Display for PolarityAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Polarity axis of `n`.
///
/// Transparent magnitudes sit on the vertical axis (even → TOP, odd → BOTTOM) regardless of
/// sign. Opaque magnitudes sit on the horizontal axis: even → RIGHT, odd → LEFT, suffixed
/// with the sign of `n`.
pub fn polarity_axis(sieve: &SieveTables, n: i64) -> Result<PolarityAxis> {
    let magnitude = sieve.checked_magnitude(n)?;
    if magnitude == 0 {
        return Ok(PolarityAxis::Origin);
    }

    let even = magnitude % 2 == 0;
    if transparent_magnitude(sieve, magnitude) {
        return Ok(if even { PolarityAxis::Top } else { PolarityAxis::Bottom });
    }

    Ok(match (even, n > 0) {
        (true, true) => PolarityAxis::RightPositive,
        (false, true) => PolarityAxis::LeftPositive,
        (false, false) => PolarityAxis::LeftNegative,
        (true, false) => PolarityAxis::RightNegative,
    })
}

/// Colourless sub-classification of odd composites.
///
/// - `p^q` with a single prime base: colourless iff `q` is prime and odd (`q = 2` is not).
/// - exactly two distinct primes, each with exponent 1: colourless.
/// - every other magnitude: not colourless.
pub fn is_colorless(sieve: &SieveTables, n: i64) -> Result<bool> {
    let magnitude = sieve.checked_magnitude(n)?;
    Ok(colorless_magnitude(sieve, magnitude))
}

fn colorless_magnitude(sieve: &SieveTables, magnitude: u64) -> bool {
    if magnitude < 2 || magnitude % 2 == 0 || matches!(magnitude, 2 | 3 | 5 | 7) {
        return false;
    }
    if sieve.is_prime(magnitude) == Some(true) {
        return false;
    }

    let factors = factorize(magnitude as i64);
    if let Some((_, q)) = factors.single_prime_power() {
        // q <= log2(magnitude), so the sieve always covers it
        let q_is_prime = sieve.is_prime(q as u64) == Some(true);
        return q_is_prime && q % 2 == 1;
    }

    factors.total_factors() == 2 && factors.distinct() == 2
}

/// Colour label of `n` in the given dimension
pub fn color_of(sieve: &SieveTables, n: i64, dimension: Dimension) -> Result<Color> {
    let magnitude = sieve.checked_magnitude(n)?;
    Ok(color_of_magnitude(sieve, magnitude, n < 0, dimension))
}

fn color_of_magnitude(sieve: &SieveTables, magnitude: u64, negative: bool, dimension: Dimension) -> Color {
    match magnitude {
        0 => return Color::Zero,
        1 => return Color::One,
        _ => {}
    }

    let roles = ColorRoles::for_dimension(dimension);
    let d2 = magnitude % 2 == 0;
    let d3 = magnitude % 3 == 0;
    let d5 = magnitude % 5 == 0;
    let d7 = magnitude % 7 == 0;

    if d2 && d3 && d5 && d7 {
        return Color::GoldenBrown;
    }
    if d2 && d5 {
        return Color::Gold;
    }
    if d5 {
        return Color::Silver;
    }

    match (d2, d3, d7) {
        (true, true, true) => return Color::Brown,
        (true, true, false) => return if negative { roles.c7 } else { roles.c23() },
        (true, false, true) => return if negative { roles.c3 } else { roles.c27() },
        (false, true, true) => return if negative { roles.c2 } else { roles.c37() },
        _ => {}
    }

    match magnitude {
        2 => return roles.c2,
        3 => return roles.c3,
        7 => return roles.c7,
        _ => {}
    }

    if colorless_magnitude(sieve, magnitude) {
        Color::Colorless
    } else if sieve.is_prime(magnitude) == Some(true) {
        Color::Prime
    } else if is_prime_power(magnitude) {
        Color::PrimePower
    } else {
        Color::Composite
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EngineError;

    fn sieve() -> SieveTables {
        SieveTables::new(1680)
    }

    #[test]
    fn test_transparency() {
        let sieve = sieve();
        // pi: 2 -> 1, 3 -> 2, 4 -> 2, 5 -> 3, 7 -> 4, 11 -> 5
        assert!(!is_transparent(&sieve, 0).unwrap());
        assert!(!is_transparent(&sieve, 1).unwrap());
        assert!(is_transparent(&sieve, 2).unwrap());
        assert!(!is_transparent(&sieve, 3).unwrap());
        assert!(!is_transparent(&sieve, 4).unwrap());
        assert!(is_transparent(&sieve, 5).unwrap());
        assert!(is_transparent(&sieve, 6).unwrap());
        assert!(!is_transparent(&sieve, 7).unwrap());
        assert!(is_transparent(&sieve, 11).unwrap());
    }

    #[test]
    fn test_polarity_axis() {
        let sieve = sieve();
        assert_eq!(polarity_axis(&sieve, 0).unwrap(), PolarityAxis::Origin);
        assert_eq!(polarity_axis(&sieve, 2).unwrap(), PolarityAxis::Top);
        assert_eq!(polarity_axis(&sieve, -2).unwrap(), PolarityAxis::Top);
        assert_eq!(polarity_axis(&sieve, 5).unwrap(), PolarityAxis::Bottom);
        assert_eq!(polarity_axis(&sieve, 4).unwrap(), PolarityAxis::RightPositive);
        assert_eq!(polarity_axis(&sieve, -4).unwrap(), PolarityAxis::RightNegative);
        assert_eq!(polarity_axis(&sieve, 3).unwrap(), PolarityAxis::LeftPositive);
        assert_eq!(polarity_axis(&sieve, -3).unwrap(), PolarityAxis::LeftNegative);
        assert_eq!(polarity_axis(&sieve, 1).unwrap(), PolarityAxis::LeftPositive);
    }

    #[test]
    fn test_colorless_pinned_cases() {
        let sieve = sieve();
        // p^q with odd prime exponent
        assert!(is_colorless(&sieve, 27).unwrap());
        assert!(is_colorless(&sieve, 125).unwrap());
        assert!(is_colorless(&sieve, 1331).unwrap());
        // exponent 2 is the even prime: never colourless
        assert!(!is_colorless(&sieve, 9).unwrap());
        assert!(!is_colorless(&sieve, 49).unwrap());
        // non-prime exponent
        assert!(!is_colorless(&sieve, 81).unwrap());
        // two distinct primes, exponent 1 each
        assert!(is_colorless(&sieve, 15).unwrap());
        assert!(is_colorless(&sieve, 33).unwrap());
        assert!(is_colorless(&sieve, 143).unwrap());
        // three prime factors
        assert!(!is_colorless(&sieve, 99).unwrap());
        assert!(!is_colorless(&sieve, 105).unwrap());
        // evens, primes and units are outside the rule
        assert!(!is_colorless(&sieve, 6).unwrap());
        assert!(!is_colorless(&sieve, 11).unwrap());
        assert!(!is_colorless(&sieve, 1).unwrap());
    }

    #[test]
    fn test_color_precedence() {
        let sieve = sieve();
        let d0 = Dimension::D0;
        assert_eq!(color_of(&sieve, 0, d0).unwrap(), Color::Zero);
        assert_eq!(color_of(&sieve, -1, d0).unwrap(), Color::One);
        assert_eq!(color_of(&sieve, 210, d0).unwrap(), Color::GoldenBrown);
        assert_eq!(color_of(&sieve, 10, d0).unwrap(), Color::Gold);
        assert_eq!(color_of(&sieve, 5, d0).unwrap(), Color::Silver);
        assert_eq!(color_of(&sieve, 15, d0).unwrap(), Color::Silver);
        assert_eq!(color_of(&sieve, 42, d0).unwrap(), Color::Brown);
        assert_eq!(color_of(&sieve, -42, d0).unwrap(), Color::Brown);
        assert_eq!(color_of(&sieve, 6, d0).unwrap(), Color::Green);
        assert_eq!(color_of(&sieve, 14, d0).unwrap(), Color::Purple);
        assert_eq!(color_of(&sieve, 21, d0).unwrap(), Color::Orange);
        assert_eq!(color_of(&sieve, 2, d0).unwrap(), Color::Blue);
        assert_eq!(color_of(&sieve, 3, d0).unwrap(), Color::Yellow);
        assert_eq!(color_of(&sieve, 7, d0).unwrap(), Color::Red);
        assert_eq!(color_of(&sieve, 27, d0).unwrap(), Color::Colorless);
        assert_eq!(color_of(&sieve, 11, d0).unwrap(), Color::Prime);
        assert_eq!(color_of(&sieve, 9, d0).unwrap(), Color::PrimePower);
        assert_eq!(color_of(&sieve, 4, d0).unwrap(), Color::PrimePower);
        assert_eq!(color_of(&sieve, 22, d0).unwrap(), Color::Composite);
        assert_eq!(color_of(&sieve, 99, d0).unwrap(), Color::Composite);
    }

    #[test]
    fn test_negative_pairs_take_absent_factor() {
        let sieve = sieve();
        let roles = ColorRoles::for_dimension(Dimension::D0);
        assert_eq!(color_of(&sieve, -6, Dimension::D0).unwrap(), roles.c7);
        assert_eq!(color_of(&sieve, -14, Dimension::D0).unwrap(), roles.c3);
        assert_eq!(color_of(&sieve, -21, Dimension::D0).unwrap(), roles.c2);
        assert_eq!(color_of(&sieve, -14, Dimension::D0).unwrap(), Color::Yellow);
    }

    #[test]
    fn test_dimension_permutes_but_never_regroups() {
        let sieve = sieve();
        for dimension in Dimension::ALL {
            let roles = ColorRoles::for_dimension(dimension);
            assert_eq!(color_of(&sieve, 2, dimension).unwrap(), roles.c2);
            assert_eq!(color_of(&sieve, 12, dimension).unwrap(), roles.c23());
            assert_eq!(color_of(&sieve, -28, dimension).unwrap(), roles.c3);
            assert_eq!(color_of(&sieve, 13, dimension).unwrap(), Color::Prime);
            assert_eq!(color_of(&sieve, 1680, dimension).unwrap(), Color::GoldenBrown);
        }
    }

    #[test]
    fn test_rules_reject_magnitudes_beyond_sieve() {
        let small = SieveTables::new(10);
        let beyond = EngineError::OutOfRange { n: 11, max_n: 10 };
        assert_eq!(is_transparent(&small, 11), Err(beyond.clone()));
        assert_eq!(polarity_axis(&small, 11), Err(beyond.clone()));
        assert_eq!(is_colorless(&small, 11), Err(beyond));
        assert_eq!(
            color_of(&small, -13, Dimension::D0),
            Err(EngineError::OutOfRange { n: -13, max_n: 10 })
        );
        assert!(polarity_axis(&small, i64::MIN).is_err());

        // the edge of the sieve still answers like a full-size one
        let full = sieve();
        for n in -10..=10 {
            assert_eq!(is_transparent(&small, n), is_transparent(&full, n));
            assert_eq!(polarity_axis(&small, n), polarity_axis(&full, n));
            assert_eq!(color_of(&small, n, Dimension::D3), color_of(&full, n, Dimension::D3));
        }
    }

    #[test]
    fn test_polarity_labels() {
        let labels: Vec<_> = PolarityAxis::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, vec!["ORIGIN", "TOP", "BOTTOM", "RIGHT+", "LEFT+", "LEFT−", "RIGHT−"]);
    }
}
