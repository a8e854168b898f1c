//! Wave decomposition and the 17-split
//!
//! Every integer sits simultaneously inside four triangle-wave oscillators of periods
//! 4, 6, 10 and 14 (moduli 2, 3, 5, 7). The primary split `(L, R)` is a constant-sum
//! decomposition of those phases read in one of six dimension frames.

use crate::{Dimension, ORTHOGONAL_VIEWS, SPLIT_TOTAL};
use serde::{Deserialize, Serialize};

/// Triangle wave of period `2k`: `k - min(m, 2k - m)` with `m = |n| mod 2k`.
///
/// Always in `[0, k]` and periodic in `n` with period `2k`. `k` must be positive.
pub fn wave_left(n: i64, k: u32) -> u32 {
    debug_assert!(k > 0, "wave modulus must be positive");
    let period = 2 * k as u64;
    let m = n.unsigned_abs() % period;
    let distance = m.min(period - m);
    k - distance as u32
}

/// Left-values of the four waves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WaveLefts {
    pub w2: u8,
    pub w3: u8,
    pub w5: u8,
    pub w7: u8,
}

impl WaveLefts {
    /// Sample all four waves at `n`
    pub fn at(n: i64) -> Self {
        Self {
            w2: wave_left(n, 2) as u8,
            w3: wave_left(n, 3) as u8,
            w5: wave_left(n, 5) as u8,
            w7: wave_left(n, 7) as u8,
        }
    }

    /// Dimension-independent base: `w3 + w5 + w7`, in `[0, 15]`
    pub fn base_l(self) -> u8 {
        self.w3 + self.w5 + self.w7
    }
}

/// One `{L, R}` view of a split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SplitPair {
    pub l: u8,
    pub r: u8,
}

impl SplitPair {
    /// Exchange the two sides
    pub const fn swapped(self) -> Self {
        Self { l: self.r, r: self.l }
    }

    /// Shift `d` units from L to R, clamping each side to `[0, 17]` on its own.
    ///
    /// The sides are not rebalanced after clamping.
    pub fn shifted(self, d: i16) -> Self {
        let total = SPLIT_TOTAL as i16;
        Self {
            l: (self.l as i16 - d).clamp(0, total) as u8,
            r: (self.r as i16 + d).clamp(0, total) as u8,
        }
    }

    pub const fn sum(self) -> u8 {
        self.l + self.r
    }
}

/// Complete split record for one `(n, dimension)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Split {
    pub l: u8,
    pub r: u8,
    pub base_l: u8,
    pub waves: WaveLefts,
    /// identity, `L-1/R+1`, `L-2/R+2`, then the swap of each of the first three
    pub orthogonal: [SplitPair; ORTHOGONAL_VIEWS],
}

impl Split {
    /// The primary pair
    pub const fn primary(&self) -> SplitPair {
        SplitPair { l: self.l, r: self.r }
    }
}

/// Compute the 17-split of `n` in the given dimension frame.
///
/// Dimensions 0..=2 add their anchor offset to `baseL`; dimensions 3..=5 invert,
/// `L = 17 - (baseL + |offset|)`. `R = 17 - L` always.
pub fn get_split(n: i64, dimension: Dimension) -> Split {
    let waves = WaveLefts::at(n);
    let base_l = waves.base_l();
    let offset = dimension.anchor_offset();

    let l = if dimension.is_inverse() {
        SPLIT_TOTAL - (base_l + offset.unsigned_abs())
    } else {
        (base_l as i8 + offset) as u8
    };
    let r = SPLIT_TOTAL - l;

    let identity = SplitPair { l, r };
    let one = identity.shifted(1);
    let two = identity.shifted(2);

    Split {
        l,
        r,
        base_l,
        waves,
        orthogonal: [identity, one, two, identity.swapped(), one.swapped(), two.swapped()],
    }
}
