//! Prime bending over the 210-cycle
//!
//! Residues mod 210 pair with their additive inverse. Eight residues are hard-coded quad
//! anchors.

use crate::{BENDING_CYCLE, QUAD_ANCHORS};
use serde::{Deserialize, Serialize};

/// Bending view of one magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrimeBending {
    pub cycle_pos: u64,
    pub counterpart: u64,
    pub quad_anchor: bool,
}

impl PrimeBending {
    /// Residues that are their own counterpart (0 and 105)
    pub fn is_self_paired(self) -> bool {
        self.cycle_pos == self.counterpart
    }
}

/// Bending record for `|n|`
pub fn prime_bending(n: i64) -> PrimeBending {
    let cycle_pos = n.unsigned_abs() % BENDING_CYCLE;
    PrimeBending {
        cycle_pos,
        counterpart: (BENDING_CYCLE - cycle_pos) % BENDING_CYCLE,
        quad_anchor: is_quad_anchor(cycle_pos),
    }
}

/// Whether a residue is one of the eight quad anchors
pub fn is_quad_anchor(cycle_pos: u64) -> bool {
    QUAD_ANCHORS.contains(&cycle_pos)
}

/// The four anchor pairs `(a, 210 - a)` with `a < 105`
pub fn quad_anchor_pairs() -> [(u64, u64); 4] {
    let mut pairs = [(0, 0); 4];
    for (slot, anchor) in pairs.iter_mut().zip(QUAD_ANCHORS.iter().filter(|&&a| a < BENDING_CYCLE / 2)) {
        *slot = (*anchor, BENDING_CYCLE - anchor);
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seventeen() {
        let bent = prime_bending(17);
        assert_eq!(bent.cycle_pos, 17);
        assert_eq!(bent.counterpart, 193);
        assert!(bent.quad_anchor);
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(prime_bending(210).counterpart, 0);
        assert_eq!(prime_bending(227), prime_bending(17));
        assert_eq!(prime_bending(-17), prime_bending(17));
        assert!(prime_bending(0).is_self_paired());
        assert!(prime_bending(105).is_self_paired());
        assert!(!prime_bending(23).quad_anchor);
    }

    #[test]
    fn test_anchor_pairs() {
        assert_eq!(quad_anchor_pairs(), [(11, 199), (13, 197), (17, 193), (19, 191)]);
        for (a, b) in quad_anchor_pairs() {
            assert!(is_quad_anchor(a) && is_quad_anchor(b));
            assert_eq!(prime_bending(a as i64).counterpart, b);
        }
    }
}
