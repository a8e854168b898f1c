//! Constants defining the wave, split and bending structure

/// Default upper bound on classified magnitudes (sieve size is `MAX_N + 1`)
pub const DEFAULT_MAX_N: i64 = 1680;

/// Largest accepted `MAX_N`; the sieve costs about 5 bytes per integer (~80 MiB here)
pub const MAX_SUPPORTED_N: i64 = 1 << 24;

/// Wave periods (moduli) of the four phase oscillators
pub const WAVE_MODULI: [u32; 4] = [2, 3, 5, 7];

/// Constant sum of every primary split (2 + 3 + 5 + 7)
pub const SPLIT_TOTAL: u8 = 17;

/// Number of dimension reference frames
pub const DIMENSION_COUNT: usize = 6;

/// Anchor offsets of the 2-wave, indexed by dimension
pub const ANCHOR_OFFSETS: [i8; DIMENSION_COUNT] = [2, 1, 0, -2, -1, 0];

/// Length of the prime-bending cycle (2 × 3 × 5 × 7)
pub const BENDING_CYCLE: u64 = 210;

/// Residues mod 210 flagged as quad anchors
pub const QUAD_ANCHORS: [u64; 8] = [11, 13, 17, 19, 191, 193, 197, 199];

/// Number of orthogonal views derived from a primary split
pub const ORTHOGONAL_VIEWS: usize = 6;
