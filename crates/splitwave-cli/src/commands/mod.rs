pub mod bending;
pub mod classify;
pub mod range;
pub mod summary;

use crate::cli::RangeArgs;
use splitwave_core::{Engine, RangeRequest};

/// Bulk request for the shared range flags; `--max` defaults to the engine's `MAX_N`
pub fn range_request(engine: &Engine, args: &RangeArgs) -> RangeRequest {
    RangeRequest {
        min_n: args.min,
        max_n: args.max.unwrap_or(engine.max_n() as i64),
        dimension: args.dimension,
        include_negatives: args.negatives,
    }
}
