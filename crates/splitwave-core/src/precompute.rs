//! Bulk precomputation and the classification table cache
//!
//! Each integer's record is independent, so large ranges are partitioned across the rayon
//! pool. `collect` on an indexed parallel iterator keeps ascending order.
//!
//! ## Performance Model
//!
//! - Small ranges (< [`PARALLEL_THRESHOLD`] integers): sequential, no pool overhead
//! - Large ranges: chunked parallel classification, [`PARALLEL_CHUNK_SIZE`] integers per task

use crate::{ClassificationRecord, Dimension, Engine, EngineError, Result};
use parking_lot::RwLock;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use splitwave_tracing::perf_event;
use splitwave_tracing::performance::record_precompute;
use std::sync::Arc;
use std::time::Instant;

/// Minimum number of integers before the range is split across threads
pub const PARALLEL_THRESHOLD: usize = 2048;

/// Integers per parallel task
pub const PARALLEL_CHUNK_SIZE: usize = 512;

/// Configuration of one bulk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeRequest {
    pub min_n: i64,
    pub max_n: i64,
    pub dimension: Dimension,
    pub include_negatives: bool,
}

impl RangeRequest {
    /// Request covering `[0, max_n]`, plus `[-max_n, -1]` when negatives are included
    pub fn full(max_n: u64, dimension: Dimension, include_negatives: bool) -> Self {
        Self {
            min_n: 0,
            max_n: max_n as i64,
            dimension,
            include_negatives,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_n > self.max_n {
            return Err(EngineError::InvalidRange {
                min: self.min_n,
                max: self.max_n,
            });
        }
        Ok(())
    }

    /// Integers covered by the request, ascending and without duplicates.
    ///
    /// With `include_negatives`, the negation of every positive integer in
    /// `[min_n, max_n]` is added.
    pub fn integers(&self) -> Vec<i64> {
        let mut values: Vec<i64> = (self.min_n..=self.max_n).collect();
        if self.include_negatives {
            let mirrored: Vec<i64> = values
                .iter()
                .filter(|&&n| n > 0)
                .map(|&n| -n)
                .filter(|&n| n < self.min_n)
                .collect();
            values.extend(mirrored);
            values.sort_unstable();
        }
        values
    }
}

impl Engine {
    /// Classify every integer in `[min_n, max_n]` (and the negations of its positive part
    /// when `include_negatives` is set), ordered by ascending `n`.
    ///
    /// Configuration is validated before any work; the first out-of-range integer aborts
    /// the whole request.
    #[tracing::instrument(skip(self), fields(max_sieve = self.max_n()))]
    pub fn precompute_range(
        &self,
        min_n: i64,
        max_n: i64,
        dimension: Dimension,
        include_negatives: bool,
    ) -> Result<Vec<ClassificationRecord>> {
        self.precompute(&RangeRequest {
            min_n,
            max_n,
            dimension,
            include_negatives,
        })
    }

    /// [`Engine::precompute_range`] driven by a [`RangeRequest`]
    pub fn precompute(&self, request: &RangeRequest) -> Result<Vec<ClassificationRecord>> {
        request.validate()?;
        let bound = request.min_n.unsigned_abs().max(request.max_n.unsigned_abs());
        if bound > self.max_n() {
            let n = if request.max_n.unsigned_abs() >= request.min_n.unsigned_abs() {
                request.max_n
            } else {
                request.min_n
            };
            return Err(EngineError::OutOfRange { n, max_n: self.max_n() });
        }

        let start = Instant::now();
        let integers = request.integers();
        let parallel = integers.len() >= PARALLEL_THRESHOLD;
        tracing::debug!(
            min_n = request.min_n,
            max_n = request.max_n,
            count = integers.len(),
            parallel,
            "precomputing classification records"
        );

        let records = if parallel {
            integers
                .par_iter()
                .with_min_len(PARALLEL_CHUNK_SIZE)
                .map(|&n| self.classify(n, request.dimension))
                .collect::<Result<Vec<_>>>()?
        } else {
            integers
                .iter()
                .map(|&n| self.classify(n, request.dimension))
                .collect::<Result<Vec<_>>>()?
        };

        record_precompute(
            records.len(),
            request.dimension.index(),
            start.elapsed().as_micros() as u64,
        );
        Ok(records)
    }
}

/// Precomputed records for one [`RangeRequest`] with O(1) lookup by `n`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationTable {
    request: RangeRequest,
    records: Vec<ClassificationRecord>,
    lowest: i64,
    index: Vec<Option<u32>>,
}

impl ClassificationTable {
    pub fn build(engine: &Engine, request: RangeRequest) -> Result<Self> {
        let records = engine.precompute(&request)?;
        let lowest = records.first().map(|r| r.n).unwrap_or(0);
        let highest = records.last().map(|r| r.n).unwrap_or(-1);
        let span = (highest - lowest + 1).max(0) as usize;

        let mut index = vec![None; span];
        for (position, record) in records.iter().enumerate() {
            index[(record.n - lowest) as usize] = Some(position as u32);
        }

        Ok(Self {
            request,
            records,
            lowest,
            index,
        })
    }

    pub fn request(&self) -> &RangeRequest {
        &self.request
    }

    pub fn dimension(&self) -> Dimension {
        self.request.dimension
    }

    /// Record for `n`, if the table covers it
    pub fn get(&self, n: i64) -> Option<&ClassificationRecord> {
        let offset = n.checked_sub(self.lowest)?;
        let slot = usize::try_from(offset).ok()?;
        let position = (*self.index.get(slot)?)?;
        self.records.get(position as usize)
    }

    /// All records in ascending `n`
    pub fn records(&self) -> &[ClassificationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Holds the single live [`ClassificationTable`].
///
/// A request for a different configuration evicts the current table and builds a new one;
/// stale tables are never retained alongside the live one.
#[derive(Debug)]
pub struct TableCache {
    engine: Arc<Engine>,
    current: RwLock<Option<Arc<ClassificationTable>>>,
}

impl TableCache {
    pub fn new(engine: Arc<Engine>) -> Self {
        Self {
            engine,
            current: RwLock::new(None),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Table for `request`, rebuilding when the cached one was built for another request
    pub fn get_or_build(&self, request: RangeRequest) -> Result<Arc<ClassificationTable>> {
        if let Some(table) = self.current.read().as_ref() {
            if table.request == request {
                return Ok(Arc::clone(table));
            }
        }

        let mut slot = self.current.write();
        if let Some(table) = slot.as_ref() {
            if table.request == request {
                return Ok(Arc::clone(table));
            }
        }

        perf_event!(
            "table_rebuild",
            dimension = request.dimension.index(),
            include_negatives = request.include_negatives,
        );
        // drop the stale table before building the replacement
        *slot = None;
        let table = Arc::new(ClassificationTable::build(&self.engine, request)?);
        *slot = Some(Arc::clone(&table));
        Ok(table)
    }

    /// Currently cached table, if any
    pub fn current(&self) -> Option<Arc<ClassificationTable>> {
        self.current.read().clone()
    }

    /// Drop the cached table
    pub fn invalidate(&self) {
        *self.current.write() = None;
    }
}
