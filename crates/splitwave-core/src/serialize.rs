//! JSON export of classification results
//!
//! A [`RangeExport`] bundles the request that produced a listing with its summary and
//! records, so a consumer can reproduce or verify it. Integers appear as JSON numbers,
//! dimensions as their index `0..=5`, colours by label and polarity axes by their signed
//! cross label (`"RIGHT+"`, `"LEFT−"`, ...).

use crate::{ClassificationRecord, EngineError, RangeRequest, RangeSummary, Result};
use serde::{Deserialize, Serialize};

/// Listing of one precomputed range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeExport {
    pub request: RangeRequest,
    pub summary: RangeSummary,
    pub records: Vec<ClassificationRecord>,
}

impl RangeExport {
    pub fn new(request: RangeRequest, records: Vec<ClassificationRecord>) -> Self {
        Self {
            request,
            summary: RangeSummary::from_records(&records),
            records,
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        to_json(self, pretty)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::Serialization(e.to_string()))
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(|e| EngineError::Serialization(e.to_string()))
}

/// Serialize a single record
pub fn record_to_json(record: &ClassificationRecord, pretty: bool) -> Result<String> {
    to_json(record, pretty)
}

/// Serialize records as a JSON array
pub fn records_to_json(records: &[ClassificationRecord], pretty: bool) -> Result<String> {
    to_json(records, pretty)
}

/// Parse a JSON array of records
pub fn records_from_json(json: &str) -> Result<Vec<ClassificationRecord>> {
    serde_json::from_str(json).map_err(|e| EngineError::Serialization(e.to_string()))
}

pub fn summary_to_json(summary: &RangeSummary, pretty: bool) -> Result<String> {
    to_json(summary, pretty)
}
