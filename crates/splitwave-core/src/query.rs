//! Filtering, pagination and summaries over classified records
//!
//! Pure functions over slices of records; no selection or view state lives here.

use crate::{ClassificationRecord, Color, PolarityAxis};
use num_rational::Ratio;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Predicate over classification records. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    /// Keep only these colours (empty = any colour)
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub transparent: Option<bool>,
    #[serde(default)]
    pub primes_only: bool,
    #[serde(default)]
    pub quad_anchors_only: bool,
    #[serde(default)]
    pub polarity: Option<PolarityAxis>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    pub fn with_transparent(mut self, transparent: bool) -> Self {
        self.transparent = Some(transparent);
        self
    }

    pub fn primes_only(mut self) -> Self {
        self.primes_only = true;
        self
    }

    pub fn quad_anchors_only(mut self) -> Self {
        self.quad_anchors_only = true;
        self
    }

    pub fn with_polarity(mut self, polarity: PolarityAxis) -> Self {
        self.polarity = Some(polarity);
        self
    }

    pub fn matches(&self, record: &ClassificationRecord) -> bool {
        (self.colors.is_empty() || self.colors.contains(&record.color))
            && self.transparent.is_none_or(|t| record.transparent == t)
            && (!self.primes_only || record.is_prime)
            && (!self.quad_anchors_only || record.bending.quad_anchor)
            && self.polarity.is_none_or(|p| record.polarity == p)
    }

    /// Matching records, order preserved
    pub fn apply<'a>(&self, records: &'a [ClassificationRecord]) -> Vec<&'a ClassificationRecord> {
        records.iter().filter(|record| self.matches(record)).collect()
    }
}

/// One page of a record listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// Zero-based page index, clamped to the last page
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }
}

/// Slice out page `page` (zero-based) of `page_size` items.
///
/// Out-of-range pages clamp to the last page. A zero page size is treated as one.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let page = page.min(total_pages - 1);
    let start = (page * page_size).min(total_items);
    let end = (start + page_size).min(total_items);

    Page {
        items: &items[start..end],
        page,
        page_size,
        total_items,
        total_pages,
    }
}

/// Aggregate view over a set of records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSummary {
    pub total: usize,
    pub primes: usize,
    pub transparent: usize,
    pub quad_anchors: usize,
    pub by_color: BTreeMap<Color, usize>,
    pub by_polarity: BTreeMap<PolarityAxis, usize>,
}

impl RangeSummary {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a ClassificationRecord>) -> Self {
        let mut summary = Self {
            total: 0,
            primes: 0,
            transparent: 0,
            quad_anchors: 0,
            by_color: BTreeMap::new(),
            by_polarity: BTreeMap::new(),
        };

        for record in records {
            summary.total += 1;
            summary.primes += usize::from(record.is_prime);
            summary.transparent += usize::from(record.transparent);
            summary.quad_anchors += usize::from(record.bending.quad_anchor);
            *summary.by_color.entry(record.color).or_insert(0) += 1;
            *summary.by_polarity.entry(record.polarity).or_insert(0) += 1;
        }

        summary
    }

    /// Exact share of transparent records (0 for an empty summary)
    pub fn transparent_ratio(&self) -> Ratio<u64> {
        if self.total == 0 {
            return Ratio::zero();
        }
        Ratio::new(self.transparent as u64, self.total as u64)
    }

    /// Exact share of records carrying `color`
    pub fn color_ratio(&self, color: Color) -> Ratio<u64> {
        if self.total == 0 {
            return Ratio::zero();
        }
        let count = self.by_color.get(&color).copied().unwrap_or(0);
        Ratio::new(count as u64, self.total as u64)
    }
}
