use super::range_request;
use crate::cli::RangeArgs;
use crate::render::{record_header, record_row};
use anyhow::Result;
use colored::Colorize;
use splitwave_core::{paginate, Color, Engine, RecordFilter};
use splitwave_tracing::performance::record_throughput;
use splitwave_tracing::timed_block;

pub fn build_filter(colors: Vec<Color>, transparent: bool, opaque: bool, primes: bool, anchors: bool) -> RecordFilter {
    let mut filter = RecordFilter::new().with_colors(colors);
    if transparent {
        filter = filter.with_transparent(true);
    } else if opaque {
        filter = filter.with_transparent(false);
    }
    if primes {
        filter = filter.primes_only();
    }
    if anchors {
        filter = filter.quad_anchors_only();
    }
    filter
}

pub fn run(
    engine: &Engine,
    args: &RangeArgs,
    filter: &RecordFilter,
    page: usize,
    page_size: usize,
    json: bool,
) -> Result<()> {
    let request = range_request(engine, args);
    let (records, duration_us) = timed_block!("range_command", { engine.precompute(&request) });
    let records = records?;
    record_throughput("range_command", records.len(), duration_us);

    let matching: Vec<_> = filter.apply(&records).into_iter().cloned().collect();
    let shown = paginate(&matching, page, page_size);
    tracing::info!(
        classified = records.len(),
        matching = matching.len(),
        duration_us,
        "range listed"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(shown.items)?);
        return Ok(());
    }

    if matching.is_empty() {
        println!("{} No integers match.", "ℹ".blue());
        return Ok(());
    }

    record_header();
    for record in shown.items {
        record_row(record);
    }
    println!(
        "\n{} page {}/{} · {} of {} integers match",
        "»".dimmed(),
        shown.page + 1,
        shown.total_pages,
        shown.total_items,
        records.len()
    );
    Ok(())
}
