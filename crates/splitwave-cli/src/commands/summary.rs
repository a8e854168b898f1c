use super::range_request;
use crate::cli::RangeArgs;
use crate::render::swatch;
use anyhow::Result;
use colored::Colorize;
use splitwave_core::{summary_to_json, Engine, RangeSummary};

pub fn run(engine: &Engine, args: &RangeArgs, json: bool) -> Result<()> {
    let request = range_request(engine, args);
    let records = engine.precompute(&request)?;
    let summary = RangeSummary::from_records(&records);

    if json {
        println!("{}", summary_to_json(&summary, true)?);
        return Ok(());
    }

    println!(
        "{} [{}, {}] dimension {}{}",
        "range".bold(),
        request.min_n,
        request.max_n,
        request.dimension,
        if request.include_negatives { " with negatives" } else { "" }
    );
    println!(
        "  {} integers, {} primes, {} quad anchors, transparent share {}",
        summary.total, summary.primes, summary.quad_anchors, summary.transparent_ratio()
    );

    println!("\n{}", "COLOUR".bold());
    for (color, count) in &summary.by_color {
        println!("  {} {:>6}  {}", swatch(*color), count, bar(*count, summary.total));
    }

    println!("\n{}", "POLARITY".bold());
    for (axis, count) in &summary.by_polarity {
        println!("  {:<8} {:>6}  {}", axis.label(), count, bar(*count, summary.total));
    }
    Ok(())
}

fn bar(count: usize, total: usize) -> String {
    const WIDTH: usize = 40;
    if total == 0 {
        return String::new();
    }
    "█".repeat((count * WIDTH).div_ceil(total))
}

#[cfg(test)]
mod tests {
    use super::bar;

    #[test]
    fn bar_scales_to_width() {
        assert_eq!(bar(0, 0), "");
        assert_eq!(bar(10, 10).chars().count(), 40);
        assert_eq!(bar(1, 1000).chars().count(), 1);
        assert_eq!(bar(0, 10), "");
    }
}
