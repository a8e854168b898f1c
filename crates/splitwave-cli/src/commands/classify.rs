use crate::render::{swatch, yes_no};
use anyhow::Result;
use colored::Colorize;
use splitwave_core::{record_to_json, Dimension, Engine};

pub fn run(engine: &Engine, n: i64, dimension: Dimension, json: bool) -> Result<()> {
    let record = engine.classify(n, dimension)?;
    tracing::debug!(n, dimension = dimension.index(), color = %record.color, "classified");

    if json {
        println!("{}", record_to_json(&record, true)?);
        return Ok(());
    }

    let split = &record.split;
    println!("{} {} (dimension {})", "n =".bold(), record.n, dimension);
    println!("  {:<14} {}", "colour", swatch(record.color));
    println!(
        "  {:<14} L={} R={}  (base {}, waves 2:{} 3:{} 5:{} 7:{})",
        "split", split.l, split.r, split.base_l, split.waves.w2, split.waves.w3, split.waves.w5, split.waves.w7
    );
    let views: Vec<String> = split.orthogonal.iter().map(|v| format!("{}/{}", v.l, v.r)).collect();
    println!("  {:<14} {}", "orthogonal", views.join("  "));
    println!("  {:<14} {}", "transparent", yes_no(record.transparent));
    println!("  {:<14} {}", "polarity", record.polarity.label());
    println!("  {:<14} {}", "factors", record.factorization);
    println!("  {:<14} {}", "prime", yes_no(record.is_prime));
    println!("  {:<14} {}", "prime power", yes_no(record.is_prime_power));
    println!(
        "  {:<14} {} ↔ {}{}",
        "bending",
        record.bending.cycle_pos,
        record.bending.counterpart,
        if record.bending.quad_anchor {
            "  quad anchor".yellow().to_string()
        } else {
            String::new()
        }
    );
    Ok(())
}
