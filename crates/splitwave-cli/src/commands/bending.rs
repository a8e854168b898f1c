use anyhow::Result;
use colored::Colorize;
use splitwave_core::{prime_bending, quad_anchor_pairs, Engine, EngineError, BENDING_CYCLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PairStatus {
    BothPrime,
    Mixed,
    /// At least one member lies beyond the engine's `MAX_N`
    Uncovered,
}

fn pair_status(engine: &Engine, anchor: u64, counterpart: u64) -> Result<PairStatus> {
    let both_prime = engine
        .is_prime(anchor as i64)
        .and_then(|prime| Ok(prime && engine.is_prime(counterpart as i64)?));
    match both_prime {
        Ok(true) => Ok(PairStatus::BothPrime),
        Ok(false) => Ok(PairStatus::Mixed),
        Err(EngineError::OutOfRange { .. }) => Ok(PairStatus::Uncovered),
        Err(e) => Err(e.into()),
    }
}

pub fn run(engine: &Engine) -> Result<()> {
    println!("{} (cycle {})", "QUAD ANCHORS".bold(), BENDING_CYCLE);
    for (anchor, counterpart) in quad_anchor_pairs() {
        let status = match pair_status(engine, anchor, counterpart)? {
            PairStatus::BothPrime => "prime pair".green(),
            PairStatus::Mixed => "".normal(),
            PairStatus::Uncovered => format!("beyond MAX_N = {}", engine.max_n()).as_str().dimmed(),
        };
        println!("  {:>3} ↔ {:<3} {}", anchor, counterpart, status);
    }

    let self_paired: Vec<u64> = (0..BENDING_CYCLE)
        .filter(|&pos| prime_bending(pos as i64).is_self_paired())
        .collect();
    println!(
        "\n{} {}",
        "self-paired residues:".bold(),
        self_paired.iter().map(u64::to_string).collect::<Vec<_>>().join(", ")
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_status_follows_configured_engine() {
        let full = Engine::new(1680).unwrap();
        assert_eq!(pair_status(&full, 11, 199).unwrap(), PairStatus::BothPrime);
        assert_eq!(pair_status(&full, 13, 197).unwrap(), PairStatus::BothPrime);

        // counterparts sit past a 100-wide sieve
        let small = Engine::new(100).unwrap();
        assert_eq!(pair_status(&small, 11, 199).unwrap(), PairStatus::Uncovered);
        assert_eq!(pair_status(&small, 10, 20).unwrap(), PairStatus::Mixed);
    }
}
