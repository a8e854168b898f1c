use clap::{Args, Parser, Subcommand};
use splitwave_core::{Color, Dimension, DEFAULT_MAX_N};

#[derive(Debug, Parser)]
#[command(name = "splitwave")]
#[command(author, version, about = "Classify integers by 17-split, colour taxonomy and prime bending")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Largest classifiable magnitude (sizes the sieve)
    #[arg(long, global = true, env = "SPLITWAVE_MAX_N", default_value_t = DEFAULT_MAX_N, allow_negative_numbers = true)]
    pub max_n: i64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify a single integer
    Classify {
        /// Integer to classify
        #[arg(allow_negative_numbers = true)]
        n: i64,

        /// Dimension frame (0-5)
        #[arg(short, long, default_value = "0", value_parser = parse_dimension)]
        dimension: Dimension,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify a range and list the matching records
    #[command(alias = "ls")]
    Range {
        #[command(flatten)]
        range: RangeArgs,

        /// Keep only these colours (repeatable, e.g. --color gold --color "golden brown")
        #[arg(long = "color", value_parser = parse_color)]
        colors: Vec<Color>,

        /// Keep only transparent integers
        #[arg(long, conflicts_with = "opaque")]
        transparent: bool,

        /// Keep only opaque integers
        #[arg(long)]
        opaque: bool,

        /// Keep only primes
        #[arg(long)]
        primes: bool,

        /// Keep only quad anchors of the 210-cycle
        #[arg(long)]
        anchors: bool,

        /// Zero-based page index
        #[arg(long, default_value_t = 0)]
        page: usize,

        /// Records per page
        #[arg(long, default_value_t = 50)]
        page_size: usize,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Count a range per colour and polarity axis
    Summary {
        #[command(flatten)]
        range: RangeArgs,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the quad-anchor pairs of the 210-cycle
    Bending,
}

#[derive(Debug, Args)]
pub struct RangeArgs {
    /// Lower bound (inclusive)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub min: i64,

    /// Upper bound (inclusive); defaults to MAX_N
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i64>,

    /// Dimension frame (0-5)
    #[arg(short, long, default_value = "0", value_parser = parse_dimension)]
    pub dimension: Dimension,

    /// Also classify the negation of every positive integer in the range
    #[arg(long)]
    pub negatives: bool,
}

fn parse_dimension(value: &str) -> Result<Dimension, String> {
    let raw: i64 = value.parse().map_err(|_| format!("`{value}` is not an integer"))?;
    Dimension::new(raw).map_err(|err| err.to_string())
}

fn parse_color(value: &str) -> Result<Color, String> {
    value.parse::<Color>().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_classify() {
        let cli = Cli::try_parse_from(["splitwave", "classify", "-14", "--dimension", "3", "--json"]).unwrap();
        match cli.command {
            Commands::Classify { n, dimension, json } => {
                assert_eq!(n, -14);
                assert_eq!(dimension, Dimension::D3);
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.max_n, DEFAULT_MAX_N);
    }

    #[test]
    fn parses_range_filters() {
        let cli = Cli::try_parse_from([
            "splitwave",
            "--max-n",
            "500",
            "range",
            "--min",
            "-20",
            "--max",
            "200",
            "--negatives",
            "--color",
            "gold",
            "--color",
            "golden brown",
            "--primes",
            "--page-size",
            "10",
        ])
        .unwrap();
        assert_eq!(cli.max_n, 500);
        match cli.command {
            Commands::Range {
                range, colors, primes, page_size, ..
            } => {
                assert_eq!(range.min, -20);
                assert_eq!(range.max, Some(200));
                assert!(range.negatives);
                assert_eq!(colors, vec![Color::Gold, Color::GoldenBrown]);
                assert!(primes);
                assert_eq!(page_size, 10);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_dimension_and_color() {
        assert!(Cli::try_parse_from(["splitwave", "classify", "5", "--dimension", "6"]).is_err());
        assert!(Cli::try_parse_from(["splitwave", "range", "--color", "magenta"]).is_err());
        assert!(Cli::try_parse_from(["splitwave", "range", "--transparent", "--opaque"]).is_err());
    }
}
