//! Rolls a weighted table repeatedly and tabulates observed frequencies
//! against the weights
use clap::{Parser, ValueEnum};
use loaded_dice::dice::WeightedTable;
use serde::Deserialize;
use std::fs;
use std::process::exit;

#[derive(Debug, Clone, ValueEnum)]
enum Tables {
    /// Sum of two six sided dice, loaded so the high sums come up twice as
    /// often as they should
    TwoDice,
    /// The lion/tiger/bear example table
    Menagerie,
}

impl Tables {
    fn build(&self) -> Vec<(String, f64)> {
        match self {
            Tables::TwoDice => vec![
                ("two", 1.0 / 36.0),
                ("three", 2.0 / 36.0),
                ("four", 3.0 / 36.0),
                ("five", 4.0 / 36.0),
                ("six", 5.0 / 36.0),
                ("seven", 6.0 / 36.0),
                ("eight", 5.0 / 36.0),
                ("nine", 4.0 / 36.0),
                // High numbers twice as likely
                ("ten", 2.0 * 3.0 / 36.0),
                ("eleven", 2.0 * 2.0 / 36.0),
                ("twelve", 2.0 * 1.0 / 36.0),
            ]
            .into_iter()
            .map(|(label, weight)| (label.to_string(), weight))
            .collect(),
            Tables::Menagerie => vec![
                ("lion".to_string(), 1.0),
                ("tiger".to_string(), 5.0),
                ("bear".to_string(), 1.5),
            ],
        }
    }
}

#[derive(Debug, Deserialize)]
struct RollSettings {
    rolls: Option<usize>,
    table: Vec<serde_json::Value>,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Built in table to roll
    #[arg(default_value = "two-dice")]
    table: Tables,

    /// JSON file with a custom table, overriding the built in one
    #[arg(short, long)]
    config_file: Option<String>,

    /// Number of rolls
    #[arg(short, long, default_value_t = 10000)]
    rolls: usize,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let (table, rolls) = match &args.config_file {
        Some(config_file) => {
            let config = fs::read_to_string(config_file).expect("Failed to read config file");
            let settings: RollSettings =
                serde_json::from_str(&config).expect("Failed to parse config file");
            let table = match WeightedTable::from_records(&settings.table) {
                Ok(table) => table,
                Err(error) => {
                    log::error!("Bad table in {}: {}", config_file, error);
                    exit(1);
                }
            };
            (table, settings.rolls.unwrap_or(args.rolls))
        }
        None => {
            let table = match WeightedTable::new(args.table.build()) {
                Ok(table) => table,
                Err(error) => {
                    log::error!("Bad built in table: {}", error);
                    exit(1);
                }
            };
            (table, args.rolls)
        }
    };

    log::info!("Rolling {} times", rolls);
    let mut tallies = vec![0usize; table.entries().len()];
    let mut rng = rand::thread_rng();
    for _ in 0..rolls {
        tallies[table.roll_index_with(&mut rng)] += 1;
    }

    let total_weight = table.total_weight();
    let label_width = table
        .entries()
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0)
        .max("Result".len());
    println!(
        "{:<label_width$}  {:>8}  {:>8}  {:>8}",
        "Result", "Weighted", "Weight", "Rolled"
    );
    for ((label, weight), tally) in table.entries().iter().zip(&tallies) {
        println!(
            "{:<label_width$}  {:>8.4}  {:>8.4}  {:>8}",
            label,
            weight / total_weight,
            weight,
            tally
        );
    }
}
