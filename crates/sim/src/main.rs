// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};

use bspoker_cards::parse_ranks;
use bspoker_eval::{Hand, Rank, Rules};
use bspoker_sim::{Config, Simulation, report};

#[derive(Debug, Parser)]
struct Cli {
    /// Enable debug logs.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate the categories probabilities for a range of hand sizes.
    Sweep {
        /// The smallest hand size.
        #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=52))]
        min: u8,
        /// The largest hand size.
        #[clap(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(1..=52))]
        max: u8,
        #[clap(flatten)]
        sim: SimArgs,
        /// Output format.
        #[clap(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Estimate the categories probabilities for a single hand size.
    Run {
        /// Number of cards in play.
        #[clap(value_parser = clap::value_parser!(u8).range(0..=52))]
        handsize: u8,
        #[clap(flatten)]
        sim: SimArgs,
    },
    /// Show the categories in a hand, e.g. "A K 9 9 2".
    Classify {
        /// The hand ranks separated by spaces or commas.
        cards: String,
    },
}

#[derive(Debug, clap::Args)]
struct SimArgs {
    /// Number of hands drawn for each hand size.
    #[clap(long, short, default_value_t = 100)]
    iterations: usize,
    /// Seed for reproducible runs.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Number of parallel tasks.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=256))]
    tasks: u16,
}

impl From<SimArgs> for Config {
    fn from(args: SimArgs) -> Self {
        Config {
            iterations: args.iterations,
            seed: args.seed,
            tasks: args.tasks as usize,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let sim = Simulation::default();
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Sweep {
            min,
            max,
            sim: args,
            format,
        } => {
            if min > max {
                bail!("min hand size {min} is larger than max {max}");
            }

            let rows = sim.sweep(&args.into(), min as usize..=max as usize)?;
            match format {
                Format::Text => report::write_table(&mut out, &rows)?,
                Format::Json => report::write_json(&mut out, &rows)?,
            }
        }
        Command::Run {
            handsize,
            sim: args,
        } => {
            let tally = sim.run(&args.into(), handsize as usize)?;
            report::write_tally(&mut out, handsize as usize, &tally)?;
        }
        Command::Classify { cards } => {
            let ranks = parse_ranks(&cards)?;
            let rules = Rules::default();
            for rank in Rank::ranks() {
                let count = ranks.iter().filter(|&&r| r == rank).count();
                if count > rules.copies() as usize {
                    bail!("{count} cards of rank {rank}, the deck has {}", rules.copies());
                }
            }

            let hand = Hand::new(&ranks);
            report::write_classification(&mut out, &hand, &rules.classify(&hand))?;
        }
    }

    out.flush()?;
    Ok(())
}
