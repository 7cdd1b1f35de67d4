//! Generate a roster without scanning it; prints timing and a few
//! sample records.

use std::time::Instant;

use anyhow::Result;
use clap::Args;

use crate::cli::Output;
use crate::config::GeneratorConfig;
use crate::roster::RosterGenerator;

/// Flags for standalone roster generation
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of records to generate
    #[arg(long, default_value_t = 10_000_000)]
    pub count: usize,

    /// Length of generated first and last names
    #[arg(long, default_value_t = 25)]
    pub name_length: usize,

    /// Fixed RNG seed for a reproducible roster
    #[arg(long)]
    pub seed: Option<u64>,

    /// How many sample records to print afterwards
    #[arg(long, default_value_t = 5)]
    pub sample: usize,
}

/// Execute the generate command
pub fn execute(args: GenerateArgs, output: &Output) -> Result<()> {
    let config = GeneratorConfig {
        record_count: args.count,
        name_length: args.name_length,
        seed: args.seed,
        ..GeneratorConfig::default()
    };
    let mut generator = RosterGenerator::new(config)?;

    let bar = output.progress_bar(args.count as u64, "generating roster");
    let start = Instant::now();
    let roster = generator.generate_with(|done| bar.set_position(done as u64));
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    bar.finish_and_clear();

    output.success(&format!(
        "generated {} records in {elapsed_ms:.1} ms",
        roster.len()
    ));

    for record in roster.iter().take(args.sample) {
        output.step(&record.to_string());
    }

    Ok(())
}
