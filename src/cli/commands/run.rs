//! The benchmark suite: generate a roster, then race every selected
//! query under every selected strategy and report the timings.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::Output;
use crate::config::{GeneratorConfig, SuiteConfig};
use crate::report::{GenerationStats, Measurement, ReportFormat, SuiteReport, timed};
use crate::roster::RosterGenerator;
use crate::scanner::{QueryKind, ScanStrategy, Scanner};

/// Flags controlling one suite run
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Number of records to generate
    #[arg(long, default_value_t = 10_000_000)]
    pub count: usize,

    /// Length of generated first and last names
    #[arg(long, default_value_t = 25)]
    pub name_length: usize,

    /// Fixed RNG seed for a reproducible roster
    #[arg(long)]
    pub seed: Option<u64>,

    /// Last-name substring for the filter query (default: the first two
    /// letters of the top earner's last name)
    #[arg(long)]
    pub filter_term: Option<String>,

    /// Queries to run (comma-separated)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub queries: Vec<QueryKind>,

    /// Strategies to sweep (comma-separated)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub strategies: Vec<ScanStrategy>,

    /// Timed repetitions per query/strategy pair
    #[arg(long, default_value_t = 1)]
    pub iterations: u32,

    /// Rayon pool size (0 = one worker per logical core)
    #[arg(long, default_value_t = 0)]
    pub threads: usize,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

impl RunArgs {
    fn into_config(self) -> SuiteConfig {
        SuiteConfig {
            generator: GeneratorConfig {
                record_count: self.count,
                name_length: self.name_length,
                seed: self.seed,
                ..GeneratorConfig::default()
            },
            queries: if self.queries.is_empty() {
                QueryKind::ALL.to_vec()
            } else {
                self.queries
            },
            strategies: if self.strategies.is_empty() {
                ScanStrategy::ALL.to_vec()
            } else {
                self.strategies
            },
            iterations: self.iterations,
            threads: self.threads,
            filter_term: self.filter_term,
        }
    }
}

/// Execute the run command
pub fn execute(args: RunArgs, output: &Output) -> Result<()> {
    let format = args.format;
    let config = args.into_config();
    config.validate()?;

    if config.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build_global()
            .context("failed to size the rayon thread pool")?;
    }
    let workers = rayon::current_num_threads();
    tracing::debug!(
        cores = num_cpus::get(),
        workers,
        "parallel strategy configured"
    );

    let styled = format == ReportFormat::Text;
    if styled {
        output.header("Scanmark suite");
        output.step(&format!(
            "{} records, {} iterations per run, {} rayon workers",
            config.generator.record_count, config.iterations, workers
        ));
    }

    // Roster generation is part of the benchmark and timed as well.
    let mut generator = RosterGenerator::new(config.generator.clone())?;
    let bar = output.progress_bar(config.generator.record_count as u64, "generating roster");
    let start = Instant::now();
    let roster = generator.generate_with(|done| bar.set_position(done as u64));
    let generation = GenerationStats {
        record_count: roster.len(),
        duration_ms: start.elapsed().as_secs_f64() * 1000.0,
    };
    bar.finish_and_clear();
    tracing::info!(
        records = generation.record_count,
        "roster generated in {:.1} ms",
        generation.duration_ms
    );
    if styled {
        output.success(&format!(
            "generated {} records in {:.1} ms",
            generation.record_count, generation.duration_ms
        ));
    }

    let scanner = Scanner::new(roster);
    let mut measurements = Vec::new();
    // Last name of the latest top-salary winner; seeds the derived
    // filter term.
    let mut top_earner: Option<String> = None;

    for &query in &config.queries {
        match query {
            QueryKind::Youngest => {
                if styled {
                    output.header("Youngest programmer");
                }
                for &strategy in &config.strategies {
                    let (record, duration_ms) =
                        timed(config.iterations, || scanner.youngest(strategy))?;
                    let outcome = record.display_name();
                    if styled {
                        output.measurement(strategy.label(), duration_ms, &outcome);
                    }
                    measurements.push(Measurement {
                        query,
                        strategy,
                        duration_ms,
                        iterations: config.iterations,
                        outcome,
                    });
                }
            }
            QueryKind::TopSalary => {
                if styled {
                    output.header("Highest salary");
                }
                for &strategy in &config.strategies {
                    let (record, duration_ms) =
                        timed(config.iterations, || scanner.top_salary(strategy))?;
                    top_earner = Some(record.last_name.clone());
                    let outcome = record.display_name();
                    if styled {
                        output.measurement(strategy.label(), duration_ms, &outcome);
                    }
                    measurements.push(Measurement {
                        query,
                        strategy,
                        duration_ms,
                        iterations: config.iterations,
                        outcome,
                    });
                }
            }
            QueryKind::NameFilter => {
                let term = filter_term(&config, top_earner.as_deref(), &scanner)?;
                if styled {
                    output.header(&format!("Last names containing {term:?}"));
                }
                for &strategy in &config.strategies {
                    // The classic suite has no sort-based filter variant.
                    if strategy == ScanStrategy::Sort {
                        continue;
                    }
                    let (hits, duration_ms) = timed(config.iterations, || {
                        Ok(scanner.filter_by_last_name(&term, strategy))
                    })?;
                    let outcome = format!("{} records", hits.len());
                    if styled {
                        output.measurement(strategy.label(), duration_ms, &outcome);
                    }
                    measurements.push(Measurement {
                        query,
                        strategy,
                        duration_ms,
                        iterations: config.iterations,
                        outcome,
                    });
                }
            }
        }
    }

    match format {
        ReportFormat::Text => {
            output.blank_line();
            output.separator();
            output.success(&format!(
                "{} measurements across {} strategies",
                measurements.len(),
                config.strategies.len()
            ));
        }
        ReportFormat::Json => {
            let report = SuiteReport {
                config,
                workers,
                generation,
                measurements,
            };
            println!("{}", report.to_json()?);
        }
        ReportFormat::Csv => {
            let report = SuiteReport {
                config,
                workers,
                generation,
                measurements,
            };
            print!("{}", report.to_csv());
        }
    }

    Ok(())
}

/// The substring the filter scans for: the explicit flag if given, else
/// the last top-salary winner, else a fresh sequential top-salary pass.
fn filter_term(
    config: &SuiteConfig,
    top_earner: Option<&str>,
    scanner: &Scanner,
) -> Result<String> {
    if let Some(term) = &config.filter_term {
        return Ok(term.clone());
    }
    let last_name = match top_earner {
        Some(name) => name.to_string(),
        None => scanner
            .top_salary(ScanStrategy::Sequential)
            .context("no filter term given and none can be derived")?
            .last_name
            .clone(),
    };
    Ok(last_name.chars().take(2).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::test_support::programmer;

    fn base_args() -> RunArgs {
        RunArgs {
            count: 100,
            name_length: 25,
            seed: Some(1),
            filter_term: None,
            queries: Vec::new(),
            strategies: Vec::new(),
            iterations: 1,
            threads: 0,
            format: ReportFormat::Text,
        }
    }

    #[test]
    fn empty_selections_default_to_the_full_sweep() {
        let config = base_args().into_config();
        assert_eq!(config.queries, QueryKind::ALL.to_vec());
        assert_eq!(config.strategies, ScanStrategy::ALL.to_vec());
        assert_eq!(config.generator.record_count, 100);
        assert_eq!(config.generator.seed, Some(1));
    }

    #[test]
    fn explicit_selections_survive_into_the_config() {
        let args = RunArgs {
            queries: vec![QueryKind::TopSalary],
            strategies: vec![ScanStrategy::Parallel],
            ..base_args()
        };
        let config = args.into_config();
        assert_eq!(config.queries, vec![QueryKind::TopSalary]);
        assert_eq!(config.strategies, vec![ScanStrategy::Parallel]);
    }

    #[test]
    fn derived_filter_term_is_a_two_letter_prefix() {
        let config = SuiteConfig::default();
        let scanner = Scanner::new(vec![
            programmer("KERNIGHAN", (1960, 1, 1), 9000.0),
            programmer("RITCHIE", (1961, 1, 1), 9999.0),
        ]);
        let term = filter_term(&config, None, &scanner).unwrap();
        assert_eq!(term, "RI");
    }

    #[test]
    fn remembered_top_earner_takes_priority_over_a_new_scan() {
        let config = SuiteConfig::default();
        let scanner = Scanner::new(vec![programmer("KERNIGHAN", (1960, 1, 1), 9000.0)]);
        let term = filter_term(&config, Some("THOMPSON"), &scanner).unwrap();
        assert_eq!(term, "TH");
    }

    #[test]
    fn explicit_filter_term_wins() {
        let config = SuiteConfig {
            filter_term: Some("XYZ".to_string()),
            ..SuiteConfig::default()
        };
        let scanner = Scanner::new(Vec::new());
        let term = filter_term(&config, None, &scanner).unwrap();
        assert_eq!(term, "XYZ");
    }

    #[test]
    fn deriving_a_term_from_an_empty_roster_fails() {
        let config = SuiteConfig::default();
        let scanner = Scanner::new(Vec::new());
        assert!(filter_term(&config, None, &scanner).is_err());
    }
}
