//! Suite reports: timing measurements and their text, JSON, and CSV
//! renderings.

use std::fmt;
use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use serde::Serialize;

use crate::config::SuiteConfig;
use crate::scanner::{QueryKind, ScanStrategy};

/// Output format for the suite report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Default)]
pub enum ReportFormat {
    /// Styled per-run lines plus a summary
    #[default]
    Text,
    /// One JSON document with config, generation stats, and measurements
    Json,
    /// Header row plus one row per measurement
    Csv,
}

impl ReportFormat {
    pub fn label(self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Wall-clock result of one query under one strategy.
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub query: QueryKind,
    pub strategy: ScanStrategy,
    /// Mean duration over `iterations` runs
    pub duration_ms: f64,
    pub iterations: u32,
    /// Extremum name, or the hit count for the filter
    pub outcome: String,
}

/// Roster generation timing.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationStats {
    pub record_count: usize,
    pub duration_ms: f64,
}

/// Everything one suite run produced.
#[derive(Debug, Serialize)]
pub struct SuiteReport {
    pub config: SuiteConfig,
    /// Rayon workers the parallel strategy ran on
    pub workers: usize,
    pub generation: GenerationStats,
    pub measurements: Vec<Measurement>,
}

impl SuiteReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_csv(&self) -> String {
        let mut out = String::from("query,strategy,duration_ms,iterations,outcome\n");
        for m in &self.measurements {
            out.push_str(&format!(
                "{},{},{:.3},{},{}\n",
                m.query, m.strategy, m.duration_ms, m.iterations, m.outcome
            ));
        }
        out
    }
}

/// Run `op` `iterations` times; returns the final run's value and the
/// mean wall-clock duration in milliseconds.
pub fn timed<T>(iterations: u32, mut op: impl FnMut() -> Result<T>) -> Result<(T, f64)> {
    let mut total = Duration::ZERO;
    let mut last = None;
    for _ in 0..iterations {
        let start = Instant::now();
        let value = op()?;
        total += start.elapsed();
        last = Some(value);
    }
    let Some(value) = last else {
        bail!("timed runs require at least one iteration");
    };
    Ok((value, total.as_secs_f64() * 1000.0 / f64::from(iterations)))
}
