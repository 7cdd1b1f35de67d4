//! Configuration for the roster generator and the benchmark suite
//!
//! Defaults reproduce the classic constants of the suite; every knob is
//! driven by CLI flags, there is no configuration file. Validation runs
//! once, before any record is drawn.

use anyhow::{Result, bail};
use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::scanner::{QueryKind, ScanStrategy};

/// Bounds and constants for roster generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// How many records to generate
    pub record_count: usize,

    /// Alphabet names are drawn from
    pub alphabet: String,

    /// Exact length of generated first and last names
    pub name_length: usize,

    /// Birth dates start here (inclusive)
    pub birth_from: NaiveDate,

    /// Birth dates end here (exclusive)
    pub birth_until: NaiveDate,

    /// Programming start dates fall before this day (exclusive)
    pub start_cutoff: NaiveDate,

    /// Years between birth and the earliest plausible start of a career
    pub min_coding_age_years: u32,

    /// Salary range lower bound (inclusive)
    pub salary_min: f64,

    /// Salary range upper bound (exclusive)
    pub salary_max: f64,

    /// Fixed RNG seed; fresh entropy when absent
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            record_count: 10_000_000,
            alphabet: "ABCDEFGHIJKLMNOPRSTUVWXYZ".to_string(),
            name_length: 25,
            birth_from: NaiveDate::from_ymd_opt(1950, 1, 1).unwrap(),
            birth_until: NaiveDate::from_ymd_opt(1998, 12, 31).unwrap(),
            start_cutoff: NaiveDate::from_ymd_opt(2016, 10, 15).unwrap(),
            min_coding_age_years: 7,
            salary_min: 5_000.0,
            salary_max: 10_000.0,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Check every bound the generator later relies on.
    pub fn validate(&self) -> Result<()> {
        if self.name_length == 0 {
            bail!("name length must be at least 1");
        }
        if self.alphabet.is_empty() {
            bail!("name alphabet must not be empty");
        }
        if !self.alphabet.is_ascii() {
            bail!("name alphabet must be ASCII");
        }
        if self.birth_from >= self.birth_until {
            bail!(
                "birth date range is empty: {} .. {}",
                self.birth_from,
                self.birth_until
            );
        }
        // Worst case for the start span is a birth on the last drawable day.
        let latest_birth = self.birth_until - Duration::days(1);
        let Some(earliest_start) =
            latest_birth.checked_add_months(Months::new(self.min_coding_age_years.saturating_mul(12)))
        else {
            bail!(
                "minimum coding age of {} years overflows the calendar",
                self.min_coding_age_years
            );
        };
        if earliest_start >= self.start_cutoff {
            bail!(
                "start cutoff {} leaves no room for a birth on {} plus {} years",
                self.start_cutoff,
                latest_birth,
                self.min_coding_age_years
            );
        }
        if !self.salary_min.is_finite() || !self.salary_max.is_finite() {
            bail!("salary bounds must be finite");
        }
        if self.salary_min >= self.salary_max {
            bail!(
                "salary range is empty: {} .. {}",
                self.salary_min,
                self.salary_max
            );
        }
        Ok(())
    }
}

/// What one suite run covers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Roster generation bounds
    pub generator: GeneratorConfig,

    /// Queries to run, in order
    pub queries: Vec<QueryKind>,

    /// Strategies each query is swept under
    pub strategies: Vec<ScanStrategy>,

    /// Timed repetitions per query/strategy pair; durations are averaged
    pub iterations: u32,

    /// Rayon pool size; 0 means one worker per logical core
    pub threads: usize,

    /// Last-name substring for the filter query; derived from the
    /// top-salary record when absent
    pub filter_term: Option<String>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            queries: QueryKind::ALL.to_vec(),
            strategies: ScanStrategy::ALL.to_vec(),
            iterations: 1,
            threads: 0,
            filter_term: None,
        }
    }
}

impl SuiteConfig {
    pub fn validate(&self) -> Result<()> {
        self.generator.validate()?;
        if self.queries.is_empty() {
            bail!("at least one query must be selected");
        }
        if self.strategies.is_empty() {
            bail!("at least one strategy must be selected");
        }
        if self.iterations == 0 {
            bail!("iterations must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        GeneratorConfig::default().validate().unwrap();
        SuiteConfig::default().validate().unwrap();
    }

    #[test]
    fn default_bounds_match_the_classic_constants() {
        let config = GeneratorConfig::default();
        assert_eq!(config.record_count, 10_000_000);
        assert_eq!(config.name_length, 25);
        assert_eq!(config.alphabet.len(), 25);
        assert!(!config.alphabet.contains('Q'));
        assert_eq!(config.min_coding_age_years, 7);
    }

    #[test]
    fn empty_birth_range_is_rejected() {
        let config = GeneratorConfig {
            birth_until: NaiveDate::from_ymd_opt(1950, 1, 1).unwrap(),
            ..GeneratorConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("birth date range"));
    }

    #[test]
    fn tight_start_cutoff_is_rejected() {
        let config = GeneratorConfig {
            start_cutoff: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            // latest birth 1998-12-30 plus 7 years lands past the cutoff
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_salary_range_is_rejected() {
        let config = GeneratorConfig {
            salary_min: 10_000.0,
            salary_max: 10_000.0,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_iterations_are_rejected() {
        let config = SuiteConfig {
            iterations: 0,
            ..SuiteConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_strategy_sweep_is_rejected() {
        let config = SuiteConfig {
            strategies: Vec::new(),
            ..SuiteConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
