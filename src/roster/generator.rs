//! Roster generation
//!
//! Every field of a record is drawn independently from the configured
//! bounds: names as fixed-length strings over a closed alphabet, birth
//! dates uniform over a half-open day range, the programming start date
//! at least the minimum coding age after birth and before the cutoff,
//! the salary uniform over its half-open range, the language from the
//! closed label set.

use anyhow::Result;
use chrono::{Duration, Months, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Language, Programmer};
use crate::config::GeneratorConfig;

/// How often the progress callback fires, in records.
const PROGRESS_STRIDE: usize = 10_000;

/// Draws programmer records from validated bounds.
///
/// Construction validates the configuration once; drawing records after
/// that cannot fail.
pub struct RosterGenerator {
    config: GeneratorConfig,
    rng: StdRng,
    birth_span_days: i64,
    min_coding_offset: Months,
}

impl RosterGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let birth_span_days = (config.birth_until - config.birth_from).num_days();
        let min_coding_offset = Months::new(config.min_coding_age_years.saturating_mul(12));
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            config,
            rng,
            birth_span_days,
            min_coding_offset,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the whole roster.
    pub fn generate(&mut self) -> Vec<Programmer> {
        self.generate_with(|_| {})
    }

    /// Generate the whole roster, reporting the running record count to
    /// `progress` every few thousand records and once at the end.
    pub fn generate_with(&mut self, mut progress: impl FnMut(usize)) -> Vec<Programmer> {
        let count = self.config.record_count;
        let mut roster = Vec::with_capacity(count);
        for i in 0..count {
            roster.push(self.draw());
            if (i + 1) % PROGRESS_STRIDE == 0 {
                progress(i + 1);
            }
        }
        if count % PROGRESS_STRIDE != 0 {
            progress(count);
        }
        roster
    }

    fn draw(&mut self) -> Programmer {
        let first_name = self.random_name();
        let last_name = self.random_name();
        let birth_date = self.random_birth_date();
        let start_date = self.random_start_date(birth_date);
        let language = Language::ALL[self.rng.gen_range(0..Language::ALL.len())];
        let salary = self
            .rng
            .gen_range(self.config.salary_min..self.config.salary_max);
        Programmer {
            first_name,
            last_name,
            birth_date,
            language,
            start_date,
            salary,
        }
    }

    fn random_name(&mut self) -> String {
        let alphabet = self.config.alphabet.as_bytes();
        (0..self.config.name_length)
            .map(|_| alphabet[self.rng.gen_range(0..alphabet.len())] as char)
            .collect()
    }

    fn random_birth_date(&mut self) -> NaiveDate {
        self.config.birth_from + Duration::days(self.rng.gen_range(0..self.birth_span_days))
    }

    // The start span is never empty: validation checks the worst case,
    // a birth on the last day of the range.
    fn random_start_date(&mut self, birth_date: NaiveDate) -> NaiveDate {
        let earliest = birth_date + self.min_coding_offset;
        let span_days = (self.config.start_cutoff - earliest).num_days();
        earliest + Duration::days(self.rng.gen_range(0..span_days))
    }
}
