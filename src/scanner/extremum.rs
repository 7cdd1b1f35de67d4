//! Extremum queries: youngest record and highest salary.
//!
//! One generic maximum-by-comparator core, five strategy spellings of
//! it. Ties may resolve to any maximal record; callers must only rely
//! on the extremal value itself.

use std::cmp::Ordering;

use anyhow::Result;
use rayon::prelude::*;

use super::{Scanner, ScanStrategy, empty_roster};
use crate::roster::Programmer;

impl Scanner {
    /// Record with the most recent birth date.
    pub fn youngest(&self, strategy: ScanStrategy) -> Result<&Programmer> {
        self.extremum_by(strategy, |a, b| a.birth_date.cmp(&b.birth_date))
    }

    /// Record with the highest salary.
    pub fn top_salary(&self, strategy: ScanStrategy) -> Result<&Programmer> {
        self.extremum_by(strategy, |a, b| a.salary.total_cmp(&b.salary))
    }

    fn extremum_by(
        &self,
        strategy: ScanStrategy,
        cmp: impl Fn(&Programmer, &Programmer) -> Ordering + Sync,
    ) -> Result<&Programmer> {
        match strategy {
            ScanStrategy::Iterator => self.extremum_iterator(&cmp),
            ScanStrategy::Indexed => self.extremum_indexed(&cmp),
            ScanStrategy::Sort => self.extremum_sort(&cmp),
            ScanStrategy::Sequential => self
                .roster
                .iter()
                .max_by(|a, b| cmp(a, b))
                .ok_or_else(empty_roster),
            ScanStrategy::Parallel => self
                .roster
                .par_iter()
                .max_by(|a, b| cmp(a, b))
                .ok_or_else(empty_roster),
        }
    }

    // The hand-driven cursor is the point of this variant.
    #[allow(clippy::while_let_on_iterator)]
    fn extremum_iterator(
        &self,
        cmp: &impl Fn(&Programmer, &Programmer) -> Ordering,
    ) -> Result<&Programmer> {
        let mut cursor = self.roster.iter();
        let mut best = cursor.next().ok_or_else(empty_roster)?;
        while let Some(candidate) = cursor.next() {
            if cmp(candidate, best) == Ordering::Greater {
                best = candidate;
            }
        }
        Ok(best)
    }

    // As is the explicit indexing here.
    #[allow(clippy::needless_range_loop)]
    fn extremum_indexed(
        &self,
        cmp: &impl Fn(&Programmer, &Programmer) -> Ordering,
    ) -> Result<&Programmer> {
        if self.roster.is_empty() {
            return Err(empty_roster());
        }
        let mut best = &self.roster[0];
        for index in 1..self.roster.len() {
            if cmp(&self.roster[index], best) == Ordering::Greater {
                best = &self.roster[index];
            }
        }
        Ok(best)
    }

    /// Full comparator sort of scratch references; the maximum ends up
    /// last. The roster itself is never reordered.
    fn extremum_sort(
        &self,
        cmp: &impl Fn(&Programmer, &Programmer) -> Ordering,
    ) -> Result<&Programmer> {
        let mut order: Vec<&Programmer> = self.roster.iter().collect();
        order.sort_by(|a, b| cmp(a, b));
        order.last().copied().ok_or_else(empty_roster)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::programmer;
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::roster::RosterGenerator;

    fn three_birthdays() -> Scanner {
        Scanner::new(vec![
            programmer("FIRST", (1960, 1, 1), 6000.0),
            programmer("SECOND", (1985, 6, 15), 5200.0),
            programmer("THIRD", (1970, 3, 3), 9800.0),
        ])
    }

    #[test]
    fn youngest_agrees_across_all_strategies() {
        let scanner = three_birthdays();
        for strategy in ScanStrategy::ALL {
            let found = scanner.youngest(strategy).unwrap();
            assert_eq!(found.last_name, "SECOND", "strategy {strategy}");
            assert_eq!(found.birth_date.to_string(), "1985-06-15");
        }
    }

    #[test]
    fn top_salary_agrees_across_all_strategies() {
        let scanner = three_birthdays();
        for strategy in ScanStrategy::ALL {
            let found = scanner.top_salary(strategy).unwrap();
            assert_eq!(found.last_name, "THIRD", "strategy {strategy}");
        }
    }

    #[test]
    fn single_record_is_its_own_extremum() {
        let scanner = Scanner::new(vec![programmer("ONLY", (1975, 2, 2), 5001.0)]);
        for strategy in ScanStrategy::ALL {
            assert_eq!(scanner.youngest(strategy).unwrap().last_name, "ONLY");
            assert_eq!(scanner.top_salary(strategy).unwrap().last_name, "ONLY");
        }
    }

    #[test]
    fn empty_roster_is_refused_by_every_strategy() {
        let scanner = Scanner::new(Vec::new());
        for strategy in ScanStrategy::ALL {
            let err = scanner.youngest(strategy).unwrap_err();
            assert!(err.to_string().contains("empty collection"), "strategy {strategy}");
            assert!(scanner.top_salary(strategy).is_err(), "strategy {strategy}");
        }
    }

    #[test]
    fn tied_extrema_agree_on_the_value() {
        // Two records share the maximal birth date; any of them is a
        // valid winner but the date must match everywhere.
        let scanner = Scanner::new(vec![
            programmer("TIE-A", (1990, 9, 9), 5100.0),
            programmer("OLDER", (1960, 1, 1), 5200.0),
            programmer("TIE-B", (1990, 9, 9), 5300.0),
        ]);
        for strategy in ScanStrategy::ALL {
            let found = scanner.youngest(strategy).unwrap();
            assert_eq!(found.birth_date.to_string(), "1990-09-09", "strategy {strategy}");
        }
    }

    #[test]
    fn strategies_agree_on_a_generated_roster() {
        let config = GeneratorConfig {
            record_count: 600,
            name_length: 6,
            seed: Some(77),
            ..GeneratorConfig::default()
        };
        let roster = RosterGenerator::new(config).unwrap().generate();
        let scanner = Scanner::new(roster);

        let reference_birth = scanner.roster().iter().map(|p| p.birth_date).max().unwrap();
        let reference_salary = scanner
            .roster()
            .iter()
            .map(|p| p.salary)
            .fold(f64::MIN, f64::max);
        for strategy in ScanStrategy::ALL {
            assert_eq!(
                scanner.youngest(strategy).unwrap().birth_date,
                reference_birth,
                "strategy {strategy}"
            );
            assert_eq!(
                scanner.top_salary(strategy).unwrap().salary,
                reference_salary,
                "strategy {strategy}"
            );
        }
    }
}
