//! Last-name substring filter.
//!
//! Case-sensitive, literal containment. Sequential strategies preserve
//! roster order; the parallel variant ends up order-preserving as well,
//! since rayon's collect concatenates split results left to right.

use rayon::prelude::*;

use super::{Scanner, ScanStrategy};
use crate::roster::Programmer;

impl Scanner {
    /// All records whose last name contains `term`.
    ///
    /// An empty roster or a term with no hits yields an empty vec.
    /// Sorting adds nothing to a filter, so `Sort` runs the plain
    /// sequential scan.
    pub fn filter_by_last_name(&self, term: &str, strategy: ScanStrategy) -> Vec<&Programmer> {
        match strategy {
            ScanStrategy::Iterator => self.filter_iterator(term),
            ScanStrategy::Indexed => self.filter_indexed(term),
            ScanStrategy::Sort | ScanStrategy::Sequential => self
                .roster
                .iter()
                .filter(|p| p.last_name.contains(term))
                .collect(),
            ScanStrategy::Parallel => self
                .roster
                .par_iter()
                .filter(|p| p.last_name.contains(term))
                .collect(),
        }
    }

    #[allow(clippy::while_let_on_iterator)]
    fn filter_iterator(&self, term: &str) -> Vec<&Programmer> {
        let mut hits = Vec::new();
        let mut cursor = self.roster.iter();
        while let Some(candidate) = cursor.next() {
            if candidate.last_name.contains(term) {
                hits.push(candidate);
            }
        }
        hits
    }

    #[allow(clippy::needless_range_loop)]
    fn filter_indexed(&self, term: &str) -> Vec<&Programmer> {
        let mut hits = Vec::new();
        for index in 0..self.roster.len() {
            if self.roster[index].last_name.contains(term) {
                hits.push(&self.roster[index]);
            }
        }
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::programmer;
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::roster::RosterGenerator;

    fn sample() -> Scanner {
        Scanner::new(vec![
            programmer("ABAB", (1970, 1, 1), 5000.0),
            programmer("ZZZZ", (1971, 1, 1), 5100.0),
            programmer("XABX", (1972, 1, 1), 5200.0),
            programmer("ABBA", (1973, 1, 1), 5300.0),
        ])
    }

    fn last_names(hits: &[&Programmer]) -> Vec<String> {
        hits.iter().map(|p| p.last_name.clone()).collect()
    }

    #[test]
    fn matches_preserve_roster_order() {
        let scanner = sample();
        for strategy in ScanStrategy::ALL {
            let hits = scanner.filter_by_last_name("AB", strategy);
            assert_eq!(
                last_names(&hits),
                vec!["ABAB", "XABX", "ABBA"],
                "strategy {strategy}"
            );
        }
    }

    #[test]
    fn containment_is_case_sensitive() {
        let scanner = sample();
        for strategy in ScanStrategy::ALL {
            assert!(scanner.filter_by_last_name("ab", strategy).is_empty());
        }
    }

    #[test]
    fn empty_term_matches_everything() {
        let scanner = sample();
        for strategy in ScanStrategy::ALL {
            assert_eq!(scanner.filter_by_last_name("", strategy).len(), 4);
        }
    }

    #[test]
    fn no_hits_yields_an_empty_vec() {
        let scanner = sample();
        for strategy in ScanStrategy::ALL {
            assert!(scanner.filter_by_last_name("QQ", strategy).is_empty());
        }
    }

    #[test]
    fn empty_roster_filters_to_nothing() {
        let scanner = Scanner::new(Vec::new());
        for strategy in ScanStrategy::ALL {
            assert!(scanner.filter_by_last_name("AB", strategy).is_empty());
        }
    }

    #[test]
    fn strategies_agree_on_a_generated_roster() {
        let config = GeneratorConfig {
            record_count: 800,
            name_length: 5,
            seed: Some(123),
            ..GeneratorConfig::default()
        };
        let roster = RosterGenerator::new(config).unwrap().generate();
        let scanner = Scanner::new(roster);

        let reference = last_names(&scanner.filter_by_last_name("A", ScanStrategy::Sequential));
        assert!(!reference.is_empty());
        assert!(reference.len() < scanner.len());
        for strategy in ScanStrategy::ALL {
            assert_eq!(
                last_names(&scanner.filter_by_last_name("A", strategy)),
                reference,
                "strategy {strategy}"
            );
        }
    }
}
