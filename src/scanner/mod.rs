//! Scan queries over a generated roster
//!
//! `Scanner` owns the roster and answers each query under any
//! `ScanStrategy`. The strategies are deliberately redundant: racing
//! them against each other is the point of the suite, and they must
//! agree on the answer. The extremum and filter implementations live
//! in sibling files as further `impl Scanner` blocks.

mod extremum;
mod filter;
mod types;

pub use types::{QueryKind, ScanStrategy};

use crate::roster::Programmer;

/// Read-only scan interface over a generated roster.
pub struct Scanner {
    roster: Vec<Programmer>,
}

impl Scanner {
    pub fn new(roster: Vec<Programmer>) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &[Programmer] {
        &self.roster
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }
}

/// Every extremum query refuses an empty roster with this error.
pub(crate) fn empty_roster() -> anyhow::Error {
    anyhow::anyhow!("cannot scan an empty collection")
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;

    use crate::roster::{Language, Programmer};

    /// Minimal record for scanner tests; only the queried fields vary.
    pub fn programmer(last_name: &str, birth: (i32, u32, u32), salary: f64) -> Programmer {
        Programmer {
            first_name: "AAA".to_string(),
            last_name: last_name.to_string(),
            birth_date: NaiveDate::from_ymd_opt(birth.0, birth.1, birth.2).unwrap(),
            language: Language::Rust,
            start_date: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
            salary,
        }
    }
}
