//! Strategy selectors and query identifiers shared across the scanner.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Execution strategy for a scan.
///
/// Five formulations of the same traversal, from a hand-driven cursor to
/// a rayon fork-join reduction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum ScanStrategy {
    /// Explicit cursor advanced by hand
    Iterator,
    /// Index-based loop over the slice
    Indexed,
    /// Comparator sort of scratch references, extremum read off the end
    Sort,
    /// Sequential iterator-adapter reduction
    #[default]
    Sequential,
    /// Rayon work-stealing fork-join reduction
    Parallel,
}

impl ScanStrategy {
    /// Sweep order of the suite.
    pub const ALL: [ScanStrategy; 5] = [
        ScanStrategy::Iterator,
        ScanStrategy::Indexed,
        ScanStrategy::Sort,
        ScanStrategy::Sequential,
        ScanStrategy::Parallel,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScanStrategy::Iterator => "iterator",
            ScanStrategy::Indexed => "indexed",
            ScanStrategy::Sort => "sort",
            ScanStrategy::Sequential => "sequential",
            ScanStrategy::Parallel => "parallel",
        }
    }
}

impl fmt::Display for ScanStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three queries the scanner answers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum QueryKind {
    /// Record with the most recent birth date
    #[default]
    Youngest,
    /// Record with the highest salary
    TopSalary,
    /// Records whose last name contains a substring
    NameFilter,
}

impl QueryKind {
    /// Suite order.
    pub const ALL: [QueryKind; 3] = [
        QueryKind::Youngest,
        QueryKind::TopSalary,
        QueryKind::NameFilter,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QueryKind::Youngest => "youngest",
            QueryKind::TopSalary => "top-salary",
            QueryKind::NameFilter => "name-filter",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
