//! # Scanmark - Scan-Strategy Benchmarks over a Synthetic Roster
//!
//! Scanmark generates a large in-memory roster of synthetic programmer
//! records and races five interchangeable scan strategies against each
//! other: a hand-driven cursor, an indexed loop, a comparator sort, a
//! sequential iterator reduction, and a rayon parallel reduction. Every
//! strategy must land on the same answer; only the wall-clock differs.
//!
//! ## Quick Start
//!
//! ```bash
//! # Full suite with the classic constants (10M records)
//! scanmark run
//!
//! # Reproducible mid-size run with a JSON report
//! scanmark run --count 100000 --seed 42 --format json
//! ```

pub mod cli;
pub mod config;
pub mod report;
pub mod roster;
pub mod scanner;

pub use cli::{Cli, Output};
pub use config::{GeneratorConfig, SuiteConfig};
pub use roster::{Language, Programmer, RosterGenerator};
pub use scanner::{QueryKind, ScanStrategy, Scanner};

/// Result type alias for scanmark operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
