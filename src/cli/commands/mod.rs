//! Command implementations for the scanmark CLI
//!
//! Each command is organized into its own module: an `Args` struct for
//! the flags it takes and an `execute` function that runs it.

pub mod generate;
pub mod run;
pub mod version;
