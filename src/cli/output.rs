//! Console output for scanmark
//!
//! Consistent styled messages plus the roster generation progress bar.
//! Everything except errors respects quiet mode.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✔").green(), message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        // Errors are always shown, even in quiet mode
        eprintln!("{} {}", style("✖").red(), message);
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("⚠").yellow(), message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("ℹ").blue(), message);
        }
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Print a section header
    pub fn header(&self, title: &str) {
        if !self.quiet {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Print a step within a section
    pub fn step(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("❯").cyan(), message);
        }
    }

    /// One finished benchmark run: strategy label, mean duration, result.
    pub fn measurement(&self, label: &str, duration_ms: f64, outcome: &str) {
        if !self.quiet {
            println!(
                "  {} {:<12} {} {}",
                style("•").cyan(),
                label,
                style(format!("{duration_ms:>10.3} ms")).yellow().bold(),
                style(outcome).dim()
            );
        }
    }

    /// Print a horizontal separator
    pub fn separator(&self) {
        if !self.quiet {
            println!("{}", style("─".repeat(50)).dim());
        }
    }

    /// Print a blank line
    pub fn blank_line(&self) {
        if !self.quiet {
            println!();
        }
    }

    /// Progress bar for roster generation; hidden in quiet mode and
    /// drawn on stderr so piped stdout stays clean.
    pub fn progress_bar(&self, len: u64, message: &str) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(len);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            )
            .unwrap()
            .progress_chars("#>-"),
        );
        pb.set_message(message.to_string());
        pb
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}
