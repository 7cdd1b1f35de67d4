//! Version command implementation

use anyhow::Result;

use crate::cli::Output;

/// Execute the version command
pub fn execute(output: &Output) -> Result<()> {
    output.info(&format!("{} v{}", crate::PKG_NAME, crate::VERSION));
    output.verbose(crate::PKG_DESCRIPTION);
    output.verbose(&format!(
        "profile: {}",
        if cfg!(debug_assertions) { "debug" } else { "release" }
    ));
    Ok(())
}
