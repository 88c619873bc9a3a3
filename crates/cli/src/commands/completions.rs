//! Shell completion generation command.
//!
//! Responsibilities:
//! - Generate shell completion scripts (bash, zsh, fish, powershell, elvish).
//!
//! Does NOT handle:
//! - Installing completions (redirect stdout to the shell's completion directory).

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io;

/// Write completions for `shell` to stdout.
pub fn run(shell: Shell) -> Result<()> {
    let mut cmd = crate::args::Cli::command();
    generate(shell, &mut cmd, "logfire-cli", &mut io::stdout());
    Ok(())
}
