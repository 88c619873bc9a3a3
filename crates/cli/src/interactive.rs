//! User interaction utilities for the CLI.
//!
//! Responsibilities:
//! - Provide shared helpers for interactive user prompts.
//! - Refuse to prompt when stdin is not a terminal, so scripts fail fast
//!   instead of hanging.

use std::io::IsTerminal;

use anyhow::Result;
use logfire_client::ClientError;

/// Prompt the user for delete confirmation.
///
/// Returns `Ok(true)` if the user confirms, `Ok(false)` if they decline.
///
/// # Errors
/// Fails with [`ClientError::InvalidInput`] when stdin is not a terminal;
/// callers should pass `--yes` in that case.
pub fn confirm_delete(item_name: &str, item_type: &str) -> Result<bool> {
    if !std::io::stdin().is_terminal() {
        return Err(ClientError::InvalidInput(format!(
            "refusing to delete {item_type} '{item_name}' without confirmation; pass --yes to skip the prompt"
        ))
        .into());
    }

    let confirmed = dialoguer::Confirm::new()
        .with_prompt(format!(
            "Are you sure you want to delete {item_type} '{item_name}'?"
        ))
        .default(false)
        .interact()?;

    if !confirmed {
        eprintln!("Delete cancelled.");
    }

    Ok(confirmed)
}
