//! `init` command: write a starter dashboard document.
//!
//! Runs offline; no credentials are needed.
//!
//! Invariants:
//! - The generated document lints clean.
//! - An existing file is only replaced with `--force`.

use std::path::PathBuf;

use anyhow::Result;
use logfire_client::{ClientError, template, to_yaml};
use tracing::info;

use crate::formatters::write_to_file;

/// Project written into `metadata.project` when none is configured.
pub const PLACEHOLDER_PROJECT: &str = "your-project";

pub fn run(
    name: &str,
    project: Option<&str>,
    output: Option<PathBuf>,
    force: bool,
) -> Result<()> {
    let project = project
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(PLACEHOLDER_PROJECT);

    let definition = template(name, project)?;
    let path = output.unwrap_or_else(|| PathBuf::from(format!("{}.yaml", definition.metadata.name)));

    if path.exists() && !force {
        return Err(ClientError::InvalidInput(format!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        ))
        .into());
    }

    info!(name, path = %path.display(), "Writing dashboard template");
    write_to_file(&to_yaml(&definition)?, &path)?;

    eprintln!("Dashboard template created: {}", path.display());
    eprintln!("Edit the file and run `logfire-cli push {}` to upload it.", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use logfire_client::lint_file;

    #[test]
    fn test_init_writes_clean_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("svc.yaml");

        run("Service Overview", Some("web"), Some(path.clone()), false).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("name: service-overview"));
        assert!(text.contains("project: web"));
        assert!(lint_file(&path).unwrap().is_empty());
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("svc.yaml");
        std::fs::write(&path, "keep me").unwrap();

        let err = run("Service", None, Some(path.clone()), false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClientError>(),
            Some(ClientError::InvalidInput(_))
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");

        run("Service", None, Some(path.clone()), true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains(PLACEHOLDER_PROJECT));
    }
}
