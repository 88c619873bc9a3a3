//! Common utilities for formatters.
//!
//! Responsibilities:
//! - Atomic file writing.
//! - Standardized missing/null value and timestamp rendering for tables.
//!
//! Does NOT handle:
//! - Format-specific logic (lives in respective formatter modules).

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::Path;

/// Table representation for missing/null values.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

/// Format an optional string value, using the default missing value if None.
pub fn format_missing(opt: Option<&str>) -> &str {
    opt.unwrap_or(DEFAULT_MISSING_VALUE)
}

/// Render a timestamp for table output (UTC, minute precision).
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Write formatted output to stdout, or atomically to `output_file` when given.
///
/// # Example
/// ```rust,ignore
/// let formatter = get_formatter(format);
/// let output = formatter.format_dashboards(&dashboards)?;
/// output_result(&output, None)?;
/// ```
pub fn output_result(output: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        write_to_file(output, path)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
    } else {
        print!("{}", output);
        if !output.is_empty() && !output.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

/// Write content to a file atomically.
///
/// Creates parent directories if needed, writes to temp file then renames
/// for atomicity. Returns error with helpful context on failure.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    use std::fs;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // If path has no parent (e.g., just "cpu.yaml"), use current directory
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    if parent_dir != Path::new(".") {
        fs::create_dir_all(parent_dir)
            .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;
    }

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .with_context(|| "Failed to write to temp file")?;
    temp_file
        .flush()
        .with_context(|| "Failed to flush temp file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
