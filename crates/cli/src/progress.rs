//! Progress indicator utilities for the Logfire CLI.
//!
//! Responsibilities:
//! - Provide a spinner for single requests and a counted bar for multi-file pushes.
//! - Ensure ALL progress output is written to STDERR (never stdout), so machine-readable
//!   command output (json/yaml) is not contaminated.
//! - Allow global suppression via a caller-provided `enabled` boolean (driven by `--quiet`).
//!
//! Non-responsibilities:
//! - This module does not decide *when* progress should be shown; callers do.
//! - This module does not print command results; stdout remains reserved for results.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// A counted progress bar for pushing several files.
///
/// Always draws to STDERR. When disabled, it becomes a no-op.
pub(crate) struct BatchProgress {
    label: String,
    pb: Option<ProgressBar>,
}

impl BatchProgress {
    /// Create a bar for `total` items.
    ///
    /// `enabled` should be `!quiet`.
    pub(crate) fn new(enabled: bool, label: impl Into<String>, total: usize) -> Self {
        let label = label.into();

        if !enabled {
            return Self { label, pb: None };
        }

        let pb = ProgressBar::new(total as u64);
        pb.set_draw_target(ProgressDrawTarget::stderr());
        pb.set_style(
            ProgressStyle::with_template("{spinner} {msg} [{bar:30.cyan/blue}] {pos}/{len}")
                .expect("template is a compile-time constant with valid syntax")
                .progress_chars("=>-"),
        );
        pb.set_message(label.clone());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            label,
            pb: Some(pb),
        }
    }

    /// Record one finished item (successful or not).
    pub(crate) fn inc(&self) {
        if let Some(pb) = &self.pb {
            pb.inc(1);
        }
    }

    /// Finish the bar with a stable message (on STDERR).
    pub(crate) fn finish(&self) {
        let Some(pb) = &self.pb else {
            return;
        };

        pb.finish_with_message(format!("{} done", self.label));
    }
}

impl Drop for BatchProgress {
    fn drop(&mut self) {
        // Clear an unfinished bar so it does not interleave with error output.
        if let Some(pb) = &self.pb
            && !pb.is_finished()
        {
            pb.finish_and_clear();
        }
    }
}

/// An indefinite spinner for single requests (get/pull/delete).
///
/// Always draws to STDERR; no-op when disabled.
pub(crate) struct Spinner {
    label: String,
    pb: Option<ProgressBar>,
}

impl Spinner {
    /// Create a new spinner.
    ///
    /// `enabled` should be `!quiet`.
    pub(crate) fn new(enabled: bool, label: impl Into<String>) -> Self {
        let label = label.into();

        if !enabled {
            return Self { label, pb: None };
        }

        let pb = ProgressBar::new_spinner();
        pb.set_draw_target(ProgressDrawTarget::stderr());
        pb.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .expect("template is a compile-time constant with valid syntax"),
        );
        pb.set_message(label.clone());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            label,
            pb: Some(pb),
        }
    }

    /// Finish the spinner with a stable message (on STDERR).
    pub(crate) fn finish(&self) {
        let Some(pb) = &self.pb else {
            return;
        };

        pb.finish_with_message(format!("{} done", self.label));
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some(pb) = &self.pb
            && !pb.is_finished()
        {
            pb.finish_and_clear();
        }
    }
}
