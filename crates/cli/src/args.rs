//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read connection settings from flags, falling back to `LOGFIRE_*` variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate configuration (see `logfire_config::ConfigLoader`).

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use logfire_config::constants::{DEFAULT_PUSH_CONCURRENCY, MAX_PUSH_CONCURRENCY};
use std::path::PathBuf;

use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "logfire-cli")]
#[command(about = "Logfire CLI - Manage Logfire dashboards as Perses YAML", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  logfire-cli list\n  logfire-cli pull service-overview -o dashboards/service-overview.yaml\n  logfire-cli push dashboards/*.yaml\n  logfire-cli lint --strict dashboards/*.yaml\n  logfire-cli init \"Service Overview\"\n"
)]
pub struct Cli {
    /// Logfire API token
    #[arg(long, global = true, env = "LOGFIRE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Organization slug
    #[arg(long, global = true, env = "LOGFIRE_ORGANIZATION")]
    pub organization: Option<String>,

    /// Project slug
    #[arg(short, long, global = true, env = "LOGFIRE_PROJECT")]
    pub project: Option<String>,

    /// Base URL of the Logfire deployment (e.g., https://logfire-eu.pydantic.dev)
    #[arg(long, global = true, env = "LOGFIRE_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds (also read from LOGFIRE_TIMEOUT)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format (table, json, yaml)
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Suppress all progress output (spinners / progress bars).
    ///
    /// Note: Progress indicators always write to STDERR; this flag disables them entirely.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all dashboards in the project
    List,

    /// Show a dashboard's details
    Get {
        /// Dashboard slug
        slug: String,
    },

    /// Export a dashboard to a Perses YAML file
    #[command(alias = "export")]
    Pull {
        /// Dashboard slug
        slug: String,

        /// Output file path; defaults to <slug>.yaml, "-" writes to stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Create or update dashboards from Perses YAML files
    #[command(alias = "import")]
    Push {
        /// Dashboard YAML files
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Override the slug (defaults to metadata.name); single file only
        #[arg(short, long)]
        slug: Option<String>,

        /// Maximum number of files pushed at the same time
        #[arg(long, default_value_t = DEFAULT_PUSH_CONCURRENCY, value_parser = parse_concurrency)]
        concurrency: usize,
    },

    /// Delete a dashboard
    Delete {
        /// Dashboard slug
        slug: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Write a starter dashboard template
    Init {
        /// Display name for the new dashboard
        name: String,

        /// Output file path; defaults to <slug>.yaml
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Overwrite the output file if it exists
        #[arg(long)]
        force: bool,
    },

    /// Check dashboard YAML files for structural problems
    Lint {
        /// Dashboard YAML files
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// True for commands that talk to the Logfire API.
    pub fn needs_connection(&self) -> bool {
        matches!(
            self,
            Commands::List
                | Commands::Get { .. }
                | Commands::Pull { .. }
                | Commands::Push { .. }
                | Commands::Delete { .. }
        )
    }
}

fn parse_concurrency(value: &str) -> Result<usize, String> {
    let n: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if (1..=MAX_PUSH_CONCURRENCY).contains(&n) {
        Ok(n)
    } else {
        Err(format!("must be between 1 and {MAX_PUSH_CONCURRENCY}"))
    }
}
