//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Hand network commands their validated configuration.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()` and `config_context`).
//!
//! Invariants:
//! - All network commands receive the cancellation token.
//! - Local commands (`lint`, `init`, `completions`) never touch the config.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands;
use crate::config_context::ConfigCommandContext;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(
    cli: Cli,
    config: ConfigCommandContext,
    cancel_token: &CancellationToken,
) -> Result<()> {
    let format = cli.format;
    let quiet = cli.quiet;

    match cli.command {
        Commands::List => {
            let config = config.into_real_config()?;
            commands::list::run(config, format, quiet, cancel_token).await?;
        }
        Commands::Get { slug } => {
            let config = config.into_real_config()?;
            commands::get::run(config, &slug, format, quiet, cancel_token).await?;
        }
        Commands::Pull { slug, output } => {
            let config = config.into_real_config()?;
            commands::pull::run(config, &slug, output, quiet, cancel_token).await?;
        }
        Commands::Push {
            files,
            slug,
            concurrency,
        } => {
            let config = config.into_real_config()?;
            commands::push::run(
                config,
                files,
                slug,
                concurrency,
                format,
                quiet,
                cancel_token,
            )
            .await?;
        }
        Commands::Delete { slug, yes } => {
            let config = config.into_real_config()?;
            commands::delete::run(config, &slug, yes, format, quiet, cancel_token).await?;
        }
        Commands::Init {
            name,
            output,
            force,
        } => {
            commands::init::run(&name, cli.project.as_deref(), output, force)?;
        }
        Commands::Lint { files, strict } => {
            commands::lint::run(files, strict, format)?;
        }
        Commands::Completions { shell } => {
            commands::completions::run(shell)?;
        }
    }

    Ok(())
}
