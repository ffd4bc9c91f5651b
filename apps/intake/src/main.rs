#![allow(clippy::print_stdout)]

pub mod args;
pub mod handlers;
pub mod settings;

use crate::args::{Cli, IntakeCommands};
use crate::handlers::{countries, lead};
use clap::Parser;
use safar::kernel::config::ConfigLoader;
use tracing::warn;

#[safar_runtime::main(interactive)]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, ignored) = settings::resolve(&cli, ConfigLoader::new())?;
    let _logger = settings::init_logger(&config.log, cli.verbose)?;
    if let Some(err) = ignored {
        warn!(error = %err, "Ignoring unusable configuration, using defaults");
    }

    match &cli.command {
        IntakeCommands::Countries => countries::list_countries(&config).await?,
        IntakeCommands::Validate { lead: args } => lead::validate_lead(&config, args).await?,
        IntakeCommands::Submit { lead: args, no_wait } => {
            lead::submit_lead(&config, args, *no_wait).await?;
        },
    }

    Ok(())
}
