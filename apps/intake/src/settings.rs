use crate::args::Cli;
use anyhow::Context;
use safar::domain::config::{IntakeConfig, LogConfig};
use safar::kernel::config::{ConfigError, ConfigLoader};
use safar_logger::{FileOutput, LevelFilter, Logger};

/// Resolves the configuration for this invocation.
///
/// An explicit `--config` must load. Without it the optional `intake.*` file and
/// `SAFAR__*` variables are tried; if they are unusable the defaults apply and the
/// ignored error is handed back so it can be logged once logging is up.
pub fn resolve(
    cli: &Cli,
    loader: ConfigLoader,
) -> anyhow::Result<(IntakeConfig, Option<ConfigError>)> {
    let (mut config, ignored) = match &cli.config {
        Some(path) => {
            let config = loader
                .file(path)
                .load::<IntakeConfig>()
                .with_context(|| format!("Configuration at {} is malformed", path.display()))?;
            (config, None)
        },
        None => match loader.load::<IntakeConfig>() {
            Ok(config) => (config, None),
            Err(err) => (IntakeConfig::default(), Some(err)),
        },
    };

    if let Some(locale) = cli.locale {
        config.locale = locale.to_string();
    }
    Ok((config, ignored))
}

/// Installs the global subscriber described by the `log` section.
pub fn init_logger(log: &LogConfig, verbose: bool) -> anyhow::Result<Logger> {
    let mut builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level_str(&log.level)?;
    if verbose {
        builder = builder.level(LevelFilter::DEBUG);
    }
    if let Some(directives) = &log.directives {
        builder = builder.directives(directives);
    }
    if let Some(dir) = &log.path {
        let output = FileOutput::daily(dir);
        builder = builder.file(if log.json { output.json() } else { output });
    }
    builder.init().context("Failed to initialize logging")
}
