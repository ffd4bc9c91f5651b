//! # CLI Argument Definitions

use clap::{Args, Parser, Subcommand};
use safar::kernel::i18n::Locale;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "safar-intake")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Fill in and send the Safar travel registration form")]
pub struct Cli {
    /// Configuration file (TOML, YAML, or JSON). Defaults to an optional `intake.*`.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Language of the form's messages (en, ru, uz).
    #[arg(short, long, global = true, value_name = "LANG")]
    pub locale: Option<Locale>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: IntakeCommands,
}

#[derive(Debug, Subcommand)]
pub enum IntakeCommands {
    /// Load the country directory and list it
    Countries,
    /// Check the form without sending it
    Validate {
        #[command(flatten)]
        lead: LeadArgs,
    },
    /// Send the form to the intake endpoint
    Submit {
        #[command(flatten)]
        lead: LeadArgs,
        /// Exit right after the outcome instead of waiting for the feedback to expire
        #[arg(long)]
        no_wait: bool,
    },
}

/// Values typed into the form. Missing values are left blank.
#[derive(Debug, Clone, Default, Args)]
pub struct LeadArgs {
    #[arg(long, default_value = "")]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub last_name: String,
    /// The nine digits after the country code; other characters are dropped
    #[arg(long, default_value = "")]
    pub phone: String,
    /// Must match a name offered by the country directory
    #[arg(long, default_value = "")]
    pub country: String,
    #[arg(long, default_value = "")]
    pub message: String,
}
