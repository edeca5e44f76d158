use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::authenticator::Authenticator;
use crate::cli::{strategies, verify};
use crate::common::debug;
use crate::config::{Initializer, LocalConfig};
use crate::Result;

/// Gatekeep command
#[derive(Parser, Debug)]
#[command(version, propagate_version = true, subcommand_required = true)]
pub struct GatekeepCommand {
    /// Config options
    #[command(flatten)]
    pub config: ConfigOptions,
    /// Subcommand
    #[command(subcommand)]
    pub command: Command,
}

/// Config options
#[derive(Args, Debug)]
pub struct ConfigOptions {
    /// Configuration file path
    #[arg(
        long,
        short = 'C',
        default_value = "./files/config.yaml",
        env = "GATEKEEP_CONFIG_PATH",
        global = true
    )]
    pub config: PathBuf,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Authenticate a request built from the given credentials
    Verify(verify::VerifyCommand),
    /// List registered strategies
    Strategies(strategies::StrategiesCommand),
}

/// Parse command line args
pub fn parse() -> GatekeepCommand {
    GatekeepCommand::parse()
}

impl ConfigOptions {
    /// Load the configuration file and register its strategies.
    ///
    /// The local strategy settings are returned as well so that requests can
    /// be built with the configured field names.
    pub async fn authenticator(&self) -> Result<(Authenticator, LocalConfig)> {
        let initializer = Initializer::load_config_file(&self.config).await?;
        debug!("{:?}", initializer);

        let local = initializer.config.local.clone();
        Ok((initializer.build_authenticator()?, local))
    }
}

impl GatekeepCommand {
    pub async fn run(self) -> Result<()> {
        let (authenticator, local) = self.config.authenticator().await?;

        match self.command {
            Command::Verify(verify) => verify.run(&authenticator, &local).await,
            Command::Strategies(strategies) => strategies.run(&authenticator),
        }
    }
}
