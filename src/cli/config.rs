//! `weeksheet config` subcommands implementation

use anyhow::Result;
use clap::Subcommand;
use std::path::Path;

use crate::config::{self, Config};

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Write a default config file to the user config directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(config_path: Option<&Path>, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(config_path),
        ConfigCommands::Init { force } => init(force),
    }
}

fn show(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

fn init(force: bool) -> Result<()> {
    let path = config::save_config(&Config::default(), force)?;
    println!("✓ Created config: {}", path.display());
    Ok(())
}
