//! weeksheet - Convert a weekly schedule text file into a spreadsheet

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use weeksheet::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    if std::env::var("WEEKSHEET_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("weeksheet=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Commands::Convert(args)) => cli::convert::run(config_path, args),
        Some(Commands::Preview(args)) => cli::preview::run(config_path, args),
        Some(Commands::Config { command }) => cli::config::run(config_path, command),
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "weeksheet", &mut std::io::stdout());
            Ok(())
        }
        None => cli::convert::run(config_path, cli.convert),
    }
}
