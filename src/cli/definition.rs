//! Command-line definitions

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::config::ConfigCommands;
use crate::export::ExportFormat;
use crate::job::JobOverrides;

#[derive(Parser)]
#[command(name = "weeksheet")]
#[command(about = "Convert a weekly schedule text file into a spreadsheet")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Config file (defaults to ./weeksheet.toml, then the user config dir)
    #[arg(long, global = true, env = "WEEKSHEET_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments for the default `convert` command
    #[command(flatten)]
    pub convert: ConvertArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert <WEEK>w.txt into schedule_<WEEK>w.xlsx (the default)
    Convert(ConvertArgs),

    /// Print the parsed schedule without writing a file
    Preview(PreviewArgs),

    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Options shared by every command that reads a week file
#[derive(Args, Debug, Clone, Default)]
pub struct JobArgs {
    /// Week number, e.g. 46 or 46w (prompted for when omitted)
    pub week: Option<String>,

    /// ISO year of the week markers
    #[arg(long)]
    pub year: Option<i32>,

    /// Month whose 4th day starts the accepted date range
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Last accepted date (YYYY-MM-DD)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub end_date: Option<NaiveDate>,

    /// Read this file instead of <WEEK>w.txt
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Only read the requested week, not the one after it
    #[arg(long)]
    pub single_week: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub job: JobArgs,

    /// Write to this path instead of schedule_<WEEK>w.<ext>
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub job: JobArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl JobArgs {
    pub fn overrides(&self) -> JobOverrides {
        JobOverrides {
            year: self.year,
            month: self.month,
            end_date: self.end_date,
            input: self.input.clone(),
            output: None,
            format: None,
            single_week: self.single_week,
        }
    }
}

impl ConvertArgs {
    pub fn overrides(&self) -> JobOverrides {
        JobOverrides {
            output: self.output.clone(),
            format: self.format,
            ..self.job.overrides()
        }
    }
}
