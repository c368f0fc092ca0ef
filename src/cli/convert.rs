//! `weeksheet convert` command implementation

use anyhow::Result;
use std::path::Path;

use super::definition::ConvertArgs;
use crate::export::{self, ExportOutcome};

pub fn run(config_path: Option<&Path>, args: ConvertArgs) -> Result<()> {
    let overrides = args.overrides();
    let Some((job, report)) = super::load_schedule(config_path, args.job.week.as_deref(), &overrides)?
    else {
        return Ok(());
    };

    match export::export(&report.table, &job.output, job.format) {
        Ok(ExportOutcome::Saved { path, rows }) => {
            println!("✓ Saved {} entries to {}", rows, path.display());
        }
        Ok(ExportOutcome::NothingToSave) => {
            println!(
                "Nothing to save: no entries found for week {} in {}",
                job.week,
                job.input.display()
            );
        }
        Err(err) => {
            tracing::error!(path = %job.output.display(), "export failed: {}", err);
            eprintln!("✗ Failed to save {}: {}", job.output.display(), err);
        }
    }

    Ok(())
}
