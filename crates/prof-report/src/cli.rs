use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::error::{ReportError, ReportResult};

#[derive(Debug, Parser)]
#[command(name = "prof-report", about = "profiler sample report generator")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Summary {
        input: PathBuf,
        #[arg(long)]
        json: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    Digest {
        #[arg(env = "PROF_REPORT_INPUT", default_value = "profile.txt")]
        input: PathBuf,
    },
    Functions {
        input: PathBuf,
    },
}

pub fn validate_input_path(path: &Path) -> ReportResult<()> {
    if !path.exists() {
        return Err(ReportError::InvalidArgument(format!(
            "input file '{}' does not exist",
            path.display()
        )));
    }
    if path.is_dir() {
        return Err(ReportError::InvalidArgument(format!(
            "input path '{}' is a directory",
            path.display()
        )));
    }
    Ok(())
}
