use std::fs;

use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use prof_report::cli::{validate_input_path, Args, Command};
use prof_report::error::ReportResult;
use prof_report::profile::{group_samples, read_samples};
use prof_report::report::{
    digest_rows, render_digest, render_summary, summary_rows, ReportDocument,
};

fn main() -> ReportResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Summary { input, json, out } => {
            validate_input_path(&input)?;
            let samples = read_samples(&input)?;
            tracing::debug!(samples = samples.len(), "parsed input");
            let groups = group_samples(samples);
            let rows = summary_rows(&groups);
            let document = ReportDocument {
                schema_version: 1,
                created_at: Utc::now(),
                input: input.display().to_string(),
                rows,
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&document)?);
            } else {
                print!("{}", render_summary(&document.rows));
            }
            if let Some(out_file) = out {
                fs::write(&out_file, serde_json::to_vec_pretty(&document)?)?;
                println!("wrote report: {}", out_file.display());
            }
        }
        Command::Digest { input } => {
            validate_input_path(&input)?;
            let groups = group_samples(read_samples(&input)?);
            print!("{}", render_digest(&digest_rows(&groups)));
        }
        Command::Functions { input } => {
            validate_input_path(&input)?;
            let groups = group_samples(read_samples(&input)?);
            for group in &groups {
                println!("{} ({} samples)", group.function, group.runtimes.len());
            }
        }
    }

    Ok(())
}
