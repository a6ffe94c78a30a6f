//! Command-line entry point for the rezip pipeline.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use rezip::cli::{Cli, Command, CommonArgs};
use rezip::{
    FileTransform, ImageScale, PipelineConfig, PipelineReport, TextReplace, ZipPipeline,
};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (archive, transform, common): (PathBuf, Box<dyn FileTransform>, CommonArgs) =
        match cli.command {
            Command::Replace {
                archive,
                search,
                replace,
                common,
            } => (archive, Box::new(TextReplace::new(search, replace)?), common),
            Command::Scale {
                archive,
                width,
                height,
                common,
            } => (archive, Box::new(ImageScale::new(width, height)?), common),
        };

    let output = common
        .output
        .clone()
        .unwrap_or_else(|| ZipPipeline::default_output_path(&archive));

    let config = PipelineConfig::new(common.on_unsupported.into());
    let pipeline = ZipPipeline::with_config(transform, config);
    let report = pipeline.run(&archive, &output)?;

    if common.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    Ok(())
}

fn print_summary(report: &PipelineReport) {
    println!(
        "{} files scanned, {} transformed, {} skipped",
        report.files_scanned, report.files_transformed, report.files_skipped
    );
    println!("wrote {}", report.output_path.display());
}
