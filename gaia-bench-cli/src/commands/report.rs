//! `report` command: re-render tables from saved results

use anyhow::{Context as _, Result};
use clap::Args;
use gaia_bench_core::ExperimentReport;
use std::path::PathBuf;

use crate::context::Context;
use crate::output::{format_timestamp, print_field, print_section, OutputFormat};

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Results file written by `run --save`
    pub results: PathBuf,
}

pub async fn execute(ctx: &Context, args: ReportArgs) -> Result<()> {
    let report = ExperimentReport::read_json(&args.results)
        .with_context(|| format!("Failed to read results from {}", args.results.display()))?;

    if ctx.output.format() == OutputFormat::Table {
        print_section("Run");
        print_field("ID", &report.run_id.to_string());
        print_field("Dataset", &report.dataset);
        print_field("Problems", &report.problem_count.to_string());
        print_field("Models", &report.models.len().to_string());
        print_field("Evaluations", &report.results.total_records().to_string());
        print_field("Started", &format_timestamp(&report.started_at));
        print_field("Finished", &format_timestamp(&report.finished_at));
    }

    super::render_tables(ctx, &report.results)
}
