//! Subcommand implementations

pub mod config;
pub mod report;
pub mod run;

use anyhow::Result;
use gaia_bench_core::ResultSet;
use gaia_bench_metrics::{
    generate_accuracy_table, generate_unsolvable_summary, AccuracyRow, UnsolvableRow,
};
use serde::Serialize;

use crate::context::Context;

/// Both report tables, as printed in JSON mode
#[derive(Debug, Serialize)]
struct ReportTables {
    accuracy_table: Vec<AccuracyRow>,
    unsolvable_summary: Vec<UnsolvableRow>,
}

impl ReportTables {
    fn from_results(results: &ResultSet) -> Self {
        Self {
            accuracy_table: generate_accuracy_table(results),
            unsolvable_summary: generate_unsolvable_summary(results),
        }
    }
}

/// Print the accuracy table and the unsolvable summary
fn render_tables(ctx: &Context, results: &ResultSet) -> Result<()> {
    let tables = ReportTables::from_results(results);

    ctx.output
        .write_table("Accuracy Table", &tables.accuracy_table, "No models evaluated.");
    ctx.output.write_table(
        "Unsolvable Summary",
        &tables.unsolvable_summary,
        "No problems were judged unsolvable.",
    );

    ctx.output.write_json(&tables)
}
