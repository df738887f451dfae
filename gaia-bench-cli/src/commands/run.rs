//! `run` command: evaluate models on a dataset slice

use anyhow::{bail, Context as _, Result};
use chrono::Utc;
use clap::Args;
use colored::Colorize;
use gaia_bench_core::{ExperimentReport, ModelId, ProblemSource, RunId};
use gaia_bench_workflow::{ExperimentRunner, JsonFileDataset, RunProgress, RunnerConfig};
use indicatif::ProgressBar;
use std::path::PathBuf;
use tokio::sync::broadcast::{self, error::RecvError};

use crate::context::Context;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// GAIA dataset file (JSON array or JSON lines)
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,

    /// Index of the first problem to evaluate
    #[arg(long)]
    pub start: Option<usize>,

    /// Number of problems to evaluate
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Model to evaluate (repeatable); replaces the configured list
    #[arg(short, long = "model")]
    pub models: Vec<String>,

    /// Upper bound on evaluations in flight at once
    #[arg(long)]
    pub max_concurrency: Option<usize>,

    /// Save the full results to this JSON file
    #[arg(short, long)]
    pub save: Option<PathBuf>,
}

pub async fn execute(ctx: &Context, args: RunArgs) -> Result<()> {
    let config = &ctx.config;

    let dataset_path = args
        .dataset
        .or_else(|| config.dataset_path.clone())
        .context("No dataset configured; pass --dataset or set dataset_path")?;

    let models: Vec<ModelId> = if args.models.is_empty() {
        config.models.clone()
    } else {
        args.models.into_iter().map(ModelId::from).collect()
    };
    if models.is_empty() {
        bail!("No models configured; pass --model or set models");
    }

    let start = args.start.unwrap_or(config.start);
    let limit = args.limit.unwrap_or(config.limit);

    let dataset = JsonFileDataset::new(&dataset_path);
    let problems = dataset
        .load(start..start.saturating_add(limit))
        .await
        .with_context(|| format!("Failed to load dataset {}", dataset_path.display()))?;

    if problems.is_empty() {
        bail!(
            "No problems in range {}..{} of {}",
            start,
            start.saturating_add(limit),
            dataset_path.display()
        );
    }

    let solver = ctx.create_solver()?;

    let mut runner_config = RunnerConfig::new();
    if let Some(max) = args.max_concurrency.or(config.max_concurrency) {
        runner_config = runner_config.with_max_concurrency(max);
    }
    let mut runner = ExperimentRunner::new(runner_config);

    let run_id = RunId::new();
    let total = problems.len() * models.len();
    ctx.output.info(&format!(
        "Run {}: {} problems x {} models from {}",
        run_id,
        problems.len(),
        models.len(),
        dataset.name()
    ));

    let tracker = ctx
        .output
        .progress_bar(total as u64, "Evaluating")
        .map(|pb| tokio::spawn(track_progress(runner.subscribe_progress(), pb)));

    let started_at = Utc::now();
    let results = runner.run_as(run_id, &problems, &models, &solver).await;

    // Closing the channel lets the tracker finish.
    drop(runner);
    if let Some(tracker) = tracker {
        tracker.await.context("Progress tracker failed")?;
    }

    let report = ExperimentReport::new(
        run_id,
        dataset.name().to_string(),
        problems.len(),
        models,
        started_at,
        results,
    );

    if let Some(path) = &args.save {
        report
            .write_json(path)
            .with_context(|| format!("Failed to save results to {}", path.display()))?;
        ctx.output
            .success(&format!("Saved results to {}", path.display()));
    }

    super::render_tables(ctx, &report.results)
}

async fn track_progress(mut rx: broadcast::Receiver<RunProgress>, pb: ProgressBar) {
    loop {
        match rx.recv().await {
            Ok(RunProgress::PairCompleted {
                completed,
                model,
                task_id,
                success,
                ..
            }) => {
                pb.set_position(completed as u64);
                if !success {
                    pb.println(format!("{} {} on {}", "✗".red(), task_id, model));
                }
            }
            Ok(RunProgress::Finished { failed, .. }) => {
                pb.finish_with_message(format!("done ({} failed)", failed));
            }
            Ok(RunProgress::Started { .. }) => {}
            Err(RecvError::Lagged(skipped)) => {
                tracing::debug!("Progress display skipped {} events", skipped);
            }
            Err(RecvError::Closed) => break,
        }
    }

    if !pb.is_finished() {
        pb.finish_and_clear();
    }
}
