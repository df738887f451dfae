use futures::stream::{self, StreamExt};
use futures::FutureExt;
use gaia_bench_core::{ModelId, Problem, ResultRecord, ResultSet, RunId, Solver, SuccessRecord};
use gaia_bench_metrics::is_correct;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use tokio::sync::broadcast;

use crate::progress::RunProgress;

const PROGRESS_CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Upper bound on pairs awaiting the solver at once. `None` submits
    /// the whole problem x model matrix immediately.
    pub max_concurrency: Option<usize>,
}

impl RunnerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = Some(max_concurrency.max(1));
        self
    }
}

/// Evaluates every (problem, model) pair against a solver.
///
/// All pairs are driven from the calling task; a failing or panicking
/// pair is recorded as a failure and never affects its siblings.
pub struct ExperimentRunner {
    config: RunnerConfig,
    progress_tx: Option<broadcast::Sender<RunProgress>>,
}

impl ExperimentRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            config,
            progress_tx: None,
        }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Enable progress tracking
    pub fn subscribe_progress(&mut self) -> broadcast::Receiver<RunProgress> {
        match &self.progress_tx {
            Some(tx) => tx.subscribe(),
            None => {
                let (tx, rx) = broadcast::channel(PROGRESS_CHANNEL_CAPACITY);
                self.progress_tx = Some(tx);
                rx
            }
        }
    }

    fn report_progress(&self, progress: RunProgress) {
        if let Some(tx) = &self.progress_tx {
            let _ = tx.send(progress);
        }
    }

    pub async fn run<S>(&self, problems: &[Problem], models: &[ModelId], solver: &S) -> ResultSet
    where
        S: Solver + ?Sized,
    {
        self.run_as(RunId::new(), problems, models, solver).await
    }

    /// Like [`run`](Self::run), tagging logs and progress events with a
    /// caller-chosen run id.
    pub async fn run_as<S>(
        &self,
        run_id: RunId,
        problems: &[Problem],
        models: &[ModelId],
        solver: &S,
    ) -> ResultSet
    where
        S: Solver + ?Sized,
    {
        let total = problems.len() * models.len();
        let limit = self.config.max_concurrency.unwrap_or(total).max(1);

        tracing::info!(
            "Starting run {}: {} problems x {} models = {} evaluations (concurrency {})",
            run_id,
            problems.len(),
            models.len(),
            total,
            limit
        );
        self.report_progress(RunProgress::Started { run_id, total });

        let pairs = problems
            .iter()
            .flat_map(|problem| models.iter().map(move |model| (problem, model)));

        let mut completions = stream::iter(pairs)
            .map(|(problem, model)| evaluate_pair(problem, model, solver))
            .buffer_unordered(limit);

        let mut results = ResultSet::with_models(models);
        let mut completed = 0;
        let mut failed = 0;

        while let Some(record) = completions.next().await {
            completed += 1;

            match record.error() {
                Some(error) => {
                    failed += 1;
                    tracing::warn!(
                        "Task {} on model {} failed: {}",
                        record.task_id(),
                        record.model(),
                        error
                    );
                }
                None => {
                    tracing::debug!(
                        "Task {} on model {} completed (correct: {})",
                        record.task_id(),
                        record.model(),
                        record.correct()
                    );
                }
            }

            self.report_progress(RunProgress::PairCompleted {
                run_id,
                completed,
                total,
                model: record.model().clone(),
                task_id: record.task_id().to_string(),
                success: !record.is_failure(),
            });

            results.push(record);
        }

        tracing::info!(
            "Run {} finished: {} evaluations, {} failed",
            run_id,
            completed,
            failed
        );
        self.report_progress(RunProgress::Finished {
            run_id,
            total,
            failed,
        });

        results
    }
}

impl Default for ExperimentRunner {
    fn default() -> Self {
        Self::new(RunnerConfig::default())
    }
}

/// Evaluates all models on all problems with every pair submitted at once.
pub async fn run_experiment<S>(problems: &[Problem], models: &[ModelId], solver: &S) -> ResultSet
where
    S: Solver + ?Sized,
{
    ExperimentRunner::default().run(problems, models, solver).await
}

async fn evaluate_pair<S>(problem: &Problem, model: &ModelId, solver: &S) -> ResultRecord
where
    S: Solver + ?Sized,
{
    let outcome = AssertUnwindSafe(solver.solve(model, &problem.question))
        .catch_unwind()
        .await;

    match outcome {
        Ok(Ok(outcome)) => {
            let correct = is_correct(Some(outcome.final_answer.as_str()), &problem.final_answer);
            ResultRecord::Success(SuccessRecord::new(problem, model, outcome, correct))
        }
        Ok(Err(e)) => ResultRecord::failure(problem, model, e.to_string()),
        Err(panic) => ResultRecord::failure(
            problem,
            model,
            format!("solver panicked: {}", panic_message(panic.as_ref())),
        ),
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message
    } else {
        "unknown panic payload"
    }
}
