use gaia_bench_core::{ModelId, RunId};
use serde::{Deserialize, Serialize};

/// Progress events broadcast while an experiment runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RunProgress {
    Started {
        run_id: RunId,
        total: usize,
    },
    PairCompleted {
        run_id: RunId,
        completed: usize,
        total: usize,
        model: ModelId,
        task_id: String,
        success: bool,
    },
    Finished {
        run_id: RunId,
        total: usize,
        failed: usize,
    },
}

impl RunProgress {
    pub fn run_id(&self) -> RunId {
        match self {
            RunProgress::Started { run_id, .. }
            | RunProgress::PairCompleted { run_id, .. }
            | RunProgress::Finished { run_id, .. } => *run_id,
        }
    }
}
