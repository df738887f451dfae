use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::{ModelId, ResultSet, RunId};
use crate::error::Result;

/// Persisted outcome of one experiment run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperimentReport {
    pub run_id: RunId,
    pub dataset: String,
    pub problem_count: usize,
    pub models: Vec<ModelId>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub results: ResultSet,
}

impl ExperimentReport {
    pub fn new(
        run_id: RunId,
        dataset: String,
        problem_count: usize,
        models: Vec<ModelId>,
        started_at: DateTime<Utc>,
        results: ResultSet,
    ) -> Self {
        Self {
            run_id,
            dataset,
            problem_count,
            models,
            started_at,
            finished_at: Utc::now(),
            results,
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn read_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
