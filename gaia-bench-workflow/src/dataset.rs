use async_trait::async_trait;
use gaia_bench_core::{CoreError, Problem, ProblemSource, Result};
use std::ops::Range;
use std::path::{Path, PathBuf};
use validator::Validate;

/// Problems stored on disk as a JSON array or as JSON Lines.
#[derive(Debug, Clone)]
pub struct JsonFileDataset {
    path: PathBuf,
    name: String,
}

impl JsonFileDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Self { path, name }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<Problem>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CoreError::Dataset(format!("failed to read {}: {}", self.path.display(), e))
        })?;

        let problems = parse_problems(&content)?;
        for (index, problem) in problems.iter().enumerate() {
            problem.validate().map_err(|e| {
                CoreError::Dataset(format!("invalid problem at index {}: {}", index, e))
            })?;
        }

        Ok(problems)
    }
}

#[async_trait]
impl ProblemSource for JsonFileDataset {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self, range: Range<usize>) -> Result<Vec<Problem>> {
        let problems = self.read_all().await?;
        let total = problems.len();

        let end = range.end.min(total);
        let start = range.start.min(end);

        tracing::info!(
            "Loaded {} of {} problems from {}",
            end - start,
            total,
            self.path.display()
        );

        Ok(problems.into_iter().skip(start).take(end - start).collect())
    }
}

fn parse_problems(content: &str) -> Result<Vec<Problem>> {
    if content.trim_start().starts_with('[') {
        return serde_json::from_str(content)
            .map_err(|e| CoreError::Dataset(format!("invalid JSON array: {}", e)));
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(number, line)| {
            serde_json::from_str(line)
                .map_err(|e| CoreError::Dataset(format!("line {}: {}", number + 1, e)))
        })
        .collect()
}
