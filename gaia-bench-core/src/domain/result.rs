use serde::{Deserialize, Serialize};

use crate::domain::{EvaluationOutcome, ModelId, Problem};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuccessRecord {
    pub task_id: String,
    pub model: ModelId,
    pub correct: bool,
    pub is_solvable: bool,
    pub prediction: String,
    pub answer: String,
    pub unsolvable_reason: String,
}

impl SuccessRecord {
    pub fn new(problem: &Problem, model: &ModelId, outcome: EvaluationOutcome, correct: bool) -> Self {
        Self {
            task_id: problem.task_id.clone(),
            model: model.clone(),
            correct,
            is_solvable: outcome.is_solvable,
            prediction: outcome.final_answer,
            answer: problem.final_answer.clone(),
            unsolvable_reason: outcome.unsolvable_reason,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FailureRecord {
    pub task_id: String,
    pub model: ModelId,
    pub answer: String,
    pub error: String,
}

/// Terminal state of one (problem, model) evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResultRecord {
    Success(SuccessRecord),
    Failure(FailureRecord),
}

impl ResultRecord {
    pub fn failure(problem: &Problem, model: &ModelId, error: impl Into<String>) -> Self {
        ResultRecord::Failure(FailureRecord {
            task_id: problem.task_id.clone(),
            model: model.clone(),
            answer: problem.final_answer.clone(),
            error: error.into(),
        })
    }

    pub fn task_id(&self) -> &str {
        match self {
            ResultRecord::Success(r) => &r.task_id,
            ResultRecord::Failure(r) => &r.task_id,
        }
    }

    pub fn model(&self) -> &ModelId {
        match self {
            ResultRecord::Success(r) => &r.model,
            ResultRecord::Failure(r) => &r.model,
        }
    }

    pub fn answer(&self) -> &str {
        match self {
            ResultRecord::Success(r) => &r.answer,
            ResultRecord::Failure(r) => &r.answer,
        }
    }

    /// Failures never earn credit.
    pub fn correct(&self) -> bool {
        match self {
            ResultRecord::Success(r) => r.correct,
            ResultRecord::Failure(_) => false,
        }
    }

    /// `None` when the solver failed before reporting solvability.
    pub fn is_solvable(&self) -> Option<bool> {
        match self {
            ResultRecord::Success(r) => Some(r.is_solvable),
            ResultRecord::Failure(_) => None,
        }
    }

    pub fn prediction(&self) -> Option<&str> {
        match self {
            ResultRecord::Success(r) => Some(&r.prediction),
            ResultRecord::Failure(_) => None,
        }
    }

    pub fn unsolvable_reason(&self) -> Option<&str> {
        match self {
            ResultRecord::Success(r) => Some(&r.unsolvable_reason),
            ResultRecord::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ResultRecord::Success(_) => None,
            ResultRecord::Failure(r) => Some(&r.error),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ResultRecord::Failure(_))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelResults {
    pub model: ModelId,
    pub records: Vec<ResultRecord>,
}

/// Records of one experiment grouped by model.
///
/// Groups keep the order in which models were first named; records within
/// a group keep the order in which they were pushed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ResultSet {
    groups: Vec<ModelResults>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty groups for every distinct model, so a model that produced
    /// nothing still shows up in reports.
    pub fn with_models(models: &[ModelId]) -> Self {
        let mut set = Self::new();
        for model in models {
            set.group_mut(model);
        }
        set
    }

    pub fn push(&mut self, record: ResultRecord) {
        let model = record.model().clone();
        self.group_mut(&model).records.push(record);
    }

    pub fn get(&self, model: &str) -> Option<&[ResultRecord]> {
        self.groups
            .iter()
            .find(|g| g.model == model)
            .map(|g| g.records.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ModelId, &[ResultRecord])> {
        self.groups.iter().map(|g| (&g.model, g.records.as_slice()))
    }

    pub fn records(&self) -> impl Iterator<Item = &ResultRecord> {
        self.groups.iter().flat_map(|g| g.records.iter())
    }

    pub fn models(&self) -> Vec<&ModelId> {
        self.groups.iter().map(|g| &g.model).collect()
    }

    pub fn total_records(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn group_mut(&mut self, model: &ModelId) -> &mut ModelResults {
        let index = match self.groups.iter().position(|g| &g.model == model) {
            Some(index) => index,
            None => {
                self.groups.push(ModelResults {
                    model: model.clone(),
                    records: Vec::new(),
                });
                self.groups.len() - 1
            }
        };
        &mut self.groups[index]
    }
}
