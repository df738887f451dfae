use serde::{Deserialize, Serialize};

/// Structured answer returned by a solver for one question.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluationOutcome {
    pub is_solvable: bool,
    #[serde(default)]
    pub unsolvable_reason: String,
    #[serde(default)]
    pub final_answer: String,
}

impl EvaluationOutcome {
    pub fn solved(final_answer: impl Into<String>) -> Self {
        Self {
            is_solvable: true,
            unsolvable_reason: String::new(),
            final_answer: final_answer.into(),
        }
    }

    pub fn unsolvable(reason: impl Into<String>) -> Self {
        Self {
            is_solvable: false,
            unsolvable_reason: reason.into(),
            final_answer: String::new(),
        }
    }

    /// The model declined to answer. Recorded as unsolvable, not as an error.
    pub fn refused(finish_reason: &str) -> Self {
        Self::unsolvable(format!(
            "Model refused to answer (finish_reason: {})",
            finish_reason
        ))
    }
}
