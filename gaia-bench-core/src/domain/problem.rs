use serde::{Deserialize, Serialize};
use validator::Validate;

/// A benchmark question with its ground-truth answer.
///
/// Accepts GAIA's native column names (`Question`, `Final answer`) as
/// well as snake_case.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct Problem {
    #[validate(length(min = 1))]
    pub task_id: String,
    #[serde(alias = "Question")]
    pub question: String,
    #[serde(alias = "Final answer")]
    pub final_answer: String,
}

impl Problem {
    pub fn new(
        task_id: impl Into<String>,
        question: impl Into<String>,
        final_answer: impl Into<String>,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            question: question.into(),
            final_answer: final_answer.into(),
        }
    }
}
