use async_trait::async_trait;
use std::future::Future;
use std::ops::Range;
use std::sync::Arc;

use crate::domain::{Completion, CompletionRequest, EvaluationOutcome, ModelId, Problem};
use crate::error::{Result, SolveError};

/// Turns a (model, question) pair into a structured outcome.
#[async_trait]
pub trait Solver: Send + Sync {
    async fn solve(&self, model: &ModelId, question: &str) -> std::result::Result<EvaluationOutcome, SolveError>;
}

#[async_trait]
impl<T: Solver + ?Sized> Solver for Arc<T> {
    async fn solve(&self, model: &ModelId, question: &str) -> std::result::Result<EvaluationOutcome, SolveError> {
        (**self).solve(model, question).await
    }
}

/// Adapts an async closure into a [`Solver`].
pub struct FnSolver<F>(F);

impl<F, Fut> FnSolver<F>
where
    F: Fn(ModelId, String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = std::result::Result<EvaluationOutcome, SolveError>> + Send + 'static,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<F, Fut> Solver for FnSolver<F>
where
    F: Fn(ModelId, String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = std::result::Result<EvaluationOutcome, SolveError>> + Send + 'static,
{
    async fn solve(&self, model: &ModelId, question: &str) -> std::result::Result<EvaluationOutcome, SolveError> {
        (self.0)(model.clone(), question.to_string()).await
    }
}

/// A chat-completion backend.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> std::result::Result<Completion, SolveError>;
}

#[async_trait]
impl<T: CompletionClient + ?Sized> CompletionClient for Arc<T> {
    async fn complete(&self, request: CompletionRequest) -> std::result::Result<Completion, SolveError> {
        (**self).complete(request).await
    }
}

/// An ordered collection of benchmark problems.
#[async_trait]
pub trait ProblemSource: Send + Sync {
    fn name(&self) -> &str;

    /// Problems at the given index range; indices past the end are ignored.
    async fn load(&self, range: Range<usize>) -> Result<Vec<Problem>>;
}
