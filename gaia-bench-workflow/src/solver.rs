use async_trait::async_trait;
use gaia_bench_core::{
    ChatMessage, Completion, CompletionClient, CompletionRequest, EvaluationOutcome, ModelId,
    Provider, ProviderLimits, ResponseSchema, Result, SolveError, Solver,
};
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::Semaphore;

pub const GAIA_SYSTEM_PROMPT: &str = "You are a general AI assistant. \
I will ask you a question. First, determine if you can solve this problem with your current capabilities and set \"is_solvable\" accordingly. \
If you can solve it, set \"is_solvable\" to true and provide your answer in \"final_answer\". \
If you cannot solve it, set \"is_solvable\" to false and explain why in \"unsolvable_reason\". \
Your final answer should be a number OR as few words as possible OR a comma separated list of numbers and/or strings. \
If you are asked for a number, don't use comma to write your number neither use units such as $ or percent sign unless specified otherwise. \
If you are asked for a string, don't use articles, neither abbreviations (e.g. for cities), and write the digits in plain text unless specified otherwise. \
If you are asked for a comma separated list, apply the above rules depending on whether the element is a number or a string.";

const REFUSAL_FINISH_REASON: &str = "refusal";

/// Schema of the structured reply every model is asked to produce.
pub fn outcome_schema() -> ResponseSchema {
    ResponseSchema {
        name: "gaia_output".to_string(),
        schema: json!({
            "type": "object",
            "properties": {
                "is_solvable": { "type": "boolean" },
                "unsolvable_reason": { "type": "string" },
                "final_answer": { "type": "string" }
            },
            "required": ["is_solvable", "unsolvable_reason", "final_answer"],
            "additionalProperties": false
        }),
        strict: true,
    }
}

/// Maps a raw completion onto an outcome. Refusals and empty replies are
/// unsolvable outcomes; unparseable content is an error.
pub fn interpret_completion(completion: Completion) -> std::result::Result<EvaluationOutcome, SolveError> {
    let finish_reason = completion.finish_reason.as_deref().unwrap_or("none");

    match completion.content {
        Some(content) if finish_reason != REFUSAL_FINISH_REASON => {
            Ok(serde_json::from_str(&content)?)
        }
        _ => Ok(EvaluationOutcome::refused(finish_reason)),
    }
}

/// Solver that asks a chat-completion backend for a structured answer,
/// holding at most the configured number of requests in flight per provider.
pub struct GatedSolver<C> {
    client: C,
    gates: HashMap<Provider, Semaphore>,
    system_prompt: String,
}

impl<C: CompletionClient> GatedSolver<C> {
    pub fn new(client: C, limits: &ProviderLimits) -> Result<Self> {
        limits.validate()?;

        let gates = Provider::ALL
            .iter()
            .map(|provider| (*provider, Semaphore::new(limits.limit(*provider))))
            .collect();

        Ok(Self {
            client,
            gates,
            system_prompt: GAIA_SYSTEM_PROMPT.to_string(),
        })
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    pub fn available_permits(&self, provider: Provider) -> usize {
        self.gates
            .get(&provider)
            .map(Semaphore::available_permits)
            .unwrap_or(0)
    }

    fn build_request(&self, model: &ModelId, question: &str) -> CompletionRequest {
        CompletionRequest::new(
            model.clone(),
            vec![
                ChatMessage::system(self.system_prompt.clone()),
                ChatMessage::user(question),
            ],
        )
        .with_response_schema(outcome_schema())
    }
}

#[async_trait]
impl<C: CompletionClient> Solver for GatedSolver<C> {
    async fn solve(&self, model: &ModelId, question: &str) -> std::result::Result<EvaluationOutcome, SolveError> {
        let provider = Provider::classify(model);
        let gate = self
            .gates
            .get(&provider)
            .ok_or_else(|| SolveError::Other(format!("no concurrency gate for provider {}", provider)))?;

        let _permit = gate
            .acquire()
            .await
            .map_err(|_| SolveError::Other(format!("concurrency gate for {} is closed", provider)))?;

        tracing::debug!("Solving with {} via {}", model, provider);

        let completion = self.client.complete(self.build_request(model, question)).await?;
        interpret_completion(completion)
    }
}
