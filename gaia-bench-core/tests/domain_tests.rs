use gaia_bench_core::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use validator::Validate;

// ===== Provider Classification Tests =====

#[rstest]
#[case("gpt-5", Provider::OpenAI)]
#[case("gpt-5-mini", Provider::OpenAI)]
#[case("anthropic/claude-sonnet-4-5", Provider::Anthropic)]
#[case("anthropic/claude-haiku-4-5", Provider::Anthropic)]
#[case("gemini/gemini-2.5-pro", Provider::Google)]
#[case("ollama/llama3", Provider::Local)]
#[case("claude-without-prefix", Provider::OpenAI)]
#[case("", Provider::OpenAI)]
fn test_provider_classify(#[case] model: &str, #[case] expected: Provider) {
    assert_eq!(Provider::classify(&ModelId::from(model)), expected);
}

#[test]
fn test_provider_display() {
    assert_eq!(Provider::OpenAI.to_string(), "openai");
    assert_eq!(Provider::Anthropic.to_string(), "anthropic");
    assert_eq!(Provider::Google.to_string(), "google");
    assert_eq!(Provider::Local.to_string(), "local");
}

// ===== ProviderLimits Tests =====

#[test]
fn test_provider_limits_defaults() {
    let limits = ProviderLimits::default();
    assert_eq!(limits.limit(Provider::OpenAI), 30);
    assert_eq!(limits.limit(Provider::Anthropic), 10);
    assert!(limits.validate().is_ok());
}

#[test]
fn test_provider_limits_override() {
    let limits = ProviderLimits::default().with_limit(Provider::Anthropic, 2);
    assert_eq!(limits.limit(Provider::Anthropic), 2);
    assert_eq!(limits.limit(Provider::OpenAI), 30);
}

#[test]
fn test_provider_limits_rejects_zero() {
    let limits = ProviderLimits::default().with_limit(Provider::Google, 0);
    let err = limits.validate().unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));
    assert!(err.to_string().contains("google"));
}

#[rstest]
#[case(MAX_PROVIDER_LIMIT, true)]
#[case(MAX_PROVIDER_LIMIT + 1, false)]
#[case(usize::MAX, false)]
fn test_provider_limits_upper_bound(#[case] limit: usize, #[case] valid: bool) {
    let limits = ProviderLimits::default().with_limit(Provider::Local, limit);
    match limits.validate() {
        Ok(()) => assert!(valid),
        Err(err) => {
            assert!(!valid);
            assert!(matches!(err, CoreError::Validation(_)));
            assert!(err.to_string().contains("local"));
        }
    }
}

// ===== Problem Tests =====

#[test]
fn test_problem_validation() {
    assert!(Problem::new("t1", "q", "a").validate().is_ok());
    assert!(Problem::new("", "q", "a").validate().is_err());
}

// ===== EvaluationOutcome Tests =====

#[test]
fn test_outcome_constructors() {
    let solved = EvaluationOutcome::solved("42");
    assert!(solved.is_solvable);
    assert_eq!(solved.final_answer, "42");
    assert!(solved.unsolvable_reason.is_empty());

    let unsolvable = EvaluationOutcome::unsolvable("needs a browser");
    assert!(!unsolvable.is_solvable);
    assert!(unsolvable.final_answer.is_empty());
}

#[test]
fn test_outcome_refused_reason() {
    let refused = EvaluationOutcome::refused("refusal");
    assert!(!refused.is_solvable);
    assert_eq!(
        refused.unsolvable_reason,
        "Model refused to answer (finish_reason: refusal)"
    );
}

// ===== ResultRecord Tests =====

#[test]
fn test_success_record_from_outcome() {
    let problem = Problem::new("t1", "Capital of France?", "Paris");
    let model = ModelId::from("gpt-5");
    let record = ResultRecord::Success(SuccessRecord::new(
        &problem,
        &model,
        EvaluationOutcome::solved("paris"),
        true,
    ));

    assert_eq!(record.task_id(), "t1");
    assert_eq!(record.model(), &model);
    assert!(record.correct());
    assert_eq!(record.is_solvable(), Some(true));
    assert_eq!(record.prediction(), Some("paris"));
    assert_eq!(record.answer(), "Paris");
    assert_eq!(record.error(), None);
    assert!(!record.is_failure());
}

// ===== ResultSet Tests =====

#[test]
fn test_result_set_groups_by_model_in_push_order() {
    let models = vec![ModelId::from("a"), ModelId::from("b")];
    let mut set = ResultSet::with_models(&models);

    let p1 = Problem::new("t1", "q1", "x");
    let p2 = Problem::new("t2", "q2", "y");

    set.push(ResultRecord::failure(&p2, &models[1], "e"));
    set.push(ResultRecord::failure(&p1, &models[0], "e"));
    set.push(ResultRecord::failure(&p1, &models[1], "e"));

    let b: Vec<&str> = set.get("b").unwrap().iter().map(|r| r.task_id()).collect();
    assert_eq!(b, vec!["t2", "t1"]);
    assert_eq!(set.get("a").unwrap().len(), 1);
    assert_eq!(set.total_records(), 3);
    assert_eq!(set.records().count(), 3);
}

#[test]
fn test_result_set_iter_follows_model_order() {
    let models = vec![ModelId::from("z"), ModelId::from("a")];
    let set = ResultSet::with_models(&models);

    let order: Vec<&str> = set.iter().map(|(m, _)| m.as_str()).collect();
    assert_eq!(order, vec!["z", "a"]);
}
