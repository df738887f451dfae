use chrono::Utc;
use gaia_bench_core::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_problem_deserializes_gaia_columns() {
    let value = json!({
        "task_id": "c61d22de",
        "Question": "What is the capital of France?",
        "Final answer": "Paris",
        "Level": "1",
        "file_name": ""
    });

    let problem: Problem = serde_json::from_value(value).unwrap();
    assert_eq!(problem, Problem::new("c61d22de", "What is the capital of France?", "Paris"));
}

#[test]
fn test_problem_deserializes_snake_case() {
    let value = json!({
        "task_id": "t1",
        "question": "2+2?",
        "final_answer": "4"
    });

    let problem: Problem = serde_json::from_value(value).unwrap();
    assert_eq!(problem.final_answer, "4");
}

#[test]
fn test_outcome_defaults_missing_strings() {
    let outcome: EvaluationOutcome = serde_json::from_value(json!({"is_solvable": true})).unwrap();
    assert_eq!(outcome, EvaluationOutcome::solved(""));
}

#[test]
fn test_outcome_requires_solvable_flag() {
    let result = serde_json::from_value::<EvaluationOutcome>(json!({"final_answer": "x"}));
    assert!(result.is_err());
}

#[test]
fn test_result_record_is_tagged_by_status() {
    let problem = Problem::new("t1", "q", "a");
    let record = ResultRecord::failure(&problem, &ModelId::from("m"), "timeout");

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value,
        json!({
            "status": "failure",
            "task_id": "t1",
            "model": "m",
            "answer": "a",
            "error": "timeout"
        })
    );

    let parsed: ResultRecord = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, record);
}

#[test]
fn test_result_set_serializes_as_group_list() {
    let problem = Problem::new("t1", "q", "a");
    let model = ModelId::from("m");
    let mut set = ResultSet::with_models(&[model.clone()]);
    set.push(ResultRecord::Success(SuccessRecord::new(
        &problem,
        &model,
        EvaluationOutcome::solved("a"),
        true,
    )));

    let value = serde_json::to_value(&set).unwrap();
    assert_eq!(value[0]["model"], "m");
    assert_eq!(value[0]["records"][0]["status"], "success");
    assert_eq!(value[0]["records"][0]["correct"], true);
}

#[test]
fn test_experiment_report_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.json");

    let model = ModelId::from("gpt-5");
    let problem = Problem::new("t1", "q", "a");
    let mut results = ResultSet::with_models(&[model.clone()]);
    results.push(ResultRecord::failure(&problem, &model, "boom"));

    let report = ExperimentReport::new(
        RunId::new(),
        "gaia-validation".to_string(),
        1,
        vec![model],
        Utc::now(),
        results,
    );
    report.write_json(&path).unwrap();

    let loaded = ExperimentReport::read_json(&path).unwrap();
    assert_eq!(loaded, report);
}

#[test]
fn test_experiment_report_missing_file() {
    let err = ExperimentReport::read_json(std::path::Path::new("/nonexistent/results.json"))
        .unwrap_err();
    assert!(matches!(err, CoreError::Io(_)));
}
