use gaia_bench_core::*;
use gaia_bench_metrics::*;
use pretty_assertions::assert_eq;

fn problem(id: &str) -> Problem {
    Problem::new(id, format!("question {}", id), "answer")
}

fn success(task: &str, model: &ModelId, correct: bool, outcome: EvaluationOutcome) -> ResultRecord {
    ResultRecord::Success(SuccessRecord::new(&problem(task), model, outcome, correct))
}

fn unsolvable(task: &str, model: &ModelId, reason: &str) -> ResultRecord {
    success(task, model, false, EvaluationOutcome::unsolvable(reason))
}

// ===== Accuracy Table Tests =====

#[test]
fn test_accuracy_table_counts_correct_and_solvable() {
    let model = ModelId::from("gpt-5");
    let mut results = ResultSet::with_models(&[model.clone()]);
    results.push(success("t1", &model, true, EvaluationOutcome::solved("answer")));
    results.push(success("t2", &model, false, EvaluationOutcome::solved("wrong")));
    results.push(unsolvable("t3", &model, "needs a browser"));
    results.push(ResultRecord::failure(&problem("t4"), &model, "timeout"));

    let table = generate_accuracy_table(&results);
    assert_eq!(
        table,
        vec![AccuracyRow {
            model,
            judged_accuracy: "1/4 (25%)".to_string(),
            judged_solvable: "2/4 (50%)".to_string(),
        }]
    );
}

#[test]
fn test_accuracy_table_empty_model_renders_zero() {
    let results = ResultSet::with_models(&[ModelId::from("idle")]);

    let table = generate_accuracy_table(&results);
    assert_eq!(table.len(), 1);
    assert_eq!(table[0].judged_accuracy, "0/0 (0%)");
    assert_eq!(table[0].judged_solvable, "0/0 (0%)");
}

#[test]
fn test_accuracy_table_empty_result_set() {
    assert!(generate_accuracy_table(&ResultSet::new()).is_empty());
}

#[test]
fn test_accuracy_table_sorts_lexically_descending() {
    let a = ModelId::from("a");
    let b = ModelId::from("b");
    let c = ModelId::from("c");
    let mut results = ResultSet::with_models(&[a.clone(), b.clone(), c.clone()]);

    // a: 10/20, b: 9/20, c: 2/20
    for i in 0..20 {
        let id = format!("t{}", i);
        results.push(success(&id, &a, i < 10, EvaluationOutcome::solved("x")));
        results.push(success(&id, &b, i < 9, EvaluationOutcome::solved("x")));
        results.push(success(&id, &c, i < 2, EvaluationOutcome::solved("x")));
    }

    let order: Vec<String> = generate_accuracy_table(&results)
        .into_iter()
        .map(|row| row.judged_accuracy)
        .collect();

    assert_eq!(order, vec!["9/20 (45%)", "2/20 (10%)", "10/20 (50%)"]);
}

#[test]
fn test_accuracy_table_ties_keep_model_order() {
    let models = vec![ModelId::from("second"), ModelId::from("first")];
    let results = ResultSet::with_models(&models);

    let order: Vec<String> = generate_accuracy_table(&results)
        .into_iter()
        .map(|row| row.model.to_string())
        .collect();

    assert_eq!(order, vec!["second", "first"]);
}

// ===== Unsolvable Summary Tests =====

#[test]
fn test_unsolvable_summary_trims_before_counting() {
    let model = ModelId::from("m");
    let mut results = ResultSet::with_models(&[model.clone()]);
    results.push(unsolvable("t1", &model, "requires live internet access"));
    results.push(unsolvable("t2", &model, "requires live internet access"));
    results.push(unsolvable("t3", &model, "requires live internet access "));
    results.push(success("t4", &model, true, EvaluationOutcome::solved("answer")));

    let summary = generate_unsolvable_summary(&results);
    assert_eq!(
        summary,
        vec![UnsolvableRow {
            reason: "requires live internet access".to_string(),
            count: 3,
        }]
    );
}

#[test]
fn test_unsolvable_summary_excludes_empty_and_failures() {
    let model = ModelId::from("m");
    let mut results = ResultSet::with_models(&[model.clone()]);
    results.push(unsolvable("t1", &model, ""));
    results.push(unsolvable("t2", &model, "   "));
    results.push(ResultRecord::failure(&problem("t3"), &model, "network down"));

    assert!(generate_unsolvable_summary(&results).is_empty());
}

#[test]
fn test_unsolvable_summary_spans_models_and_sorts_stably() {
    let a = ModelId::from("a");
    let b = ModelId::from("b");
    let mut results = ResultSet::with_models(&[a.clone(), b.clone()]);
    results.push(unsolvable("t1", &a, "needs audio"));
    results.push(unsolvable("t2", &a, "needs video"));
    results.push(unsolvable("t1", &b, "needs a browser"));
    results.push(unsolvable("t2", &b, "needs a browser"));
    results.push(unsolvable("t3", &b, "needs video"));

    let summary = generate_unsolvable_summary(&results);
    let rows: Vec<(&str, usize)> = summary.iter().map(|r| (r.reason.as_str(), r.count)).collect();

    assert_eq!(
        rows,
        vec![("needs video", 2), ("needs a browser", 2), ("needs audio", 1)]
    );
}

#[test]
fn test_unsolvable_summary_is_case_sensitive() {
    let model = ModelId::from("m");
    let mut results = ResultSet::with_models(&[model.clone()]);
    results.push(unsolvable("t1", &model, "Needs audio"));
    results.push(unsolvable("t2", &model, "needs audio"));

    assert_eq!(generate_unsolvable_summary(&results).len(), 2);
}

#[test]
fn test_rows_serialize_with_snake_case_fields() {
    let row = AccuracyRow {
        model: ModelId::from("m"),
        judged_accuracy: "1/1 (100%)".to_string(),
        judged_solvable: "1/1 (100%)".to_string(),
    };

    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(value["model"], "m");
    assert_eq!(value["judged_accuracy"], "1/1 (100%)");
}
