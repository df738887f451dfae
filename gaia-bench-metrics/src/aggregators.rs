use gaia_bench_core::{ModelId, ResultSet};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccuracyRow {
    pub model: ModelId,
    pub judged_accuracy: String,
    pub judged_solvable: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnsolvableRow {
    pub reason: String,
    pub count: usize,
}

/// Per-model correctness and solvability, e.g. `"7/20 (35%)"`.
///
/// Rows are ordered by the accuracy *string*, descending. That is a
/// lexical order, so `"9/20 (45%)"` ranks above `"10/20 (50%)"`.
pub fn generate_accuracy_table(results: &ResultSet) -> Vec<AccuracyRow> {
    let mut rows: Vec<AccuracyRow> = results
        .iter()
        .map(|(model, records)| {
            let total = records.len();
            let correct = records.iter().filter(|r| r.correct()).count();
            let solvable = records
                .iter()
                .filter(|r| r.is_solvable() == Some(true))
                .count();

            AccuracyRow {
                model: model.clone(),
                judged_accuracy: format_ratio(correct, total),
                judged_solvable: format_ratio(solvable, total),
            }
        })
        .collect();

    rows.sort_by(|a, b| b.judged_accuracy.cmp(&a.judged_accuracy));
    rows
}

/// Counts identical trimmed unsolvable reasons across all models.
///
/// Most frequent first; equal counts keep first-seen order.
pub fn generate_unsolvable_summary(results: &ResultSet) -> Vec<UnsolvableRow> {
    let mut rows: Vec<UnsolvableRow> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in results.records() {
        let reason = match record.unsolvable_reason().map(str::trim) {
            Some(reason) if !reason.is_empty() => reason,
            _ => continue,
        };

        match index.get(reason).copied() {
            Some(i) => rows[i].count += 1,
            None => {
                index.insert(reason.to_string(), rows.len());
                rows.push(UnsolvableRow {
                    reason: reason.to_string(),
                    count: 1,
                });
            }
        }
    }

    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

/// `"{count}/{total} ({pct}%)"` with the percentage rounded half-to-even.
pub fn format_ratio(count: usize, total: usize) -> String {
    if total == 0 {
        return "0/0 (0%)".to_string();
    }

    let percent = (Decimal::from(count as u64) * Decimal::ONE_HUNDRED / Decimal::from(total as u64))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);

    format!("{}/{} ({}%)", count, total, percent)
}
