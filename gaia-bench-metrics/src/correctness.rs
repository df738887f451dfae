/// Case-insensitive exact match after trimming surrounding whitespace.
///
/// A missing prediction is never correct.
pub fn is_correct(prediction: Option<&str>, answer: &str) -> bool {
    match prediction {
        Some(prediction) => prediction.trim().to_lowercase() == answer.trim().to_lowercase(),
        None => false,
    }
}
