use serde::{Deserialize, Serialize};

/// Number of options every generated question is asked to carry.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// A multiple choice question as produced by the model and kept by the quiz store.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    pub correct: String, // expected to equal one of `options` exactly
}

impl QuizQuestionRecord {
    /// Checks the shape the model is instructed to follow. Nothing rejects a
    /// record for failing it; callers only report the violation.
    pub fn contract_violation(&self) -> Option<String> {
        if self.options.len() != OPTIONS_PER_QUESTION {
            return Some(format!(
                "expected {} options, got {}",
                OPTIONS_PER_QUESTION,
                self.options.len()
            ));
        }
        if !self.options.iter().any(|option| option == &self.correct) {
            return Some(format!(
                "correct answer '{}' is not one of the options",
                self.correct
            ));
        }
        None
    }
}
