use crate::models::domain::QuizQuestionRecord;

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Well formed questions whose correct answer is always the first option.
    pub fn sample_questions(n: usize) -> Vec<QuizQuestionRecord> {
        (1..=n)
            .map(|i| QuizQuestionRecord {
                question: format!("Question {}?", i),
                options: (1..=4).map(|o| format!("Q{} option {}", i, o)).collect(),
                correct: format!("Q{} option 1", i),
            })
            .collect()
    }

    /// A model reply holding `n` questions as a bare JSON array.
    pub fn quiz_reply(n: usize) -> String {
        serde_json::to_string(&sample_questions(n)).unwrap()
    }

    /// A model reply holding `n` flashcards as a bare JSON array.
    pub fn flashcards_reply(n: usize) -> String {
        let cards: Vec<serde_json::Value> = (1..=n)
            .map(|i| {
                serde_json::json!({
                    "question": format!("Term {}", i),
                    "answer": format!("Definition {}", i),
                })
            })
            .collect();
        serde_json::Value::Array(cards).to_string()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::test_helpers::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_sample_questions_follow_the_contract() {
        let questions = sample_questions(3);
        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(|q| q.contract_violation().is_none()));
    }

    #[test]
    fn test_replies_are_json_arrays() {
        let quiz: serde_json::Value = serde_json::from_str(&quiz_reply(2)).unwrap();
        let cards: serde_json::Value = serde_json::from_str(&flashcards_reply(4)).unwrap();

        assert_eq!(quiz.as_array().map(Vec::len), Some(2));
        assert_eq!(cards.as_array().map(Vec::len), Some(4));
        assert_eq!(cards[0]["answer"], "Definition 1");
    }

    #[test]
    fn test_status_helpers() {
        assert_error_status(StatusCode::NOT_FOUND);
        assert_error_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_success_status(StatusCode::CREATED);
    }
}
