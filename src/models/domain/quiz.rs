use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_question::QuizQuestionRecord;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub quiz_id: String, // assigned by the store counter
    pub title: String,
    pub questions: Vec<QuizQuestionRecord>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Quiz {
    pub fn new(quiz_id: String, title: String, questions: Vec<QuizQuestionRecord>) -> Self {
        let now = Utc::now();
        Quiz {
            quiz_id,
            title,
            questions,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a partial update. The timestamp moves even when nothing else does.
    pub fn apply(&mut self, update: QuizUpdate) {
        if let Some(title) = update.title.filter(|t| !t.trim().is_empty()) {
            self.title = title;
        }
        if let Some(questions) = update.questions {
            self.questions = questions;
        }
        self.updated_at = Utc::now();
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizUpdate {
    pub title: Option<String>,
    pub questions: Option<Vec<QuizQuestionRecord>>,
}
