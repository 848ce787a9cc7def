use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FlashcardRecord {
    pub question: String,
    pub answer: String,
}
