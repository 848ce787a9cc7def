use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{
    FlashcardRecord, GeneratedItems, GenerationOutcome, Quiz, QuizQuestionRecord,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuizQuestionRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters_analyzed: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCardsResponse {
    pub success: bool,
    pub cards: Vec<FlashcardRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters_analyzed: Option<usize>,
}

/// Either response shape, chosen by what the pipeline produced.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum GenerationResponse {
    Questions(GenerateQuestionsResponse),
    Cards(GenerateCardsResponse),
}

impl From<GenerationOutcome> for GenerationResponse {
    fn from(outcome: GenerationOutcome) -> Self {
        let (document_name, characters_analyzed) = match outcome.document {
            Some(summary) => (
                Some(summary.document_name),
                Some(summary.characters_analyzed),
            ),
            None => (None, None),
        };

        match outcome.items {
            GeneratedItems::Questions(questions) => {
                GenerationResponse::Questions(GenerateQuestionsResponse {
                    success: true,
                    questions,
                    document_name,
                    characters_analyzed,
                })
            }
            GeneratedItems::Flashcards(cards) => GenerationResponse::Cards(GenerateCardsResponse {
                success: true,
                cards,
                document_name,
                characters_analyzed,
            }),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizResponse {
    pub success: bool,
    pub quiz_id: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizHeaderDto {
    pub quiz_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct GetQuizResponse {
    pub success: bool,
    pub quiz: QuizHeaderDto,
    pub questions: Vec<QuizQuestionRecord>,
}

impl From<Quiz> for GetQuizResponse {
    fn from(quiz: Quiz) -> Self {
        GetQuizResponse {
            success: true,
            quiz: QuizHeaderDto {
                quiz_id: quiz.quiz_id,
                title: quiz.title,
                created_at: quiz.created_at,
            },
            questions: quiz.questions,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuizResponse {
    pub success: bool,
    pub message: String,
    pub quiz_id: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteQuizResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummaryDto {
    pub quiz_id: String,
    pub title: String,
    pub question_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Quiz> for QuizSummaryDto {
    fn from(quiz: &Quiz) -> Self {
        QuizSummaryDto {
            quiz_id: quiz.quiz_id.clone(),
            title: quiz.title.clone(),
            question_count: quiz.questions.len(),
            created_at: quiz.created_at,
            updated_at: quiz.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListQuizzesResponse {
    pub success: bool,
    pub quizzes: Vec<QuizSummaryDto>,
}
