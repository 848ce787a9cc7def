use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Quiz, QuizQuestionRecord, QuizUpdate},
    repositories::QuizRepository,
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_quiz(
        &self,
        title: Option<String>,
        questions: Option<Vec<QuizQuestionRecord>>,
    ) -> AppResult<Quiz> {
        let title = title.filter(|t| !t.trim().is_empty());
        let questions = questions.filter(|q| !q.is_empty());

        let (Some(title), Some(questions)) = (title, questions) else {
            return Err(AppError::ValidationError(
                "Title and questions are required".to_string(),
            ));
        };

        let quiz = self.repository.create(title, questions).await?;
        log::info!(
            "Created quiz {} with {} questions",
            quiz.quiz_id,
            quiz.questions.len()
        );
        Ok(quiz)
    }

    pub async fn get_quiz(&self, quiz_id: &str) -> AppResult<Quiz> {
        self.repository
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| not_found(quiz_id))
    }

    pub async fn update_quiz(&self, quiz_id: &str, update: QuizUpdate) -> AppResult<Quiz> {
        let quiz = self
            .repository
            .update(quiz_id, update)
            .await?
            .ok_or_else(|| not_found(quiz_id))?;

        log::info!("Updated quiz {}", quiz.quiz_id);
        Ok(quiz)
    }

    pub async fn delete_quiz(&self, quiz_id: &str) -> AppResult<()> {
        if !self.repository.delete(quiz_id).await? {
            return Err(not_found(quiz_id));
        }

        log::info!("Deleted quiz {}", quiz_id);
        Ok(())
    }

    pub async fn list_quizzes(&self) -> AppResult<Vec<Quiz>> {
        self.repository.list().await
    }
}

fn not_found(quiz_id: &str) -> AppError {
    log::debug!("Quiz '{}' not found", quiz_id);
    AppError::NotFound("Quiz not found".to_string())
}
