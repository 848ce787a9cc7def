use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    errors::AppResult,
    models::domain::{Quiz, QuizQuestionRecord, QuizUpdate},
};

/// Storage for quizzes. Handlers only see this trait, so a persistent
/// backend can replace the in-memory one without touching them.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn create(&self, title: String, questions: Vec<QuizQuestionRecord>) -> AppResult<Quiz>;
    async fn find_by_id(&self, quiz_id: &str) -> AppResult<Option<Quiz>>;
    async fn update(&self, quiz_id: &str, update: QuizUpdate) -> AppResult<Option<Quiz>>;
    async fn delete(&self, quiz_id: &str) -> AppResult<bool>;
    async fn list(&self) -> AppResult<Vec<Quiz>>;
}

struct QuizTable {
    next_id: u64,
    quizzes: BTreeMap<u64, Quiz>,
}

/// Process-local store. Ids come from a counter seeded at 1 and are never reused.
pub struct InMemoryQuizRepository {
    table: RwLock<QuizTable>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(QuizTable {
                next_id: 1,
                quizzes: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryQuizRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Ids are rendered counter values; anything that does not parse cannot exist.
fn parse_id(quiz_id: &str) -> Option<u64> {
    quiz_id.parse::<u64>().ok()
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn create(&self, title: String, questions: Vec<QuizQuestionRecord>) -> AppResult<Quiz> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let quiz = Quiz::new(id.to_string(), title, questions);
        table.quizzes.insert(id, quiz.clone());
        Ok(quiz)
    }

    async fn find_by_id(&self, quiz_id: &str) -> AppResult<Option<Quiz>> {
        let Some(id) = parse_id(quiz_id) else {
            return Ok(None);
        };
        let table = self.table.read().await;
        Ok(table.quizzes.get(&id).cloned())
    }

    async fn update(&self, quiz_id: &str, update: QuizUpdate) -> AppResult<Option<Quiz>> {
        let Some(id) = parse_id(quiz_id) else {
            return Ok(None);
        };
        let mut table = self.table.write().await;
        let Some(quiz) = table.quizzes.get_mut(&id) else {
            return Ok(None);
        };

        quiz.apply(update);
        Ok(Some(quiz.clone()))
    }

    async fn delete(&self, quiz_id: &str) -> AppResult<bool> {
        let Some(id) = parse_id(quiz_id) else {
            return Ok(false);
        };
        let mut table = self.table.write().await;
        Ok(table.quizzes.remove(&id).is_some())
    }

    async fn list(&self) -> AppResult<Vec<Quiz>> {
        let table = self.table.read().await;
        Ok(table.quizzes.values().cloned().collect())
    }
}
