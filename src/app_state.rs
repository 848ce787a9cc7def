use std::sync::Arc;

use crate::{
    config::Config,
    repositories::{InMemoryQuizRepository, QuizRepository},
    services::{
        generation_service::{GenerationService, GenerationSettings},
        model_service::{ChatCompletionClient, CompletionClient},
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub generation_service: Arc<GenerationService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let completion_client = Arc::new(ChatCompletionClient::new(&config));
        let quiz_repository = Arc::new(InMemoryQuizRepository::new());

        Self::with_components(config, quiz_repository, completion_client)
    }

    /// Wires the services around caller supplied collaborators (tests use
    /// stub completion clients and fresh stores).
    pub fn with_components(
        config: Config,
        quiz_repository: Arc<dyn QuizRepository>,
        completion_client: Arc<dyn CompletionClient>,
    ) -> Self {
        let quiz_service = Arc::new(QuizService::new(quiz_repository));
        let generation_service = Arc::new(GenerationService::new(
            completion_client,
            GenerationSettings::from(&config),
        ));

        Self {
            quiz_service,
            generation_service,
            config: Arc::new(config),
        }
    }
}
