use std::{fmt, sync::Arc};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{
        ContentSource, DocumentSummary, FlashcardRecord, GeneratedItems, GenerationOutcome,
        GenerationRequest, ItemKind, QuizQuestionRecord,
    },
    services::{
        document_service::{bound_text, extract_text_blocking},
        model_service::{CompletionClient, CompletionRequest},
        prompt_builder::{build_prompt, PromptContent},
        response_parser::parse_reply,
    },
};

/// Pipeline stages, in execution order. Used for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStage {
    Extract,
    Bound,
    Prompt,
    Complete,
    Parse,
    Shape,
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationStage::Extract => write!(f, "extract"),
            GenerationStage::Bound => write!(f, "bound"),
            GenerationStage::Prompt => write!(f, "prompt"),
            GenerationStage::Complete => write!(f, "complete"),
            GenerationStage::Parse => write!(f, "parse"),
            GenerationStage::Shape => write!(f, "shape"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GenerationSettings {
    pub max_document_chars: usize,
    pub document_max_tokens: u32,
    pub topic_max_tokens: u32,
    pub temperature: f32,
}

impl From<&Config> for GenerationSettings {
    fn from(config: &Config) -> Self {
        Self {
            max_document_chars: config.max_document_chars,
            document_max_tokens: config.document_max_tokens,
            topic_max_tokens: config.topic_max_tokens,
            temperature: config.temperature,
        }
    }
}

/// Runs every generation flow: {quiz, flashcards} x {document, topic}.
///
/// Either a fully parsed, truncated list comes back or an error does.
/// Partial results are never returned.
pub struct GenerationService {
    client: Arc<dyn CompletionClient>,
    settings: GenerationSettings,
}

impl GenerationService {
    pub fn new(client: Arc<dyn CompletionClient>, settings: GenerationSettings) -> Self {
        Self { client, settings }
    }

    pub async fn generate(&self, request: GenerationRequest) -> AppResult<GenerationOutcome> {
        let GenerationRequest {
            source,
            item_kind,
            requested_count,
        } = request;

        let (content, document, max_output_tokens) = match source {
            ContentSource::Topic(topic) => {
                let topic = topic.trim().to_string();
                if topic.is_empty() {
                    return Err(AppError::ValidationError("Topic is required".to_string()));
                }
                (topic, None, self.settings.topic_max_tokens)
            }
            ContentSource::Document(uploaded) => {
                let document_name = uploaded.original_name.clone();
                log::debug!("[{}] {}", GenerationStage::Extract, document_name);

                let text = extract_text_blocking(uploaded).await?;
                if text.trim().is_empty() {
                    return Err(AppError::ValidationError(
                        "Document appears to be empty".to_string(),
                    ));
                }

                let bounded = bound_text(&text, self.settings.max_document_chars).to_string();
                let characters_analyzed = bounded.chars().count();
                log::info!(
                    "[{}] {}: analyzing {} of {} characters",
                    GenerationStage::Bound,
                    document_name,
                    characters_analyzed,
                    text.chars().count()
                );

                let summary = DocumentSummary {
                    document_name,
                    characters_analyzed,
                };
                (bounded, Some(summary), self.settings.document_max_tokens)
            }
        };

        let prompt_content = if document.is_some() {
            PromptContent::Document(&content)
        } else {
            PromptContent::Topic(&content)
        };
        let prompt = build_prompt(item_kind, requested_count, prompt_content);
        log::debug!(
            "[{}] {} {}, user message {} chars",
            GenerationStage::Prompt,
            requested_count,
            item_kind,
            prompt.user.len()
        );

        let reply = self
            .client
            .complete(&CompletionRequest {
                system: prompt.system,
                user: prompt.user,
                max_output_tokens,
                temperature: self.settings.temperature,
            })
            .await?;
        log::debug!(
            "[{}] reply of {} chars",
            GenerationStage::Complete,
            reply.len()
        );

        let parsed = parse_reply(&reply);
        log::info!("[{}] stage: {}", GenerationStage::Parse, parsed.stage());
        let values = parsed.into_items().inspect_err(|e| {
            if let AppError::MalformedModelOutput { raw } = e {
                log::warn!("Unparseable model reply: {}", raw);
            }
        })?;

        let items = shape_items(item_kind, values, requested_count)?;
        log::info!(
            "[{}] returning {} {}",
            GenerationStage::Shape,
            items.len(),
            item_kind
        );

        Ok(GenerationOutcome { items, document })
    }
}

/// Truncates to `requested_count` and types the survivors. Every kept item
/// must match the record shape; one bad item fails the whole reply.
fn shape_items(
    item_kind: ItemKind,
    values: Vec<Value>,
    requested_count: usize,
) -> AppResult<GeneratedItems> {
    let kept: Vec<Value> = values.into_iter().take(requested_count).collect();

    match item_kind {
        ItemKind::QuizQuestion => {
            let questions: Vec<QuizQuestionRecord> = typed_records(kept)?;
            for (index, question) in questions.iter().enumerate() {
                if let Some(violation) = question.contract_violation() {
                    log::warn!("Generated question {} breaks the contract: {}", index, violation);
                }
            }
            Ok(GeneratedItems::Questions(questions))
        }
        ItemKind::Flashcard => Ok(GeneratedItems::Flashcards(typed_records::<FlashcardRecord>(
            kept,
        )?)),
    }
}

fn typed_records<T: DeserializeOwned>(values: Vec<Value>) -> AppResult<Vec<T>> {
    values
        .into_iter()
        .map(|value| {
            serde_json::from_value::<T>(value.clone()).map_err(|e| {
                log::warn!("Generated item does not match the record shape ({}): {}", e, value);
                AppError::MalformedModelOutput {
                    raw: value.to_string(),
                }
            })
        })
        .collect()
}
