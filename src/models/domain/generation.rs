use std::fmt;

use crate::models::domain::{
    document::UploadedDocument, flashcard::FlashcardRecord, quiz_question::QuizQuestionRecord,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    QuizQuestion,
    Flashcard,
}

impl ItemKind {
    pub fn default_count(&self) -> usize {
        match self {
            ItemKind::QuizQuestion => 5,
            ItemKind::Flashcard => 10,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::QuizQuestion => write!(f, "quiz questions"),
            ItemKind::Flashcard => write!(f, "flashcards"),
        }
    }
}

#[derive(Clone, Debug)]
pub enum ContentSource {
    Document(UploadedDocument),
    Topic(String),
}

#[derive(Clone, Debug)]
pub struct GenerationRequest {
    pub source: ContentSource,
    pub item_kind: ItemKind,
    pub requested_count: usize,
}

impl GenerationRequest {
    pub fn from_topic(topic: impl Into<String>, item_kind: ItemKind, requested_count: usize) -> Self {
        Self {
            source: ContentSource::Topic(topic.into()),
            item_kind,
            requested_count,
        }
    }

    pub fn from_document(
        document: UploadedDocument,
        item_kind: ItemKind,
        requested_count: usize,
    ) -> Self {
        Self {
            source: ContentSource::Document(document),
            item_kind,
            requested_count,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeneratedItems {
    Questions(Vec<QuizQuestionRecord>),
    Flashcards(Vec<FlashcardRecord>),
}

impl GeneratedItems {
    pub fn len(&self) -> usize {
        match self {
            GeneratedItems::Questions(items) => items.len(),
            GeneratedItems::Flashcards(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reported next to document results; informational only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentSummary {
    pub document_name: String,
    pub characters_analyzed: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub items: GeneratedItems,
    pub document: Option<DocumentSummary>,
}
