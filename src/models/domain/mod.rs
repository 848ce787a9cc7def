pub mod document;
pub mod flashcard;
pub mod generation;
pub mod quiz;
pub mod quiz_question;
pub use document::{DocumentKind, UploadedDocument};
pub use flashcard::FlashcardRecord;
pub use generation::{
    ContentSource, DocumentSummary, GeneratedItems, GenerationOutcome, GenerationRequest, ItemKind,
};
pub use quiz::{Quiz, QuizUpdate};
pub use quiz_question::QuizQuestionRecord;
