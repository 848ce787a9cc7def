use crate::{
    constants::prompts::{
        FLASHCARD_DOCUMENT_REQUIREMENTS, FLASHCARD_DOCUMENT_SYSTEM_PROMPT, FLASHCARD_JSON_SHAPE,
        FLASHCARD_TOPIC_REQUIREMENTS, FLASHCARD_TOPIC_SYSTEM_PROMPT, QUIZ_DOCUMENT_REQUIREMENTS,
        QUIZ_DOCUMENT_SYSTEM_PROMPT, QUIZ_JSON_SHAPE, QUIZ_TOPIC_REQUIREMENTS,
        QUIZ_TOPIC_SYSTEM_PROMPT,
    },
    models::domain::ItemKind,
};

/// What the model is asked to work from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptContent<'a> {
    Document(&'a str),
    Topic(&'a str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Builds the system and user messages for one generation call.
///
/// The expected JSON array is spelled out as a literal example because the
/// completion endpoint offers no structured output contract.
pub fn build_prompt(item_kind: ItemKind, count: usize, content: PromptContent<'_>) -> PromptPair {
    let (system, shape, requirements) = match (item_kind, content) {
        (ItemKind::QuizQuestion, PromptContent::Document(_)) => (
            QUIZ_DOCUMENT_SYSTEM_PROMPT,
            QUIZ_JSON_SHAPE,
            QUIZ_DOCUMENT_REQUIREMENTS,
        ),
        (ItemKind::Flashcard, PromptContent::Document(_)) => (
            FLASHCARD_DOCUMENT_SYSTEM_PROMPT,
            FLASHCARD_JSON_SHAPE,
            FLASHCARD_DOCUMENT_REQUIREMENTS,
        ),
        (ItemKind::QuizQuestion, PromptContent::Topic(_)) => (
            QUIZ_TOPIC_SYSTEM_PROMPT,
            QUIZ_JSON_SHAPE,
            QUIZ_TOPIC_REQUIREMENTS,
        ),
        (ItemKind::Flashcard, PromptContent::Topic(_)) => (
            FLASHCARD_TOPIC_SYSTEM_PROMPT,
            FLASHCARD_JSON_SHAPE,
            FLASHCARD_TOPIC_REQUIREMENTS,
        ),
    };

    let ask = match item_kind {
        ItemKind::QuizQuestion => format!("{} multiple choice quiz questions", count),
        ItemKind::Flashcard => format!("{} flashcard question-answer pairs", count),
    };

    let user = match content {
        PromptContent::Document(excerpt) => format!(
            "Based on the following document content, generate {ask}.\n\n\
             DOCUMENT CONTENT:\n---\n{excerpt}\n---\n\n\
             Generate {kind} in this JSON format:\n{shape}\n\n{requirements}",
            kind = item_kind,
        ),
        PromptContent::Topic(topic) => format!(
            "Generate {ask} about \"{topic}\".\n\n\
             Format your response as a JSON array with this structure:\n{shape}\n\n{requirements}"
        ),
    };

    PromptPair {
        system: system.to_string(),
        user,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_quiz_prompt_embeds_excerpt_and_rules() {
        let prompt = build_prompt(
            ItemKind::QuizQuestion,
            3,
            PromptContent::Document("Mitochondria are the powerhouse of the cell."),
        );

        assert_eq!(prompt.system, QUIZ_DOCUMENT_SYSTEM_PROMPT);
        assert!(prompt.user.contains("generate 3 multiple choice quiz questions"));
        assert!(prompt
            .user
            .contains("DOCUMENT CONTENT:\n---\nMitochondria are the powerhouse of the cell.\n---"));
        assert!(prompt.user.contains("\"options\""));
        assert!(prompt.user.contains("exactly 4 options"));
        assert!(prompt.user.contains("match one of the options exactly"));
        assert!(prompt.user.contains("Return ONLY valid JSON"));
    }

    #[test]
    fn topic_flashcard_prompt_quotes_topic() {
        let prompt = build_prompt(ItemKind::Flashcard, 10, PromptContent::Topic("Ownership"));

        assert_eq!(prompt.system, FLASHCARD_TOPIC_SYSTEM_PROMPT);
        assert!(prompt
            .user
            .starts_with("Generate 10 flashcard question-answer pairs about \"Ownership\"."));
        assert!(prompt.user.contains("\"answer\""));
        assert!(!prompt.user.contains("DOCUMENT CONTENT"));
        assert!(!prompt.user.contains("\"options\""));
    }

    #[test]
    fn prompt_is_deterministic() {
        let a = build_prompt(ItemKind::QuizQuestion, 5, PromptContent::Topic("Rust"));
        let b = build_prompt(ItemKind::QuizQuestion, 5, PromptContent::Topic("Rust"));
        assert_eq!(a, b);
    }

    #[test]
    fn system_prompt_varies_by_item_kind() {
        let quiz = build_prompt(ItemKind::QuizQuestion, 1, PromptContent::Document("x"));
        let cards = build_prompt(ItemKind::Flashcard, 1, PromptContent::Document("x"));
        assert_ne!(quiz.system, cards.system);
        assert!(cards.system.contains("flashcard"));
    }
}
