pub const QUIZ_DOCUMENT_SYSTEM_PROMPT: &str = "You are a quiz generator. Generate quiz questions based on document content. Always respond with valid JSON only.";

pub const FLASHCARD_DOCUMENT_SYSTEM_PROMPT: &str = "You are a flashcard generator. Generate flashcards based on document content. Always respond with valid JSON only.";

pub const QUIZ_TOPIC_SYSTEM_PROMPT: &str =
    "You are a helpful quiz generator. Always respond with valid JSON only.";

pub const FLASHCARD_TOPIC_SYSTEM_PROMPT: &str =
    "You are a helpful flashcard generator. Always respond with valid JSON only.";

pub const QUIZ_JSON_SHAPE: &str = r#"[
  {
    "question": "Question text here?",
    "options": ["Option A", "Option B", "Option C", "Option D"],
    "correct": "Correct answer text"
  }
]"#;

pub const FLASHCARD_JSON_SHAPE: &str = r#"[
  {
    "question": "Question or prompt",
    "answer": "Answer or explanation"
  }
]"#;

pub const QUIZ_DOCUMENT_REQUIREMENTS: &str = "Requirements:
- Questions must be based on the document content
- Each question should have exactly 4 options
- The \"correct\" field should match one of the options exactly
- Return ONLY valid JSON, no other text";

pub const FLASHCARD_DOCUMENT_REQUIREMENTS: &str = "Requirements:
- Questions and answers should be based on the document content
- Answers should be detailed but concise
- Return ONLY valid JSON, no other text";

pub const QUIZ_TOPIC_REQUIREMENTS: &str = "Requirements:
- Each question should have exactly 4 options
- The \"correct\" field should match one of the options exactly
- Return ONLY valid JSON, no other text.";

pub const FLASHCARD_TOPIC_REQUIREMENTS: &str = "Return ONLY valid JSON, no other text.";
