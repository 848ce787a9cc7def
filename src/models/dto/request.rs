use actix_multipart::form::{bytes::Bytes, text::Text, MultipartForm};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{QuizQuestionRecord, QuizUpdate};

/// Optional sign and digits at the start of a form value; the rest is ignored.
static LEADING_INTEGER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?\d+)").expect("LEADING_INTEGER_REGEX is a valid regex pattern")
});

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequest {
    #[validate(
        required(message = "Topic is required"),
        length(min = 1, message = "Topic is required")
    )]
    pub topic: Option<String>,

    #[validate(range(min = 1, message = "numQuestions must be a positive integer"))]
    pub num_questions: Option<u32>,
}

impl GenerateQuizRequest {
    pub fn normalized(mut self) -> Self {
        self.topic = self.topic.map(|t| t.trim().to_string());
        self
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateCardsRequest {
    #[validate(
        required(message = "Topic is required"),
        length(min = 1, message = "Topic is required")
    )]
    pub topic: Option<String>,

    #[validate(range(min = 1, message = "count must be a positive integer"))]
    pub count: Option<u32>,
}

impl GenerateCardsRequest {
    pub fn normalized(mut self) -> Self {
        self.topic = self.topic.map(|t| t.trim().to_string());
        self
    }
}

/// Multipart body shared by both document generation routes.
#[derive(Debug, MultipartForm)]
pub struct DocumentUploadForm {
    #[multipart(limit = "10MiB")]
    pub file: Option<Bytes>,

    #[multipart(rename = "numQuestions")]
    pub num_questions: Option<Text<String>>,

    pub count: Option<Text<String>>,
}

/// Lenient count parsing for form fields. Leading digits are read the way
/// `parseInt` reads them (`"3abc"` is 3, `"2.5"` is 2); anything without a
/// positive leading integer falls back to the default.
pub fn parse_form_count(value: Option<&Text<String>>, default: usize) -> usize {
    value
        .and_then(|text| LEADING_INTEGER_REGEX.captures(text.as_str()))
        .and_then(|captures| captures[1].parse::<i64>().ok())
        .filter(|count| *count > 0)
        .and_then(|count| usize::try_from(count).ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuizRequest {
    pub title: Option<String>,
    pub questions: Option<Vec<QuizQuestionRecord>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateQuizRequest {
    pub title: Option<String>,
    pub questions: Option<Vec<QuizQuestionRecord>>,
}

impl From<UpdateQuizRequest> for QuizUpdate {
    fn from(request: UpdateQuizRequest) -> Self {
        QuizUpdate {
            title: request.title,
            questions: request.questions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_missing_topic_is_rejected() {
        let request: GenerateQuizRequest = serde_json::from_str("{}").unwrap();
        let err = request.normalized().validate().unwrap_err();
        assert!(err.to_string().contains("Topic is required"));
    }

    #[test]
    fn test_blank_topic_is_rejected() {
        let request: GenerateCardsRequest =
            serde_json::from_str(r#"{"topic":"   ","count":3}"#).unwrap();
        let err = request.normalized().validate().unwrap_err();
        assert!(err.to_string().contains("Topic is required"));
    }

    #[test]
    fn test_valid_quiz_request_uses_camel_case_count() {
        let request: GenerateQuizRequest =
            serde_json::from_str(r#"{"topic":"Rust","numQuestions":3}"#).unwrap();
        assert_eq!(request.num_questions, Some(3));
        assert!(request.normalized().validate().is_ok());
    }

    #[test]
    fn test_count_must_be_positive_but_has_no_ceiling() {
        let request: GenerateCardsRequest =
            serde_json::from_str(r#"{"topic":"Rust","count":0}"#).unwrap();
        assert!(request.normalized().validate().is_err());

        let request: GenerateCardsRequest =
            serde_json::from_str(r#"{"topic":"Rust","count":500}"#).unwrap();
        assert!(request.normalized().validate().is_ok());

        let request: GenerateQuizRequest =
            serde_json::from_str(r#"{"topic":"Rust","numQuestions":60}"#).unwrap();
        assert!(request.normalized().validate().is_ok());
    }

    #[test]
    fn test_form_count_falls_back_to_default() {
        assert_eq!(parse_form_count(None, 5), 5);
        assert_eq!(parse_form_count(Some(&Text("abc".to_string())), 5), 5);
        assert_eq!(parse_form_count(Some(&Text("0".to_string())), 10), 10);
        assert_eq!(parse_form_count(Some(&Text("-3".to_string())), 10), 10);
        assert_eq!(parse_form_count(Some(&Text(" 7 ".to_string())), 5), 7);
        assert_eq!(parse_form_count(Some(&Text("60".to_string())), 5), 60);
    }

    #[test]
    fn test_form_count_reads_leading_digits() {
        assert_eq!(parse_form_count(Some(&Text("3abc".to_string())), 5), 3);
        assert_eq!(parse_form_count(Some(&Text("2.5".to_string())), 10), 2);
        assert_eq!(parse_form_count(Some(&Text("+4".to_string())), 10), 4);
        assert_eq!(parse_form_count(Some(&Text("-2.5".to_string())), 10), 10);
        assert_eq!(parse_form_count(Some(&Text("x3".to_string())), 5), 5);
    }
}
