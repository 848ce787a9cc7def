use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::errors::{AppError, AppResult};

/// Greedy: from the first `[` to the last `]` anywhere in the reply.
static JSON_ARRAY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[.*\]").expect("JSON_ARRAY_REGEX is a valid regex pattern"));

/// Which stage of the two-stage parse produced the items, if any.
#[derive(Clone, Debug, PartialEq)]
pub enum ParsedReply {
    ParsedDirectly(Vec<Value>),
    ExtractedFromText(Vec<Value>),
    Failed { raw: String },
}

impl ParsedReply {
    pub fn stage(&self) -> &'static str {
        match self {
            ParsedReply::ParsedDirectly(_) => "direct",
            ParsedReply::ExtractedFromText(_) => "extracted",
            ParsedReply::Failed { .. } => "failed",
        }
    }

    pub fn into_items(self) -> AppResult<Vec<Value>> {
        match self {
            ParsedReply::ParsedDirectly(items) | ParsedReply::ExtractedFromText(items) => Ok(items),
            ParsedReply::Failed { raw } => Err(AppError::MalformedModelOutput { raw }),
        }
    }
}

/// Parses a model reply into a JSON array.
///
/// The whole reply is tried first. Models like to wrap the array in prose or
/// code fences, so the fallback pulls out the first bracketed span and tries
/// that. Replies holding several separate arrays can be mis-extracted.
pub fn parse_reply(raw: &str) -> ParsedReply {
    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(raw) {
        return ParsedReply::ParsedDirectly(items);
    }

    if let Some(found) = JSON_ARRAY_REGEX.find(raw) {
        if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(found.as_str()) {
            return ParsedReply::ExtractedFromText(items);
        }
    }

    ParsedReply::Failed {
        raw: raw.to_string(),
    }
}
