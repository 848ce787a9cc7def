use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// One single-turn chat completion call.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
}

/// The external generative model, seen as "messages in, text out".
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Returns the text of the first choice. Never retries.
    async fn complete(&self, request: &CompletionRequest) -> AppResult<String>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionReply {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    message: String,
}

/// Talks to an OpenAI compatible `/chat/completions` endpoint (Groq by default).
pub struct ChatCompletionClient {
    http: reqwest::Client,
    api_base: String,
    api_key: Option<SecretString>,
    model: String,
}

impl ChatCompletionClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: config.completion_api_base.trim_end_matches('/').to_string(),
            api_key: config.completion_api_key.clone(),
            model: config.completion_model.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }
}

#[async_trait]
impl CompletionClient for ChatCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> AppResult<String> {
        let api_key = self.api_key.as_ref().ok_or(AppError::MissingCredential)?;

        let body = ChatCompletionBody {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_output_tokens,
        };

        log::debug!(
            "Sending completion request to {} (model {}, max_tokens {})",
            self.endpoint(),
            self.model,
            request.max_output_tokens
        );

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                log::error!("Failed to reach completion API: {}", e);
                AppError::UpstreamError(format!("Failed to reach completion API: {}", e))
            })?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| AppError::UpstreamError(format!("Failed to read completion response: {}", e)))?;

        if !status.is_success() {
            log::error!("Completion API returned {}: {}", status, response_text);
            return Err(AppError::UpstreamError(provider_error_message(
                status,
                &response_text,
            )));
        }

        let reply: ChatCompletionReply = serde_json::from_str(&response_text).map_err(|e| {
            AppError::UpstreamError(format!("Unexpected completion response format: {}", e))
        })?;

        first_choice_content(reply)
    }
}

fn provider_error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<ProviderErrorBody>(body)
        .map(|parsed| parsed.error.message)
        .unwrap_or_else(|_| format!("Completion API request failed with status {}", status))
}

fn first_choice_content(reply: ChatCompletionReply) -> AppResult<String> {
    let choice = reply.choices.into_iter().next().ok_or_else(|| {
        AppError::UpstreamError("Completion API returned no choices".to_string())
    })?;

    choice.message.content.ok_or_else(|| {
        AppError::UpstreamError("Completion API response contained no text content".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CompletionRequest {
        CompletionRequest {
            system: "sys".into(),
            user: "usr".into(),
            max_output_tokens: 10,
            temperature: 0.7,
        }
    }

    #[actix_web::test]
    async fn missing_key_fails_before_any_network_call() {
        // The api base points at an unroutable port; reaching it would be an upstream error.
        let config = Config {
            completion_api_key: None,
            completion_api_base: "http://127.0.0.1:9".to_string(),
            ..Config::default()
        };
        let client = ChatCompletionClient::new(&config);

        assert!(matches!(
            client.complete(&request()).await,
            Err(AppError::MissingCredential)
        ));
    }

    #[test]
    fn request_body_uses_chat_completion_shape() {
        let req = request();
        let body = ChatCompletionBody {
            model: "mixtral-8x7b-32768",
            messages: [
                ChatMessage {
                    role: "system",
                    content: &req.system,
                },
                ChatMessage {
                    role: "user",
                    content: &req.user,
                },
            ],
            temperature: req.temperature,
            max_tokens: req.max_output_tokens,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "mixtral-8x7b-32768");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "usr");
        assert_eq!(json["max_tokens"], 10);
    }

    #[test]
    fn first_choice_text_is_returned() {
        let reply: ChatCompletionReply = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"[1]"}},{"message":{"content":"[2]"}}]}"#,
        )
        .unwrap();
        assert_eq!(first_choice_content(reply).unwrap(), "[1]");
    }

    #[test]
    fn empty_choices_is_upstream_error() {
        let reply: ChatCompletionReply = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            first_choice_content(reply),
            Err(AppError::UpstreamError(_))
        ));
    }

    #[test]
    fn provider_message_is_surfaced() {
        let message = provider_error_message(
            reqwest::StatusCode::UNAUTHORIZED,
            r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error"}}"#,
        );
        assert_eq!(message, "Invalid API Key");

        let fallback = provider_error_message(reqwest::StatusCode::BAD_GATEWAY, "<html>");
        assert!(fallback.contains("502"));
    }
}
