use std::env;

use secrecy::SecretString;

/// Uploaded documents larger than this are rejected at the multipart boundary.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Limit for JSON request bodies.
pub const MAX_JSON_BODY_BYTES: usize = 50 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub completion_api_key: Option<SecretString>,
    pub completion_api_base: String,
    pub completion_model: String,
    pub temperature: f32,
    pub max_document_chars: usize,
    pub document_max_tokens: u32,
    pub topic_max_tokens: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web_server_host: "0.0.0.0".to_string(),
            web_server_port: 5000,
            completion_api_key: None,
            completion_api_base: "https://api.groq.com/openai/v1".to_string(),
            completion_model: "mixtral-8x7b-32768".to_string(),
            temperature: 0.7,
            max_document_chars: 8000,
            document_max_tokens: 3000,
            topic_max_tokens: 2000,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let defaults = Self::default();

        Self {
            web_server_host: env::var("HOST").unwrap_or(defaults.web_server_host),
            web_server_port: parsed_var("PORT").unwrap_or(defaults.web_server_port),
            completion_api_key: env::var("GROQ_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            completion_api_base: env::var("COMPLETION_API_BASE")
                .unwrap_or(defaults.completion_api_base),
            completion_model: env::var("COMPLETION_MODEL").unwrap_or(defaults.completion_model),
            temperature: parsed_var("COMPLETION_TEMPERATURE").unwrap_or(defaults.temperature),
            max_document_chars: parsed_var("MAX_DOCUMENT_CHARS")
                .filter(|chars| *chars > 0)
                .unwrap_or(defaults.max_document_chars),
            document_max_tokens: parsed_var("DOCUMENT_MAX_TOKENS")
                .unwrap_or(defaults.document_max_tokens),
            topic_max_tokens: parsed_var("TOPIC_MAX_TOKENS").unwrap_or(defaults.topic_max_tokens),
        }
    }

    /// A missing key only fails generation requests, so this warns instead of panicking.
    pub fn warn_on_missing_credentials(&self) {
        if self.completion_api_key.is_none() {
            log::warn!(
                "GROQ_API_KEY is not set; generation endpoints will answer with 500 until it is configured"
            );
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_server_host.clone(), self.web_server_port)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            completion_api_key: Some(SecretString::from("test_api_key".to_string())),
            completion_api_base: "http://127.0.0.1:9".to_string(),
            ..Self::default()
        }
    }
}

fn parsed_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|value| value.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.web_server_host.is_empty());
        assert!(!config.completion_model.is_empty());
        assert!(config.max_document_chars > 0);
    }

    #[test]
    fn test_default_matches_reference_configuration() {
        let config = Config::default();

        assert_eq!(config.web_server_port, 5000);
        assert_eq!(config.max_document_chars, 8000);
        assert_eq!(config.document_max_tokens, 3000);
        assert_eq!(config.topic_max_tokens, 2000);
        assert!((config.temperature - 0.7).abs() < f32::EPSILON);
        assert!(config.completion_api_key.is_none());
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.web_server_host, "127.0.0.1");
        assert_eq!(
            config
                .completion_api_key
                .as_ref()
                .map(|key| key.expose_secret().to_string()),
            Some("test_api_key".to_string())
        );
    }
}
