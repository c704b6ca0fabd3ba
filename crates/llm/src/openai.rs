//! OpenAI chat-completions backend.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::generator::{GenerationError, TextGenerator};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// [`TextGenerator`] backed by the OpenAI chat-completions API.
///
/// Requests go out with temperature 0 — the workflow wants the most stable
/// output the model can give, and prompt content carries all the variation.
pub struct OpenAiGenerator {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiGenerator {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point at an OpenAI-compatible endpoint (proxy, local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Pull `choices[0].message.content` out of a chat-completions response
    /// body. Split out so the parsing is testable without a server.
    fn parse_completion(body: &Value) -> Result<String, GenerationError> {
        if let Some(error) = body.get("error") {
            let message = error["message"].as_str().unwrap_or("unknown error");
            return Err(GenerationError::Provider(message.to_string()));
        }
        body["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                GenerationError::MalformedResponse("choices[0].message.content missing".to_string())
            })
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!("{}/chat/completions", self.base_url);
        let payload = json!({
            "model": self.model,
            "temperature": 0.0,
            "messages": [{"role": "user", "content": prompt}],
        });

        tracing::debug!(model = %self.model, prompt_chars = prompt.len(), "requesting completion");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;
        if !status.is_success() {
            let message = body["error"]["message"]
                .as_str()
                .unwrap_or_else(|| status.as_str());
            return Err(GenerationError::Provider(message.to_string()));
        }

        Self::parse_completion(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_chat_completion() {
        let body = json!({
            "choices": [{"message": {"role": "assistant", "content": "A fine plan."}}]
        });
        assert_eq!(
            OpenAiGenerator::parse_completion(&body).unwrap(),
            "A fine plan."
        );
    }

    #[test]
    fn surfaces_error_payloads() {
        let body = json!({
            "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}
        });
        let err = OpenAiGenerator::parse_completion(&body).unwrap_err();
        assert!(matches!(err, GenerationError::Provider(msg) if msg.contains("API key")));
    }

    #[test]
    fn missing_content_is_malformed() {
        let body = json!({"choices": []});
        let err = OpenAiGenerator::parse_completion(&body).unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse(_)));
    }

    #[test]
    fn builder_overrides_model_and_base_url() {
        let generator = OpenAiGenerator::new("sk-test")
            .with_model("gpt-4o")
            .with_base_url("http://localhost:8080/v1");
        assert_eq!(generator.model, "gpt-4o");
        assert_eq!(generator.base_url, "http://localhost:8080/v1");
    }
}
