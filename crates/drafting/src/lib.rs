//! # Condoboard Drafting Crate
//!
//! Client for the external AI collaborator that drafts notice bodies.
//! This is the only network call in the system, and it never fails past
//! its boundary: every error is mapped to a fixed, user-displayable
//! fallback string.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use condoboard_config::{AppConfig, DraftingConfig};

/// Shown when no API key is configured
pub const MISSING_KEY_FALLBACK: &str = "Erro: Chave de API não configurada.";
/// Shown when the provider cannot be reached or answers with an error
pub const CONNECTION_FALLBACK: &str = "Erro ao conectar com a IA. Tente novamente.";
/// Shown when the provider answers without usable text
pub const EMPTY_COMPLETION_FALLBACK: &str = "Não foi possível gerar o texto.";

#[derive(Debug, Error)]
pub enum DraftingError {
    #[error("missing drafting API key")]
    ApiKeyMissing,
    #[error("provider http request failed: {0}")]
    ProviderHttp(#[from] reqwest::Error),
    #[error("invalid provider response: {0}")]
    ProviderResponse(#[from] serde_json::Error),
    #[error("provider returned an empty completion")]
    EmptyCompletion,
}

/// Drafts condominium notices through an OpenAI-compatible
/// chat-completions endpoint.
pub struct NoticeDrafter {
    config: DraftingConfig,
}

impl NoticeDrafter {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            config: config.drafting.clone(),
        }
    }

    /// Draft a notice body about `topic` in the given `tone`.
    ///
    /// Always returns displayable text. Failures degrade to one of the
    /// fixed fallback strings; nothing is retried.
    pub async fn draft_notice(&self, topic: &str, tone: &str) -> String {
        match self.request_completion(topic, tone).await {
            Ok(text) => text,
            Err(DraftingError::ApiKeyMissing) => {
                warn!("drafting request skipped, no API key configured");
                MISSING_KEY_FALLBACK.to_string()
            }
            Err(DraftingError::EmptyCompletion) => {
                warn!("drafting provider returned no text");
                EMPTY_COMPLETION_FALLBACK.to_string()
            }
            Err(e) => {
                warn!(error = %e, "drafting request failed");
                CONNECTION_FALLBACK.to_string()
            }
        }
    }

    async fn request_completion(&self, topic: &str, tone: &str) -> Result<String, DraftingError> {
        let api_key = self.resolved_api_key()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(self.config.request_timeout_seconds))
            .build()?;

        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        debug!(model = %self.config.model, "requesting notice draft");

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessagePayload {
                role: "user",
                content: build_prompt(topic, tone),
            }],
        };

        let response = client
            .post(url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&body)?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(DraftingError::EmptyCompletion)
    }

    fn resolved_api_key(&self) -> Result<String, DraftingError> {
        self.config
            .api_key
            .clone()
            .or_else(|| std::env::var("DRAFTING_API_KEY").ok())
            .filter(|key| !key.trim().is_empty())
            .ok_or(DraftingError::ApiKeyMissing)
    }
}

fn build_prompt(topic: &str, tone: &str) -> String {
    format!(
        "Escreva um comunicado de condomínio curto, profissional e claro sobre o seguinte tópico: \"{}\". O tom deve ser: {}. Retorne apenas o texto do corpo do comunicado, sem cabeçalhos markdown.",
        topic, tone
    )
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessagePayload>,
}

#[derive(Debug, Serialize)]
struct ChatMessagePayload {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageBody,
}

#[derive(Debug, Deserialize)]
struct ChatMessageBody {
    #[serde(default)]
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn config_without_key() -> AppConfig {
        let mut config = AppConfig::default();
        config.drafting.api_key = None;
        config
    }

    #[test]
    fn test_prompt_carries_topic_and_tone() {
        let prompt = build_prompt("Manutenção do elevador", "formal");
        assert!(prompt.contains("Manutenção do elevador"));
        assert!(prompt.contains("formal"));
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_key_yields_fixed_fallback() {
        std::env::remove_var("DRAFTING_API_KEY");

        let drafter = NoticeDrafter::new(&config_without_key());
        let text = drafter.draft_notice("Festa junina", "amigável").await;

        assert_eq!(text, MISSING_KEY_FALLBACK);
    }

    #[tokio::test]
    #[serial]
    async fn test_unreachable_provider_yields_connection_fallback() {
        std::env::remove_var("DRAFTING_API_KEY");

        let mut config = AppConfig::default();
        config.drafting.api_key = Some("test-key".to_string());
        // Reserved port with nothing listening
        config.drafting.base_url = "http://127.0.0.1:9/api/v1".to_string();
        config.drafting.request_timeout_seconds = 1;

        let drafter = NoticeDrafter::new(&config);
        let text = drafter.draft_notice("Obras na fachada", "formal").await;

        assert_eq!(text, CONNECTION_FALLBACK);
    }
}
