//! AI symptom analysis client
//!
//! Exactly one chat-completion request per user action against an
//! OpenRouter-style endpoint, with a fixed token budget and timeout. The
//! model's text comes back verbatim; every failure is reduced to a
//! user-displayable string. No conversation state, no streaming, no retry.

use crate::config::AnalysisConf;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

const SYSTEM_PROMPT: &str = "You are a helpful and concise assistant.";
const NO_RESPONSE_FALLBACK: &str = "No response from AI.";
const UNAVAILABLE_PREFIX: &str = "AI is not available right now. Error: ";

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error("unreadable response: {0}")]
    Payload(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    parameters: ChatParameters,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatParameters {
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

pub struct SymptomAnalyzer {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    max_tokens: u32,
    referer: String,
    title: String,
    api_key: String,
}

impl SymptomAnalyzer {
    /// The client must carry the request timeout; this type adds none.
    pub fn new(http: reqwest::Client, conf: &AnalysisConf, api_key: String) -> Self {
        Self {
            http,
            endpoint: conf.endpoint.clone(),
            model: conf.model.clone(),
            max_tokens: conf.max_tokens,
            referer: conf.referer.clone(),
            title: conf.title.clone(),
            api_key,
        }
    }

    /// Single attempt, user-facing: any failure becomes a displayable
    /// string rather than an error for the caller to handle.
    pub async fn analyze(&self, symptoms: &str) -> String {
        match self.request_analysis(symptoms).await {
            Ok(text) => text,
            Err(e) => {
                error!("chat endpoint error: {e}");
                format!("{UNAVAILABLE_PREFIX}{e}")
            }
        }
    }

    /// The underlying fallible request, kept separate so failure modes
    /// stay distinguishable in tests.
    pub async fn request_analysis(&self, symptoms: &str) -> Result<String, AnalysisError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: symptoms,
                },
            ],
            parameters: ChatParameters {
                max_tokens: self.max_tokens,
            },
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.title)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            // Prefer the API's own error message over the bare status.
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .ok()
                .and_then(|b| b.error)
                .map(|e| e.message)
                .unwrap_or_else(|| status.to_string());
            return Err(AnalysisError::Api { status, message });
        }

        let parsed: ChatResponse = serde_json::from_str(&text)?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .unwrap_or_else(|| NO_RESPONSE_FALLBACK.to_string());

        info!("analysis response length: {}", content.len());
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthmate_devkit::{SamplePayloads, StubRoute, StubServer};
    use serde_json::{json, Value};
    use std::time::Duration;

    fn analyzer_for(stub: &StubServer, timeout: Duration) -> SymptomAnalyzer {
        let http = reqwest::Client::builder().timeout(timeout).build().unwrap();
        let conf = AnalysisConf {
            endpoint: stub.url("/api/v1/chat/completions"),
            ..AnalysisConf::default()
        };
        SymptomAnalyzer::new(http, &conf, "test-key".into())
    }

    #[tokio::test]
    async fn success_returns_model_text_verbatim() {
        let stub = StubServer::spawn(vec![StubRoute::json(
            "/api/v1/chat/completions",
            200,
            SamplePayloads::chat_completion("Rest, fluids, and see a doctor if it persists."),
        )])
        .await
        .unwrap();

        let analyzer = analyzer_for(&stub, Duration::from_secs(5));
        let text = analyzer.analyze("headache and mild fever").await;
        assert_eq!(text, "Rest, fluids, and see a doctor if it persists.");
    }

    #[tokio::test]
    async fn request_carries_auth_model_and_both_messages() {
        let stub = StubServer::spawn(vec![StubRoute::json(
            "/api/v1/chat/completions",
            200,
            SamplePayloads::chat_completion("ok"),
        )])
        .await
        .unwrap();

        let analyzer = analyzer_for(&stub, Duration::from_secs(5));
        analyzer.analyze("sore throat").await;

        let recorded = stub.recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].header("authorization"), Some("Bearer test-key"));
        assert_eq!(recorded[0].header("http-referer"), Some("healthmate"));

        let body: Value = serde_json::from_str(&recorded[0].body).unwrap();
        assert_eq!(body["model"], "x-ai/grok-4.1-fast");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "sore throat");
        assert_eq!(body["parameters"]["max_tokens"], 150);
    }

    #[tokio::test]
    async fn api_error_message_is_surfaced_in_display_string() {
        let stub = StubServer::spawn(vec![StubRoute::json(
            "/api/v1/chat/completions",
            401,
            SamplePayloads::chat_error("Invalid API key"),
        )])
        .await
        .unwrap();

        let analyzer = analyzer_for(&stub, Duration::from_secs(5));
        let text = analyzer.analyze("dizzy").await;
        assert!(text.starts_with("AI is not available right now."));
        assert!(text.contains("Invalid API key"));
    }

    #[tokio::test]
    async fn timeout_becomes_a_display_string_not_a_panic() {
        let stub = StubServer::spawn(vec![StubRoute::json(
            "/api/v1/chat/completions",
            200,
            SamplePayloads::chat_completion("too late"),
        )
        .with_delay(Duration::from_secs(2))])
        .await
        .unwrap();

        let analyzer = analyzer_for(&stub, Duration::from_millis(200));
        let text = analyzer.analyze("cough").await;
        assert!(text.starts_with("AI is not available right now. Error: "));
    }

    #[tokio::test]
    async fn empty_choice_list_yields_placeholder() {
        let stub = StubServer::spawn(vec![StubRoute::json(
            "/api/v1/chat/completions",
            200,
            json!({"choices": []}),
        )])
        .await
        .unwrap();

        let analyzer = analyzer_for(&stub, Duration::from_secs(5));
        let text = analyzer.request_analysis("rash").await.unwrap();
        assert_eq!(text, "No response from AI.");
    }

    #[tokio::test]
    async fn wrong_shape_payload_is_a_payload_error() {
        let stub = StubServer::spawn(vec![StubRoute::json(
            "/api/v1/chat/completions",
            200,
            json!(["nonsense"]),
        )])
        .await
        .unwrap();

        let analyzer = analyzer_for(&stub, Duration::from_secs(5));
        let err = analyzer.request_analysis("rash").await.unwrap_err();
        assert!(matches!(err, AnalysisError::Payload(_)));
    }
}
