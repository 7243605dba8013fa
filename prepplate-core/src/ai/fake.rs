//! Fake AI client for testing.
//!
//! Returns deterministic responses based on prompt matching, so tests run
//! without network access or API costs.

use async_trait::async_trait;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::client::{AiClient, AiError};
use super::types::{ChatRequest, ChatResponse, Usage};

/// A fake AI client for testing.
///
/// Responses are matched by checking if any message contains a registered
/// substring. An injected error takes precedence over every match; if
/// nothing matches, the default response is returned or the call fails.
#[derive(Debug, Default)]
pub struct FakeClient {
    /// (prompt substring, response) pairs, checked in registration order.
    responses: RwLock<Vec<(String, String)>>,
    default_response: Option<String>,
    error: Option<AiError>,
    calls: AtomicUsize,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client that answers prompts containing `prompt_contains` with `response`.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let client = Self::new();
        client.add_response(prompt_contains, response);
        client
    }

    /// A client that answers every prompt with `response`.
    pub fn with_default_response(response: &str) -> Self {
        Self {
            default_response: Some(response.to_string()),
            ..Self::new()
        }
    }

    /// A client whose every call fails with `error`.
    pub fn with_error(error: AiError) -> Self {
        Self {
            error: Some(error),
            ..Self::new()
        }
    }

    /// Register a response for prompts containing a specific substring.
    pub fn add_response(&self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .push((prompt_contains.to_string(), response.to_string()));
    }

    /// How many times `complete` has been invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AiClient for FakeClient {
    async fn complete(
        &self,
        _prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        let prompt: String = request
            .messages
            .iter()
            .map(|m| m.content.to_lowercase())
            .collect::<Vec<_>>()
            .join("\n");

        let responses = self.responses.read().unwrap();
        for (pattern, response) in responses.iter() {
            if prompt.contains(&pattern.to_lowercase()) {
                return Ok(ChatResponse {
                    content: response.clone(),
                    usage: Usage::default(),
                });
            }
        }

        match &self.default_response {
            Some(response) => Ok(ChatResponse {
                content: response.clone(),
                usage: Usage::default(),
            }),
            None => Err(AiError::Api(
                "FakeClient: no response configured for prompt".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::types::ChatMessage;

    fn request(content: &str) -> ChatRequest {
        ChatRequest {
            messages: vec![ChatMessage::user(content)],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_substring_matching_is_case_insensitive() {
        let client = FakeClient::with_response("HELLO", "world");
        let response = client.complete("test", request("say hello")).await.unwrap();
        assert_eq!(response.content, "world");
    }

    #[tokio::test]
    async fn test_no_match_without_default_is_an_error() {
        let client = FakeClient::new();
        assert!(client.complete("test", request("anything")).await.is_err());
    }

    #[tokio::test]
    async fn test_injected_error_wins_and_calls_are_counted() {
        let client = FakeClient::with_error(AiError::Api("boom".to_string()));
        assert_eq!(client.call_count(), 0);

        let result = client.complete("test", request("anything")).await;
        assert!(matches!(result, Err(AiError::Api(m)) if m == "boom"));
        assert_eq!(client.call_count(), 1);
    }
}
