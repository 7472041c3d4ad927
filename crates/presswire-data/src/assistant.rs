//! Conversational sales assistant client.

use crate::error::FetchError;
use presswire_commerce::ids::PublicationId;
use serde::{Deserialize, Serialize};

/// Who said a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Visitor,
    Assistant,
}

/// One turn of the conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatTurn {
    pub speaker: Speaker,
    pub text: String,
}

impl ChatTurn {
    pub fn visitor(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Visitor,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }
}

/// The assistant's reply: free text plus optional recommendations.
///
/// Recommendations are taken at face value; resolving them against the
/// catalog (and dropping ids that no longer exist) is the caller's job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssistantReply {
    pub text: String,
    #[serde(default)]
    pub recommended: Vec<PublicationId>,
}

#[derive(Debug, Serialize)]
struct AssistantRequest<'a> {
    message: &'a str,
    history: &'a [ChatTurn],
}

/// Client for the hosted conversational-assistant API.
pub struct SalesAssistant {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl SalesAssistant {
    /// Create a client for the given chat endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Send the visitor's message with prior turns, get the reply.
    ///
    /// Unlike the catalog read path this propagates errors: the chat UI
    /// surfaces a retryable notification rather than fabricating a reply.
    pub async fn reply(
        &self,
        message: &str,
        history: &[ChatTurn],
    ) -> Result<AssistantReply, FetchError> {
        let mut request = self
            .http
            .post(&self.endpoint)
            .json(&AssistantRequest { message, history });
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {key}"));
        }

        let response = request
            .send()
            .await?
            .error_for_status()
            .map_err(|e| FetchError::Request(e.to_string()))?;
        let reply: AssistantReply = response.json().await?;

        if reply.text.is_empty() {
            return Err(FetchError::Malformed("empty reply text".to_string()));
        }
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_reply_with_recommendations() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"{"text":"Forbes fits a fintech launch.","recommended":["pub-forbes"]}"#);
            })
            .await;

        let assistant = SalesAssistant::new(server.url("/chat"));
        let reply = assistant
            .reply("Where should I announce a fintech launch?", &[])
            .await
            .unwrap();
        assert_eq!(reply.text, "Forbes fits a fintech launch.");
        assert_eq!(reply.recommended, vec![PublicationId::new("pub-forbes")]);
    }

    #[tokio::test]
    async fn test_reply_without_recommendations() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"{"text":"Tell me more about your launch."}"#);
            })
            .await;

        let assistant = SalesAssistant::new(server.url("/chat"));
        let reply = assistant.reply("Hi", &[]).await.unwrap();
        assert!(reply.recommended.is_empty());
    }

    #[tokio::test]
    async fn test_empty_reply_is_malformed() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"{"text":""}"#);
            })
            .await;

        let assistant = SalesAssistant::new(server.url("/chat"));
        let result = assistant.reply("Hi", &[]).await;
        assert!(matches!(result, Err(FetchError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_http_error_propagates() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat");
                then.status(429);
            })
            .await;

        let assistant = SalesAssistant::new(server.url("/chat"));
        assert!(assistant.reply("Hi", &[]).await.is_err());
    }
}
