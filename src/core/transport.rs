//! The chat backend seam.
//!
//! Every failure on the way to a usable response (connect errors, timeouts,
//! non-2xx statuses, undecodable bodies) collapses into
//! [`TransportError::Unreachable`]; callers only ever need to know that no
//! answer is coming.

use crate::api::{ChatRequest, ChatResponse};
use crate::core::constants::CHAT_ENDPOINT;
use crate::utils::url::construct_api_url;
use async_trait::async_trait;
use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    Unreachable(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Unreachable(detail) => {
                write!(f, "chat backend unreachable: {detail}")
            }
        }
    }
}

impl StdError for TransportError {}

#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn ask(&self, prompt: &str) -> Result<ChatResponse, TransportError>;
}

/// `POST {base_url}/chat` with a `{"prompt": ...}` body.
pub struct HttpChatTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpChatTransport {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: construct_api_url(base_url, CHAT_ENDPOINT),
        }
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::new(client, base_url))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn unreachable_error(detail: impl fmt::Display) -> TransportError {
    TransportError::Unreachable(detail.to_string())
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn ask(&self, prompt: &str) -> Result<ChatResponse, TransportError> {
        debug!(endpoint = %self.endpoint, "sending chat prompt");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest { prompt })
            .send()
            .await
            .map_err(unreachable_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(unreachable_error(format_args!("HTTP {status}")));
        }

        let body = response.text().await.map_err(unreachable_error)?;
        serde_json::from_str(&body)
            .map_err(|err| unreachable_error(format_args!("malformed response body: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_utils::{spawn_mock_endpoint, MockResponse};

    #[tokio::test]
    async fn posts_prompt_as_json() {
        let (base_url, server) = spawn_mock_endpoint(vec![MockResponse::json(
            200,
            r#"{"answer":"Hi there","sources":[{"source":"/docs/guide.pdf","content":"..."}]}"#,
        )])
        .await;
        let transport = HttpChatTransport::new(reqwest::Client::new(), &base_url);

        let response = transport.ask("Hello").await.expect("request should succeed");
        assert_eq!(response.answer.as_deref(), Some("Hi there"));

        let requests = server.await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].request_line, "POST /chat HTTP/1.1");
        assert_eq!(
            requests[0].header("content-type").as_deref(),
            Some("application/json")
        );
        assert_eq!(requests[0].body, r#"{"prompt":"Hello"}"#);
    }

    #[tokio::test]
    async fn error_status_is_unreachable() {
        let (base_url, server) =
            spawn_mock_endpoint(vec![MockResponse::json(503, r#"{"answer":"busy"}"#)]).await;
        let transport = HttpChatTransport::new(reqwest::Client::new(), &base_url);

        let err = transport.ask("Hello").await.unwrap_err();
        assert!(err.to_string().contains("503"), "{err}");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn malformed_body_is_unreachable() {
        let (base_url, server) =
            spawn_mock_endpoint(vec![MockResponse::json(200, "<html>oops</html>")]).await;
        let transport = HttpChatTransport::new(reqwest::Client::new(), &base_url);

        assert!(matches!(
            transport.ask("Hello").await,
            Err(TransportError::Unreachable(_))
        ));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn refused_connection_is_unreachable() {
        let base_url = crate::utils::test_utils::closed_port_url().await;
        let transport = HttpChatTransport::with_timeout(&base_url, Duration::from_secs(5))
            .expect("client should build");

        assert!(transport.ask("Hello").await.is_err());
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        let transport = HttpChatTransport::new(reqwest::Client::new(), "http://localhost:8000/");
        assert_eq!(transport.endpoint(), "http://localhost:8000/chat");
    }
}
