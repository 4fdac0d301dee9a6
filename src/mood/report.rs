//! Saving a finished check-in to the site backend.

use crate::api::MoodSaveRequest;
use crate::core::constants::MOOD_EVALUATE_ENDPOINT;
use crate::mood::questions::AnswerVector;
use crate::utils::url::construct_api_url;
use async_trait::async_trait;
use std::error::Error as StdError;
use std::fmt;
use tracing::warn;

#[derive(Debug)]
pub enum ReportError {
    /// The request never produced a response.
    Request(reqwest::Error),
    /// The backend answered with a non-success status.
    Status(reqwest::StatusCode),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Request(source) => write!(f, "Failed to save mood result: {source}"),
            ReportError::Status(status) => write!(f, "Failed to save mood result: HTTP {status}"),
        }
    }
}

impl StdError for ReportError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ReportError::Request(source) => Some(source),
            ReportError::Status(_) => None,
        }
    }
}

#[async_trait]
pub trait MoodReporter: Send + Sync {
    async fn save(&self, answers: &AnswerVector) -> Result<(), ReportError>;
}

pub struct HttpMoodReporter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpMoodReporter {
    pub fn new(client: reqwest::Client, site_base_url: &str) -> Self {
        Self {
            client,
            endpoint: construct_api_url(site_base_url, MOOD_EVALUATE_ENDPOINT),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl MoodReporter for HttpMoodReporter {
    async fn save(&self, answers: &AnswerVector) -> Result<(), ReportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&MoodSaveRequest { answers: *answers })
            .send()
            .await
            .map_err(ReportError::Request)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ReportError::Status(status))
        }
    }
}

/// Transient notification shown after a save attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveNotice {
    pub title: &'static str,
    pub description: &'static str,
    pub is_error: bool,
}

pub fn save_notice(outcome: &Result<(), ReportError>) -> SaveNotice {
    match outcome {
        Ok(()) => SaveNotice {
            title: "Mood result saved",
            description: "Thanks for checking in with yourself today.",
            is_error: false,
        },
        Err(err) => {
            warn!("{err}");
            SaveNotice {
                title: "Unable to save",
                description: "Please try again or reach out if the issue continues.",
                is_error: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::questions::{Severity, EMPTY_ANSWERS};
    use crate::utils::test_utils::{spawn_mock_endpoint, MockResponse};

    #[tokio::test]
    async fn posts_answers_to_the_evaluate_endpoint() {
        let (base_url, server) = spawn_mock_endpoint(vec![MockResponse::json(200, "{}")]).await;
        let reporter = HttpMoodReporter::new(reqwest::Client::new(), &format!("{base_url}/"));
        let mut answers = EMPTY_ANSWERS;
        answers[0] = Some(Severity::HIGH);

        let outcome = reporter.save(&answers).await;
        assert!(outcome.is_ok());
        assert!(!save_notice(&outcome).is_error);

        let requests = server.await.unwrap();
        assert_eq!(requests[0].request_line, "POST /api/mood/evaluate HTTP/1.1");
        let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"answers": [2, null, null, null, null, null, null, null]})
        );
    }

    #[tokio::test]
    async fn error_status_becomes_a_failure_notice() {
        let (base_url, server) =
            spawn_mock_endpoint(vec![MockResponse::json(500, r#"{"detail":"boom"}"#)]).await;
        let reporter = HttpMoodReporter::new(reqwest::Client::new(), &base_url);

        let outcome = reporter.save(&EMPTY_ANSWERS).await;
        assert!(matches!(outcome, Err(ReportError::Status(status)) if status.as_u16() == 500));

        let notice = save_notice(&outcome);
        assert!(notice.is_error);
        assert_eq!(notice.title, "Unable to save");
        server.await.unwrap();
    }
}
