//! HttpPersonalizationBackend - REST client for the personalization service.
//!
//! Talks to two endpoints:
//! - `POST {base}/event` with the JSON event body
//! - `GET {base}/suggest/{session_id}` returning `{ "suggestions": [...] }`

use async_trait::async_trait;
use learnos_core::backend::PersonalizationBackend;
use learnos_core::config::BackendConfig;
use learnos_core::error::{LearnOsError, Result};
use learnos_core::event::Event;
use learnos_core::session::SessionId;
use learnos_core::suggestion::SuggestionList;
use reqwest::{Client, Response};

use crate::dto::parse_suggest_body;

/// Backend implementation that talks to the personalization HTTP API.
#[derive(Clone)]
pub struct HttpPersonalizationBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpPersonalizationBackend {
    /// Creates a client for the configured base URL and timeout.
    pub fn new(config: BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|err| LearnOsError::config(format!("Failed to build HTTP client: {err}")))?;
        Ok(Self { client, config })
    }

    fn ensure_success(response: &Response, endpoint: &str) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(LearnOsError::HttpStatus {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            })
        }
    }
}

fn map_transport(err: reqwest::Error, endpoint: &str) -> LearnOsError {
    let kind = if err.is_timeout() {
        "timed out"
    } else if err.is_connect() {
        "connection failed"
    } else {
        "request failed"
    };
    LearnOsError::transport(format!("{endpoint} {kind}: {err}"))
}

#[async_trait]
impl PersonalizationBackend for HttpPersonalizationBackend {
    async fn post_event(&self, event: &Event) -> Result<()> {
        let endpoint = "/event";
        tracing::debug!(app = %event.app, kind = %event.kind, "posting event");

        let response = self
            .client
            .post(self.config.event_url())
            .json(event)
            .send()
            .await
            .map_err(|err| map_transport(err, endpoint))?;

        Self::ensure_success(&response, endpoint)
    }

    async fn fetch_suggestions(&self, session_id: &SessionId) -> Result<Option<SuggestionList>> {
        let endpoint = format!("/suggest/{session_id}");

        let response = self
            .client
            .get(self.config.suggest_url(session_id))
            .send()
            .await
            .map_err(|err| map_transport(err, &endpoint))?;

        Self::ensure_success(&response, &endpoint)?;

        let body = response
            .text()
            .await
            .map_err(|err| map_transport(err, &endpoint))?;

        parse_suggest_body(&body)
    }
}
