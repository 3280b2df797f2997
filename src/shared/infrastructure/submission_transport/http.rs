use crate::shared::infrastructure::submission_transport::{SubmissionTransport, TransportError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value as Json;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Posts over HTTP and throws the response away unread. Apps Script web apps
/// only accept cross-origin posts in opaque mode, so status and body are
/// never available to callers.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

impl HttpTransport {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Upper bound on a single post, connect included. Hitting it is reported
    /// as a network error like any other failed send.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl SubmissionTransport for HttpTransport {
    async fn post_json(&self, endpoint: &str, body: &Json) -> Result<(), TransportError> {
        let response = self
            .client
            .post(endpoint)
            .timeout(self.timeout)
            .json(body)
            .send()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;

        debug!(endpoint, "registration posted, response discarded");
        drop(response);
        Ok(())
    }
}
