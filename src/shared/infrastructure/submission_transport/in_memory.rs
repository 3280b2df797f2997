use crate::shared::infrastructure::submission_transport::{SubmissionTransport, TransportError};
use serde_json::Value as Json;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct SentRequest {
    pub endpoint: String,
    pub body: Json,
}

/// Records every post instead of sending it. Used by tests and by the shell
/// when no endpoint is configured.
#[derive(Debug, Default)]
pub struct InMemoryTransport {
    sent: Mutex<Vec<SentRequest>>,
    is_offline: bool,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn sent(&self) -> Vec<SentRequest> {
        self.sent.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl SubmissionTransport for InMemoryTransport {
    async fn post_json(&self, endpoint: &str, body: &Json) -> Result<(), TransportError> {
        if self.is_offline {
            return Err(TransportError::Network("Transport offline".into()));
        }
        self.sent.lock().await.push(SentRequest {
            endpoint: endpoint.to_string(),
            body: body.clone(),
        });
        Ok(())
    }
}
