// Port for the one-way POST that carries a registration to the spreadsheet.
//
// Boundaries
// - Implementations never hand back the response. A returned Ok only means the
//   request left the process, not that the remote write succeeded.

use async_trait::async_trait;
use serde_json::Value as Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
}

#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn post_json(&self, endpoint: &str, body: &Json) -> Result<(), TransportError>;
}

pub mod http;
pub mod in_memory;
