// Composition root for the registration page.
//
// Responsibilities
// - Read config from environment.
// - Pick the submission transport: HTTP when an endpoint is configured, in memory otherwise.
// - Wire the workflow into the HTTP router that stands in for the page.

pub mod http;
pub mod state;

use crate::modules::registration::workflow::RegistrationWorkflow;
use crate::shared::config::RegistrationConfig;
use crate::shared::infrastructure::submission_transport::SubmissionTransport;
use crate::shared::infrastructure::submission_transport::http::HttpTransport;
use crate::shared::infrastructure::submission_transport::in_memory::InMemoryTransport;
use state::AppState;
use std::sync::Arc;

pub fn build_state(config: RegistrationConfig) -> AppState {
    let transport: Arc<dyn SubmissionTransport> = if config.dispatch_endpoint().is_some() {
        Arc::new(HttpTransport::default().with_timeout(config.dispatch_timeout))
    } else {
        tracing::warn!("REGISTRATION_ENDPOINT not set, registrations will not be sent anywhere");
        Arc::new(InMemoryTransport::new())
    };
    AppState {
        workflow: Arc::new(RegistrationWorkflow::new(config, transport)),
    }
}
