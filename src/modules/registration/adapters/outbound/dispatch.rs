use crate::modules::registration::core::record::RegistrationRecord;
use crate::shared::infrastructure::submission_transport::SubmissionTransport;
use tracing::{error, info, warn};

/// What happened to a dispatch attempt. Informational only: the workflow shows
/// the same feedback whichever variant comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Sent,
    Skipped,
    Failed(String),
}

/// Send a registration to the spreadsheet endpoint. Never fails: a missing
/// endpoint is logged as a warning and transport errors are logged and
/// swallowed.
pub async fn dispatch_registration<TTransport>(
    transport: &TTransport,
    endpoint: Option<&str>,
    record: &RegistrationRecord,
) -> DispatchOutcome
where
    TTransport: SubmissionTransport + ?Sized,
{
    let Some(endpoint) = endpoint else {
        warn!("registration endpoint not set, skipping dispatch");
        return DispatchOutcome::Skipped;
    };

    let body = match serde_json::to_value(record) {
        Ok(body) => body,
        Err(err) => {
            error!(error = %err, "could not encode registration");
            return DispatchOutcome::Failed(err.to_string());
        }
    };

    match transport.post_json(endpoint, &body).await {
        Ok(()) => {
            info!(endpoint, team = %record.team_name, "registration dispatched");
            DispatchOutcome::Sent
        }
        Err(err) => {
            error!(endpoint, error = %err, "error posting registration");
            DispatchOutcome::Failed(err.to_string())
        }
    }
}
