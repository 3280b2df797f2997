use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::modules::registration::adapters::outbound::dispatch::DispatchOutcome;
use crate::modules::registration::core::fields::Field;
use crate::modules::registration::use_cases::submit_registration::handler::SubmitOutcome;
use crate::shell::state::AppState;

/// Field values as the page would post them. Missing fields count as blank.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitRegistrationBody {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub team_name: String,
    pub utr_number: String,
}

impl SubmitRegistrationBody {
    fn into_fields(self) -> [(Field, String); 5] {
        [
            (Field::Name, self.name),
            (Field::Phone, self.phone),
            (Field::Email, self.email),
            (Field::TeamName, self.team_name),
            (Field::UtrNumber, self.utr_number),
        ]
    }
}

#[derive(Serialize)]
pub struct SubmittedResponse {
    pub dispatch: &'static str,
    pub toast: Uuid,
}

#[derive(Serialize)]
pub struct InvalidResponse {
    pub errors: BTreeMap<Field, String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SubmitRegistrationBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    for (field, value) in body.into_fields() {
        state.workflow.input(field, value).await;
    }

    // Spawned so the submission finishes even if the caller hangs up.
    let workflow = state.workflow.clone();
    let outcome = match tokio::spawn(async move { workflow.submit().await }).await {
        Ok(outcome) => outcome,
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };

    match outcome {
        SubmitOutcome::Submitted { dispatch, toast } => {
            let dispatch = match dispatch {
                DispatchOutcome::Sent => "sent",
                DispatchOutcome::Skipped => "skipped",
                DispatchOutcome::Failed(_) => "failed",
            };
            (
                StatusCode::ACCEPTED,
                Json(SubmittedResponse { dispatch, toast }),
            )
                .into_response()
        }
        SubmitOutcome::Invalid(report) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(InvalidResponse {
                errors: report
                    .errors()
                    .iter()
                    .map(|(field, error)| (*field, error.to_string()))
                    .collect(),
            }),
        )
            .into_response(),
        SubmitOutcome::AlreadySubmitting => StatusCode::CONFLICT.into_response(),
    }
}
