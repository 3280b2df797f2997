// Snapshot of the form taken at submit time.
//
// Purpose
// - Carry the payload posted to the spreadsheet endpoint.
//
// Responsibilities
// - Trim field values and stamp the submission time.
// - Serialize with the camelCase keys the endpoint reads.

use crate::modules::registration::core::fields::Field;
use crate::modules::registration::core::form::RegistrationForm;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub team_name: String,
    pub utr_number: String,
    pub submitted_at: String,
}

impl RegistrationRecord {
    pub fn snapshot(form: &RegistrationForm, submitted_at: DateTime<Utc>) -> Self {
        let field = |f: Field| form.value(f).trim().to_string();
        Self {
            name: field(Field::Name),
            phone: field(Field::Phone),
            email: field(Field::Email),
            team_name: field(Field::TeamName),
            utr_number: field(Field::UtrNumber),
            submitted_at: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
