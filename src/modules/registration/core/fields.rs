use serde::{Deserialize, Serialize};

/// The fixed set of inputs on the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Phone,
    Email,
    TeamName,
    UtrNumber,
}

impl Field {
    /// Form order. Validation and snapshots iterate in this order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Phone,
        Field::Email,
        Field::TeamName,
        Field::UtrNumber,
    ];

    /// Element id of the input on the hosting page.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::TeamName => "teamName",
            Field::UtrNumber => "utrNumber",
        }
    }

    /// Element id of the inline error slot paired with the input.
    pub fn error_slot_id(self) -> String {
        format!("{}Error", self.id())
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Phone => "Phone Number",
            Field::Email => "Email Address",
            Field::TeamName => "Team Name",
            Field::UtrNumber => "UTR Number",
        }
    }

    pub fn from_id(id: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.id() == id)
    }
}
