use crate::modules::registration::core::fields::Field;
use crate::modules::registration::core::form::RegistrationForm;
use crate::modules::registration::workflow::RegistrationWorkflow;

pub const FILLED: [(Field, &str); 5] = [
    (Field::Name, "Ada Lovelace"),
    (Field::Phone, "+14155551234"),
    (Field::Email, "ada@example.com"),
    (Field::TeamName, "Null Pointers"),
    (Field::UtrNumber, "UTR123456789"),
];

pub fn filled_form() -> RegistrationForm {
    let mut form = RegistrationForm::new();
    for (field, value) in FILLED {
        form.set_value(field, value);
    }
    form
}

/// Types every field of `FILLED` into the workflow, as a user would.
pub async fn fill(workflow: &RegistrationWorkflow) {
    for (field, value) in FILLED {
        workflow.input(field, value).await;
    }
}
