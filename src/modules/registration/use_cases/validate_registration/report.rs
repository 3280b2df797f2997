use crate::modules::registration::core::fields::Field;
use crate::modules::registration::core::form::RegistrationForm;
use std::collections::BTreeMap;

/// Inline message shown under a field. `Display` is the user facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter the field")]
    Required,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<Field, ValidationError>,
}

impl ValidationReport {
    pub(crate) fn reject(&mut self, field: Field, error: ValidationError) {
        self.errors.insert(field, error);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    pub fn errors(&self) -> &BTreeMap<Field, ValidationError> {
        &self.errors
    }

    /// Validity of every field, in form order.
    pub fn field_validity(&self) -> BTreeMap<Field, bool> {
        Field::ALL
            .into_iter()
            .map(|field| (field, !self.errors.contains_key(&field)))
            .collect()
    }

    /// Wipes every error slot, then shows one message per failing field.
    pub fn apply_to(&self, form: &mut RegistrationForm) {
        form.clear_all_errors();
        for (field, error) in &self.errors {
            form.show_error(*field, error.to_string());
        }
    }
}
