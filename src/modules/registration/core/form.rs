// Form state as the hosting page holds it.
//
// Purpose
// - Mirror the five inputs and their paired inline error slots.
//
// Responsibilities
// - Store raw, untrimmed input values exactly as typed.
// - Show and hide error slots. Validation decides what to show, the form only stores it.

use crate::modules::registration::core::fields::Field;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorSlot {
    pub visible: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    values: BTreeMap<Field, String>,
    errors: BTreeMap<Field, ErrorSlot>,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            values: Field::ALL.into_iter().map(|f| (f, String::new())).collect(),
            errors: Field::ALL
                .into_iter()
                .map(|f| (f, ErrorSlot::default()))
                .collect(),
        }
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn values(&self) -> &BTreeMap<Field, String> {
        &self.values
    }

    /// Empties every input. Error slots are left alone.
    pub fn reset(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
    }

    pub fn show_error(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(
            field,
            ErrorSlot {
                visible: true,
                message: message.into(),
            },
        );
    }

    pub fn clear_error(&mut self, field: Field) {
        self.errors.insert(field, ErrorSlot::default());
    }

    pub fn clear_all_errors(&mut self) {
        for slot in self.errors.values_mut() {
            *slot = ErrorSlot::default();
        }
    }

    pub fn error(&self, field: Field) -> Option<&ErrorSlot> {
        self.errors.get(&field).filter(|slot| slot.visible)
    }

    pub fn visible_errors(&self) -> BTreeMap<Field, String> {
        self.errors
            .iter()
            .filter(|(_, slot)| slot.visible)
            .map(|(field, slot)| (*field, slot.message.clone()))
            .collect()
    }

    pub fn is_blank(&self) -> bool {
        self.values.values().all(String::is_empty)
    }
}
