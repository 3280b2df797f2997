use crate::modules::registration::core::fields::Field;
use crate::modules::registration::core::form::RegistrationForm;
use crate::modules::registration::core::modal::{ModalController, ModalState};
use crate::modules::registration::core::toast::Toast;
use serde::Serialize;
use std::collections::BTreeMap;

pub const SUBMIT_LABEL: &str = "Submit Registration";
pub const BUSY_LABEL: &str = "⏳ Submitting...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
    #[serde(skip)]
    original_label: Option<String>,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self {
            label: SUBMIT_LABEL.to_string(),
            disabled: false,
            original_label: None,
        }
    }
}

impl SubmitButton {
    pub fn begin(&mut self) {
        let original = std::mem::replace(&mut self.label, BUSY_LABEL.to_string());
        self.original_label = Some(original);
        self.disabled = true;
    }

    pub fn restore(&mut self) {
        if let Some(original) = self.original_label.take() {
            self.label = original;
        }
        self.disabled = false;
    }
}

/// Everything on the page the workflow reads or writes.
#[derive(Debug, Clone, Default)]
pub struct RegistrationPage {
    pub form: RegistrationForm,
    pub modal: ModalController,
    pub submit_button: SubmitButton,
}

impl RegistrationPage {
    pub fn close_modal(&mut self) {
        self.modal.close(&mut self.form);
    }

    pub fn snapshot(&self, toasts: Vec<Toast>) -> PageSnapshot {
        PageSnapshot {
            modal: self.modal.state(),
            scroll_locked: self.modal.scroll_locked(),
            values: self.form.values().clone(),
            errors: self.form.visible_errors(),
            submit_button: self.submit_button.clone(),
            toasts,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot {
    pub modal: ModalState,
    pub scroll_locked: bool,
    pub values: BTreeMap<Field, String>,
    pub errors: BTreeMap<Field, String>,
    pub submit_button: SubmitButton,
    pub toasts: Vec<Toast>,
}
