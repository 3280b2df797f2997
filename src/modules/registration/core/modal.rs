use crate::modules::registration::core::form::RegistrationForm;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Where a click on the modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickTarget {
    Overlay,
    Content,
}

/// Modal dialog hosting the registration form.
///
/// `show` is the visual marker the page toggles; `scroll_locked` stands in for
/// the body overflow style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalController {
    state: ModalState,
    scroll_locked: bool,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    pub fn shows_marker(&self) -> bool {
        self.is_open()
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn open(&mut self) {
        self.state = ModalState::Open;
        self.scroll_locked = true;
    }

    /// Closing always wipes the form, even when the modal is already closed.
    pub fn close(&mut self, form: &mut RegistrationForm) {
        self.state = ModalState::Closed;
        self.scroll_locked = false;
        form.reset();
        form.clear_all_errors();
    }

    /// Returns true when the click closed the modal.
    pub fn overlay_click(&mut self, target: ClickTarget, form: &mut RegistrationForm) -> bool {
        match target {
            ClickTarget::Overlay => {
                self.close(form);
                true
            }
            ClickTarget::Content => false,
        }
    }

    /// Returns true when the key closed the modal.
    pub fn key_down(&mut self, key: &str, form: &mut RegistrationForm) -> bool {
        if key == "Escape" && self.is_open() {
            self.close(form);
            return true;
        }
        false
    }
}
