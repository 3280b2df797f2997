// The registration component the page talks to.
//
// Responsibilities
// - Own the page state, the toast stack and the pending modal auto-close.
// - Expose one method per user interaction. Submission lives in
//   use_cases::submit_registration::handler.
//
// Concurrency
// - Page state sits behind one async mutex. It is never held across the dispatch.
// - Any path that closes the modal cancels a pending auto-close, so a stale
//   timer cannot close a modal opened after it was scheduled.

use crate::modules::registration::core::fields::Field;
use crate::modules::registration::core::modal::ClickTarget;
use crate::modules::registration::core::page::{PageSnapshot, RegistrationPage};
use crate::modules::registration::core::toast::{ToastNotifier, ToastTimings};
use crate::modules::registration::use_cases::validate_registration::report::ValidationReport;
use crate::modules::registration::use_cases::validate_registration::validate::validate;
use crate::shared::config::RegistrationConfig;
use crate::shared::infrastructure::scheduler::ScheduledTask;
use crate::shared::infrastructure::submission_transport::SubmissionTransport;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use tokio::sync::Mutex;
use tracing::debug;

pub struct RegistrationWorkflow {
    pub(crate) config: RegistrationConfig,
    pub(crate) transport: Arc<dyn SubmissionTransport>,
    pub(crate) page: Arc<Mutex<RegistrationPage>>,
    pub(crate) toasts: ToastNotifier,
    pub(crate) submitting: AtomicBool,
    pub(crate) auto_close: Mutex<Option<ScheduledTask>>,
}

impl RegistrationWorkflow {
    pub fn new(config: RegistrationConfig, transport: Arc<dyn SubmissionTransport>) -> Self {
        let toasts = ToastNotifier::new(ToastTimings {
            display: config.toast_display,
            exit: config.toast_exit,
        });
        Self {
            config,
            transport,
            page: Arc::default(),
            toasts,
            submitting: AtomicBool::new(false),
            auto_close: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &RegistrationConfig {
        &self.config
    }

    pub fn toasts(&self) -> &ToastNotifier {
        &self.toasts
    }

    /// Validate the current field values and refresh every error slot.
    pub async fn validate(&self) -> ValidationReport {
        let mut page = self.page.lock().await;
        let report = validate(page.form.values());
        report.apply_to(&mut page.form);
        report
    }

    pub async fn open(&self) {
        self.cancel_auto_close().await;
        self.page.lock().await.modal.open();
        debug!("registration modal opened");
    }

    pub async fn close(&self) {
        self.cancel_auto_close().await;
        self.page.lock().await.close_modal();
        debug!("registration modal closed");
    }

    pub async fn overlay_click(&self, target: ClickTarget) -> bool {
        let closed = {
            let mut page = self.page.lock().await;
            let RegistrationPage { form, modal, .. } = &mut *page;
            modal.overlay_click(target, form)
        };
        if closed {
            self.cancel_auto_close().await;
            debug!("registration modal closed from overlay");
        }
        closed
    }

    pub async fn key_down(&self, key: &str) -> bool {
        let closed = {
            let mut page = self.page.lock().await;
            let RegistrationPage { form, modal, .. } = &mut *page;
            modal.key_down(key, form)
        };
        if closed {
            self.cancel_auto_close().await;
            debug!(key, "registration modal closed from keyboard");
        }
        closed
    }

    /// Typing into a field hides that field's error, leaving the others alone.
    pub async fn input(&self, field: Field, value: impl Into<String>) {
        let mut page = self.page.lock().await;
        page.form.set_value(field, value);
        if page.form.error(field).is_some() {
            page.form.clear_error(field);
        }
    }

    pub async fn snapshot(&self) -> PageSnapshot {
        let toasts = self.toasts.toasts().await;
        self.page.lock().await.snapshot(toasts)
    }

    pub(crate) async fn schedule_auto_close(&self) {
        let page = self.page.clone();
        let task = ScheduledTask::after(self.config.modal_close_delay, async move {
            page.lock().await.close_modal();
            debug!("registration modal closed after submission");
        });
        if let Some(previous) = self.auto_close.lock().await.replace(task) {
            previous.cancel();
        }
    }

    async fn cancel_auto_close(&self) {
        if let Some(pending) = self.auto_close.lock().await.take() {
            pending.cancel();
        }
    }
}
