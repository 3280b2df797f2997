// Submit handler orchestrates the whole registration write flow.
//
// Sequence
// - Validate and refresh the error slots. Stop quietly when invalid.
// - Disable the submit control and show the busy label.
// - Snapshot the form into a RegistrationRecord and dispatch it.
// - Show the success toast whatever the dispatch outcome was.
// - Restore the submit control and schedule the modal auto-close.
//
// The toast does not wait for confirmation from the endpoint. The endpoint
// cannot be read back, so success is reported once the request was attempted.

use crate::modules::registration::adapters::outbound::dispatch::{
    DispatchOutcome, dispatch_registration,
};
use crate::modules::registration::core::record::RegistrationRecord;
use crate::modules::registration::use_cases::validate_registration::report::ValidationReport;
use crate::modules::registration::use_cases::validate_registration::validate::validate;
use crate::modules::registration::workflow::RegistrationWorkflow;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug)]
pub enum SubmitOutcome {
    Invalid(ValidationReport),
    AlreadySubmitting,
    Submitted {
        dispatch: DispatchOutcome,
        toast: Uuid,
    },
}

/// Clears the in-flight flag even if the submit future is dropped midway.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl RegistrationWorkflow {
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(_in_flight) = InFlight::acquire(&self.submitting) else {
            debug!("submission already in flight, ignoring submit");
            return SubmitOutcome::AlreadySubmitting;
        };

        let record = {
            let mut page = self.page.lock().await;
            let report = validate(page.form.values());
            report.apply_to(&mut page.form);
            if !report.is_valid() {
                debug!(failing = report.errors().len(), "registration rejected by validation");
                return SubmitOutcome::Invalid(report);
            }
            page.submit_button.begin();
            RegistrationRecord::snapshot(&page.form, Utc::now())
        };

        let dispatch =
            dispatch_registration(&*self.transport, self.config.dispatch_endpoint(), &record).await;
        drop(record);

        let toast = self.toasts.show_success().await;
        self.page.lock().await.submit_button.restore();
        self.schedule_auto_close().await;

        info!(?dispatch, "registration submitted");
        SubmitOutcome::Submitted { dispatch, toast }
    }
}
