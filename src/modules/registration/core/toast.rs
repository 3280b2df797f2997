// Transient notifications stacked on top of the page.
//
// Purpose
// - Show feedback without blocking the workflow.
//
// Responsibilities
// - Stack every toast independently; nothing is deduplicated.
// - Drive each toast through Visible -> Leaving -> removed on its own timers.
// - Tolerate toasts that were dismissed before their timer fired.

use crate::shared::infrastructure::scheduler::ScheduledTask;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

pub const SUCCESS_TITLE: &str = "Registration Successful!";
pub const SUCCESS_MESSAGE: &str = "Your tournament registration has been submitted successfully.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastPhase {
    Visible,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub phase: ToastPhase,
}

#[derive(Debug, Clone, Copy)]
pub struct ToastTimings {
    pub display: Duration,
    pub exit: Duration,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            display: Duration::from_millis(4_000),
            exit: Duration::from_millis(300),
        }
    }
}

#[derive(Debug, Default)]
struct ToastStack {
    toasts: Vec<Toast>,
    timers: HashMap<Uuid, ScheduledTask>,
}

#[derive(Debug, Clone, Default)]
pub struct ToastNotifier {
    timings: ToastTimings,
    stack: Arc<Mutex<ToastStack>>,
}

impl ToastNotifier {
    pub fn new(timings: ToastTimings) -> Self {
        Self {
            timings,
            stack: Arc::default(),
        }
    }

    pub async fn show(&self, title: impl Into<String>, message: impl Into<String>) -> Uuid {
        let toast = Toast {
            id: Uuid::now_v7(),
            title: title.into(),
            message: message.into(),
            phase: ToastPhase::Visible,
        };
        let id = toast.id;

        let stack = self.stack.clone();
        let exit = self.timings.exit;
        let timer = ScheduledTask::after(self.timings.display, async move {
            mark_leaving(&stack, id).await;
            tokio::time::sleep(exit).await;
            remove_if_present(&stack, id).await;
        });

        let mut guard = self.stack.lock().await;
        guard.toasts.push(toast);
        guard.timers.insert(id, timer);
        debug!(%id, stacked = guard.toasts.len(), "toast shown");
        id
    }

    pub async fn show_success(&self) -> Uuid {
        self.show(SUCCESS_TITLE, SUCCESS_MESSAGE).await
    }

    /// Removes a toast ahead of its timer. Returns false if it was already gone.
    pub async fn dismiss(&self, id: Uuid) -> bool {
        let mut guard = self.stack.lock().await;
        if let Some(timer) = guard.timers.remove(&id) {
            timer.cancel();
        }
        let before = guard.toasts.len();
        guard.toasts.retain(|toast| toast.id != id);
        before != guard.toasts.len()
    }

    pub async fn toasts(&self) -> Vec<Toast> {
        self.stack.lock().await.toasts.clone()
    }
}

async fn mark_leaving(stack: &Mutex<ToastStack>, id: Uuid) {
    let mut guard = stack.lock().await;
    if let Some(toast) = guard.toasts.iter_mut().find(|toast| toast.id == id) {
        toast.phase = ToastPhase::Leaving;
    }
}

async fn remove_if_present(stack: &Mutex<ToastStack>, id: Uuid) {
    let mut guard = stack.lock().await;
    guard.timers.remove(&id);
    if guard.toasts.iter().any(|toast| toast.id == id) {
        guard.toasts.retain(|toast| toast.id != id);
        debug!(%id, "toast removed");
    }
}

#[cfg(test)]
mod toast_notifier_tests {
    use super::*;
    use crate::tests::fixtures::time::settle;
    use rstest::{fixture, rstest};
    use tokio::time::advance;

    #[fixture]
    fn notifier() -> ToastNotifier {
        ToastNotifier::new(ToastTimings::default())
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn it_should_show_the_toast_immediately(notifier: ToastNotifier) {
        let id = notifier.show_success().await;
        let toasts = notifier.toasts().await;
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].id, id);
        assert_eq!(toasts[0].title, SUCCESS_TITLE);
        assert_eq!(toasts[0].phase, ToastPhase::Visible);
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn it_should_leave_after_four_seconds_and_vanish_after_the_exit(
        notifier: ToastNotifier,
    ) {
        notifier.show_success().await;

        advance(Duration::from_millis(3_999)).await;
        settle().await;
        assert_eq!(notifier.toasts().await[0].phase, ToastPhase::Visible);

        advance(Duration::from_millis(1)).await;
        settle().await;
        assert_eq!(notifier.toasts().await[0].phase, ToastPhase::Leaving);

        advance(Duration::from_millis(299)).await;
        settle().await;
        assert_eq!(notifier.toasts().await.len(), 1);

        advance(Duration::from_millis(1)).await;
        settle().await;
        assert!(notifier.toasts().await.is_empty());
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn it_should_stack_toasts_without_deduplicating(notifier: ToastNotifier) {
        let first = notifier.show_success().await;
        let second = notifier.show_success().await;
        let toasts = notifier.toasts().await;
        assert_eq!(toasts.len(), 2);
        assert_ne!(first, second);
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn it_should_survive_a_toast_dismissed_before_its_timer(notifier: ToastNotifier) {
        let dismissed = notifier.show_success().await;
        let kept = notifier.show("Heads up", "Still here").await;

        assert!(notifier.dismiss(dismissed).await);
        assert!(!notifier.dismiss(dismissed).await);

        advance(Duration::from_millis(4_000)).await;
        settle().await;
        let toasts = notifier.toasts().await;
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].id, kept);
        assert_eq!(toasts[0].phase, ToastPhase::Leaving);
    }
}
