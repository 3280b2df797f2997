use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// A delayed task running on the tokio runtime. Dropping the handle leaves the
/// task running; call `cancel` to stop it before it fires.
#[derive(Debug)]
pub struct ScheduledTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    pub fn after<F>(delay: Duration, task: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        // Deadline is fixed here, not when the spawned task is first polled.
        let sleep = tokio::time::sleep(delay);
        let handle = tokio::spawn(async move {
            sleep.await;
            task.await;
        });
        Self { handle }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
