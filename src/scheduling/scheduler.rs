use std::sync::Arc;
use std::time::Duration;

use tokio::{task::JoinHandle, time};
use tokio_util::sync::CancellationToken;

use super::worker::PushWorker;
use crate::delivery::ChatId;

/// Handle to a running recurring job. Dropping the handle does not stop the
/// job; call [`ScheduledJob::cancel`].
pub struct ScheduledJob {
    task_handle: JoinHandle<()>,
    cancellation_token: CancellationToken,
}

impl ScheduledJob {
    pub fn new(task_handle: JoinHandle<()>, cancellation_token: CancellationToken) -> Self {
        Self {
            task_handle,
            cancellation_token,
        }
    }

    /// Requests cancellation without waiting. No new tick starts after this
    /// returns; a tick already in flight may still finish.
    pub fn request_cancel(&self) {
        self.cancellation_token.cancel();
    }

    /// Requests cancellation and waits for the task to wind down, bounded by
    /// `timeout`.
    pub async fn cancel(self, timeout: Duration) {
        self.request_cancel();
        let cancel_with_timeout = time::timeout(timeout, self.task_handle);
        let _ = cancel_with_timeout.await;
    }
}

pub struct PushJobScheduler;

impl PushJobScheduler {
    /// Spawns a task that fires `worker` once per `interval` until cancelled.
    /// The first tick fires one full interval after scheduling.
    pub fn schedule_repeating(
        chat_id: ChatId,
        interval: Duration,
        worker: Arc<dyn PushWorker>,
    ) -> ScheduledJob {
        let cancellation_token = CancellationToken::new();
        let task_cancellation_token = cancellation_token.child_token();

        let task_handle = tokio::spawn(async move {
            Self::run_ticks(task_cancellation_token, chat_id, interval, worker).await;
        });

        ScheduledJob::new(task_handle, cancellation_token)
    }

    async fn run_ticks(
        cancellation_token: CancellationToken,
        chat_id: ChatId,
        interval: Duration,
        worker: Arc<dyn PushWorker>,
    ) {
        loop {
            tokio::select! {
                _ = cancellation_token.cancelled() => {
                    log::info!("Push job for chat {} was cancelled", chat_id.0);
                    break;
                }
                _ = time::sleep(interval) => {
                    // A failed tick is logged and must not stop the job.
                    if let Err(error) = worker.handle_tick(chat_id).await {
                        log::error!("Tick failed for chat {}: {error:#}", chat_id.0);
                    }
                }
            }
        }
    }
}
