use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use super::scheduler::{PushJobScheduler, ScheduledJob};
use super::worker::PushWorker;
use crate::delivery::ChatId;

const CANCEL_TIMEOUT: Duration = Duration::from_secs(5);

/// Keeps at most one recurring push job per chat. Starting a job for a chat
/// first retires the one already running there; jobs in other chats are
/// never touched.
pub struct ReminderJobController {
    jobs: RwLock<HashMap<ChatId, ScheduledJob>>,
    interval: Duration,
    worker: Arc<dyn PushWorker>,
}

impl ReminderJobController {
    pub fn new(worker: Arc<dyn PushWorker>, interval: Duration) -> Self {
        Self {
            jobs: RwLock::new(HashMap::new()),
            interval,
            worker,
        }
    }

    /// Starts the recurring push job for `chat_id`, replacing a running one.
    /// Always succeeds, even while the store is empty.
    pub async fn start(&self, chat_id: ChatId) {
        let replaced = {
            let mut jobs = self.jobs.write().await;
            let replaced = jobs.remove(&chat_id);
            if let Some(job) = &replaced {
                // Stops the old ticks before the replacement becomes
                // visible, so the single-job-per-chat invariant holds.
                job.request_cancel();
            }

            let job = PushJobScheduler::schedule_repeating(
                chat_id,
                self.interval,
                Arc::clone(&self.worker),
            );
            jobs.insert(chat_id, job);
            replaced
        };

        // The wind-down of the old job can take a while when a tick is in
        // flight; waiting for it must not hold up the job map.
        if let Some(job) = replaced {
            job.cancel(CANCEL_TIMEOUT).await;
        }
        log::info!("Started push job for chat {}", chat_id.0);
    }

    /// Stops the job for `chat_id`. Returns false when no job was running.
    pub async fn stop(&self, chat_id: ChatId) -> bool {
        let job = self.jobs.write().await.remove(&chat_id);
        match job {
            Some(job) => {
                job.cancel(CANCEL_TIMEOUT).await;
                log::info!("Stopped push job for chat {}", chat_id.0);
                true
            }
            None => false,
        }
    }
}
