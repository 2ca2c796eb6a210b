use std::sync::Arc;

use async_trait::async_trait;

use crate::delivery::{ChatId, DeliveryChannel};
use crate::store::{ReminderStore, StoreError};

#[async_trait]
pub trait PushWorker: Send + Sync {
    async fn handle_tick(&self, chat_id: ChatId) -> anyhow::Result<()>;
}

/// Pushes one uniformly chosen reminder to the bound chat on every tick.
pub struct RandomReminderWorker {
    store: Arc<dyn ReminderStore>,
    delivery: Arc<dyn DeliveryChannel>,
}

impl RandomReminderWorker {
    pub fn new(store: Arc<dyn ReminderStore>, delivery: Arc<dyn DeliveryChannel>) -> Self {
        Self { store, delivery }
    }
}

#[async_trait]
impl PushWorker for RandomReminderWorker {
    async fn handle_tick(&self, chat_id: ChatId) -> anyhow::Result<()> {
        match self.store.pick_random().await {
            Ok(reminder) => self.delivery.send_text(chat_id, &reminder.text).await,
            // An empty store is not an error; the tick is skipped silently.
            Err(StoreError::Empty) => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}
