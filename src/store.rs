use async_trait::async_trait;
use rand::seq::IndexedRandom;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::reminder::{Reminder, ReminderId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("reminder text must not be empty")]
    InvalidInput,

    #[error("there are no reminders to pick from")]
    Empty,
}

#[async_trait]
pub trait ReminderStore: Send + Sync {
    async fn add(&self, text: &str) -> Result<Reminder, StoreError>;
    async fn remove(&self, id: &ReminderId) -> bool;
    async fn list(&self) -> Vec<Reminder>;
    async fn pick_random(&self) -> Result<Reminder, StoreError>;
}

/// Insertion-ordered reminder storage living for the process lifetime.
pub struct InMemoryReminderStore {
    reminders: RwLock<Vec<Reminder>>,
}

impl InMemoryReminderStore {
    pub fn new() -> Self {
        InMemoryReminderStore {
            reminders: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ReminderStore for InMemoryReminderStore {
    async fn add(&self, text: &str) -> Result<Reminder, StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::InvalidInput);
        }

        let reminder = Reminder::new(text);
        let mut reminders = self.reminders.write().await;
        reminders.push(reminder.clone());
        log::info!("Added reminder {}", reminder.id);

        Ok(reminder)
    }

    async fn remove(&self, id: &ReminderId) -> bool {
        let mut reminders = self.reminders.write().await;
        // Ids are unique, so at most one entry can match.
        match reminders.iter().position(|reminder| reminder.id == *id) {
            Some(index) => {
                reminders.remove(index);
                log::info!("Removed reminder {id}");
                true
            }
            None => false,
        }
    }

    async fn list(&self) -> Vec<Reminder> {
        self.reminders.read().await.clone()
    }

    async fn pick_random(&self) -> Result<Reminder, StoreError> {
        let reminders = self.reminders.read().await;
        reminders
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(StoreError::Empty)
    }
}
