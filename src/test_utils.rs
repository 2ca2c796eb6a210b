use std::sync::Mutex;

use async_trait::async_trait;

use crate::delivery::{ChatId, DeliveryChannel};

/// Delivery double that records every sent message.
pub struct RecordingDeliveryChannel {
    pub sent: Mutex<Vec<(ChatId, String)>>,
}

impl RecordingDeliveryChannel {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl DeliveryChannel for RecordingDeliveryChannel {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push((chat_id, text.to_string()));
        Ok(())
    }
}

/// Delivery double whose sends park for a minute before succeeding,
/// simulating a stalled transport.
pub struct SlowDeliveryChannel {
    pub completed: Mutex<usize>,
}

impl SlowDeliveryChannel {
    pub fn new() -> Self {
        Self {
            completed: Mutex::new(0),
        }
    }
}

#[async_trait]
impl DeliveryChannel for SlowDeliveryChannel {
    async fn send_text(&self, _chat_id: ChatId, _text: &str) -> anyhow::Result<()> {
        tokio::time::sleep(std::time::Duration::from_secs(60)).await;
        *self.completed.lock().unwrap() += 1;
        Ok(())
    }
}

/// Delivery double that fails every send, counting the attempts.
pub struct FailingDeliveryChannel {
    pub attempts: Mutex<usize>,
}

impl FailingDeliveryChannel {
    pub fn new() -> Self {
        Self {
            attempts: Mutex::new(0),
        }
    }
}

#[async_trait]
impl DeliveryChannel for FailingDeliveryChannel {
    async fn send_text(&self, _chat_id: ChatId, _text: &str) -> anyhow::Result<()> {
        *self.attempts.lock().unwrap() += 1;
        anyhow::bail!("transport unavailable")
    }
}
