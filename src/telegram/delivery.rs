use async_trait::async_trait;
use teloxide::prelude::*;

use crate::delivery::{ChatId, DeliveryChannel};

pub struct TelegramDeliveryChannel {
    bot: Bot,
}

impl TelegramDeliveryChannel {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl DeliveryChannel for TelegramDeliveryChannel {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> anyhow::Result<()> {
        self.bot
            .send_message(teloxide::types::ChatId(chat_id.0), text)
            .await?;
        Ok(())
    }
}
