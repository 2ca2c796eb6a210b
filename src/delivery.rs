use async_trait::async_trait;

/// Transport-agnostic chat key. The Telegram layer maps this onto its own
/// chat identifier type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

#[async_trait]
pub trait DeliveryChannel: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> anyhow::Result<()>;
}
