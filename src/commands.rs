use std::sync::Arc;

use crate::delivery::ChatId;
use crate::reminder::ReminderId;
use crate::scheduling::ReminderJobController;
use crate::store::ReminderStore;

/// Maps inbound commands to store and controller operations. Every handler
/// produces exactly one reply text for the invoking chat.
pub struct CommandDispatcher {
    store: Arc<dyn ReminderStore>,
    controller: Arc<ReminderJobController>,
}

impl CommandDispatcher {
    pub fn new(store: Arc<dyn ReminderStore>, controller: Arc<ReminderJobController>) -> Self {
        Self { store, controller }
    }

    pub async fn add(&self, text: &str) -> String {
        match self.store.add(text).await {
            Ok(_) => "Reminder added successfully!".to_string(),
            Err(_) => "Please provide a reminder!".to_string(),
        }
    }

    pub async fn remove(&self, id: &str) -> String {
        if self.store.remove(&ReminderId::from(id)).await {
            "Reminder removed successfully!".to_string()
        } else {
            "No reminder found with that id!".to_string()
        }
    }

    pub async fn show_all(&self) -> String {
        let reminders = self.store.list().await;
        if reminders.is_empty() {
            return "No reminders found!".to_string();
        }

        let mut message = String::from("Reminders:\n\n");
        for reminder in &reminders {
            message.push_str(&format!("{} - {}\n", reminder.id, reminder.text));
        }

        message
    }

    pub async fn start_job(&self, chat_id: ChatId) -> String {
        self.controller.start(chat_id).await;
        "Cron job started!".to_string()
    }

    pub async fn stop_job(&self, chat_id: ChatId) -> String {
        if self.controller.stop(chat_id).await {
            "Cron job successfully canceled!".to_string()
        } else {
            "You have no active cron job.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::scheduling::RandomReminderWorker;
    use crate::store::InMemoryReminderStore;
    use crate::test_utils::RecordingDeliveryChannel;

    const CHAT: ChatId = ChatId(42);

    fn dispatcher() -> (CommandDispatcher, Arc<InMemoryReminderStore>) {
        let store = Arc::new(InMemoryReminderStore::new());
        let delivery = Arc::new(RecordingDeliveryChannel::new());
        let worker = Arc::new(RandomReminderWorker::new(
            Arc::clone(&store) as Arc<dyn ReminderStore>,
            delivery,
        ));
        let controller = Arc::new(ReminderJobController::new(worker, Duration::from_secs(5)));

        (
            CommandDispatcher::new(Arc::clone(&store) as Arc<dyn ReminderStore>, controller),
            store,
        )
    }

    #[tokio::test]
    async fn add_then_show_then_remove_round_trip() {
        let (dispatcher, store) = dispatcher();

        assert_eq!(
            dispatcher.add("Drink water").await,
            "Reminder added successfully!"
        );
        assert!(dispatcher.show_all().await.contains("Drink water"));

        let id = store.list().await[0].id.clone();
        assert_eq!(
            dispatcher.remove(id.as_str()).await,
            "Reminder removed successfully!"
        );
        assert_eq!(dispatcher.show_all().await, "No reminders found!");
    }

    #[tokio::test]
    async fn add_without_text_asks_for_a_reminder() {
        let (dispatcher, store) = dispatcher();

        assert_eq!(dispatcher.add("").await, "Please provide a reminder!");
        assert_eq!(dispatcher.add("   ").await, "Please provide a reminder!");
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn remove_of_unknown_id_reports_the_miss() {
        let (dispatcher, store) = dispatcher();
        dispatcher.add("Take a walk").await;

        assert_eq!(
            dispatcher.remove("0123456789").await,
            "No reminder found with that id!"
        );
        assert_eq!(store.list().await.len(), 1);
    }

    #[tokio::test]
    async fn show_all_lists_every_reminder_in_insertion_order() {
        let (dispatcher, store) = dispatcher();
        dispatcher.add("Drink water").await;
        dispatcher.add("Do some pushups").await;

        let reminders = store.list().await;
        let expected = format!(
            "Reminders:\n\n{} - Drink water\n{} - Do some pushups\n",
            reminders[0].id, reminders[1].id
        );
        assert_eq!(dispatcher.show_all().await, expected);
    }

    #[tokio::test(start_paused = true)]
    async fn cron_and_kill_replies_follow_job_state() {
        let (dispatcher, _store) = dispatcher();

        assert_eq!(
            dispatcher.stop_job(CHAT).await,
            "You have no active cron job."
        );
        assert_eq!(dispatcher.start_job(CHAT).await, "Cron job started!");
        assert_eq!(
            dispatcher.stop_job(CHAT).await,
            "Cron job successfully canceled!"
        );
        assert_eq!(
            dispatcher.stop_job(CHAT).await,
            "You have no active cron job."
        );
    }
}
