mod appsettings;
mod commands;
mod delivery;
mod reminder;
mod scheduling;
mod store;
mod telegram;
#[cfg(test)]
mod test_utils;

use std::sync::Arc;
use std::time::Duration;

use teloxide::Bot;

use commands::CommandDispatcher;
use delivery::DeliveryChannel;
use scheduling::{RandomReminderWorker, ReminderJobController};
use store::{InMemoryReminderStore, ReminderStore};
use telegram::{TelegramDeliveryChannel, TelegramInteractionInterface};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    pretty_env_logger::init();

    let settings = appsettings::get();
    let bot = Bot::new(settings.telegram.token.clone());

    let store: Arc<dyn ReminderStore> = Arc::new(InMemoryReminderStore::new());
    let delivery: Arc<dyn DeliveryChannel> = Arc::new(TelegramDeliveryChannel::new(bot.clone()));
    let worker = Arc::new(RandomReminderWorker::new(Arc::clone(&store), delivery));
    let controller = Arc::new(ReminderJobController::new(
        worker,
        Duration::from_secs(settings.reminder.push_interval_secs),
    ));
    let dispatcher = Arc::new(CommandDispatcher::new(store, controller));

    TelegramInteractionInterface::start(bot, dispatcher).await;
}
