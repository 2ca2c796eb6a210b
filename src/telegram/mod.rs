mod delivery;

pub use delivery::TelegramDeliveryChannel;

use std::sync::Arc;

use teloxide::{
    dptree,
    prelude::*,
    utils::command::{BotCommands, ParseError},
};

use crate::commands::CommandDispatcher;

type HandlerResult = anyhow::Result<()>;

#[derive(BotCommands, Clone, Debug)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
enum Command {
    #[command(description = "add a reminder.", parse_with = joined_args)]
    Add(String),
    #[command(description = "remove a reminder by id.", parse_with = joined_args)]
    Remove(String),
    #[command(description = "show all reminders.")]
    Showall,
    #[command(description = "push a random reminder to this chat periodically.")]
    Cron,
    #[command(description = "stop pushing reminders to this chat.")]
    Kill,
}

// Joins the argument words with single spaces. An empty argument line is
// kept so the dispatcher can reply with a corrective prompt instead of the
// command failing to parse.
fn joined_args(input: String) -> Result<(String,), ParseError> {
    let joined = input.split_whitespace().collect::<Vec<_>>().join(" ");
    Ok((joined,))
}

pub struct TelegramInteractionInterface;

impl TelegramInteractionInterface {
    pub async fn start(bot: Bot, dispatcher: Arc<CommandDispatcher>) {
        log::info!("Starting Telegram interaction interface");

        let schema = Update::filter_message()
            .branch(teloxide::filter_command::<Command, _>().endpoint(handle_command));

        Dispatcher::builder(bot, schema)
            .dependencies(dptree::deps![dispatcher])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await
    }
}

async fn handle_command(
    bot: Bot,
    dispatcher: Arc<CommandDispatcher>,
    msg: Message,
    cmd: Command,
) -> HandlerResult {
    let chat_id = crate::delivery::ChatId(msg.chat.id.0);
    let reply = match cmd {
        Command::Add(text) => dispatcher.add(&text).await,
        Command::Remove(args) => {
            let id = args.split_whitespace().next().unwrap_or("");
            dispatcher.remove(id).await
        }
        Command::Showall => dispatcher.show_all().await,
        Command::Cron => dispatcher.start_job(chat_id).await,
        Command::Kill => dispatcher.stop_job(chat_id).await,
    };

    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}
