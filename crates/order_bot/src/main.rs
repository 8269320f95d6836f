use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::{thread, time};

use anyhow::Result;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};

use base::requests::ureq::UreqRequestApi;
use order_bot::interpreter::{ChatId, InboundChatMessage, OrderCommandInterpreter, UserId};
use order_bot::telegram::TelegramBotApi;
use orders_api::SupabaseOrdersApi;

const TELEGRAM_BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
const ADMIN_CHAT_ID_ENV: &str = "ADMIN_CHAT_ID";
const ALLOWED_USER_ID_ENV: &str = "ALLOWED_USER_ID";

const GET_UPDATES_TIMEOUT_SECS: u32 = 25;
const SECONDS_TO_SLEEP_AFTER_FAILED_POLL: u64 = 5;

fn main() -> Result<()> {
    dotenv::dotenv().unwrap();
    init_logging();

    let bot_token = dotenv::var(TELEGRAM_BOT_TOKEN_ENV).unwrap();
    let admin_chat_id: ChatId = dotenv::var(ADMIN_CHAT_ID_ENV).unwrap().parse().unwrap();
    let allowed_user_id: UserId = dotenv::var(ALLOWED_USER_ID_ENV).unwrap().parse().unwrap();

    let store = SupabaseOrdersApi::from_env(Default::default(), UreqRequestApi::new())?;
    let bot_api = TelegramBotApi::new(bot_token, UreqRequestApi::new());
    let mut interpreter = OrderCommandInterpreter::new(store, admin_chat_id, allowed_user_id);

    let running = Arc::new(AtomicBool::new(true));
    let running_in_handler = Arc::clone(&running);
    ctrlc::set_handler(move || running_in_handler.store(false, Ordering::SeqCst))?;

    log::info!("the order bot is listening to the chat {}", admin_chat_id);

    let mut next_update_offset = None;

    while running.load(Ordering::SeqCst) {
        let updates = match bot_api.get_updates(next_update_offset, GET_UPDATES_TIMEOUT_SECS) {
            Ok(updates) => updates,
            Err(e) => {
                log::error!("an error occurred on polling for updates: {:?}", e);
                thread::sleep(time::Duration::from_secs(SECONDS_TO_SLEEP_AFTER_FAILED_POLL));
                continue;
            }
        };

        for update in updates {
            next_update_offset = Some(update.update_id + 1);

            let Some(message) = update.message else {
                continue;
            };

            let (Some(text), Some(from)) = (message.text, message.from) else {
                continue;
            };

            let inbound_message = InboundChatMessage {
                chat_id: message.chat.id,
                user_id: from.id,
                message_id: message.message_id,
                text,
            };

            if let Some(reply) = interpreter.handle_message(&inbound_message) {
                if let Err(e) =
                    bot_api.send_reply(inbound_message.chat_id, inbound_message.message_id, &reply)
                {
                    log::error!("an error occurred on sending a reply: {:?}", e);
                }
            }
        }
    }

    log::info!("the order bot is stopped");
    Ok(())
}

fn init_logging() {
    let console_appender = ConsoleAppender::builder().build();

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console_appender)))
        .build(Root::builder().appender("console").build(LevelFilter::Info))
        .unwrap();

    log4rs::init_config(config).unwrap();
}
