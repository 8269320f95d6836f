use base::entities::order::OrderStatus;
use base::notifier::MessageParseMode;
use base::stores::order_store::BasicOrderStore;

use crate::command::{parse_status_command, StatusCommandParse, ALLOWED_STATUS_WORDS};

pub type ChatId = i64;
pub type UserId = i64;
pub type MessageId = i64;

pub const START_COMMAND: &str = "/start";

const ACCESS_DENIED_REPLY: &str = "❌ Доступ запрещён.";

const GREETING_REPLY: &str = "✅ Бот управления заказами запущен!\n\n\
    Чтобы изменить статус, напишите в чат:\n\
    `#755e4f83-48d4-4057-8ebf-144532ff9693 статус=выполнен`\n\n\
    Доступные статусы: _новый, обработка, выполнен, отменён_";

#[derive(Debug, Clone, PartialEq)]
pub struct InboundChatMessage {
    pub chat_id: ChatId,
    pub user_id: UserId,
    pub message_id: MessageId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub parse_mode: Option<MessageParseMode>,
}

impl Reply {
    fn plain(text: String) -> Self {
        Self {
            text,
            parse_mode: None,
        }
    }

    fn markdown(text: &str) -> Self {
        Self {
            text: text.to_string(),
            parse_mode: Some(MessageParseMode::Markdown),
        }
    }
}

pub struct OrderCommandInterpreter<S: BasicOrderStore> {
    store: S,
    admin_chat_id: ChatId,
    allowed_user_id: UserId,
}

impl<S: BasicOrderStore> OrderCommandInterpreter<S> {
    pub fn new(store: S, admin_chat_id: ChatId, allowed_user_id: UserId) -> Self {
        Self {
            store,
            admin_chat_id,
            allowed_user_id,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Processes a single inbound chat message and returns the reply to
    /// send, if any.
    ///
    /// Store failures never escape a message: they are converted into an
    /// error reply so the listening loop keeps running.
    pub fn handle_message(&mut self, message: &InboundChatMessage) -> Option<Reply> {
        if message.text.trim() == START_COMMAND {
            return Some(self.greet(message));
        }

        // Commands are accepted from the single allowed operator in the
        // single admin chat; everything else stays plain conversation.
        if message.chat_id != self.admin_chat_id || message.user_id != self.allowed_user_id {
            return None;
        }

        match parse_status_command(&message.text) {
            StatusCommandParse::NotACommand => None,
            StatusCommandParse::UnknownStatus { status_word, .. } => {
                Some(Reply::plain(format!(
                    "❌ Неизвестный статус: \"{}\"\nДопустимые: {}",
                    status_word, ALLOWED_STATUS_WORDS
                )))
            }
            StatusCommandParse::UpdateStatus {
                order_id,
                new_status,
            } => Some(self.update_order_status(&order_id, new_status)),
        }
    }

    fn greet(&self, message: &InboundChatMessage) -> Reply {
        if message.user_id != self.allowed_user_id {
            Reply::plain(ACCESS_DENIED_REPLY.to_string())
        } else {
            Reply::markdown(GREETING_REPLY)
        }
    }

    fn update_order_status(&mut self, order_id: &str, new_status: OrderStatus) -> Reply {
        let current_status = match self.store.get_order_status_by_id(order_id) {
            Ok(Some(status)) => status,
            Ok(None) => {
                return Reply::plain(format!(
                    "❌ Заказ #{} не найден.",
                    short_order_id(order_id)
                ))
            }
            Err(e) => return Reply::plain(format!("❌ Ошибка: {:#}", e)),
        };

        if let Err(e) = self.store.update_order_status(order_id, new_status) {
            return Reply::plain(format!("❌ Ошибка: {:#}", e));
        }

        Reply::plain(format!(
            "✅ #{}\n➡️ {} → {}",
            short_order_id(order_id),
            current_status.label(),
            new_status.label()
        ))
    }
}

/// Shortened display form of an order id (its first UUID group).
fn short_order_id(order_id: &str) -> &str {
    order_id.get(..8).unwrap_or(order_id)
}
