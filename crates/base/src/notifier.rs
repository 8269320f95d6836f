use crate::requests::api::SyncHttpRequest;
use crate::requests::entities::{HttpRequestData, HttpRequestMethod};
use anyhow::Result;
use serde_json::json;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MessageParseMode {
    Html,
    Markdown,
}

impl MessageParseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageParseMode::Html => "HTML",
            MessageParseMode::Markdown => "Markdown",
        }
    }
}

pub trait Notifier {
    fn send_message(&self, message: &str) -> Result<()>;
}

pub struct TelegramNotifier<R: SyncHttpRequest> {
    token: String,
    chat_id: String,
    parse_mode: MessageParseMode,
    request_api: R,
}

impl<R: SyncHttpRequest> TelegramNotifier<R> {
    pub fn new(
        token: String,
        chat_id: String,
        parse_mode: MessageParseMode,
        request_api: R,
    ) -> TelegramNotifier<R> {
        TelegramNotifier {
            token,
            chat_id,
            parse_mode,
            request_api,
        }
    }
}

impl<R: SyncHttpRequest> Notifier for TelegramNotifier<R> {
    fn send_message(&self, message: &str) -> Result<()> {
        let req = HttpRequestData::new(
            HttpRequestMethod::Post,
            &format!(
                "https://api.telegram.org/bot{token}/sendMessage",
                token = &self.token
            ),
        )
        .with_json_body(json!({
            "text": message,
            "chat_id": self.chat_id,
            "parse_mode": self.parse_mode.as_str()
        }));

        self.request_api.call(req)?;
        Ok(())
    }
}
