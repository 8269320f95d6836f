use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::json;

use base::requests::api::SyncHttpRequest;
use base::requests::entities::{HttpRequestData, HttpRequestMethod};

use crate::interpreter::{ChatId, MessageId, Reply, UserId};

pub type UpdateId = i64;
pub type BotToken = String;

pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

#[derive(Deserialize, Debug)]
pub struct TelegramUpdate {
    pub update_id: UpdateId,
    pub message: Option<TelegramMessage>,
}

#[derive(Deserialize, Debug)]
pub struct TelegramMessage {
    pub message_id: MessageId,
    pub text: Option<String>,
    pub chat: TelegramChat,
    pub from: Option<TelegramUser>,
}

#[derive(Deserialize, Debug)]
pub struct TelegramChat {
    pub id: ChatId,
}

#[derive(Deserialize, Debug)]
pub struct TelegramUser {
    pub id: UserId,
}

#[derive(Deserialize, Debug)]
struct TelegramResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

pub struct TelegramBotApi<R: SyncHttpRequest> {
    token: BotToken,
    request_api: R,
}

impl<R: SyncHttpRequest> TelegramBotApi<R> {
    pub fn new(token: BotToken, request_api: R) -> Self {
        Self { token, request_api }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", TELEGRAM_API_URL, self.token, method)
    }

    /// Long-polls for new updates starting from the given offset.
    pub fn get_updates(
        &self,
        offset: Option<UpdateId>,
        timeout_secs: u32,
    ) -> Result<Vec<TelegramUpdate>> {
        let mut req_data =
            HttpRequestData::new(HttpRequestMethod::Get, &self.method_url("getUpdates"))
                .with_query("timeout", &timeout_secs.to_string());

        if let Some(offset) = offset {
            req_data = req_data.with_query("offset", &offset.to_string());
        }

        let response = self.request_api.call(req_data)?;

        let response: TelegramResponse<Vec<TelegramUpdate>> = serde_json::from_str(&response)
            .context("an error occurred on deserializing the getUpdates response")?;

        if !response.ok {
            bail!(
                "getUpdates failed: {}",
                response.description.unwrap_or_default()
            );
        }

        Ok(response.result.unwrap_or_default())
    }

    /// Sends a reply to the message that triggered it.
    pub fn send_reply(
        &self,
        chat_id: ChatId,
        reply_to_message_id: MessageId,
        reply: &Reply,
    ) -> Result<()> {
        let mut body = json!({
            "chat_id": chat_id,
            "text": reply.text,
            "reply_parameters": { "message_id": reply_to_message_id },
        });

        if let Some(parse_mode) = reply.parse_mode {
            body["parse_mode"] = json!(parse_mode.as_str());
        }

        let req_data =
            HttpRequestData::new(HttpRequestMethod::Post, &self.method_url("sendMessage"))
                .with_json_body(body);

        self.request_api.call(req_data)?;
        Ok(())
    }
}
