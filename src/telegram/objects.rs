use std::fmt::{Display, Formatter};

use bon::Builder;
use serde::{Deserialize, Serialize};

/// Telegram [user or bot][1].
///
/// [1]: https://core.telegram.org/bots/api#user
#[derive(Debug, Deserialize)]
#[must_use]
pub struct User {
    pub id: i64,

    #[serde(default)]
    pub username: Option<String>,
}

/// Incoming [update][1].
///
/// [1]: https://core.telegram.org/bots/api#update
#[derive(Debug, Deserialize)]
#[must_use]
pub struct Update {
    #[serde(rename = "update_id")]
    pub id: u64,

    #[serde(flatten)]
    pub payload: UpdatePayload,
}

/// Tolerant of update types the bot is not subscribed to: anything without a
/// `message` key falls through to [`UpdatePayload::Other`] instead of failing
/// the whole batch.
#[derive(Debug, Deserialize)]
#[must_use]
#[serde(untagged)]
pub enum UpdatePayload {
    Message { message: Message },
    Other(serde::de::IgnoredAny),
}

impl From<Update> for Option<Message> {
    fn from(update: Update) -> Self {
        match update.payload {
            UpdatePayload::Message { message } => Some(message),
            UpdatePayload::Other(_) => None,
        }
    }
}

/// Update types requested via [`crate::telegram::methods::GetUpdates`].
#[derive(Copy, Clone, Serialize)]
#[must_use]
pub enum AllowedUpdate {
    #[serde(rename = "message")]
    Message,
}

/// Incoming [message][1].
///
/// [1]: https://core.telegram.org/bots/api#message
#[derive(Debug, Deserialize)]
#[must_use]
pub struct Message {
    #[serde(rename = "message_id")]
    pub id: u64,

    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub chat: Option<Chat>,
}

#[derive(Debug, Deserialize)]
#[must_use]
pub struct Chat {
    pub id: ChatId,
}

/// Unique identifier of the target chat, or username of the target channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
#[must_use]
pub enum ChatId {
    Integer(i64),
    Username(String),
}

impl From<i64> for ChatId {
    fn from(chat_id: i64) -> Self {
        Self::Integer(chat_id)
    }
}

impl Display for ChatId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(chat_id) => Display::fmt(chat_id, f),
            Self::Username(username) => Display::fmt(username, f),
        }
    }
}

#[derive(Serialize)]
#[must_use]
pub enum ParseMode {
    #[serde(rename = "HTML")]
    Html,
}

/// [Link preview][1] generation options.
///
/// [1]: https://core.telegram.org/bots/api#linkpreviewoptions
#[derive(Serialize)]
#[must_use]
pub struct LinkPreviewOptions {
    pub is_disabled: bool,
}

impl LinkPreviewOptions {
    pub const DISABLED: Self = Self { is_disabled: true };
}

/// [Reply parameters][1]: which message the reply is for.
///
/// [1]: https://core.telegram.org/bots/api#replyparameters
#[derive(Copy, Clone, Serialize, Builder)]
#[must_use]
pub struct ReplyParameters {
    pub message_id: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(required, default = Some(true))]
    pub allow_sending_without_reply: Option<bool>,
}

/// [Bot command][1] shown in the chat menu.
///
/// [1]: https://core.telegram.org/bots/api#botcommand
#[derive(Serialize, Builder)]
#[must_use]
pub struct BotCommand {
    pub command: &'static str,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::Result;

    #[test]
    fn message_update_ok() -> Result {
        // language=json
        let update: Update = serde_json::from_str(
            r#"{"update_id": 1, "message": {"message_id": 2, "text": "/so 咖啡", "chat": {"id": 42}}}"#,
        )?;
        assert_eq!(update.id, 1);
        let message = Option::<Message>::from(update).expect("the payload should be a message");
        assert_eq!(message.id, 2);
        assert_eq!(message.text.as_deref(), Some("/so 咖啡"));
        Ok(())
    }

    #[test]
    fn non_message_update_is_skipped_ok() -> Result {
        // language=json
        let updates: Vec<Update> = serde_json::from_str(
            r#"[{"update_id": 1, "edited_message": {"message_id": 2, "text": "hi", "chat": {"id": 42}}}]"#,
        )?;
        assert_eq!(updates.len(), 1);
        let update = updates.into_iter().next().expect("there should be one update");
        assert_eq!(update.id, 1);
        assert!(Option::<Message>::from(update).is_none());
        Ok(())
    }
}
