use std::time::Duration;

use bon::Builder;
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    client::DEFAULT_TIMEOUT,
    prelude::*,
    telegram::{
        Telegram,
        objects::{
            AllowedUpdate, BotCommand, ChatId, LinkPreviewOptions, Message, ParseMode,
            ReplyParameters, Update, User,
        },
    },
};

/// Telegram bot API method.
pub trait Method: Serialize + Sized {
    const NAME: &'static str;

    type Response: DeserializeOwned;

    fn timeout(&self) -> Duration {
        DEFAULT_TIMEOUT
    }

    fn call_on(&self, telegram: &Telegram) -> impl Future<Output = Result<Self::Response>> {
        telegram.call(self)
    }
}

/// A simple method for testing the authentication token.
///
/// See also: <https://core.telegram.org/bots/api#getme>.
#[derive(Serialize)]
#[must_use]
pub struct GetMe;

impl Method for GetMe {
    const NAME: &'static str = "getMe";
    type Response = User;
}

/// [Receive incoming updates][1] using long polling.
///
/// [1]: https://core.telegram.org/bots/api#getupdates
#[derive(Serialize, Builder)]
#[must_use]
pub struct GetUpdates {
    /// Identifier of the first update to be returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,

    /// Timeout in seconds for long polling.
    #[serde(rename = "timeout", skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Update types to receive, everything else is withheld by the API.
    pub allowed_updates: &'static [AllowedUpdate],
}

impl Method for GetUpdates {
    const NAME: &'static str = "getUpdates";
    type Response = Vec<Update>;

    fn timeout(&self) -> Duration {
        DEFAULT_TIMEOUT + Duration::from_secs(self.timeout_secs.unwrap_or_default())
    }
}

/// [Send a text message][1].
///
/// [1]: https://core.telegram.org/bots/api#sendmessage
#[derive(Serialize, Builder)]
#[must_use]
pub struct SendMessage {
    pub chat_id: ChatId,
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_preview_options: Option<LinkPreviewOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters: Option<ReplyParameters>,
}

impl SendMessage {
    /// Quick HTML-formatted reply with link previews disabled.
    pub fn quick_html(chat_id: ChatId, text: String, reply_parameters: ReplyParameters) -> Self {
        Self::builder()
            .chat_id(chat_id)
            .text(text)
            .parse_mode(ParseMode::Html)
            .link_preview_options(LinkPreviewOptions::DISABLED)
            .reply_parameters(reply_parameters)
            .build()
    }
}

impl Method for SendMessage {
    const NAME: &'static str = "sendMessage";
    type Response = Message;
}

/// [Register the bot's command list][1].
///
/// [1]: https://core.telegram.org/bots/api#setmycommands
#[derive(Serialize)]
#[must_use]
pub struct SetMyCommands {
    pub commands: Vec<BotCommand>,
}

impl Method for SetMyCommands {
    const NAME: &'static str = "setMyCommands";
    type Response = bool;
}
