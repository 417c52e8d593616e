//! Telegram bot API surface, trimmed to what the bot actually calls.

pub mod methods;
pub mod objects;
pub mod render;
pub mod result;

use futures::{Stream, StreamExt, TryStreamExt, stream};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::{
    prelude::*,
    telegram::{
        methods::{GetUpdates, Method},
        objects::{AllowedUpdate, Update},
        result::TelegramResult,
    },
};

/// Telegram bot API connection.
#[must_use]
#[derive(Clone)]
pub struct Telegram {
    client: Client,
    token: SecretString,
    root_url: Url,
}

impl Telegram {
    pub fn new(client: Client, token: SecretString) -> Result<Self> {
        Ok(Self { client, token, root_url: Url::parse("https://api.telegram.org")? })
    }

    /// Call the Telegram bot API method.
    ///
    /// The API reports errors with a non-2xx status and a JSON body, so the
    /// body is parsed regardless of the status code.
    #[instrument(skip_all, fields(method = M::NAME))]
    pub async fn call<M: Method>(&self, method: &M) -> Result<M::Response> {
        let mut url = self.root_url.clone();
        url.set_path(&format!("bot{}/{}", self.token.expose_secret(), M::NAME));
        self.client
            .post(url)
            .json(method)
            .timeout(method.timeout())
            .send()
            .await
            .with_context(|| format!("failed to call `{}`", M::NAME))?
            .json::<TelegramResult<M::Response>>()
            .await
            .with_context(|| format!("failed to read the `{}` response", M::NAME))?
            .into()
    }

    /// Convert the connection into a [`Stream`] of [`Update`]'s via long polling.
    pub fn into_updates(
        self,
        offset: u64,
        poll_timeout_secs: u64,
    ) -> impl Stream<Item = Result<Update>> {
        let advance = move |(this, offset): (Self, u64)| async move {
            let updates = GetUpdates::builder()
                .offset(offset)
                .timeout_secs(poll_timeout_secs)
                .allowed_updates(&[AllowedUpdate::Message])
                .build()
                .call_on(&this)
                .await?;
            let next_offset = updates.last().map_or(offset, |last_update| last_update.id + 1);
            debug!(n = updates.len(), next_offset, "Received updates");
            Ok::<_, Error>(Some((stream::iter(updates).map(Ok), (this, next_offset))))
        };
        stream::try_unfold((self, offset), advance).try_flatten()
    }
}
