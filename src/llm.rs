//! OpenAI-compatible completion provider used to summarize map results.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::prelude::*;

#[must_use]
#[derive(Clone)]
pub struct Llm {
    client: Client,
    chat_url: Url,
    api_key: SecretString,
    model: String,
}

impl Llm {
    pub fn new(
        client: Client,
        mut base_url: Url,
        api_key: SecretString,
        model: String,
    ) -> Result<Self> {
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }
        let chat_url = base_url
            .join("chat/completions")
            .context("failed to build the chat completions URL")?;
        Ok(Self { client, chat_url, api_key, model })
    }

    /// Request a single completion for the prompt.
    ///
    /// The session identifier is forwarded as the `user` field so that the
    /// provider can attribute the traffic.
    #[instrument(skip_all, fields(session_id = session_id))]
    pub async fn text_chat(&self, prompt: &str, session_id: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage { role: "user", content: prompt }],
            user: session_id,
        };
        let response: ChatCompletionResponse = self
            .client
            .post(self.chat_url.clone())
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .context("failed to call the completion endpoint")?
            .error_for_status()
            .context("the completion endpoint failed")?
            .json()
            .await
            .context("failed to read the completion response")?;
        let completion = response
            .choices
            .into_iter()
            .next()
            .context("the completion response contains no choices")?
            .message
            .content;
        debug!(n_chars = completion.len(), "Received completion");
        Ok(completion)
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    user: &'a str,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}
