use monostate::MustBe;
use serde::Deserialize;

use crate::prelude::*;

/// Telegram bot API [response envelope][1].
///
/// [1]: https://core.telegram.org/bots/api#making-requests
#[derive(Deserialize)]
#[must_use]
#[serde(untagged)]
pub enum TelegramResult<T> {
    Ok {
        #[allow(dead_code)]
        ok: MustBe!(true),
        result: T,
    },

    Err {
        #[allow(dead_code)]
        ok: MustBe!(false),
        description: String,
        error_code: i32,
    },
}

impl<T> From<TelegramResult<T>> for Result<T> {
    fn from(result: TelegramResult<T>) -> Self {
        match result {
            TelegramResult::Ok { result, .. } => Ok(result),
            TelegramResult::Err { error_code, description, .. } => {
                Err(anyhow!("API error {error_code}: {description}"))
            }
        }
    }
}
