use thiserror::Error;

/// Command handling outcome, keeping the crate-wide alias single-parameter.
pub type CommandResult<T> = std::result::Result<T, CommandError>;

/// Per-invocation failure, converted into exactly one chat reply.
///
/// Whatever goes wrong, nothing propagates past the reactor and nothing is
/// retried.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The Amap API key is not configured. Reported before any external call.
    #[error("⚠️ 未配置高德地图 API Key，请检查配置。")]
    MissingApiKey,

    /// The command text does not match the expected shape. The usage text is
    /// reported to the user verbatim.
    #[error("⚠️ 命令格式错误，请使用 {usage}。")]
    BadFormat { usage: &'static str },

    /// A command that needs an implied origin has no fixed location to fall
    /// back to. The bot never guesses.
    #[error("⚠️ 尚未设置常用位置，请先使用 /setlocation <位置> 进行设置。")]
    MissingFixedLocation,

    /// Geocoding the name yielded no hit.
    #[error("⚠️ 无法找到「{0}」的位置，请检查地名。")]
    PlaceNotFound(String),

    /// Network, HTTP or payload failure, reported with the underlying cause.
    #[error("💥 请求失败：{0:#}")]
    Transport(#[from] anyhow::Error),
}

impl From<crate::amap::error::Error> for CommandError {
    fn from(error: crate::amap::error::Error) -> Self {
        Self::Transport(error.into())
    }
}
