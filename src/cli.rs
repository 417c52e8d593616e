use std::path::PathBuf;

use clap::{Parser, Subcommand};
use secrecy::SecretString;
use url::Url;

#[derive(Parser)]
#[command(author, version, about, long_about = None, propagate_version = true)]
pub struct Cli {
    /// Sentry DSN for error reporting.
    #[clap(long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Telegram bot API token.
    #[clap(long, env = "BOT_TOKEN")]
    pub bot_token: SecretString,

    /// Amap (高德地图) Web service API key.
    ///
    /// When missing, every map command replies with a configuration error.
    #[clap(long, env = "AMAP_API_KEY")]
    pub amap_api_key: Option<SecretString>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the bot.
    Run(RunArgs),

    /// Test the Telegram bot API token.
    GetMe,

    /// Manually geocode an address.
    Geocode { address: String },
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// SQLite database path.
    #[clap(long, env = "DB", default_value = "amapbot.sqlite3")]
    pub db: PathBuf,

    /// Long polling timeout for `getUpdates`.
    #[clap(long, env = "POLL_TIMEOUT_SECS", default_value = "60")]
    pub poll_timeout_secs: u64,

    /// Base URL of an OpenAI-compatible completion endpoint, for example
    /// `https://api.openai.com/v1`.
    ///
    /// When missing, summaries fall back to a plain rendering.
    #[clap(long, env = "LLM_BASE_URL")]
    pub llm_base_url: Option<Url>,

    /// API key for the completion endpoint.
    #[clap(long, env = "LLM_API_KEY")]
    pub llm_api_key: Option<SecretString>,

    /// Model requested from the completion endpoint.
    #[clap(long, env = "LLM_MODEL", default_value = "gpt-4o-mini")]
    pub llm_model: String,
}
