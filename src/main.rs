mod amap;
mod bot;
mod cli;
mod client;
mod db;
mod llm;
mod math;
mod prelude;
mod serde;
mod summary;
mod telegram;
mod tracing;

use clap::Parser;
use futures::TryStreamExt;

use crate::{
    amap::Amap,
    bot::Reactor,
    cli::{Cli, Command, RunArgs},
    db::Db,
    llm::Llm,
    prelude::*,
    summary::Summarizer,
    telegram::{Telegram, methods::Method},
};

#[tokio::main]
async fn main() -> Result {
    let cli = Cli::parse();
    let (_sentry_guard, _tracing_guard) = tracing::init(cli.sentry_dsn.as_deref())?;
    let client = client::build()?;
    let amap = cli
        .amap_api_key
        .map(|api_key| Amap::new(client.clone(), api_key))
        .transpose()?;
    let telegram = Telegram::new(client.clone(), cli.bot_token)?;

    match cli.command {
        Command::Run(args) => run(client, telegram, amap, args).await,
        Command::GetMe => {
            let me = telegram::methods::GetMe.call_on(&telegram).await?;
            info!(me.id, username = ?me.username, "Verified the token");
            Ok(())
        }
        Command::Geocode { address } => {
            let amap = amap.context("`AMAP_API_KEY` is not set")?;
            match amap.geocode(&address).await? {
                Some(coordinate) => info!(address, %coordinate, "Resolved"),
                None => warn!(address, "No geocoding hit"),
            }
            Ok(())
        }
    }
}

async fn run(
    client: reqwest::Client,
    telegram: Telegram,
    amap: Option<Amap>,
    args: RunArgs,
) -> Result {
    if amap.is_none() {
        warn!("⚠️ Amap API key is not configured, map commands will be rejected");
    }
    let db = Db::new(&args.db).await?;
    let llm = match (args.llm_base_url, args.llm_api_key) {
        (Some(base_url), Some(api_key)) => {
            Some(Llm::new(client, base_url, api_key, args.llm_model)?)
        }
        _ => {
            warn!("⚠️ LLM provider is not configured, falling back to plain summaries");
            None
        }
    };

    bot::try_init(&telegram).await?;
    let reactor = Reactor::builder()
        .db(db)
        .maybe_amap(amap)
        .summarizer(Summarizer::new(llm))
        .build();

    info!("Running…");
    let updates = telegram.clone().into_updates(0, args.poll_timeout_secs);
    let telegram = &telegram;
    reactor
        .run(updates)
        .try_for_each(|reactions| async move {
            for reaction in reactions {
                reaction.call_on(telegram).await?;
            }
            Ok(())
        })
        .await
        .context("the bot stopped")
}
