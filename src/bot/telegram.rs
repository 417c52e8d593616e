//! Telegram [`Message`] reactor: one reply per incoming command.

use bon::Builder;
use futures::{Stream, TryStreamExt};

use crate::{
    amap::{Amap, driving::{Extensions, Path}, place::TextSearchRequest},
    bot::{
        command::ParsedCommand,
        error::{CommandError, CommandResult},
        resolve::{Endpoint, resolve_endpoints, resolve_one},
    },
    db::{
        Db,
        fixed_location::{FixedLocation, FixedLocations},
    },
    prelude::*,
    summary::{Summarizer, SummaryInput},
    telegram::{
        methods::SendMessage,
        objects::{ChatId, Message, ReplyParameters, Update},
        render,
    },
};

/// Reacts to incoming updates with [`SendMessage`] calls.
#[derive(Builder)]
pub struct Reactor {
    db: Db,
    amap: Option<Amap>,
    summarizer: Summarizer,
}

impl Reactor {
    /// Run the reactor over the update stream indefinitely.
    pub fn run<'s>(
        &'s self,
        updates: impl Stream<Item = Result<Update>> + 's,
    ) -> impl Stream<Item = Result<Vec<SendMessage>>> + 's {
        info!("Running the reactor…");
        updates
            .inspect_ok(|update| debug!(update.id, "Received update"))
            .try_filter_map(|update| async { Ok(Option::<Message>::from(update)) })
            .try_filter_map(|message| async move {
                if let (Some(chat), Some(text)) = (message.chat, message.text) {
                    Ok(Some((message.id, chat.id, text)))
                } else {
                    debug!(message.id, "Message without an associated chat or text");
                    Ok(None)
                }
            })
            .and_then(move |(message_id, chat_id, text)| async move {
                Ok(self.react(message_id, chat_id, text.as_str()).await)
            })
    }

    /// Handle one message, converting every failure into a chat reply.
    #[instrument(skip_all, fields(message_id = message_id, chat_id = %chat_id))]
    async fn react(&self, message_id: u64, chat_id: ChatId, text: &str) -> Vec<SendMessage> {
        let Some(parsed) = ParsedCommand::parse(text) else {
            return Vec::new(); // not a command, stay quiet
        };
        let reply_parameters = ReplyParameters::builder().message_id(message_id).build();
        let markup = match parsed {
            Ok(command) => self.handle(command).await,
            Err(error) => Err(error),
        }
        .unwrap_or_else(|error| {
            if let CommandError::Transport(error) = &error {
                error!("Failed to handle the message: {error:#}");
            }
            render::plain(&error.to_string())
        });
        vec![SendMessage::quick_html(chat_id, markup.into_string(), reply_parameters)]
    }

    async fn handle(&self, command: ParsedCommand) -> CommandResult<maud::Markup> {
        match command {
            ParsedCommand::Start => Ok(render::start()),
            ParsedCommand::Unknown => Ok(render::unknown_command()),
            ParsedCommand::SearchNearby { keyword } => self.on_search_nearby(&keyword).await,
            ParsedCommand::Route { origin, destination } => {
                self.on_route(origin, destination).await
            }
            ParsedCommand::Traffic { origin, destination } => {
                self.on_traffic(origin, destination).await
            }
            ParsedCommand::SetLocation { name } => self.on_set_location(name).await,
        }
    }

    /// `/so`: points of interest around the fixed location.
    #[instrument(skip_all, fields(keyword = keyword))]
    async fn on_search_nearby(&self, keyword: &str) -> CommandResult<maud::Markup> {
        let amap = self.amap()?;
        let fixed = self.fixed_location().await?.ok_or(CommandError::MissingFixedLocation)?;
        let request =
            TextSearchRequest::builder().keywords(keyword).location(&fixed.coordinate).build();
        let pois = amap.search_nearby(&request).await?;
        if pois.is_empty() {
            // A valid outcome, not an error.
            return Ok(render::nothing_nearby(keyword));
        }
        let summary = self
            .summarizer
            .summarize(&SummaryInput::Pois(&pois))
            .await
            .map_err(CommandError::Transport)?;
        Ok(render::nearby(keyword, &summary))
    }

    /// `/go`: distance and estimated time.
    #[instrument(skip_all)]
    async fn on_route(
        &self,
        origin: Option<String>,
        destination: String,
    ) -> CommandResult<maud::Markup> {
        let amap = self.amap()?;
        let fixed = self.fixed_location().await?;
        let (origin, destination) =
            resolve_endpoints(amap, fixed, origin, destination).await?;
        let path =
            best_path(amap.drive(&origin.coordinate, &destination.coordinate, Extensions::Base).await?.paths)?;
        Ok(render::route(&origin, &destination, &path))
    }

    /// `/dd`: route with traffic conditions, summarized.
    #[instrument(skip_all)]
    async fn on_traffic(
        &self,
        origin: Option<String>,
        destination: String,
    ) -> CommandResult<maud::Markup> {
        let amap = self.amap()?;
        let fixed = self.fixed_location().await?;
        let (origin, destination) =
            resolve_endpoints(amap, fixed, origin, destination).await?;
        let path =
            best_path(amap.drive(&origin.coordinate, &destination.coordinate, Extensions::All).await?.paths)?;
        let summary = self
            .summarizer
            .summarize(&SummaryInput::Route(&path))
            .await
            .map_err(CommandError::Transport)?;
        Ok(render::traffic(&origin, &destination, &summary))
    }

    /// `/setlocation`: geocode the name and overwrite the stored value.
    #[instrument(skip_all, fields(name = name))]
    async fn on_set_location(&self, name: String) -> CommandResult<maud::Markup> {
        let amap = self.amap()?;
        let Endpoint { name, coordinate } = resolve_one(amap, name).await?;
        let location = FixedLocation { name, coordinate };
        FixedLocations(&mut *self.db.connection().await)
            .upsert(&location)
            .await
            .map_err(CommandError::Transport)?;
        info!(location.name, %location.coordinate, "Stored the fixed location");
        Ok(render::location_set(&Endpoint {
            name: location.name,
            coordinate: location.coordinate,
        }))
    }

    fn amap(&self) -> CommandResult<&Amap> {
        self.amap.as_ref().ok_or(CommandError::MissingApiKey)
    }

    /// Load the stored fixed location, fresh for every invocation.
    async fn fixed_location(&self) -> CommandResult<Option<FixedLocation>> {
        FixedLocations(&mut *self.db.connection().await)
            .fetch()
            .await
            .map_err(CommandError::Transport)
    }
}

fn best_path(paths: Vec<Path>) -> CommandResult<Path> {
    paths
        .into_iter()
        .next()
        .ok_or_else(|| CommandError::Transport(anyhow!("the route contains no paths")))
}
