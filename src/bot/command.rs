//! Chat command grammar.
//!
//! A command is a `/verb` followed by either one free-text argument, or two
//! arguments separated by the reserved `to` token. Parsing is a pure function
//! with no framework dependency.

use crate::bot::error::CommandError;

pub const GO_USAGE: &str = "/go <终点> 或 /go <起点> to <终点>";
pub const DD_USAGE: &str = "/dd <终点> 或 /dd <起点> to <终点>";
pub const SO_USAGE: &str = "/so <关键词>";
pub const SETLOCATION_USAGE: &str = "/setlocation <位置>";

/// Parsed chat command, alive for one invocation.
#[derive(Debug, Eq, PartialEq)]
#[must_use]
pub enum ParsedCommand {
    Start,

    /// `/so <keyword>`: points of interest around the fixed location.
    SearchNearby { keyword: String },

    /// `/go`: driving distance and time.
    Route { origin: Option<String>, destination: String },

    /// `/dd`: driving route with traffic conditions.
    Traffic { origin: Option<String>, destination: String },

    /// `/setlocation <name>`: overwrite the fixed location.
    SetLocation { name: String },

    Unknown,
}

impl ParsedCommand {
    /// Parse the raw message text.
    ///
    /// Returns [`None`] for ordinary, non-command messages.
    pub fn parse(text: &str) -> Option<Result<Self, CommandError>> {
        let text = text.trim().strip_prefix('/')?;
        let (verb, remainder) = match text.split_once(char::is_whitespace) {
            Some((verb, remainder)) => (verb, remainder.trim()),
            None => (text, ""),
        };
        // In group chats the verb carries the bot's username.
        let verb = verb.split_once('@').map_or(verb, |(verb, _)| verb);
        let parsed = match verb {
            "start" | "help" => Ok(Self::Start),
            "so" => one_argument(remainder, SO_USAGE).map(|keyword| Self::SearchNearby { keyword }),
            "setlocation" => {
                one_argument(remainder, SETLOCATION_USAGE).map(|name| Self::SetLocation { name })
            }
            "go" => endpoints(remainder, GO_USAGE)
                .map(|(origin, destination)| Self::Route { origin, destination }),
            "dd" => endpoints(remainder, DD_USAGE)
                .map(|(origin, destination)| Self::Traffic { origin, destination }),
            _ => Ok(Self::Unknown),
        };
        Some(parsed)
    }
}

/// The whole trimmed remainder is one free-text argument.
fn one_argument(remainder: &str, usage: &'static str) -> Result<String, CommandError> {
    if remainder.is_empty() {
        Err(CommandError::BadFormat { usage })
    } else {
        Ok(remainder.to_string())
    }
}

/// Either `<destination>`, or `<origin> to <destination>`.
///
/// The literal token `to` is the only recognized separator. Any other token
/// count is a format error.
fn endpoints(
    remainder: &str,
    usage: &'static str,
) -> Result<(Option<String>, String), CommandError> {
    let tokens: Vec<&str> = remainder.split_whitespace().collect();
    match tokens.as_slice() {
        [destination] => Ok((None, (*destination).to_string())),
        [origin, "to", destination] => {
            Ok((Some((*origin).to_string()), (*destination).to_string()))
        }
        _ => Err(CommandError::BadFormat { usage }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_command_is_none() {
        assert!(ParsedCommand::parse("随便聊聊").is_none());
        assert!(ParsedCommand::parse("").is_none());
    }

    #[test]
    fn unknown_command_ok() {
        assert_eq!(ParsedCommand::parse("/frobnicate").unwrap().unwrap(), ParsedCommand::Unknown);
    }

    #[test]
    fn search_nearby_keeps_free_text() {
        assert_eq!(
            ParsedCommand::parse("/so 便利店 24小时").unwrap().unwrap(),
            ParsedCommand::SearchNearby { keyword: "便利店 24小时".to_string() },
        );
    }

    #[test]
    fn search_nearby_without_keyword_is_format_error() {
        assert!(matches!(
            ParsedCommand::parse("/so").unwrap(),
            Err(CommandError::BadFormat { usage: SO_USAGE }),
        ));
    }

    #[test]
    fn route_with_implied_origin_ok() {
        assert_eq!(
            ParsedCommand::parse("/go 天安门").unwrap().unwrap(),
            ParsedCommand::Route { origin: None, destination: "天安门".to_string() },
        );
    }

    #[test]
    fn route_with_explicit_origin_ok() {
        assert_eq!(
            ParsedCommand::parse("/go 望京 to 天安门").unwrap().unwrap(),
            ParsedCommand::Route {
                origin: Some("望京".to_string()),
                destination: "天安门".to_string(),
            },
        );
    }

    #[test]
    fn route_with_wrong_separator_is_format_error() {
        assert!(matches!(
            ParsedCommand::parse("/go 望京 往 天安门").unwrap(),
            Err(CommandError::BadFormat { usage: GO_USAGE }),
        ));
    }

    #[test]
    fn route_with_too_many_tokens_is_format_error() {
        assert!(matches!(
            ParsedCommand::parse("/dd 望京 to 天安门 快点").unwrap(),
            Err(CommandError::BadFormat { usage: DD_USAGE }),
        ));
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(
            ParsedCommand::parse("  /setlocation   望京  ").unwrap().unwrap(),
            ParsedCommand::SetLocation { name: "望京".to_string() },
        );
    }

    #[test]
    fn group_chat_mention_is_stripped() {
        assert_eq!(
            ParsedCommand::parse("/go@amapbot 天安门").unwrap().unwrap(),
            ParsedCommand::Route { origin: None, destination: "天安门".to_string() },
        );
    }
}
