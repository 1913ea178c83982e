#![forbid(unsafe_code)]

//! Line commands read from stdin and applied to a session.

use ui_state::{FeedbackId, UiSession};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        kind: String,
        status: String,
        message: String,
    },
    Remove(FeedbackId),
    Refresh,
    Banner(bool),
    Show,
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    Usage(&'static str),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::Unknown(word) => write!(f, "unknown command: {word}"),
            Self::Usage(usage) => write!(f, "usage: {usage}"),
        }
    }
}

impl std::error::Error for CommandError {}

/// Split off the first whitespace-delimited word, skipping any run of
/// whitespace around it.
fn next_word(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }
    Some(match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (text, ""),
    })
}

impl Command {
    /// Parse a single line. The message of `add` is the rest of the line,
    /// spaces included.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim_start()),
            None => (line, ""),
        };
        match word {
            "" => Err(CommandError::Empty),
            "add" => {
                let usage = CommandError::Usage("add <type> <status> <message...>");
                let (kind, rest) = next_word(rest).ok_or(usage.clone())?;
                let (status, message) = next_word(rest).ok_or(usage)?;
                Ok(Self::Add {
                    kind: kind.to_string(),
                    status: status.to_string(),
                    message: message.to_string(),
                })
            }
            "remove" => rest
                .parse()
                .map(Self::Remove)
                .map_err(|_| CommandError::Usage("remove <id>")),
            "refresh" => Ok(Self::Refresh),
            "banner" => match rest {
                "on" => Ok(Self::Banner(true)),
                "off" => Ok(Self::Banner(false)),
                _ => Err(CommandError::Usage("banner on|off")),
            },
            "show" => Ok(Self::Show),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }

    /// Apply to `session`. Returns `true` when a snapshot should be printed.
    pub fn apply(&self, session: &UiSession) -> bool {
        match self {
            Self::Add {
                kind,
                status,
                message,
            } => {
                session
                    .feedback()
                    .add_feedback(kind.as_str(), status.as_str(), message.as_str());
            }
            Self::Remove(id) => {
                if session.feedback().remove_feedback(*id).is_none() {
                    tracing::warn!(id, "no feedback entry to remove");
                }
            }
            Self::Refresh => session.refresh().refresh(),
            Self::Banner(visible) => session.banner().set_banner_visible(*visible),
            Self::Show => {}
            Self::Quit => return false,
        }
        true
    }
}
