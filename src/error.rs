//! Unified error handling for chatterd.
//!
//! Every failure a command handler can hit is scoped to a single session
//! or a single operation: validation, lookup and conflict errors turn into
//! a reply to the sender and nothing else, while connection errors tear
//! down exactly one session. Nothing here is fatal to the process.

use chatter_proto::{Color, Verb};
use thiserror::Error;

/// Errors that can occur during command handling.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Wrong token count for a verb; carries that verb's full usage reply.
    #[error("{0}")]
    Usage(&'static str),

    /// The two-character tag named no verb in the closed set.
    #[error("unknown command tag")]
    UnknownCommand,

    /// Direct-message target is not a registered username.
    #[error("receiver not connected")]
    ReceiverNotConnected,

    /// Requested color is not in the catalog.
    #[error("unknown color: {0}")]
    UnknownColor(String),

    /// Requested art entry is not in the catalog.
    #[error("unknown art: {0}")]
    UnknownArt(String),

    /// Group operation failed.
    #[error(transparent)]
    Group(#[from] GroupError),
}

/// Group registry operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    /// A group with this name already exists; creation aborted.
    #[error("group {0} already exists")]
    AlreadyExists(String),

    /// No group with this name.
    #[error("group {0} not found")]
    NotFound(String),

    /// The sender is not in the group's membership list.
    #[error("not a member of group {0}")]
    NotAMember(String),
}

impl HandlerError {
    /// The reply shown to the sender, if this error warrants one.
    ///
    /// All of these are non-fatal: the reply goes to the sender only and
    /// no state was mutated.
    pub fn reply(&self) -> Option<String> {
        match self {
            Self::Usage(usage) => Some(usage.to_string()),
            Self::UnknownCommand => {
                Some(format!(
                    "Wrong option, type -{} if you need help.",
                    Verb::Help.tag()
                ))
            }
            Self::ReceiverNotConnected => {
                Some("Message not sent, the receiver isn't connected.".to_string())
            }
            Self::UnknownColor(name) => {
                // List every available color, each rendered in its own code
                let mut reply = format!("Invalid color: {name}. Available colors are: ");
                for color in Color::ALL {
                    reply.push_str(color.code());
                    reply.push_str(color.name());
                    reply.push(' ');
                }
                Some(reply)
            }
            Self::UnknownArt(name) => Some(format!(
                "ASCII art not found: {name}. Write -{} to list all ascii art available.",
                Verb::ListArt.tag()
            )),
            Self::Group(e) => Some(match e {
                GroupError::AlreadyExists(name) => format!(
                    "You cannot create the group {name}, a group with the same name already exists."
                ),
                GroupError::NotFound(name) => format!("Group {name} not found."),
                GroupError::NotAMember(name) => {
                    format!("You are not a member of Group {name}.")
                }
            }),
        }
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;
