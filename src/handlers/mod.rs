//! Chat command handlers.
//!
//! This module contains the Handler trait and the verb registry that
//! dispatches each received line. A line that does not start with the
//! command marker is chat text and goes straight to broadcast; a marked
//! line selects a handler by its two-character tag. The verb set is
//! closed: the registry is built once at startup and covers it exactly.

mod art;
mod group;
mod help;
mod messaging;
mod user;

pub use art::{ListArtHandler, PrintArtHandler};
pub use group::{MakeGroupHandler, SendGroupHandler};
pub use help::HelpHandler;
pub use messaging::DirectHandler;
pub use user::{RenameHandler, SetColorHandler};

use crate::error::{HandlerError, HandlerResult};
use crate::state::{Hub, Session};
use async_trait::async_trait;
use chatter_proto::{classify, LineKind, Verb};
use std::collections::HashMap;
use std::sync::Arc;

/// Handler context passed to each command handler.
pub struct Context<'a> {
    /// The session that sent the line.
    pub session: &'a Arc<Session>,
    /// Shared server state.
    pub hub: &'a Arc<Hub>,
}

/// Trait implemented by all command handlers.
///
/// Handlers receive the full original line: each one validates its own
/// minimum token count, and payload-carrying verbs recover the raw text
/// after their header tokens.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Handle one command line.
    async fn handle(&self, ctx: &Context<'_>, line: &str) -> HandlerResult;
}

/// Registry of command handlers, keyed by verb.
pub struct Registry {
    handlers: HashMap<Verb, Box<dyn Handler>>,
}

impl Registry {
    /// Create a new registry with all handlers registered.
    pub fn new() -> Self {
        let mut handlers: HashMap<Verb, Box<dyn Handler>> = HashMap::new();

        handlers.insert(Verb::Help, Box::new(HelpHandler));
        handlers.insert(Verb::Direct, Box::new(DirectHandler));
        handlers.insert(Verb::Rename, Box::new(RenameHandler));
        handlers.insert(Verb::MakeGroup, Box::new(MakeGroupHandler));
        handlers.insert(Verb::SendGroup, Box::new(SendGroupHandler));
        handlers.insert(Verb::SetColor, Box::new(SetColorHandler));
        handlers.insert(Verb::ListArt, Box::new(ListArtHandler));
        handlers.insert(Verb::PrintArt, Box::new(PrintArtHandler));

        debug_assert!(
            Verb::ALL.iter().all(|v| handlers.contains_key(v)),
            "every verb in the closed set needs a handler"
        );

        Self { handlers }
    }

    /// Classify a received line and route it.
    ///
    /// Chat text is broadcast as `"<name>: <text>"`, excluding the sender.
    /// Errors are returned to the caller, which turns them into a reply to
    /// the sender only.
    pub async fn dispatch(&self, ctx: &Context<'_>, line: &str) -> HandlerResult {
        match classify(line) {
            LineKind::Chat(text) => {
                let out = format!("{}: {}", ctx.session.name(), text);
                ctx.hub.broadcast(&out, ctx.session);
                Ok(())
            }
            LineKind::Command { tag } => {
                let verb = Verb::from_tag(tag).ok_or(HandlerError::UnknownCommand)?;
                let handler = self
                    .handlers
                    .get(&verb)
                    .ok_or(HandlerError::UnknownCommand)?;
                handler.handle(ctx, line).await
            }
            LineKind::Malformed => Err(HandlerError::UnknownCommand),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
