//! Direct messaging.

use super::{Context, Handler};
use crate::error::{HandlerError, HandlerResult};
use async_trait::async_trait;
use chatter_proto::command::{payload, tokens};

const DM_USAGE: &str = "Invalid command. Usage: -dm [receiver] [message]";

/// Handler for `-dm <user> <text>`.
///
/// Delivers the text to the named session only, painted in the sender's
/// color. The payload is the raw remainder of the line, so interior
/// whitespace reaches the receiver exactly as typed.
pub struct DirectHandler;

#[async_trait]
impl Handler for DirectHandler {
    async fn handle(&self, ctx: &Context<'_>, line: &str) -> HandlerResult {
        let toks = tokens(line);
        if toks.len() < 3 {
            return Err(HandlerError::Usage(DM_USAGE));
        }

        let receiver = toks[1];
        let text = payload(line, 2).unwrap_or_default();

        let target = ctx
            .hub
            .roster
            .lookup(receiver)
            .ok_or(HandlerError::ReceiverNotConnected)?;

        let out = format!("[Private message from {}] {}", ctx.session.name(), text);
        ctx.hub
            .deliver(&[target], &out, ctx.session.color(), None);
        Ok(())
    }
}
