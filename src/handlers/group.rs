//! Group handlers: creation and group messaging.

use super::{Context, Handler};
use crate::error::{HandlerError, HandlerResult};
use async_trait::async_trait;
use chatter_proto::command::{payload, tokens};
use tracing::info;

const MG_USAGE: &str = "Invalid command. Usage: -mg [name_of_group] [members ...]";
const SG_USAGE: &str = "Invalid command. Usage: -sg [name_of_group] [message]";

/// Handler for `-mg <group> <member>...`.
pub struct MakeGroupHandler;

#[async_trait]
impl Handler for MakeGroupHandler {
    async fn handle(&self, ctx: &Context<'_>, line: &str) -> HandlerResult {
        let toks = tokens(line);
        if toks.len() < 3 {
            return Err(HandlerError::Usage(MG_USAGE));
        }
        let group_name = toks[1];

        let outcome =
            ctx.hub
                .groups
                .create(group_name, ctx.session, &toks[2..], &ctx.hub.roster)?;
        info!(
            group = %group_name,
            creator = %ctx.session.name(),
            members = outcome.added.len() + 1,
            "Group created"
        );

        let creator = ctx.session.name();
        for member in &outcome.added {
            ctx.hub.deliver(
                std::slice::from_ref(member),
                &format!("You have been added to the group {group_name} by {creator}"),
                ctx.session.color(),
                None,
            );
        }
        for missing in &outcome.missing {
            ctx.hub.reply(
                ctx.session,
                &format!("Member {missing} is not connected, impossible to add him in the chat"),
            );
        }
        ctx.hub
            .reply(ctx.session, &format!("You have created the group {group_name}"));
        Ok(())
    }
}

/// Handler for `-sg <group> <text>`.
///
/// Delivery includes the sender itself: a group message echoes back to
/// its author, unlike plain broadcast.
pub struct SendGroupHandler;

#[async_trait]
impl Handler for SendGroupHandler {
    async fn handle(&self, ctx: &Context<'_>, line: &str) -> HandlerResult {
        let toks = tokens(line);
        if toks.len() < 3 {
            return Err(HandlerError::Usage(SG_USAGE));
        }
        let group_name = toks[1];
        let text = payload(line, 2).unwrap_or_default();

        let members = ctx.hub.groups.members_for(group_name, ctx.session)?;

        let sender = ctx.session.name();
        let out = format!("{sender} [Group {group_name} from {sender}]: {text}");
        ctx.hub
            .deliver(&members, &out, ctx.session.color(), None);
        Ok(())
    }
}
