//! Session-mutating handlers: rename and color change.

use super::{Context, Handler};
use crate::error::{HandlerError, HandlerResult};
use async_trait::async_trait;
use chatter_proto::command::tokens;
use chatter_proto::Color;
use tracing::info;

const CU_USAGE: &str = "Invalid command. Usage: -cu [username]";
const SC_USAGE: &str = "Invalid color command. Usage: -sc [color]";

/// Handler for `-cu <name>`.
pub struct RenameHandler;

#[async_trait]
impl Handler for RenameHandler {
    async fn handle(&self, ctx: &Context<'_>, line: &str) -> HandlerResult {
        let toks = tokens(line);
        if toks.len() != 2 {
            return Err(HandlerError::Usage(CU_USAGE));
        }
        let new_name = toks[1];

        let old_name = ctx.session.name();
        ctx.hub.roster.rename(ctx.session, new_name);
        info!(old = %old_name, new = %new_name, "Username changed");

        ctx.hub.broadcast(
            &format!("{old_name} changed its username to {new_name}"),
            ctx.session,
        );
        Ok(())
    }
}

/// Handler for `-sc <color>`.
pub struct SetColorHandler;

#[async_trait]
impl Handler for SetColorHandler {
    async fn handle(&self, ctx: &Context<'_>, line: &str) -> HandlerResult {
        let toks = tokens(line);
        if toks.len() != 2 {
            return Err(HandlerError::Usage(SC_USAGE));
        }

        let color = Color::from_name(toks[1])
            .ok_or_else(|| HandlerError::UnknownColor(toks[1].to_uppercase()))?;

        ctx.session.set_color(color);
        ctx.hub
            .reply(ctx.session, &format!("Color changed to {}", color.name()));
        Ok(())
    }
}
