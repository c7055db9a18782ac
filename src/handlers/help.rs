//! Help handler.

use super::{Context, Handler};
use crate::error::HandlerResult;
use async_trait::async_trait;

/// Usage summary sent to the requesting session only.
const HELP_TEXT: &str = "\
Available commands:
-hp: Display this help message.
-dm [username] [message]: Send a private message to the specified user.
-cu [new_username]: Change your username.
-mg [group_name] [members ...]: Create a private group chat.
-sg [group_name] [message]: Send a message to the specified group of users.
-la: Display the names of the different ascii art available.
-pa [name_of_ascii_art]: Send a reaction to all users via some predefined ascii art.
-sc [color]: Change the color of the user in the chat.
exit: Ends the chatting session.
Type any message to send it to all users in the chat.";

/// Handler for `-hp`.
pub struct HelpHandler;

#[async_trait]
impl Handler for HelpHandler {
    async fn handle(&self, ctx: &Context<'_>, _line: &str) -> HandlerResult {
        ctx.hub.reply(ctx.session, HELP_TEXT);
        Ok(())
    }
}
