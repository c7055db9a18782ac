//! ASCII-art handlers: catalog listing and reaction broadcast.

use super::{Context, Handler};
use crate::error::{HandlerError, HandlerResult};
use async_trait::async_trait;
use chatter_proto::command::tokens;
use chatter_proto::ArtCatalog;

const PA_USAGE: &str = "Invalid command. Usage: -pa [name_of_ascii_art]";

/// Handler for `-la`.
pub struct ListArtHandler;

#[async_trait]
impl Handler for ListArtHandler {
    async fn handle(&self, ctx: &Context<'_>, _line: &str) -> HandlerResult {
        let mut listing = String::from("Available ascii art are: ");
        for (name, text) in ArtCatalog::entries() {
            listing.push_str(name);
            listing.push_str(" : ");
            listing.push_str(text);
        }
        ctx.hub.reply(ctx.session, &listing);
        Ok(())
    }
}

/// Handler for `-pa <name>`.
///
/// A hit broadcasts the art to everyone else, attributed to the sender;
/// the sender does not see its own reaction.
pub struct PrintArtHandler;

#[async_trait]
impl Handler for PrintArtHandler {
    async fn handle(&self, ctx: &Context<'_>, line: &str) -> HandlerResult {
        let toks = tokens(line);
        if toks.len() != 2 {
            return Err(HandlerError::Usage(PA_USAGE));
        }

        let (_, art) = ArtCatalog::lookup(toks[1])
            .ok_or_else(|| HandlerError::UnknownArt(toks[1].to_uppercase()))?;

        let out = format!("[{}]\n{art}", ctx.session.name());
        ctx.hub.broadcast(&out, ctx.session);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{drain, join};
    use super::*;
    use crate::state::Hub;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_list_art_names_every_entry() {
        let hub = Arc::new(Hub::new());
        let (alice, mut alice_rx) = join(&hub, "alice");
        let ctx = Context {
            session: &alice,
            hub: &hub,
        };

        ListArtHandler.handle(&ctx, "-la").await.unwrap();

        let lines = drain(&mut alice_rx);
        assert_eq!(lines.len(), 1);
        for (name, _) in ArtCatalog::entries() {
            assert!(lines[0].contains(name));
        }
    }

    #[tokio::test]
    async fn test_print_art_broadcasts_with_attribution() {
        let hub = Arc::new(Hub::new());
        let (alice, mut alice_rx) = join(&hub, "alice");
        let (_bob, mut bob_rx) = join(&hub, "bob");
        let ctx = Context {
            session: &alice,
            hub: &hub,
        };

        PrintArtHandler.handle(&ctx, "-pa smile").await.unwrap();

        let lines = drain(&mut bob_rx);
        assert_eq!(lines.len(), 1);
        let (_, smile) = ArtCatalog::lookup("SMILE").unwrap();
        assert!(lines[0].starts_with("[alice]\n"));
        assert!(lines[0].contains(smile));

        // Broadcast excludes the sender
        assert!(drain(&mut alice_rx).is_empty());
    }

    #[tokio::test]
    async fn test_print_art_unknown_entry() {
        let hub = Arc::new(Hub::new());
        let (alice, _rx) = join(&hub, "alice");
        let ctx = Context {
            session: &alice,
            hub: &hub,
        };

        let err = PrintArtHandler.handle(&ctx, "-pa grumpy").await.unwrap_err();
        match err {
            HandlerError::UnknownArt(name) => assert_eq!(name, "GRUMPY"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
