//! The Hub - central shared state plus the broadcaster.
//!
//! Every connection task holds an `Arc<Hub>`; the registries inside take
//! care of their own locking, so the hub itself is plain shared data. The
//! delivery helpers here are the single place lines get their color
//! formatting before they reach an outbound queue.

use crate::state::groups::GroupRegistry;
use crate::state::roster::Roster;
use crate::state::session::{Session, SessionId};
use chatter_proto::{colors, Color};
use std::sync::Arc;

/// Central shared state for the chat daemon.
#[derive(Default)]
pub struct Hub {
    /// Registry of connected sessions.
    pub roster: Roster,
    /// Registry of groups.
    pub groups: GroupRegistry,
}

impl Hub {
    /// Create an empty hub.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a line to a set of sessions.
    ///
    /// The line is formatted once with `color` (the sender's current color)
    /// and a trailing reset, then written to each target's outbound queue.
    /// A failed write to one target never aborts delivery to the rest; the
    /// drop is logged inside [`Session::send_line`].
    pub fn deliver(
        &self,
        targets: &[Arc<Session>],
        text: &str,
        color: Color,
        exclude: Option<SessionId>,
    ) {
        let line = colors::paint(color, text);
        for target in targets {
            if exclude.is_some_and(|id| id == target.id()) {
                continue;
            }
            target.send_line(line.clone());
        }
    }

    /// Broadcast a line to every active session except the sender, painted
    /// in the sender's current color.
    pub fn broadcast(&self, text: &str, sender: &Arc<Session>) {
        self.deliver(
            &self.roster.snapshot(),
            text,
            sender.color(),
            Some(sender.id()),
        );
    }

    /// Send a line to one session, painted in its own current color.
    pub fn reply(&self, session: &Arc<Session>, text: &str) {
        session.send_line(colors::paint(session.color(), text));
    }
}
