//! Per-connection session state.

use chatter_proto::Color;
use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;
use tracing::debug;

/// Capacity of a session's outbound queue. A recipient that falls this
/// far behind starts losing lines rather than stalling its senders.
pub const OUTBOX_CAPACITY: usize = 64;

/// Process-unique session identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

impl SessionId {
    /// Allocate the next identifier.
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

/// Server-side state for one connected user.
///
/// The username is the session's key in the roster while registered; the
/// roster updates it under its own lock during a rename. The outbound
/// queue is the only way anything is written to this user: the connection
/// task drains it onto the socket, which serializes concurrent writers.
pub struct Session {
    id: SessionId,
    name: RwLock<String>,
    color: RwLock<Color>,
    outbox: mpsc::Sender<String>,
}

impl Session {
    /// Create a session with its registered username and outbound queue.
    pub fn new(name: String, outbox: mpsc::Sender<String>) -> Self {
        Self {
            id: SessionId::next(),
            name: RwLock::new(name),
            color: RwLock::new(Color::default()),
            outbox,
        }
    }

    /// The session identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Current username.
    pub fn name(&self) -> String {
        self.name.read().clone()
    }

    pub(crate) fn set_name(&self, name: &str) {
        *self.name.write() = name.to_string();
    }

    /// Current display color.
    pub fn color(&self) -> Color {
        *self.color.read()
    }

    /// Update the display color.
    pub fn set_color(&self, color: Color) {
        *self.color.write() = color;
    }

    /// Queue a formatted display line for this session.
    ///
    /// Never blocks: a full or closed queue drops the line so one slow or
    /// dead recipient cannot stall delivery to anyone else. Returns whether
    /// the line was accepted.
    pub fn send_line(&self, line: String) -> bool {
        match self.outbox.try_send(line) {
            Ok(()) => true,
            Err(e) => {
                debug!(session = %self.id, name = %self.name(), error = %e, "Dropped outbound line");
                false
            }
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("name", &self.name())
            .field("color", &self.color())
            .finish()
    }
}
