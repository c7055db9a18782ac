//! The roster - registry of connected sessions.
//!
//! One lock guards both the username map and the insertion-ordered active
//! list, so a rename can never interleave with a broadcast snapshot: an
//! observer sees the roster strictly before or strictly after the rename.

use crate::state::session::Session;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Default)]
struct Inner {
    /// Username -> session. Keys are unique at any instant; registering an
    /// existing name overwrites the routing entry (last writer wins).
    by_name: HashMap<String, Arc<Session>>,
    /// All active sessions in connection order, used for broadcast fan-out
    /// and headcount.
    active: Vec<Arc<Session>>,
}

/// Process-wide registry of connected sessions.
#[derive(Default)]
pub struct Roster {
    inner: RwLock<Inner>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session under its current username.
    ///
    /// An existing mapping for the same name is overwritten; the displaced
    /// session stays in the active list and keeps receiving broadcasts, it
    /// just stops being reachable by name.
    pub fn register(&self, session: &Arc<Session>) {
        let mut inner = self.inner.write();
        inner.by_name.insert(session.name(), Arc::clone(session));
        if !inner.active.iter().any(|s| s.id() == session.id()) {
            inner.active.push(Arc::clone(session));
        }
    }

    /// Atomically move a session's mapping to a new username.
    ///
    /// The session's own name field is updated after the map mutation,
    /// inside the same critical section, so a concurrent lookup never
    /// observes a half-applied rename. A mapping that no longer points at
    /// this session (it was displaced by a duplicate registration) is left
    /// untouched.
    pub fn rename(&self, session: &Arc<Session>, new_name: &str) {
        let mut inner = self.inner.write();
        let old_name = session.name();
        if inner
            .by_name
            .get(&old_name)
            .is_some_and(|s| s.id() == session.id())
        {
            inner.by_name.remove(&old_name);
        }
        inner
            .by_name
            .insert(new_name.to_string(), Arc::clone(session));
        session.set_name(new_name);
    }

    /// Remove a session from the name map and the active list.
    pub fn unregister(&self, session: &Arc<Session>) {
        let mut inner = self.inner.write();
        let name = session.name();
        if inner
            .by_name
            .get(&name)
            .is_some_and(|s| s.id() == session.id())
        {
            inner.by_name.remove(&name);
        }
        inner.active.retain(|s| s.id() != session.id());
    }

    /// Resolve a username to its session.
    pub fn lookup(&self, name: &str) -> Option<Arc<Session>> {
        self.inner.read().by_name.get(name).cloned()
    }

    /// Stable point-in-time copy of the active sessions, in connection
    /// order.
    pub fn snapshot(&self) -> Vec<Arc<Session>> {
        self.inner.read().active.clone()
    }

    /// Number of active sessions.
    pub fn count(&self) -> usize {
        self.inner.read().active.len()
    }
}
