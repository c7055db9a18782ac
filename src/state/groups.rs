//! The group registry.
//!
//! Groups are named, process-lifetime subsets of sessions. Membership is
//! ordered with the creator first. A member that disconnects is pruned
//! from every group it belongs to, and a group left empty disappears.

use crate::error::GroupError;
use crate::state::roster::Roster;
use crate::state::session::Session;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

struct Group {
    members: Vec<Arc<Session>>,
    #[allow(dead_code)]
    created: i64,
}

/// What `create` resolved, so the caller can notify the right people.
#[derive(Debug)]
pub struct CreateOutcome {
    /// Members that were found and added (creator not included).
    pub added: Vec<Arc<Session>>,
    /// Requested names that were not connected. Creation proceeded anyway.
    pub missing: Vec<String>,
}

/// Process-wide mapping from group name to membership.
#[derive(Default)]
pub struct GroupRegistry {
    inner: Mutex<HashMap<String, Group>>,
}

impl GroupRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a group.
    ///
    /// Fails with [`GroupError::AlreadyExists`] if the name is taken, in
    /// which case nothing is mutated - the existing group's membership is
    /// untouched. Otherwise the membership list starts with the creator,
    /// followed by every requested name the roster could resolve; names it
    /// could not resolve are reported back without aborting creation.
    pub fn create(
        &self,
        name: &str,
        creator: &Arc<Session>,
        member_names: &[&str],
        roster: &Roster,
    ) -> Result<CreateOutcome, GroupError> {
        let mut groups = self.inner.lock();
        if groups.contains_key(name) {
            return Err(GroupError::AlreadyExists(name.to_string()));
        }

        let mut members = vec![Arc::clone(creator)];
        let mut added = Vec::new();
        let mut missing = Vec::new();
        for &requested in member_names {
            match roster.lookup(requested) {
                Some(session) => {
                    if !members.iter().any(|m| m.id() == session.id()) {
                        members.push(Arc::clone(&session));
                        added.push(session);
                    }
                }
                None => missing.push(requested.to_string()),
            }
        }

        groups.insert(
            name.to_string(),
            Group {
                members,
                created: chrono::Utc::now().timestamp(),
            },
        );
        Ok(CreateOutcome { added, missing })
    }

    /// Membership snapshot for delivering a group message.
    ///
    /// The sender must be a member; the snapshot includes the sender, so a
    /// group message echoes back to its author.
    pub fn members_for(
        &self,
        name: &str,
        sender: &Arc<Session>,
    ) -> Result<Vec<Arc<Session>>, GroupError> {
        let groups = self.inner.lock();
        let group = groups
            .get(name)
            .ok_or_else(|| GroupError::NotFound(name.to_string()))?;
        if !group.members.iter().any(|m| m.id() == sender.id()) {
            return Err(GroupError::NotAMember(name.to_string()));
        }
        Ok(group.members.clone())
    }

    /// Remove a disconnecting session from every group. Groups with no
    /// remaining members are dropped.
    pub fn prune(&self, session: &Arc<Session>) {
        let mut groups = self.inner.lock();
        groups.retain(|_, group| {
            group.members.retain(|m| m.id() != session.id());
            !group.members.is_empty()
        });
    }

    /// Number of groups currently registered.
    pub fn count(&self) -> usize {
        self.inner.lock().len()
    }
}
