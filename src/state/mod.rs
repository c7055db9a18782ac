//! Shared server state.

mod groups;
mod hub;
mod roster;
mod session;

pub use groups::{CreateOutcome, GroupRegistry};
pub use hub::Hub;
pub use roster::Roster;
pub use session::{Session, SessionId, OUTBOX_CAPACITY};
