//! chatterd - a small framed-text chat daemon.
//!
//! Sessions connect over TCP, identify with a username frame, and exchange
//! broadcast, direct and group messages through a two-character command
//! protocol. The library target exists so the integration suite can spawn
//! a server in-process; the `chatterd` binary is a thin wrapper around
//! [`network::Gateway`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod network;
pub mod state;
