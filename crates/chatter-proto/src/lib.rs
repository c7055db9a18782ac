//! # chatter-proto
//!
//! Wire framing, command grammar and display catalogs for the chatterd
//! chat protocol.
//!
//! ## The wire format
//!
//! A connection carries a stream of discrete text frames. Each frame is a
//! 2-byte big-endian length prefix (count of encoded bytes) followed by
//! UTF-8 text. The very first frame a client sends is its username; every
//! later client frame is either plain chat text or a command line, and
//! every server frame is a fully formatted display line.
//!
//! ## Quick start
//!
//! ```rust
//! use chatter_proto::{classify, LineKind, Verb};
//!
//! assert!(matches!(classify("hello all"), LineKind::Chat("hello all")));
//! assert!(matches!(classify("-dm bob hi"), LineKind::Command { tag: "dm" }));
//! assert_eq!(Verb::from_tag("dm"), Some(Verb::Direct));
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod art;
pub mod colors;
pub mod command;
pub mod error;
#[cfg(feature = "tokio")]
pub mod frame;

pub use self::art::ArtCatalog;
pub use self::colors::Color;
pub use self::command::{classify, payload, tokens, LineKind, Verb, COMMAND_MARKER, EXIT_KEYWORD};
pub use self::error::ProtocolError;
#[cfg(feature = "tokio")]
pub use self::frame::FrameCodec;
