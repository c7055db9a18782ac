//! Connection - handles an individual client session.
//!
//! Each Connection runs in its own Tokio task:
//!
//! ```text
//! Phase 1: Registration - the first frame is the username
//!    |
//! Phase 2: Receive loop (tokio::select!)
//!    - framed reads from the socket feed the command registry
//!    - the session's outbound queue drains onto the socket, so all
//!      writers to this client are serialized through one place
//! ```
//!
//! A read failure anywhere in phase 2 is an implicit disconnect: cleanup
//! runs exactly as if the client had sent the exit keyword, except the
//! leave notice is never broadcast twice.

use crate::handlers::{Context, Registry};
use crate::state::{Hub, Session, OUTBOX_CAPACITY};
use chatter_proto::{FrameCodec, EXIT_KEYWORD};
use futures_util::{SinkExt, StreamExt};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_util::codec::{FramedRead, FramedWrite};
use tracing::{debug, info, instrument, warn};

/// A client connection handler.
pub struct Connection {
    stream: TcpStream,
    addr: SocketAddr,
    hub: Arc<Hub>,
    registry: Arc<Registry>,
}

impl Connection {
    /// Create a new connection handler.
    pub fn new(
        stream: TcpStream,
        addr: SocketAddr,
        hub: Arc<Hub>,
        registry: Arc<Registry>,
    ) -> Self {
        Self {
            stream,
            addr,
            hub,
            registry,
        }
    }

    /// Run the connection until the client leaves or the socket fails.
    #[instrument(skip(self), fields(addr = %self.addr), name = "connection")]
    pub async fn run(self) -> anyhow::Result<()> {
        let (read_half, write_half) = self.stream.into_split();
        let mut reader = FramedRead::new(read_half, FrameCodec::new());
        let mut writer = FramedWrite::new(write_half, FrameCodec::new());

        // Phase 1: Registration. The first frame carries the username,
        // taken as-is.
        let name = match reader.next().await {
            Some(Ok(frame)) => frame,
            Some(Err(e)) => {
                warn!(error = %e, "Read error before registration");
                return Ok(());
            }
            None => {
                info!("Client disconnected before registration");
                return Ok(());
            }
        };

        let (outgoing_tx, mut outgoing_rx) = mpsc::channel::<String>(OUTBOX_CAPACITY);
        let session = Arc::new(Session::new(name.clone(), outgoing_tx));
        self.hub.roster.register(&session);
        info!(name = %name, session = %session.id(), "Session registered");

        self.hub
            .reply(&session, &format!("Thank you for joining the chat, {name}."));
        self.hub
            .broadcast(&format!("{name} joined the chat."), &session);

        // Phase 2: Receive loop.
        let mut departed = false;
        loop {
            tokio::select! {
                result = reader.next() => {
                    match result {
                        Some(Ok(line)) => {
                            if line == EXIT_KEYWORD {
                                info!(name = %session.name(), "Session left the chat");
                                self.hub.broadcast(
                                    &format!("{} left the chat.", session.name()),
                                    &session,
                                );
                                departed = true;
                                break;
                            }

                            if self.hub.roster.count() == 1 {
                                self.hub.reply(&session, "You are alone in the chat.");
                            }

                            let ctx = Context {
                                session: &session,
                                hub: &self.hub,
                            };
                            if let Err(e) = self.registry.dispatch(&ctx, &line).await {
                                debug!(error = %e, "Handler error");
                                if let Some(reply) = e.reply() {
                                    self.hub.reply(&session, &reply);
                                }
                            }
                        }
                        Some(Err(e)) => {
                            warn!(error = %e, "Read error");
                            break;
                        }
                        None => {
                            info!("Client disconnected");
                            break;
                        }
                    }
                }

                Some(line) = outgoing_rx.recv() => {
                    if let Err(e) = writer.send(line).await {
                        warn!(error = %e, "Write error");
                        break;
                    }
                }
            }
        }

        // Cleanup. An implicit disconnect still owes the others a leave
        // notice; an explicit exit already sent it.
        if !departed {
            self.hub.broadcast(
                &format!("{} left the chat.", session.name()),
                &session,
            );
        }
        self.hub.roster.unregister(&session);
        self.hub.groups.prune(&session);
        info!(name = %session.name(), session = %session.id(), "Session unregistered");

        Ok(())
    }
}
