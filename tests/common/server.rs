//! Test server management.
//!
//! Spawns an in-process chatterd gateway on an ephemeral port so tests
//! never race each other for addresses.

use chatterd::handlers::Registry;
use chatterd::network::Gateway;
use chatterd::state::Hub;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// A test server instance running inside the test's own runtime.
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Spawn a new test server bound to 127.0.0.1 on a free port.
    pub async fn spawn() -> anyhow::Result<Self> {
        let hub = Arc::new(Hub::new());
        let registry = Arc::new(Registry::new());

        let bind: SocketAddr = "127.0.0.1:0".parse()?;
        let gateway = Gateway::bind(bind, hub, registry).await?;
        let addr = gateway.local_addr()?;

        let handle = tokio::spawn(async move {
            let _ = gateway.run().await;
        });

        Ok(Self { addr, handle })
    }

    /// The address clients should connect to.
    pub fn address(&self) -> String {
        self.addr.to_string()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
