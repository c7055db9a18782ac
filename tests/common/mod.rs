//! Integration test common infrastructure.
//!
//! Provides utilities for spawning in-process test servers, creating test
//! clients, and asserting on framed chat flows.

pub mod client;
pub mod server;

#[allow(unused_imports)]
pub use client::TestClient;
#[allow(unused_imports)]
pub use server::TestServer;

/// Connect a client and consume its welcome line.
#[allow(dead_code)]
pub async fn join(server: &TestServer, name: &str) -> TestClient {
    let mut client = TestClient::connect(&server.address(), name)
        .await
        .expect("Failed to connect");
    client
        .expect(&format!("Thank you for joining the chat, {name}."))
        .await;
    client
}
