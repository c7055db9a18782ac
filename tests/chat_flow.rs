//! Integration tests for the core chat flow.
//!
//! Covers the session lifecycle (welcome, join and leave notices),
//! plain-message broadcast and color rendering over a real socket.

mod common;

use chatter_proto::Color;
use common::{join, TestServer};

#[tokio::test]
async fn test_welcome_and_join_notice() {
    let server = TestServer::spawn().await.expect("Failed to spawn server");

    let mut alice = join(&server, "alice").await;
    let mut bob = join(&server, "bob").await;

    // Everyone already in the room hears about the newcomer; the newcomer
    // only gets the welcome.
    alice.expect("bob joined the chat.").await;
    bob.expect_silence().await;
}

#[tokio::test]
async fn test_broadcast_excludes_sender() {
    let server = TestServer::spawn().await.expect("Failed to spawn server");

    let mut alice = join(&server, "alice").await;
    let mut bob = join(&server, "bob").await;
    alice.expect("bob joined the chat.").await;

    alice.send_line("hello there").await.unwrap();

    bob.expect("alice: hello there").await;
    alice.expect_silence().await;
}

#[tokio::test]
async fn test_set_color_paints_subsequent_broadcasts() {
    let server = TestServer::spawn().await.expect("Failed to spawn server");

    let mut alice = join(&server, "alice").await;
    let mut bob = join(&server, "bob").await;
    alice.expect("bob joined the chat.").await;

    alice.send_line("-sc red").await.unwrap();
    // The confirmation itself is already painted in the new color
    let reply = alice.recv_raw().await.unwrap();
    assert!(reply.starts_with(Color::Red.code()));
    assert!(reply.ends_with(Color::Reset.code()));
    assert!(reply.contains("Color changed to RED"));

    alice.send_line("hi").await.unwrap();
    let line = bob.recv_raw().await.unwrap();
    assert!(line.starts_with(Color::Red.code()));
    assert!(line.contains("alice: hi"));
    assert!(line.ends_with(Color::Reset.code()));
}

#[tokio::test]
async fn test_alone_notice() {
    let server = TestServer::spawn().await.expect("Failed to spawn server");

    let mut alice = join(&server, "alice").await;

    alice.send_line("anyone here?").await.unwrap();

    alice.expect("You are alone in the chat.").await;
    alice.expect_silence().await;
}

#[tokio::test]
async fn test_exit_broadcasts_leave_notice() {
    let server = TestServer::spawn().await.expect("Failed to spawn server");

    let mut alice = join(&server, "alice").await;
    let mut bob = join(&server, "bob").await;
    alice.expect("bob joined the chat.").await;

    bob.send_line("exit").await.unwrap();

    alice.expect("bob left the chat.").await;
}

#[tokio::test]
async fn test_dropped_socket_broadcasts_leave_notice() {
    let server = TestServer::spawn().await.expect("Failed to spawn server");

    let mut alice = join(&server, "alice").await;
    let bob = join(&server, "bob").await;
    alice.expect("bob joined the chat.").await;

    // Implicit disconnect: the socket closes without an exit line
    drop(bob);

    alice.expect("bob left the chat.").await;
}

#[tokio::test]
async fn test_print_art_reaches_everyone_else() {
    let server = TestServer::spawn().await.expect("Failed to spawn server");

    let mut alice = join(&server, "alice").await;
    let mut bob = join(&server, "bob").await;
    alice.expect("bob joined the chat.").await;

    alice.send_line("-pa smile").await.unwrap();

    let line = bob.recv().await.unwrap();
    assert!(line.starts_with("[alice]\n"));
    let (_, smile) = chatter_proto::ArtCatalog::lookup("SMILE").unwrap();
    assert!(line.contains(smile));
    alice.expect_silence().await;
}
