//! Test chat client.
//!
//! Provides a framed client for integration testing that can send lines
//! and assert on received frames, raw or with color codes stripped.

use chatter_proto::{colors, FrameCodec};
use futures_util::{SinkExt, StreamExt};
use std::time::Duration;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_util::codec::{FramedRead, FramedWrite};

/// A test chat client.
pub struct TestClient {
    reader: FramedRead<OwnedReadHalf, FrameCodec>,
    writer: FramedWrite<OwnedWriteHalf, FrameCodec>,
}

impl TestClient {
    /// Connect to a test server and register with `name`.
    pub async fn connect(address: &str, name: &str) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(address).await?;
        let (read_half, write_half) = stream.into_split();
        let mut client = Self {
            reader: FramedRead::new(read_half, FrameCodec::new()),
            writer: FramedWrite::new(write_half, FrameCodec::new()),
        };
        client.send_line(name).await?;
        Ok(client)
    }

    /// Send one line as a single frame.
    pub async fn send_line(&mut self, line: &str) -> anyhow::Result<()> {
        self.writer.send(line).await?;
        Ok(())
    }

    /// Receive a single raw frame, color codes included.
    pub async fn recv_raw(&mut self) -> anyhow::Result<String> {
        self.recv_timeout(Duration::from_secs(5)).await
    }

    /// Receive a single frame with its color codes stripped.
    #[allow(dead_code)]
    pub async fn recv(&mut self) -> anyhow::Result<String> {
        Ok(colors::strip_codes(&self.recv_raw().await?))
    }

    /// Receive a raw frame with a timeout.
    pub async fn recv_timeout(&mut self, dur: Duration) -> anyhow::Result<String> {
        match timeout(dur, self.reader.next()).await? {
            Some(frame) => Ok(frame?),
            None => anyhow::bail!("connection closed"),
        }
    }

    /// Assert the next frame, stripped of color codes, equals `want`.
    #[allow(dead_code)]
    pub async fn expect(&mut self, want: &str) {
        let got = self.recv().await.expect("Failed to receive frame");
        assert_eq!(got, want);
    }

    /// Assert no frame arrives within a short window.
    #[allow(dead_code)]
    pub async fn expect_silence(&mut self) {
        assert!(
            self.recv_timeout(Duration::from_millis(200)).await.is_err(),
            "expected no frame"
        );
    }
}
