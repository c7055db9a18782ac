//! chatter-client - a small interactive console client.
//!
//! Connects to a chatterd server, sends the username as the first frame,
//! then shuttles stdin lines to the server and prints every incoming
//! frame. Color codes arrive inline and render directly in any ANSI
//! terminal.

use anyhow::Context as _;
use chatter_proto::{FrameCodec, EXIT_KEYWORD};
use futures_util::{SinkExt, StreamExt};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::TcpStream;
use tokio_util::codec::{FramedRead, FramedWrite};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "127.0.0.1:1234".to_string());

    print!("Enter your username: ");
    std::io::stdout().flush()?;
    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    let name = match stdin.next_line().await? {
        Some(line) => line.trim().to_string(),
        None => return Ok(()),
    };

    let stream = TcpStream::connect(&addr)
        .await
        .with_context(|| format!("failed to connect to {addr}"))?;
    let (read_half, write_half) = stream.into_split();
    let mut reader = FramedRead::new(read_half, FrameCodec::new());
    let mut writer = FramedWrite::new(write_half, FrameCodec::new());

    writer.send(name).await?;

    // Print frames as they arrive until the server closes the socket.
    let printer = tokio::spawn(async move {
        while let Some(frame) = reader.next().await {
            match frame {
                Ok(line) => println!("{line}"),
                Err(e) => {
                    eprintln!("connection error: {e}");
                    break;
                }
            }
        }
    });

    while let Some(line) = stdin.next_line().await? {
        let leaving = line == EXIT_KEYWORD;
        writer.send(line).await?;
        if leaving {
            break;
        }
    }

    printer.abort();
    Ok(())
}
