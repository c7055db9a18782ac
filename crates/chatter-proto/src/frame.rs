//! Length-prefixed frame codec for tokio.
//!
//! Each frame is a 2-byte big-endian length prefix followed by that many
//! bytes of UTF-8 text. The prefix counts bytes, not characters, so the
//! payload is capped at 65535 bytes.

use bytes::{Buf, BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use crate::error;

/// Size of the length prefix in bytes.
const PREFIX_LEN: usize = 2;

/// Largest payload the prefix can describe.
pub const MAX_FRAME_LEN: usize = u16::MAX as usize;

/// Codec that reads and writes length-prefixed UTF-8 text frames.
#[derive(Debug, Default)]
pub struct FrameCodec;

impl FrameCodec {
    /// Create a new codec.
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for FrameCodec {
    type Item = String;
    type Error = error::ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> error::Result<Option<String>> {
        if src.len() < PREFIX_LEN {
            return Ok(None);
        }

        let len = u16::from_be_bytes([src[0], src[1]]) as usize;
        if src.len() < PREFIX_LEN + len {
            // Not enough data yet - reserve what the full frame needs
            src.reserve(PREFIX_LEN + len - src.len());
            return Ok(None);
        }

        src.advance(PREFIX_LEN);
        let payload = src.split_to(len);

        String::from_utf8(payload.to_vec()).map(Some).map_err(|e| {
            error::ProtocolError::InvalidUtf8 {
                byte_pos: e.utf8_error().valid_up_to(),
                details: e.utf8_error().to_string(),
            }
        })
    }
}

impl Encoder<String> for FrameCodec {
    type Error = error::ProtocolError;

    fn encode(&mut self, msg: String, dst: &mut BytesMut) -> error::Result<()> {
        let bytes = msg.as_bytes();
        if bytes.len() > MAX_FRAME_LEN {
            return Err(error::ProtocolError::FrameTooLong {
                actual: bytes.len(),
                limit: MAX_FRAME_LEN,
            });
        }

        dst.reserve(PREFIX_LEN + bytes.len());
        dst.put_u16(bytes.len() as u16);
        dst.extend_from_slice(bytes);
        Ok(())
    }
}

impl Encoder<&str> for FrameCodec {
    type Error = error::ProtocolError;

    fn encode(&mut self, msg: &str, dst: &mut BytesMut) -> error::Result<()> {
        self.encode(msg.to_string(), dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_complete_frame() {
        let mut codec = FrameCodec::new();
        let mut buf = BytesMut::from(&b"\x00\x05hello"[..]);

        let result = codec.decode(&mut buf).unwrap();
        assert_eq!(result, Some("hello".to_string()));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_decode_partial_frame() {
        let mut codec = FrameCodec::new();
        let mut buf = BytesMut::from(&b"\x00\x05hel"[..]);

        assert_eq!(codec.decode(&mut buf).unwrap(), None);

        buf.extend_from_slice(b"lo");
        assert_eq!(codec.decode(&mut buf).unwrap(), Some("hello".to_string()));
    }

    #[test]
    fn test_decode_split_prefix() {
        let mut codec = FrameCodec::new();
        let mut buf = BytesMut::from(&b"\x00"[..]);

        assert_eq!(codec.decode(&mut buf).unwrap(), None);

        buf.extend_from_slice(b"\x02hi");
        assert_eq!(codec.decode(&mut buf).unwrap(), Some("hi".to_string()));
    }

    #[test]
    fn test_decode_back_to_back_frames() {
        let mut codec = FrameCodec::new();
        let mut buf = BytesMut::from(&b"\x00\x01a\x00\x01b"[..]);

        assert_eq!(codec.decode(&mut buf).unwrap(), Some("a".to_string()));
        assert_eq!(codec.decode(&mut buf).unwrap(), Some("b".to_string()));
        assert_eq!(codec.decode(&mut buf).unwrap(), None);
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let mut codec = FrameCodec::new();
        let mut buf = BytesMut::from(&b"\x00\x02\xff\xfe"[..]);

        let result = codec.decode(&mut buf);
        assert!(matches!(
            result,
            Err(error::ProtocolError::InvalidUtf8 { .. })
        ));
    }

    #[test]
    fn test_encode() {
        let mut codec = FrameCodec::new();
        let mut buf = BytesMut::new();

        codec.encode("hello".to_string(), &mut buf).unwrap();
        assert_eq!(&buf[..], b"\x00\x05hello");
    }

    #[test]
    fn test_encode_multibyte() {
        let mut codec = FrameCodec::new();
        let mut buf = BytesMut::new();

        // Prefix counts bytes, not characters
        codec.encode("héllo".to_string(), &mut buf).unwrap();
        assert_eq!(buf[0], 0);
        assert_eq!(buf[1], 6);
    }

    #[test]
    fn test_encode_too_long() {
        let mut codec = FrameCodec::new();
        let mut buf = BytesMut::new();

        let huge = "x".repeat(MAX_FRAME_LEN + 1);
        let result = codec.encode(huge, &mut buf);
        assert!(matches!(
            result,
            Err(error::ProtocolError::FrameTooLong { .. })
        ));
    }

    #[test]
    fn test_round_trip() {
        let mut codec = FrameCodec::new();
        let mut buf = BytesMut::new();

        codec.encode("alice: hi there".to_string(), &mut buf).unwrap();
        let decoded = codec.decode(&mut buf).unwrap();
        assert_eq!(decoded, Some("alice: hi there".to_string()));
    }
}
