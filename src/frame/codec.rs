use bytes::{BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use crate::error::FrameError;

/// Default cap on a single decoded line: 8 KiB.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 8 * 1024;

/// Newline-terminated text line codec.
///
/// Encoding appends the `\n` terminator to a reply. Decoding splits on `\n`
/// and strips an optional trailing `\r`; it is what a peer uses to read the
/// replies this crate writes.
#[derive(Debug)]
pub struct ReplyCodec {
    max_line_length: usize,
    /// Bytes already scanned for a newline in the current buffer.
    next_index: usize,
}

impl Default for ReplyCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplyCodec {
    pub fn new() -> Self {
        Self::with_max_line_length(DEFAULT_MAX_LINE_LENGTH)
    }

    /// Create a codec with a custom maximum line length (enforced on decode).
    pub fn with_max_line_length(max_line_length: usize) -> Self {
        Self {
            max_line_length,
            next_index: 0,
        }
    }

    fn take_line(&mut self, src: &mut BytesMut, end: usize) -> String {
        let line = src.split_to(end + 1);
        self.next_index = 0;
        let mut line = &line[..line.len() - 1];
        if let Some(stripped) = line.strip_suffix(b"\r") {
            line = stripped;
        }
        String::from_utf8_lossy(line).into_owned()
    }
}

impl Decoder for ReplyCodec {
    type Item = String;
    type Error = FrameError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let start = self.next_index.min(src.len());
        if let Some(offset) = src[start..].iter().position(|b| *b == b'\n') {
            let end = start + offset;
            return Ok(Some(self.take_line(src, end)));
        }

        if src.len() > self.max_line_length {
            return Err(FrameError::LineTooLong {
                max: self.max_line_length,
            });
        }

        self.next_index = src.len();
        Ok(None)
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(line) = self.decode(src)? {
            return Ok(Some(line));
        }
        if src.is_empty() {
            return Ok(None);
        }
        // Unterminated trailing line.
        let rest = src.split();
        self.next_index = 0;
        Ok(Some(String::from_utf8_lossy(&rest).into_owned()))
    }
}

impl<T: AsRef<str>> Encoder<T> for ReplyCodec {
    type Error = FrameError;

    fn encode(&mut self, reply: T, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let reply = reply.as_ref();
        dst.reserve(reply.len() + 1);
        dst.put_slice(reply.as_bytes());
        dst.put_u8(b'\n');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_appends_newline() {
        let mut codec = ReplyCodec::new();
        let mut buf = BytesMut::new();
        codec.encode("451", &mut buf).unwrap();
        codec.encode(String::from("MVBA"), &mut buf).unwrap();
        assert_eq!(&buf[..], b"451\nMVBA\n");
    }

    #[test]
    fn decode_splits_lines() {
        let mut codec = ReplyCodec::new();
        let mut buf = BytesMut::from(&b"12\r\nSUEHPROM\npart"[..]);

        assert_eq!(codec.decode(&mut buf).unwrap().as_deref(), Some("12"));
        assert_eq!(codec.decode(&mut buf).unwrap().as_deref(), Some("SUEHPROM"));
        assert_eq!(codec.decode(&mut buf).unwrap(), None);

        buf.extend_from_slice(b"ial\n");
        assert_eq!(codec.decode(&mut buf).unwrap().as_deref(), Some("partial"));
        assert!(buf.is_empty());
    }

    #[test]
    fn decode_eof_flushes_unterminated_line() {
        let mut codec = ReplyCodec::new();
        let mut buf = BytesMut::from(&b"UNLOCK"[..]);
        assert_eq!(codec.decode(&mut buf).unwrap(), None);
        assert_eq!(
            codec.decode_eof(&mut buf).unwrap().as_deref(),
            Some("UNLOCK")
        );
        assert_eq!(codec.decode_eof(&mut buf).unwrap(), None);
    }

    #[test]
    fn line_too_long() {
        let mut codec = ReplyCodec::with_max_line_length(4);
        let mut buf = BytesMut::from(&b"123456"[..]);
        let err = codec.decode(&mut buf).unwrap_err();
        assert!(matches!(err, FrameError::LineTooLong { max: 4 }));
    }
}
