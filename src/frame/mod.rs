pub mod codec;

use std::time::Duration;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::{Error, FrameError, SessionError};

/// Size of a single read; a read shorter than this ends a message.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Upper bound on one reassembled message: 64 KiB.
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 64 * 1024;

/// Reassembles server output into logical messages using the short-read rule.
///
/// The server gives no length prefix or delimiter for a prompt. Each call to
/// [`next_message`](Self::next_message) reads fixed-size chunks and treats the
/// first read that returns fewer bytes than the chunk size as the end of the
/// message. A prompt that is an exact multiple of the chunk size therefore
/// blocks until the next burst arrives.
#[derive(Debug)]
pub struct MessageReader<T> {
    inner: T,
    chunk: Vec<u8>,
    max_message_size: usize,
    read_timeout: Option<Duration>,
}

impl<T> MessageReader<T> {
    /// Wrap a transport with the default chunk size and message cap.
    pub fn new(inner: T) -> Self {
        Self::with_limits(inner, DEFAULT_CHUNK_SIZE, DEFAULT_MAX_MESSAGE_SIZE)
    }

    /// Wrap a transport with a custom chunk size and message cap.
    pub fn with_limits(inner: T, chunk_size: usize, max_message_size: usize) -> Self {
        Self {
            inner,
            chunk: vec![0u8; chunk_size.max(1)],
            max_message_size,
            read_timeout: None,
        }
    }

    /// Bound every individual read by `timeout`.
    pub fn with_read_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.read_timeout = timeout;
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk.len()
    }

    /// Mutable access to the transport, e.g. for writing replies.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T: AsyncRead + Unpin> MessageReader<T> {
    /// Read the next logical message.
    ///
    /// Returns [`SessionError::Closed`] if the peer closes before sending
    /// anything, and [`FrameError::UnexpectedEof`] if it closes after one or
    /// more full chunks.
    pub async fn next_message(&mut self) -> Result<String, Error> {
        let mut acc = BytesMut::new();

        loop {
            let n = self.read_chunk().await?;
            if n == 0 {
                if acc.is_empty() {
                    return Err(SessionError::Closed.into());
                }
                return Err(FrameError::UnexpectedEof {
                    received: acc.len(),
                }
                .into());
            }

            let size = acc.len() + n;
            if size > self.max_message_size {
                return Err(FrameError::MessageTooLarge {
                    size,
                    max: self.max_message_size,
                }
                .into());
            }

            acc.extend_from_slice(&self.chunk[..n]);
            if n < self.chunk.len() {
                break;
            }
        }

        Ok(String::from_utf8_lossy(&acc).into_owned())
    }

    async fn read_chunk(&mut self) -> Result<usize, Error> {
        let read = self.inner.read(&mut self.chunk);
        let result = match self.read_timeout {
            Some(timeout) => tokio::time::timeout(timeout, read)
                .await
                .map_err(|_| SessionError::ReadTimeout(timeout))?,
            None => read.await,
        };
        Ok(result.map_err(SessionError::Read)?)
    }
}
