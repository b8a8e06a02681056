use std::io;
use std::time::Duration;

/// Errors from message framing and reply encoding.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("connection closed mid-message after {received} bytes")]
    UnexpectedEof { received: usize },

    #[error("message too large: {size} bytes (max {max})")]
    MessageTooLarge { size: usize, max: usize },

    #[error("line exceeds maximum length of {max} bytes")]
    LineTooLong { max: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors from establishing and driving a phase session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("error connecting to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("timed out connecting to {addr} after {timeout:?}")]
    ConnectTimeout { addr: String, timeout: Duration },

    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    #[error("write failed: {0}")]
    Write(#[source] io::Error),

    #[error("no data received within {0:?}")]
    ReadTimeout(Duration),

    #[error("session closed by peer")]
    Closed,

    #[error("unexpected message: {0}")]
    UnexpectedMessage(String),

    #[error("phase {marker:?} carried no quoted payload")]
    EmptyPayload { marker: String },

    #[error("flag message carried no quoted payload")]
    MissingFlag,
}

/// Errors from invalid session or vocabulary configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("target address must not be empty")]
    EmptyAddress,

    #[error("chunk_size must be > 0")]
    ZeroChunkSize,

    #[error("max_message_size ({max}) must be at least chunk_size ({chunk})")]
    MessageCapBelowChunk { max: usize, chunk: usize },

    #[error("{0} must be > 0")]
    ZeroTimeout(&'static str),

    #[error("vocabulary {0:?} has no phases")]
    EmptyVocabulary(String),

    #[error("vocabulary {vocabulary:?} has an empty marker")]
    EmptyMarker { vocabulary: String },
}

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
