pub mod dispatcher;

use std::time::Duration;

use crate::error::{ConfigError, Error};
use crate::frame::{DEFAULT_CHUNK_SIZE, DEFAULT_MAX_MESSAGE_SIZE};
#[cfg(feature = "tcp")]
use crate::phase::Vocabulary;

#[cfg(feature = "tcp")]
use self::dispatcher::Dispatcher;

/// What to do when a phase that expects a quoted operand gets none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PayloadPolicy {
    /// Proceed with an empty operand and log a warning.
    #[default]
    Lenient,
    /// Abort the session with [`SessionError::EmptyPayload`](crate::error::SessionError::EmptyPayload).
    Strict,
}

/// Configuration for a phase session.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Maximum time allowed to establish the TCP connection (default: 2s).
    pub connect_timeout: Duration,

    /// Optional deadline on each individual read (default: none).
    pub read_timeout: Option<Duration>,

    /// Read chunk size; a shorter read ends a message (default: 1024).
    pub chunk_size: usize,

    /// Maximum size of one reassembled message (default: 64 KiB).
    pub max_message_size: usize,

    /// Handling of prompts whose quoted operand is missing.
    pub payload_policy: PayloadPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(2),
            read_timeout: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
            payload_policy: PayloadPolicy::Lenient,
        }
    }
}

impl SessionConfig {
    /// Create a builder for constructing a `SessionConfig`.
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::default()
    }
}

/// Builder for [`SessionConfig`].
#[derive(Debug, Clone)]
pub struct SessionConfigBuilder {
    config: SessionConfig,
}

impl Default for SessionConfigBuilder {
    fn default() -> Self {
        Self {
            config: SessionConfig::default(),
        }
    }
}

impl SessionConfigBuilder {
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.config.read_timeout = Some(timeout);
        self
    }

    pub fn chunk_size(mut self, size: usize) -> Self {
        self.config.chunk_size = size;
        self
    }

    pub fn max_message_size(mut self, size: usize) -> Self {
        self.config.max_message_size = size;
        self
    }

    pub fn payload_policy(mut self, policy: PayloadPolicy) -> Self {
        self.config.payload_policy = policy;
        self
    }

    /// Build the `SessionConfig`, validating that all values are sensible.
    pub fn build(self) -> Result<SessionConfig, Error> {
        let config = self.config;
        if config.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize.into());
        }
        if config.max_message_size < config.chunk_size {
            return Err(ConfigError::MessageCapBelowChunk {
                max: config.max_message_size,
                chunk: config.chunk_size,
            }
            .into());
        }
        if config.connect_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout("connect_timeout").into());
        }
        if config.read_timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::ZeroTimeout("read_timeout").into());
        }
        Ok(config)
    }
}

/// Dial `addr`, play `vocabulary` to completion and return the flag.
///
/// The connection is shut down on every exit path. Nothing is retried.
#[cfg(feature = "tcp")]
pub async fn knock(
    addr: &str,
    vocabulary: Vocabulary,
    config: SessionConfig,
) -> Result<String, Error> {
    if addr.trim().is_empty() {
        return Err(ConfigError::EmptyAddress.into());
    }

    let stream = crate::transport::tcp::connect(addr, config.connect_timeout).await?;
    tracing::info!(addr, vocabulary = vocabulary.name(), "connected");

    let dispatcher = Dispatcher::new(vocabulary, config.payload_policy);
    dispatcher.run(stream, &config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let c = SessionConfig::default();
        assert_eq!(c.connect_timeout, Duration::from_secs(2));
        assert_eq!(c.read_timeout, None);
        assert_eq!(c.chunk_size, 1024);
        assert_eq!(c.max_message_size, 64 * 1024);
        assert_eq!(c.payload_policy, PayloadPolicy::Lenient);
    }

    #[test]
    fn builder_sets_fields() {
        let c = SessionConfig::builder()
            .connect_timeout(Duration::from_millis(500))
            .read_timeout(Duration::from_secs(5))
            .chunk_size(512)
            .max_message_size(4096)
            .payload_policy(PayloadPolicy::Strict)
            .build()
            .unwrap();
        assert_eq!(c.connect_timeout, Duration::from_millis(500));
        assert_eq!(c.read_timeout, Some(Duration::from_secs(5)));
        assert_eq!(c.chunk_size, 512);
        assert_eq!(c.max_message_size, 4096);
        assert_eq!(c.payload_policy, PayloadPolicy::Strict);
    }

    #[test]
    fn builder_rejects_zero_chunk() {
        let err = SessionConfig::builder().chunk_size(0).build().unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ZeroChunkSize)));
    }

    #[test]
    fn builder_rejects_cap_below_chunk() {
        let err = SessionConfig::builder()
            .chunk_size(1024)
            .max_message_size(100)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MessageCapBelowChunk { max: 100, chunk: 1024 })
        ));
    }

    #[test]
    fn builder_rejects_zero_timeouts() {
        let err = SessionConfig::builder()
            .connect_timeout(Duration::ZERO)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::ZeroTimeout("connect_timeout"))
        ));

        let err = SessionConfig::builder()
            .read_timeout(Duration::ZERO)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::ZeroTimeout("read_timeout"))
        ));
    }
}
