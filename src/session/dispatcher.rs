use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio_util::codec::Encoder;

use crate::error::{Error, SessionError};
use crate::extract::extract_payload;
use crate::frame::codec::ReplyCodec;
use crate::frame::MessageReader;
use crate::phase::{Operand, Phase, PhaseAction, Vocabulary};

use super::{PayloadPolicy, SessionConfig};

/// Where a session is in the protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for a prompt from the active vocabulary.
    AwaitingPhase,
    /// The unlock keyword was sent; the next message carries the flag.
    AwaitingFlag,
    /// Terminal: the flag was obtained.
    Unlocked(String),
    /// Terminal: the session aborted with this reason.
    Failed(String),
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Unlocked(_) | SessionState::Failed(_))
    }
}

/// Outcome of classifying one message, before any I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Write this reply and wait for the next phase.
    Reply(String),
    /// Write this unlock keyword and wait for the flag.
    Claim(String),
    /// The flag is known; the session is over.
    Unlocked(String),
}

/// One live connection: transport, read buffer and protocol state.
pub struct Session<T> {
    reader: MessageReader<T>,
    codec: ReplyCodec,
    write_buf: BytesMut,
    state: SessionState,
}

impl<T: AsyncRead + AsyncWrite + Unpin> Session<T> {
    pub fn new(transport: T, config: &SessionConfig) -> Self {
        let reader =
            MessageReader::with_limits(transport, config.chunk_size, config.max_message_size)
                .with_read_timeout(config.read_timeout);
        Self {
            reader,
            codec: ReplyCodec::new(),
            write_buf: BytesMut::new(),
            state: SessionState::AwaitingPhase,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub async fn next_message(&mut self) -> Result<String, Error> {
        self.reader.next_message().await
    }

    /// Write `reply` followed by the newline terminator.
    pub async fn send(&mut self, reply: &str) -> Result<(), Error> {
        self.write_buf.clear();
        self.codec.encode(reply, &mut self.write_buf)?;
        let transport = self.reader.get_mut();
        transport
            .write_all(&self.write_buf)
            .await
            .map_err(SessionError::Write)?;
        transport.flush().await.map_err(SessionError::Write)?;
        Ok(())
    }

    /// Shut down the write half. Errors are logged, not returned.
    pub async fn close(&mut self) {
        if let Err(e) = self.reader.get_mut().shutdown().await {
            tracing::debug!(error = %e, "transport shutdown failed");
        }
    }
}

/// Drives a session through one vocabulary until it unlocks or fails.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    vocabulary: Vocabulary,
    payload_policy: PayloadPolicy,
}

impl Dispatcher {
    pub fn new(vocabulary: Vocabulary, payload_policy: PayloadPolicy) -> Self {
        Self {
            vocabulary,
            payload_policy,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Classify `msg` and compute what to send, without touching I/O.
    pub fn respond(&self, msg: &str) -> Result<Step, SessionError> {
        let phase = self
            .vocabulary
            .classify(msg)
            .ok_or_else(|| SessionError::UnexpectedMessage(msg.to_string()))?;

        match phase.action() {
            PhaseAction::Respond { operand, transform } => {
                let input = match operand {
                    Operand::Quoted => self.quoted_operand(phase, msg)?,
                    Operand::Fixed(value) => value.as_ref(),
                };
                let reply = transform.apply(input).to_string();
                tracing::debug!(
                    vocabulary = self.vocabulary.name(),
                    marker = phase.marker(),
                    transform = transform.name(),
                    operand = input,
                    %reply,
                    "phase answered"
                );
                Ok(Step::Reply(reply))
            }
            PhaseAction::Claim => {
                // The keyword is never optional, whatever the payload policy.
                let keyword = extract_payload(msg);
                if keyword.is_empty() {
                    return Err(SessionError::EmptyPayload {
                        marker: phase.marker().to_string(),
                    });
                }
                tracing::debug!(marker = phase.marker(), keyword, "claiming flag");
                Ok(Step::Claim(keyword.to_string()))
            }
            PhaseAction::Capture => captured_flag(msg).map(Step::Unlocked),
        }
    }

    /// Run the session loop over `transport` and return the flag.
    ///
    /// The transport is shut down before returning, on success and on error.
    pub async fn run<T>(&self, transport: T, config: &SessionConfig) -> Result<String, Error>
    where
        T: AsyncRead + AsyncWrite + Unpin,
    {
        let mut session = Session::new(transport, config);
        let result = self.drive(&mut session).await;
        session.close().await;
        result
    }

    /// Drive an existing session to a terminal state.
    pub async fn drive<T>(&self, session: &mut Session<T>) -> Result<String, Error>
    where
        T: AsyncRead + AsyncWrite + Unpin,
    {
        match self.drive_inner(session).await {
            Ok(flag) => {
                tracing::info!(vocabulary = self.vocabulary.name(), "unlocked");
                session.state = SessionState::Unlocked(flag.clone());
                Ok(flag)
            }
            Err(e) => {
                tracing::warn!(vocabulary = self.vocabulary.name(), error = %e, "session failed");
                session.state = SessionState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    async fn drive_inner<T>(&self, session: &mut Session<T>) -> Result<String, Error>
    where
        T: AsyncRead + AsyncWrite + Unpin,
    {
        loop {
            let msg = session.next_message().await?;

            if session.state == SessionState::AwaitingFlag {
                return Ok(claimed_flag(&msg)?);
            }

            match self.respond(&msg)? {
                Step::Reply(reply) => session.send(&reply).await?,
                Step::Claim(keyword) => {
                    session.send(&keyword).await?;
                    session.state = SessionState::AwaitingFlag;
                }
                Step::Unlocked(flag) => return Ok(flag),
            }
        }
    }

    fn quoted_operand<'m>(&self, phase: &Phase, msg: &'m str) -> Result<&'m str, SessionError> {
        let payload = extract_payload(msg);
        if payload.is_empty() {
            match self.payload_policy {
                PayloadPolicy::Strict => {
                    return Err(SessionError::EmptyPayload {
                        marker: phase.marker().to_string(),
                    })
                }
                PayloadPolicy::Lenient => {
                    tracing::warn!(marker = phase.marker(), "no quoted payload, using empty operand")
                }
            }
        }
        Ok(payload)
    }
}

/// The flag sent after a claim: the quoted payload of `msg`, nothing else.
fn claimed_flag(msg: &str) -> Result<String, SessionError> {
    let payload = extract_payload(msg);
    if payload.is_empty() {
        return Err(SessionError::MissingFlag);
    }
    Ok(payload.to_string())
}

/// The quoted payload of `msg`, or the whole trimmed message if it has none.
fn captured_flag(msg: &str) -> Result<String, SessionError> {
    let payload = extract_payload(msg);
    let flag = if payload.is_empty() { msg.trim() } else { payload };
    if flag.is_empty() {
        return Err(SessionError::MissingFlag);
    }
    Ok(flag.to_string())
}
