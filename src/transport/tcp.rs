use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::{TcpListener, TcpStream};

use crate::error::SessionError;

/// Connect to `addr` (`host:port`), giving up after `timeout`.
pub async fn connect(addr: &str, timeout: Duration) -> Result<TcpStream, SessionError> {
    let stream = tokio::time::timeout(timeout, TcpStream::connect(addr))
        .await
        .map_err(|_| SessionError::ConnectTimeout {
            addr: addr.to_string(),
            timeout,
        })?
        .map_err(|source| SessionError::Connect {
            addr: addr.to_string(),
            source,
        })?;
    stream.set_nodelay(true).map_err(|source| SessionError::Connect {
        addr: addr.to_string(),
        source,
    })?;
    Ok(stream)
}

/// Bind `addr` and return the listener with its resolved `host:port`.
///
/// The returned address is in the form [`connect`] takes, so binding port 0
/// yields something a client can dial directly.
pub async fn listen(addr: &str) -> std::io::Result<(TcpListener, String)> {
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?.to_string();
    Ok((listener, local))
}

/// Accept one peer with Nagle disabled, so short prompts go out immediately.
pub async fn accept(listener: &TcpListener) -> std::io::Result<(TcpStream, SocketAddr)> {
    let (stream, peer) = listener.accept().await?;
    stream.set_nodelay(true)?;
    tracing::debug!(%peer, "accepted peer");
    Ok((stream, peer))
}
