#![cfg(feature = "tcp")]
//! Tests for the `transport::tcp` helper functions.

use std::time::Duration;

use phase_knock::error::SessionError;
use phase_knock::transport::tcp;

#[tokio::test]
async fn listen_and_accept() {
    let (listener, addr) = tcp::listen("127.0.0.1:0").await.unwrap();

    let client_handle =
        tokio::spawn(async move { tcp::connect(&addr, Duration::from_secs(2)).await.unwrap() });

    let (server_stream, peer_addr) = tcp::accept(&listener).await.unwrap();
    let client_stream = client_handle.await.unwrap();

    assert!(server_stream.nodelay().unwrap());
    assert!(client_stream.nodelay().unwrap());
    assert!(peer_addr.ip().is_loopback());
    assert_eq!(client_stream.peer_addr().unwrap(), listener.local_addr().unwrap());
}

#[tokio::test]
async fn connect_to_unbound_port_carries_address() {
    // Bind and immediately drop to get a port that is not listening.
    let (listener, addr) = tcp::listen("127.0.0.1:0").await.unwrap();
    drop(listener);

    let err = tcp::connect(&addr, Duration::from_secs(2)).await.unwrap_err();
    assert!(err.to_string().contains(&addr));
    match err {
        SessionError::Connect { addr: got, .. } => assert_eq!(got, addr),
        other => panic!("expected Connect, got {other:?}"),
    }
}
