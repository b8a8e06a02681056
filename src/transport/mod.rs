/// TCP transport helpers (connect, listen, accept).
#[cfg(feature = "tcp")]
pub mod tcp;
