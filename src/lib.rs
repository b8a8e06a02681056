pub mod error;
pub mod extract;
pub mod frame;
pub mod phase;
pub mod session;
pub mod transform;
pub mod transport;

// Re-export key types at crate root for convenience.
pub use error::{Error, Result};
pub use extract::extract_payload;
pub use frame::MessageReader;
pub use phase::{Phase, Vocabulary};
pub use session::dispatcher::{Dispatcher, SessionState, Step};
pub use session::{PayloadPolicy, SessionConfig};
pub use transform::{Output, Transform};

#[cfg(feature = "tcp")]
pub use session::knock;
