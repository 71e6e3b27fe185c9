//! Transport layer for Petfinder API communication with sync/async support.
//!
//! A transport sends one [RequestMessage] and returns the raw [ResponseMessage].
//! Decoding and status handling live with the API modules that issue the requests.

#[cfg(feature = "sync")]
pub mod sync;

#[cfg(feature = "async")]
pub mod r#async;

#[cfg(feature = "sync")]
pub use sync::{HttpTransport, ReqwestTransport};

#[cfg(feature = "async")]
pub use r#async::{AsyncHttpTransport, AsyncReqwestTransport};

// Re-export message types from crate::messages
pub use crate::messages::{Method, RequestMessage, ResponseMessage};
