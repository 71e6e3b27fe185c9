//! A prelude module for convenient importing of commonly used types.
//!
//! ```rust
//! use adoptfinder::prelude::*;
//! ```

// Core client
pub use crate::Client;
pub use crate::Error;

pub use crate::config::{Config, Credentials, ListingQuery};

pub use crate::animals::{Age, Pet};
pub use crate::auth::Token;

pub use crate::session::{SessionEvent, SessionState};
pub use crate::view::{AgeFilter, Command, ViewState};
