//! OAuth client-credentials exchange.
//!
//! The configured client identifier and secret are exchanged once for a bearer [Token]
//! that authorizes the listing request. Tokens are never refreshed.

use std::fmt;

use time::OffsetDateTime;

// Common implementation modules
mod common;

// Feature-specific implementations
#[cfg(feature = "sync")]
mod sync;

#[cfg(feature = "async")]
mod r#async;

/// Grant type sent in the token request.
pub const GRANT_TYPE: &str = "client_credentials";

/// An opaque bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    access_token: String,
    token_type: String,
    /// When the server said the token stops being valid. Reported only.
    expires_at: Option<OffsetDateTime>,
}

impl Token {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "Bearer".into(),
            expires_at: None,
        }
    }

    pub(crate) fn with_expiry(mut self, expires_at: Option<OffsetDateTime>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub(crate) fn with_token_type(mut self, token_type: impl Into<String>) -> Self {
        self.token_type = token_type.into();
        self
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    pub fn expires_at(&self) -> Option<OffsetDateTime> {
        self.expires_at
    }

    /// Value of the `Authorization` header for authenticated requests.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

// Re-export API functions based on active feature
#[cfg(feature = "sync")]
pub mod blocking {
    pub(crate) use super::sync::acquire_token;
}

#[cfg(feature = "async")]
pub(crate) use r#async::acquire_token;
