//! The startup pipeline: token exchange, then the listing search.
//!
//! Progress is an explicit tagged state. Each stage runs once, strictly after the one before
//! it, and there is no retry: a failure at either stage moves the session to the terminal
//! [SessionState::Failed] state, which the view keeps rendering as loading.

use std::fmt;

use log::{info, warn};

use crate::animals::Pet;
use crate::auth::Token;

#[cfg(feature = "sync")]
mod sync;

#[cfg(feature = "async")]
mod r#async;

/// Pipeline stage that produced a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Token,
    Listing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Token => write!(f, "token"),
            Stage::Listing => write!(f, "listing"),
        }
    }
}

/// A swallowed pipeline error, kept for diagnostics only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    pub stage: Stage,
    pub message: String,
}

/// Progress of the startup pipeline.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated(Token),
    Loaded(Vec<Pet>),
    Failed(Failure),
}

/// Output of one pipeline stage.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    TokenAcquired(Token),
    PetsLoaded(Vec<Pet>),
    Failed(Failure),
}

impl SessionState {
    /// True until the listing has been loaded. A failed session stays loading.
    pub fn is_loading(&self) -> bool {
        !matches!(self, SessionState::Loaded(_))
    }

    /// The fetched pets; empty until loaded.
    pub fn pets(&self) -> &[Pet] {
        match self {
            SessionState::Loaded(pets) => pets,
            _ => &[],
        }
    }

    pub fn token(&self) -> Option<&Token> {
        match self {
            SessionState::Authenticated(token) => Some(token),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            SessionState::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// True once no further event can change the state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Loaded(_) | SessionState::Failed(_))
    }

    /// Applies a pipeline event. Events that do not follow from the current state are ignored.
    pub fn apply(&mut self, event: SessionEvent) {
        let current = std::mem::take(self);

        *self = match (current, event) {
            (SessionState::Unauthenticated, SessionEvent::TokenAcquired(token)) => {
                info!("session authenticated");
                SessionState::Authenticated(token)
            }
            (SessionState::Authenticated(_), SessionEvent::PetsLoaded(pets)) => {
                info!("session loaded {} pets", pets.len());
                SessionState::Loaded(pets)
            }
            (SessionState::Unauthenticated | SessionState::Authenticated(_), SessionEvent::Failed(failure)) => SessionState::Failed(failure),
            (current, event) => {
                warn!("ignoring {} in state {}", event_name(&event), state_name(&current));
                current
            }
        };
    }
}

fn state_name(state: &SessionState) -> &'static str {
    match state {
        SessionState::Unauthenticated => "Unauthenticated",
        SessionState::Authenticated(_) => "Authenticated",
        SessionState::Loaded(_) => "Loaded",
        SessionState::Failed(_) => "Failed",
    }
}

fn event_name(event: &SessionEvent) -> &'static str {
    match event {
        SessionEvent::TokenAcquired(_) => "TokenAcquired",
        SessionEvent::PetsLoaded(_) => "PetsLoaded",
        SessionEvent::Failed(_) => "Failed",
    }
}

#[cfg(feature = "sync")]
pub mod blocking {
    pub use super::sync::{run, spawn};
}

#[cfg(feature = "async")]
pub use r#async::{run, spawn};
