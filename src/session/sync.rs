//! Blocking pipeline runner

use std::sync::Arc;
use std::thread;

use crossbeam::channel::{self, Receiver};
use log::error;

use super::{Failure, SessionEvent, SessionState, Stage};
use crate::client::sync::Client;

/// Runs the pipeline to completion on the current thread and returns the final state.
pub fn run(client: &Client) -> SessionState {
    let mut state = SessionState::default();
    drive(client, |event| state.apply(event));
    state
}

/// Runs the pipeline on a background thread. Events are published as each stage completes;
/// the channel closes when the pipeline is done.
pub fn spawn(client: Arc<Client>) -> Receiver<SessionEvent> {
    let (sender, receiver) = channel::unbounded();

    let worker = thread::Builder::new().name("adoptfinder-session".into()).spawn(move || {
        drive(&client, |event| {
            if sender.send(event).is_err() {
                error!("session receiver dropped");
            }
        })
    });

    // The sender is dropped with the closure, so the receiver reports a closed channel.
    if let Err(err) = worker {
        error!("failed to start session thread: {err}");
    }

    receiver
}

fn drive(client: &Client, mut emit: impl FnMut(SessionEvent)) {
    let token = match client.acquire_token() {
        Ok(token) => token,
        Err(err) => {
            error!("Error getting token: {err}");
            emit(SessionEvent::Failed(Failure {
                stage: Stage::Token,
                message: err.to_string(),
            }));
            return;
        }
    };
    emit(SessionEvent::TokenAcquired(token.clone()));

    match client.fetch_animals(&token) {
        Ok(pets) => emit(SessionEvent::PetsLoaded(pets)),
        Err(err) => {
            error!("Error fetching pets: {err}");
            emit(SessionEvent::Failed(Failure {
                stage: Stage::Listing,
                message: err.to_string(),
            }));
        }
    }
}
