//! Asynchronous pipeline runner

use std::sync::Arc;

use log::error;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use super::{Failure, SessionEvent, SessionState, Stage};
use crate::client::r#async::Client;

/// Runs the pipeline to completion and returns the final state.
pub async fn run(client: &Client) -> SessionState {
    let mut state = SessionState::default();
    for event in drive(client).await {
        state.apply(event);
    }
    state
}

/// Runs the pipeline on a spawned task. Events are published as each stage completes;
/// the channel closes when the pipeline is done. Must be called within a tokio runtime.
pub fn spawn(client: Arc<Client>) -> UnboundedReceiver<SessionEvent> {
    let (sender, receiver) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let token = match acquire(&client).await {
            Ok(token) => token,
            Err(event) => {
                let _ = sender.send(event);
                return;
            }
        };
        if sender.send(SessionEvent::TokenAcquired(token.clone())).is_err() {
            error!("session receiver dropped");
            return;
        }
        let _ = sender.send(fetch(&client, &token).await);
    });

    receiver
}

async fn drive(client: &Client) -> Vec<SessionEvent> {
    match acquire(client).await {
        Ok(token) => {
            let loaded = fetch(client, &token).await;
            vec![SessionEvent::TokenAcquired(token), loaded]
        }
        Err(event) => vec![event],
    }
}

async fn acquire(client: &Client) -> Result<crate::auth::Token, SessionEvent> {
    client.acquire_token().await.map_err(|err| {
        error!("Error getting token: {err}");
        SessionEvent::Failed(Failure {
            stage: Stage::Token,
            message: err.to_string(),
        })
    })
}

async fn fetch(client: &Client, token: &crate::auth::Token) -> SessionEvent {
    match client.fetch_animals(token).await {
        Ok(pets) => SessionEvent::PetsLoaded(pets),
        Err(err) => {
            error!("Error fetching pets: {err}");
            SessionEvent::Failed(Failure {
                stage: Stage::Listing,
                message: err.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stubs::HttpStub;
    use crate::testdata::responses;

    #[tokio::test]
    async fn test_run_loads_pets() {
        let stub = Arc::new(HttpStub::new(vec![(200, responses::TOKEN), (200, responses::ANIMALS)]));
        let client = Client::stubbed(stub);

        let state = run(&client).await;

        assert_eq!(state.pets().len(), 3);
    }

    #[tokio::test]
    async fn test_run_token_failure() {
        let stub = Arc::new(HttpStub::new(vec![(200, responses::TOKEN_WITHOUT_ACCESS_TOKEN)]));
        let client = Client::stubbed(stub.clone());

        let state = run(&client).await;

        assert!(state.is_loading());
        assert_eq!(state.failure().map(|f| f.stage), Some(Stage::Token));
        assert_eq!(stub.request_messages().len(), 1);
    }

    #[tokio::test]
    async fn test_spawn_publishes_events_in_order() {
        let stub = Arc::new(HttpStub::new(vec![(200, responses::TOKEN), (200, responses::ANIMALS)]));
        let client = Arc::new(Client::stubbed(stub));

        let mut receiver = spawn(client);

        assert!(matches!(receiver.recv().await, Some(SessionEvent::TokenAcquired(_))));
        assert!(matches!(receiver.recv().await, Some(SessionEvent::PetsLoaded(ref pets)) if pets.len() == 3));
        assert_eq!(receiver.recv().await, None);
    }
}
