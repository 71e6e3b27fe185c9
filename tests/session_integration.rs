//! End-to-end flows through the public API with an in-process fake of the Petfinder API.

use std::sync::Mutex;

use adoptfinder::config::{Config, Credentials};
use adoptfinder::messages::{Method, RequestMessage, ResponseMessage};
use adoptfinder::Error;

const ACCESS_TOKEN: &str = "integration-token";

/// Answers like the real API: validates credentials on the token endpoint and the bearer
/// token on the search endpoint.
struct FakePetfinder {
    ages: Vec<&'static str>,
    token_status: u16,
    requests: Mutex<Vec<RequestMessage>>,
}

impl FakePetfinder {
    fn new(ages: Vec<&'static str>) -> Self {
        Self {
            ages,
            token_status: 200,
            requests: Mutex::new(vec![]),
        }
    }

    fn rejecting_credentials() -> Self {
        Self {
            token_status: 401,
            ..Self::new(vec![])
        }
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn respond(&self, request: &RequestMessage) -> Result<ResponseMessage, Error> {
        self.requests.lock().unwrap().push(request.clone());

        match (request.method, request.url.as_str()) {
            (Method::Post, "http://fake/v2/oauth2/token") => {
                if self.token_status != 200 {
                    return Ok(ResponseMessage::new(self.token_status, r#"{"title":"invalid_client"}"#));
                }
                let body = request.body.clone().unwrap_or_default();
                assert_eq!(body["grant_type"], "client_credentials");
                assert_eq!(body["client_id"], "it-key");
                assert_eq!(body["client_secret"], "it-secret");
                Ok(ResponseMessage::new(
                    200,
                    format!(r#"{{"token_type":"Bearer","expires_in":3600,"access_token":"{ACCESS_TOKEN}"}}"#),
                ))
            }
            (Method::Get, "http://fake/v2/animals") => {
                if request.header("Authorization") != Some(format!("Bearer {ACCESS_TOKEN}").as_str()) {
                    return Ok(ResponseMessage::new(401, r#"{"title":"Unauthorized"}"#));
                }
                assert_eq!(request.query_value("type"), Some("Dog"));
                assert_eq!(request.query_value("location"), Some("Miami, FL"));
                assert_eq!(request.query_value("limit"), Some("10"));
                Ok(ResponseMessage::new(200, animals_body(&self.ages)))
            }
            (method, url) => Ok(ResponseMessage::new(404, format!("no route for {method} {url}"))),
        }
    }
}

fn animals_body(ages: &[&str]) -> String {
    let animals: Vec<serde_json::Value> = ages
        .iter()
        .enumerate()
        .map(|(i, age)| {
            serde_json::json!({
                "id": i + 1,
                "name": format!("Dog {}", i + 1),
                "breeds": {"primary": "Mixed Breed"},
                "age": age,
                "gender": "Male",
                "photos": [],
                "url": format!("https://www.petfinder.com/dog/{}/", i + 1),
            })
        })
        .collect();
    serde_json::json!({ "animals": animals }).to_string()
}

fn config() -> Config {
    Config::new(Credentials::new("it-key", "it-secret")).with_api_url("http://fake/v2")
}

#[cfg(feature = "sync")]
mod blocking {
    use std::sync::Arc;

    use adoptfinder::animals::Age;
    use adoptfinder::client::blocking::Client;
    use adoptfinder::session::{self, SessionEvent, Stage};
    use adoptfinder::transport::HttpTransport;
    use adoptfinder::view::{render, AgeFilter, ViewState};

    use super::*;

    impl HttpTransport for FakePetfinder {
        fn send(&self, request: &RequestMessage) -> Result<ResponseMessage, Error> {
            self.respond(request)
        }
    }

    #[test]
    fn test_adult_filter_scenario() {
        let fake = Arc::new(FakePetfinder::new(vec!["Baby", "Adult", "Adult"]));
        let client = Client::with_transport(config(), fake.clone());

        let mut view = ViewState::with_session(session::blocking::run(&client));
        assert!(!view.is_loading());
        assert_eq!(fake.request_count(), 2);

        view.set_age_filter(AgeFilter::Only(Age::Adult));
        let filtered: Vec<u64> = view.filtered_pets().iter().map(|pet| pet.id).collect();
        assert_eq!(filtered, vec![2, 3]);

        let mut shown = vec![];
        for _ in 0..4 {
            shown.push(view.current_pet().unwrap().id);
            view.next();
        }
        assert_eq!(shown, vec![2, 3, 2, 3]);
    }

    #[test]
    fn test_token_failure_scenario() {
        let fake = Arc::new(FakePetfinder::rejecting_credentials());
        let client = Client::with_transport(config(), fake.clone());

        let state = session::blocking::run(&client);
        assert_eq!(state.failure().map(|failure| failure.stage), Some(Stage::Token));
        assert_eq!(fake.request_count(), 1);

        let mut view = ViewState::with_session(state);
        view.set_history_query("dog");

        let output = view.render();
        assert!(output.contains(render::LOADING));
        assert!(output.contains(render::HISTORY_TITLE));
        assert!(output.ends_with("Search: dog"));
        assert!(view.filtered_pets().is_empty());
    }

    #[test]
    fn test_background_session_feeds_view() {
        let fake = Arc::new(FakePetfinder::new(vec!["Young", "Senior"]));
        let client = Arc::new(Client::with_transport(config(), fake));

        let mut view = ViewState::new();
        assert!(view.render().contains(render::LOADING));

        for event in session::blocking::spawn(client) {
            let loaded = matches!(event, SessionEvent::PetsLoaded(_));
            view.apply(event);
            assert_eq!(view.is_loading(), !loaded);
        }

        assert!(view.render().contains("  Dog 1\n  Mixed Breed • Young • Male"));
    }
}

#[cfg(feature = "async")]
mod non_blocking {
    use std::sync::Arc;

    use adoptfinder::client::r#async::Client;
    use adoptfinder::session::{self, Stage};
    use adoptfinder::transport::AsyncHttpTransport;
    use adoptfinder::view::ViewState;
    use async_trait::async_trait;

    use super::*;

    #[async_trait]
    impl AsyncHttpTransport for FakePetfinder {
        async fn send(&self, request: &RequestMessage) -> Result<ResponseMessage, Error> {
            self.respond(request)
        }
    }

    #[tokio::test]
    async fn test_session_loads() {
        let fake = Arc::new(FakePetfinder::new(vec!["Baby", "Adult", "Adult"]));
        let client = Client::with_transport(config(), fake.clone());

        let mut view = ViewState::with_session(session::run(&client).await);

        assert_eq!(view.filtered_pets().len(), 3);
        assert!(view.next());
        assert_eq!(view.history().len(), 1);
    }

    #[tokio::test]
    async fn test_token_failure() {
        let fake = Arc::new(FakePetfinder::rejecting_credentials());
        let client = Arc::new(Client::with_transport(config(), fake.clone()));

        let mut events = session::spawn(client);
        let mut view = ViewState::new();
        while let Some(event) = events.recv().await {
            view.apply(event);
        }

        assert!(view.is_loading());
        assert_eq!(view.session().failure().map(|failure| failure.stage), Some(Stage::Token));
        assert_eq!(fake.request_count(), 1);
    }
}
