//! Client for the Petfinder API.
//!
//! The Client holds the process-wide [Config] and a transport. It exposes the two calls the
//! session needs: the credentials exchange and the animal search.

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::animals::{self, Pet};
use crate::auth::{self, Token};
use crate::config::Config;
use crate::messages::{RequestMessage, ResponseMessage};
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::Error;

/// Blocking Petfinder API client.
pub struct Client {
    config: Config,
    transport: Arc<dyn HttpTransport>,
}

impl Client {
    /// Creates a client for the given configuration using a `reqwest` transport.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use adoptfinder::client::blocking::Client;
    /// use adoptfinder::config::{Config, Credentials};
    ///
    /// let client = Client::new(Config::new(Credentials::new("key", "secret")));
    /// let token = client.acquire_token().expect("token request failed");
    /// let pets = client.fetch_animals(&token).expect("search failed");
    ///
    /// for pet in &pets {
    ///     println!("{} - {}", pet.name, pet.primary_breed());
    /// }
    /// ```
    pub fn new(config: Config) -> Client {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    /// Creates a client configured from the environment. See [Config::from_env].
    pub fn from_env() -> Result<Client, Error> {
        Ok(Self::new(Config::from_env()?))
    }

    /// Creates a client that sends requests through `transport`.
    pub fn with_transport(config: Config, transport: Arc<dyn HttpTransport>) -> Client {
        Client { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Exchanges the configured credentials for a bearer token.
    pub fn acquire_token(&self) -> Result<Token, Error> {
        auth::blocking::acquire_token(self)
    }

    /// Searches for animals matching the configured query.
    pub fn fetch_animals(&self, token: &Token) -> Result<Vec<Pet>, Error> {
        animals::blocking::fetch_animals(self, token)
    }

    pub(crate) fn send_request(&self, request: &RequestMessage) -> Result<ResponseMessage, Error> {
        debug!("send_request({} {})", request.method, request.url);
        self.transport.send(request)
    }

    #[cfg(test)]
    pub(crate) fn stubbed(transport: Arc<crate::stubs::HttpStub>) -> Client {
        use crate::config::Credentials;

        Client::with_transport(
            Config::new(Credentials::new("test-key", "test-secret")).with_api_url("http://localhost/v2"),
            transport,
        )
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").field("config", &self.config).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stubs::HttpStub;
    use crate::testdata::responses;

    #[test]
    fn test_token_then_search() {
        let stub = Arc::new(HttpStub::new(vec![(200, responses::TOKEN), (200, responses::ANIMALS)]));
        let client = Client::stubbed(stub.clone());

        let token = client.acquire_token().expect("token request failed");
        let pets = client.fetch_animals(&token).expect("search failed");

        assert_eq!(pets.len(), 3);

        let requests = stub.request_messages();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url, "http://localhost/v2/oauth2/token");
        assert_eq!(requests[1].url, "http://localhost/v2/animals");
        assert_eq!(requests[1].header("Authorization"), Some(token.authorization().as_str()));
    }

    #[test]
    fn test_debug_hides_secret() {
        let client = Client::stubbed(Arc::new(HttpStub::new(vec![])));
        assert!(!format!("{client:?}").contains("test-secret"));
    }
}
