//! Asynchronous client for the Petfinder API.

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::animals::{self, Pet};
use crate::auth::{self, Token};
use crate::config::Config;
use crate::messages::{RequestMessage, ResponseMessage};
use crate::transport::{AsyncHttpTransport, AsyncReqwestTransport};
use crate::Error;

/// Asynchronous Petfinder API client.
pub struct Client {
    config: Config,
    transport: Arc<dyn AsyncHttpTransport>,
}

impl Client {
    /// Creates a client for the given configuration using a `reqwest` transport.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use adoptfinder::client::r#async::Client;
    /// use adoptfinder::config::{Config, Credentials};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = Client::new(Config::new(Credentials::new("key", "secret")));
    ///     let token = client.acquire_token().await.expect("token request failed");
    ///     let pets = client.fetch_animals(&token).await.expect("search failed");
    ///     println!("{} pets", pets.len());
    /// }
    /// ```
    pub fn new(config: Config) -> Client {
        Self::with_transport(config, Arc::new(AsyncReqwestTransport::new()))
    }

    /// Creates a client configured from the environment. See [Config::from_env].
    pub fn from_env() -> Result<Client, Error> {
        Ok(Self::new(Config::from_env()?))
    }

    /// Creates a client that sends requests through `transport`.
    pub fn with_transport(config: Config, transport: Arc<dyn AsyncHttpTransport>) -> Client {
        Client { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Exchanges the configured credentials for a bearer token.
    pub async fn acquire_token(&self) -> Result<Token, Error> {
        auth::acquire_token(self).await
    }

    /// Searches for animals matching the configured query.
    pub async fn fetch_animals(&self, token: &Token) -> Result<Vec<Pet>, Error> {
        animals::fetch_animals(self, token).await
    }

    pub(crate) async fn send_request(&self, request: &RequestMessage) -> Result<ResponseMessage, Error> {
        debug!("send_request({} {})", request.method, request.url);
        self.transport.send(request).await
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

    #[tokio::test]
    async fn test_token_then_search() {
        let stub = Arc::new(HttpStub::new(vec![(200, responses::TOKEN), (200, responses::ANIMALS)]));
        let client = Client::stubbed(stub.clone());

        let token = client.acquire_token().await.expect("token request failed");
        let pets = client.fetch_animals(&token).await.expect("search failed");

        assert_eq!(pets.len(), 3);
        assert_eq!(stub.request_messages().len(), 2);
    }
}
