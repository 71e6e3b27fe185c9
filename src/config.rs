//! Process-wide configuration: API credentials, the API base URL and the listing query.
//!
//! Credentials are read once at startup and are immutable afterwards.

use std::env;
use std::fmt;

use log::{debug, info};

use crate::Error;

/// Base URL of the Petfinder v2 API.
pub const DEFAULT_API_URL: &str = "https://api.petfinder.com/v2";

/// Environment variable holding the API client key.
pub const KEY_VAR: &str = "PETFINDER_KEY";
/// Environment variable holding the API client secret.
pub const SECRET_VAR: &str = "PETFINDER_SECRET";
/// Environment variable overriding [DEFAULT_API_URL].
pub const API_URL_VAR: &str = "PETFINDER_API_URL";

// Names used by the original web front-end build.
const LEGACY_KEY_VAR: &str = "VITE_PETFINDER_KEY";
const LEGACY_SECRET_VAR: &str = "VITE_PETFINDER_SECRET";

/// Client identifier and secret exchanged for a bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// The one listing query issued per session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingQuery {
    /// Species, e.g. `Dog`.
    pub animal_type: String,
    /// City and state, e.g. `Miami, FL`.
    pub location: String,
    /// Maximum number of records returned.
    pub limit: u32,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            animal_type: "Dog".into(),
            location: "Miami, FL".into(),
            limit: 10,
        }
    }
}

/// Client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub credentials: Credentials,
    pub api_url: String,
    pub query: ListingQuery,
}

impl Config {
    /// Creates a configuration for the public API with the default listing query.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            api_url: DEFAULT_API_URL.into(),
            query: ListingQuery::default(),
        }
    }

    /// Loads the configuration from the environment.
    ///
    /// `PETFINDER_KEY` and `PETFINDER_SECRET` are required. The `VITE_` prefixed names are
    /// accepted as fallbacks. `PETFINDER_API_URL` optionally overrides the base URL.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use adoptfinder::config::Config;
    ///
    /// let config = Config::from_env().expect("credentials not configured");
    /// println!("api: {}", config.api_url);
    /// ```
    pub fn from_env() -> Result<Self, Error> {
        let client_id = required(KEY_VAR, LEGACY_KEY_VAR)?;
        let client_secret = required(SECRET_VAR, LEGACY_SECRET_VAR)?;

        let api_url = match env::var(API_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => {
                info!("{API_URL_VAR} set, using {url}");
                url.trim().trim_end_matches('/').to_string()
            }
            _ => DEFAULT_API_URL.to_string(),
        };

        Ok(Self {
            credentials: Credentials::new(client_id, client_secret),
            api_url,
            query: ListingQuery::default(),
        })
    }

    /// Overrides the API base URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Overrides the listing query.
    pub fn with_query(mut self, query: ListingQuery) -> Self {
        self.query = query;
        self
    }

    /// URL of the OAuth token endpoint.
    pub fn token_url(&self) -> String {
        format!("{}/oauth2/token", self.api_url)
    }

    /// URL of the animal search endpoint.
    pub fn animals_url(&self) -> String {
        format!("{}/animals", self.api_url)
    }
}

fn required(key: &str, fallback: &str) -> Result<String, Error> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => {
            debug!("{key} not set, trying {fallback}");
            match env::var(fallback) {
                Ok(value) if !value.is_empty() => Ok(value),
                _ => Err(Error::MissingConfig(key.to_string())),
            }
        }
    }
}
