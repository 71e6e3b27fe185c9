//! Blocking transport backed by `reqwest::blocking`.

use log::debug;

use crate::messages::{Method, RequestMessage, ResponseMessage};
use crate::Error;

/// Sends HTTP requests on behalf of the blocking [Client](crate::client::blocking::Client).
pub trait HttpTransport: Send + Sync {
    fn send(&self, request: &RequestMessage) -> Result<ResponseMessage, Error>;
}

/// [HttpTransport] over a shared `reqwest` blocking client.
#[derive(Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: &RequestMessage) -> Result<ResponseMessage, Error> {
        debug!("-> {} {} {:?}", request.method, request.url, request.query);

        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        debug!("<- {status} ({} bytes)", body.len());
        Ok(ResponseMessage::new(status, body))
    }
}
