//! Asynchronous transport backed by `reqwest`.

use async_trait::async_trait;
use log::debug;

use crate::messages::{Method, RequestMessage, ResponseMessage};
use crate::Error;

/// Sends HTTP requests on behalf of the async [Client](crate::client::r#async::Client).
#[async_trait]
pub trait AsyncHttpTransport: Send + Sync {
    async fn send(&self, request: &RequestMessage) -> Result<ResponseMessage, Error>;
}

/// [AsyncHttpTransport] over a shared `reqwest` client.
#[derive(Debug, Default)]
pub struct AsyncReqwestTransport {
    client: reqwest::Client,
}

impl AsyncReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AsyncHttpTransport for AsyncReqwestTransport {
    async fn send(&self, request: &RequestMessage) -> Result<ResponseMessage, Error> {
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

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("<- {status} ({} bytes)", body.len());
        Ok(ResponseMessage::new(status, body))
    }
}
