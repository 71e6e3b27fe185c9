use std::collections::VecDeque;
use std::sync::{Mutex, RwLock};

#[cfg(feature = "async")]
use async_trait::async_trait;

use crate::messages::{RequestMessage, ResponseMessage};
#[cfg(feature = "async")]
use crate::transport::AsyncHttpTransport;
#[cfg(feature = "sync")]
use crate::transport::HttpTransport;
use crate::Error;

/// Records outgoing requests and replays canned responses in order.
pub(crate) struct HttpStub {
    pub request_messages: RwLock<Vec<RequestMessage>>,
    pub response_messages: Mutex<VecDeque<Result<ResponseMessage, Error>>>,
}

impl HttpStub {
    pub fn new(responses: Vec<(u16, &str)>) -> Self {
        Self {
            request_messages: RwLock::new(vec![]),
            response_messages: Mutex::new(responses.into_iter().map(|(status, body)| Ok(ResponseMessage::new(status, body))).collect()),
        }
    }

    /// A stub whose first request fails before any response is received.
    pub fn unreachable() -> Self {
        let stub = Self::new(vec![]);
        stub.response_messages
            .lock()
            .unwrap()
            .push_back(Err(Error::Simple("connection refused".into())));
        stub
    }

    pub fn request_messages(&self) -> Vec<RequestMessage> {
        self.request_messages.read().unwrap().clone()
    }

    fn reply(&self, request: &RequestMessage) -> Result<ResponseMessage, Error> {
        self.request_messages.write().unwrap().push(request.clone());

        match self.response_messages.lock()?.pop_front() {
            Some(response) => response,
            None => Err(Error::Simple(format!("no response queued for {} {}", request.method, request.url))),
        }
    }
}

#[cfg(feature = "sync")]
impl HttpTransport for HttpStub {
    fn send(&self, request: &RequestMessage) -> Result<ResponseMessage, Error> {
        self.reply(request)
    }
}

#[cfg(feature = "async")]
#[async_trait]
impl AsyncHttpTransport for HttpStub {
    async fn send(&self, request: &RequestMessage) -> Result<ResponseMessage, Error> {
        self.reply(request)
    }
}
