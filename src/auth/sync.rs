//! Synchronous implementation of the token exchange

use log::info;
use time::OffsetDateTime;

use super::common::{decoders, encoders};
use super::Token;
use crate::client::sync::Client;
use crate::Error;

/// Exchanges the client's credentials for a bearer token.
pub(crate) fn acquire_token(client: &Client) -> Result<Token, Error> {
    let request = encoders::encode_token_request(client.config());
    let response = client.send_request(&request)?;
    let token = decoders::decode_token(response, OffsetDateTime::now_utc())?;

    info!("acquired {} token, expires at {:?}", token.token_type(), token.expires_at());
    Ok(token)
}
