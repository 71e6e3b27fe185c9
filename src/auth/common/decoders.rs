use serde::Deserialize;
use time::{Duration, OffsetDateTime};

use crate::auth::Token;
use crate::messages::ResponseMessage;
use crate::Error;

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    token_type: Option<String>,
    expires_in: Option<i64>,
}

/// Decodes the token endpoint's response. `now` anchors the reported expiry.
pub(in crate::auth) fn decode_token(message: ResponseMessage, now: OffsetDateTime) -> Result<Token, Error> {
    let message = message.error_for_status()?;
    let response: TokenResponse = message.json()?;

    let access_token = match response.access_token {
        Some(token) if !token.is_empty() => token,
        _ => return Err(Error::Parse("access_token".into(), "field not found".into())),
    };

    let mut token = Token::new(access_token).with_expiry(response.expires_in.map(|seconds| now + Duration::seconds(seconds)));
    if let Some(token_type) = response.token_type {
        token = token.with_token_type(token_type);
    }

    Ok(token)
}
