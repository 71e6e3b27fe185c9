use serde_json::json;

use crate::auth::GRANT_TYPE;
use crate::config::Config;
use crate::messages::RequestMessage;

/// Encodes the client-credentials grant sent to the token endpoint.
pub(in crate::auth) fn encode_token_request(config: &Config) -> RequestMessage {
    let mut message = RequestMessage::post(config.token_url());
    message.set_json(json!({
        "grant_type": GRANT_TYPE,
        "client_id": config.credentials.client_id,
        "client_secret": config.credentials.client_secret,
    }));
    message
}
