//! Asynchronous implementation of animal searches

use log::info;

use super::common::{decoders, encoders};
use super::Pet;
use crate::auth::Token;
use crate::client::r#async::Client;
use crate::Error;

/// Runs the configured animal search with the given token.
pub(crate) async fn fetch_animals(client: &Client, token: &Token) -> Result<Vec<Pet>, Error> {
    let request = encoders::encode_search_animals(client.config(), token);
    let response = client.send_request(&request).await?;
    let pets = decoders::decode_animals(response)?;

    info!("fetched {} animals", pets.len());
    Ok(pets)
}
