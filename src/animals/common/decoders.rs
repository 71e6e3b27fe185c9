use log::warn;
use serde::Deserialize;

use crate::animals::{Age, Pet};
use crate::messages::ResponseMessage;
use crate::Error;

#[derive(Deserialize)]
struct AnimalsResponse {
    animals: Option<Vec<Pet>>,
}

/// Decodes an animal search response into pet records, in the order returned.
pub(in crate::animals) fn decode_animals(message: ResponseMessage) -> Result<Vec<Pet>, Error> {
    let message = message.error_for_status()?;
    let response: AnimalsResponse = message.json()?;

    let pets = response
        .animals
        .ok_or_else(|| Error::Parse("animals".into(), "field not found".into()))?;

    for pet in &pets {
        if let Age::Other(age) = &pet.age {
            warn!("pet {} has unrecognized age {age:?}", pet.id);
        }
    }

    Ok(pets)
}
