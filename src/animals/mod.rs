//! Adoptable animal listings.
//!
//! One authenticated search is issued per session and its results are kept for the
//! lifetime of the view. Records are stored as returned by the API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

// Common implementation modules
mod common;

// Feature-specific implementations
#[cfg(feature = "sync")]
mod sync;

#[cfg(feature = "async")]
mod r#async;

/// Unique, stable identifier of an animal.
pub type PetId = u64;

/// An adoptable animal.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub breeds: Breeds,
    pub age: Age,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub gender: String,
    /// Photos in the order listed by the shelter. May be empty.
    #[serde(default)]
    pub photos: Vec<Photo>,
    /// Public profile page.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Pet {
    pub fn primary_breed(&self) -> &str {
        &self.breeds.primary
    }

    /// Medium-size URL of the first photo, if the animal has one.
    pub fn photo_url(&self) -> Option<&str> {
        self.photos.first().and_then(|photo| photo.medium.as_deref())
    }
}

/// Breed descriptor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Breeds {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub primary: String,
    #[serde(default)]
    pub secondary: Option<String>,
    #[serde(default)]
    pub mixed: bool,
    #[serde(default)]
    pub unknown: bool,
}

/// Photo URLs by size. Any size may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Photo {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub full: Option<String>,
}

/// Age bracket. Values outside the documented set are kept verbatim in [Age::Other].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Age {
    Baby,
    Young,
    Adult,
    Senior,
    Other(String),
}

impl Age {
    /// The documented age brackets, youngest first.
    pub const KNOWN: [Age; 4] = [Age::Baby, Age::Young, Age::Adult, Age::Senior];

    pub fn as_str(&self) -> &str {
        match self {
            Age::Baby => "Baby",
            Age::Young => "Young",
            Age::Adult => "Adult",
            Age::Senior => "Senior",
            Age::Other(value) => value,
        }
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for Age {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Baby" => Age::Baby,
            "Young" => Age::Young,
            "Adult" => Age::Adult,
            "Senior" => Age::Senior,
            _ => Age::Other(value),
        }
    }
}

impl From<Age> for String {
    fn from(age: Age) -> Self {
        match age {
            Age::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

/// Case-insensitive parse of a known bracket. Anything else is kept as typed.
impl FromStr for Age {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(Age::KNOWN
            .into_iter()
            .find(|age| age.as_str().eq_ignore_ascii_case(s))
            .unwrap_or_else(|| Age::Other(s.to_string())))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// Re-export API functions based on active feature
#[cfg(feature = "sync")]
pub mod blocking {
    pub(crate) use super::sync::fetch_animals;
}

#[cfg(feature = "async")]
pub(crate) use r#async::fetch_animals;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_age_from_string() {
        assert_eq!(Age::from("Baby".to_string()), Age::Baby);
        assert_eq!(Age::from("Senior".to_string()), Age::Senior);
        assert_eq!(Age::from("adult".to_string()), Age::Other("adult".into()));
        assert_eq!(String::from(Age::Young), "Young");
        assert_eq!(String::from(Age::Other("Puppy".into())), "Puppy");
    }

    #[test]
    fn test_age_from_str_is_case_insensitive() {
        assert_eq!("adult".parse::<Age>().unwrap(), Age::Adult);
        assert_eq!(" SENIOR ".parse::<Age>().unwrap(), Age::Senior);
        assert_eq!("Puppy".parse::<Age>().unwrap(), Age::Other("Puppy".into()));
    }

    #[test]
    fn test_deserialize_pet_with_nulls() {
        let pet: Pet = serde_json::from_value(json!({
            "id": 7,
            "name": "Rex",
            "breeds": {"primary": null},
            "age": "Young",
            "gender": null,
            "photos": [],
            "url": "https://www.petfinder.com/dog/rex-7/"
        }))
        .expect("deserialization failed");

        assert_eq!(pet.primary_breed(), "");
        assert_eq!(pet.gender, "");
        assert_eq!(pet.age, Age::Young);
        assert_eq!(pet.photo_url(), None);
        assert_eq!(pet.description, None);
    }

    #[test]
    fn test_photo_url_uses_first_medium() {
        let pet: Pet = serde_json::from_value(json!({
            "id": 8,
            "name": "Pepper",
            "breeds": {"primary": "Beagle"},
            "age": "Adult",
            "gender": "Female",
            "photos": [
                {"small": "s1", "medium": "m1"},
                {"medium": "m2"}
            ],
            "url": "u"
        }))
        .expect("deserialization failed");

        assert_eq!(pet.photo_url(), Some("m1"));
    }
}
