// oauth

pub const TOKEN: &str = r#"{"token_type":"Bearer","expires_in":3600,"access_token":"eyJ0eXAiOiJKV1QiLCJhbGciOiJSUzI1NiJ9.test"}"#;
pub const TOKEN_WITHOUT_ACCESS_TOKEN: &str = r#"{"token_type":"Bearer","expires_in":3600}"#;
pub const TOKEN_INVALID_CLIENT: &str =
    r#"{"type":"https://httpstatus.es/401","status":401,"title":"invalid_client","detail":"Client authentication failed"}"#;

// animals

pub const ANIMALS: &str = r#"{
  "animals": [
    {
      "id": 72000001,
      "name": "Biscuit",
      "breeds": {"primary": "Labrador Retriever", "secondary": null, "mixed": false, "unknown": false},
      "age": "Baby",
      "gender": "Male",
      "photos": [
        {
          "small": "https://photos.petfinder.com/photos/pets/72000001/1/?width=100",
          "medium": "https://photos.petfinder.com/photos/pets/72000001/1/?width=300",
          "large": "https://photos.petfinder.com/photos/pets/72000001/1/?width=600",
          "full": "https://photos.petfinder.com/photos/pets/72000001/1/"
        }
      ],
      "url": "https://www.petfinder.com/dog/biscuit-72000001/fl/miami/",
      "description": "Loves belly rubs."
    },
    {
      "id": 72000002,
      "name": "Luna",
      "breeds": {"primary": "Pit Bull Terrier", "secondary": "Boxer", "mixed": true, "unknown": false},
      "age": "Adult",
      "gender": "Female",
      "photos": [],
      "url": "https://www.petfinder.com/dog/luna-72000002/fl/miami/",
      "description": null
    },
    {
      "id": 72000003,
      "name": "Max",
      "breeds": {"primary": "German Shepherd Dog", "secondary": null, "mixed": false, "unknown": false},
      "age": "Adult",
      "gender": "Male",
      "photos": [{"small": null, "medium": "https://photos.petfinder.com/photos/pets/72000003/1/?width=300", "large": null, "full": null}],
      "url": "https://www.petfinder.com/dog/max-72000003/fl/miami/"
    }
  ],
  "pagination": {"count_per_page": 10, "total_count": 3, "current_page": 1, "total_pages": 1}
}"#;

pub const ANIMALS_EMPTY: &str = r#"{"animals":[],"pagination":{"count_per_page":10,"total_count":0,"current_page":1,"total_pages":0}}"#;
pub const ANIMALS_MISSING_FIELD: &str = r#"{"pagination":{"count_per_page":10,"total_count":0,"current_page":1,"total_pages":0}}"#;
pub const ANIMALS_UNAUTHORIZED: &str =
    r#"{"type":"https://httpstatus.es/401","status":401,"title":"Unauthorized","detail":"Access token invalid or expired"}"#;
