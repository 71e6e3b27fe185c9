use crate::auth::Token;
use crate::config::Config;
use crate::messages::RequestMessage;

/// Encodes the authenticated animal search for the configured query.
pub(in crate::animals) fn encode_search_animals(config: &Config, token: &Token) -> RequestMessage {
    let mut message = RequestMessage::get(config.animals_url());
    message.push_header("Authorization", token.authorization());
    message.push_query("type", &config.query.animal_type);
    message.push_query("location", &config.query.location);
    message.push_query("limit", config.query.limit);
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credentials;
    use crate::messages::Method;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_search_animals() {
        let config = Config::new(Credentials::new("id", "secret"));
        let token = Token::new("abc123");

        let message = encode_search_animals(&config, &token);

        assert_eq!(message.method, Method::Get);
        assert_eq!(message.url, "https://api.petfinder.com/v2/animals");
        assert_eq!(message.header("Authorization"), Some("Bearer abc123"));
        assert_eq!(
            message.query,
            vec![
                ("type".to_string(), "Dog".to_string()),
                ("location".to_string(), "Miami, FL".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
        assert_eq!(message.body, None);
    }
}
