use std::fmt;

#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    // Errors from external libraries
    Io(std::io::Error),
    Http(reqwest::Error),
    Json(serde_json::Error),
    Poison(String),

    // Errors from the adoptfinder library
    /// The server answered with a non-success status. Carries the status code and response body.
    Status(u16, String),
    /// A required configuration value was not set.
    MissingConfig(String),
    /// A response was missing an expected field or had an unexpected shape.
    Parse(String, String),
    Simple(String),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Http(err) => Some(err),
            Error::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(ref err) => write!(f, "{err}"),
            Error::Http(ref err) => write!(f, "{err}"),
            Error::Json(ref err) => write!(f, "{err}"),
            Error::Poison(ref err) => write!(f, "{err}"),

            Error::Status(code, body) => write!(f, "request failed with status {code}: {body}"),
            Error::MissingConfig(name) => write!(f, "missing configuration: {name}"),
            Error::Parse(field, message) => write!(f, "parse error: {field} - {message}"),
            Error::Simple(ref err) => write!(f, "error occurred: {err}"),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Error {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Json(err)
    }
}

impl<T> From<std::sync::PoisonError<T>> for Error {
    fn from(err: std::sync::PoisonError<T>) -> Error {
        Error::Poison(format!("Mutex poison error: {err}"))
    }
}
