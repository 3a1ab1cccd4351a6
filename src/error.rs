use custom_error::custom_error;

pub type Result<T> = std::result::Result<T, Error>;

custom_error! {#[derive(PartialEq)] pub Error
    EmptyRoute = "Route string contains no elements",
    Classification{token: String, position: usize} =
        "Token {token} at position {position} matches no route element",
    MalformedField{token: String, position: usize, expected: &'static str} =
        "Token {token} at position {position} has a malformed {expected} field",
    UnknownUnit{code: String} = "Unknown unit code {code}",
    Io{kind: std::io::ErrorKind, message: String} = "I/O error: {message}"
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io {
            kind: e.kind(),
            message: e.to_string(),
        }
    }
}

impl Error {
    pub(crate) fn classification(token: &str) -> Error {
        Error::Classification {
            token: token.to_owned(),
            position: 0,
        }
    }

    pub(crate) fn malformed(token: &str, expected: &'static str) -> Error {
        Error::MalformedField {
            token: token.to_owned(),
            position: 0,
            expected,
        }
    }

    /// Stamps the 0-based token position onto a token error.
    pub fn at(self, position: usize) -> Error {
        match self {
            Error::Classification { token, .. } => Error::Classification { token, position },
            Error::MalformedField {
                token, expected, ..
            } => Error::MalformedField {
                token,
                position,
                expected,
            },
            other => other,
        }
    }

    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Classification { position, .. } | Error::MalformedField { position, .. } => {
                Some(*position)
            }
            _ => None,
        }
    }
}
