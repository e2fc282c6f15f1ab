use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid {tag} value {value:?}: {source}")]
    InvalidInteger {
        tag: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid {tag} duration {value:?}: {source}")]
    InvalidDuration {
        tag: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Failures of [`crate::Key::decode_data`].
///
/// These are never raised while parsing a playlist.
#[derive(Error, Debug)]
pub enum DataUriError {
    #[error("key has no URI")]
    MissingUri,

    #[error("URI is not a data URI: {0}")]
    NotDataUri(String),

    #[error("invalid data URI: missing comma separator")]
    Malformed,

    #[error("data URI does not contain base64 indicator")]
    UnsupportedEncoding,

    #[error("failed to decode data URI payload: {0}")]
    Decode(#[from] base64::DecodeError),
}

pub type Result<T> = std::result::Result<T, Error>;
