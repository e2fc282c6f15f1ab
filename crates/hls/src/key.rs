use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Serialize;
use url::Url;

use crate::{
    attributes::AttributeList,
    error::DataUriError,
    uri::{Resolve, UriRef},
};

/// Encryption info from an `#EXT-X-KEY` or `#EXT-X-SESSION-KEY` tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Key {
    pub method: String,
    pub uri: Option<UriRef>,
    pub key_format: String,
    pub key_format_versions: String,
    pub iv: String,
    pub characteristics: String,
}

impl Key {
    pub(crate) fn from_tag(line: &str, prefix: &str) -> Self {
        Self::from_attributes(&AttributeList::parse(line, prefix))
    }

    pub(crate) fn from_attributes(attrs: &AttributeList) -> Self {
        Self {
            method: attrs.get_or_empty("METHOD").to_string(),
            uri: UriRef::parse_lossy(attrs.get_or_empty("URI")),
            key_format: attrs.get_or_empty("KEYFORMAT").to_string(),
            key_format_versions: attrs.get_or_empty("KEYFORMATVERSIONS").to_string(),
            iv: attrs.get_or_empty("IV").to_string(),
            characteristics: attrs.get_or_empty("CHARACTERISTICS").to_string(),
        }
    }

    /// Decode key material embedded inline as a base64 `data:` URI.
    pub fn decode_data(&self) -> Result<Vec<u8>, DataUriError> {
        let uri = self.uri.as_ref().ok_or(DataUriError::MissingUri)?;
        decode_data_uri(uri)
    }

    /// The IV as 16 bytes, accepting an optional `0x` prefix.
    pub fn iv_bytes(&self) -> Option<[u8; 16]> {
        let iv = self
            .iv
            .strip_prefix("0x")
            .or_else(|| self.iv.strip_prefix("0X"))
            .unwrap_or(self.iv.as_str());
        hex::decode(iv).ok()?.try_into().ok()
    }

    pub fn is_encrypted(&self) -> bool {
        !self.method.is_empty() && self.method != "NONE"
    }
}

impl Resolve for Key {
    fn resolve(&mut self, base: &Url) {
        self.uri.resolve(base);
    }
}

/// Decode the payload of a `data:[<mediatype>][;base64],<data>` URI.
///
/// Only the base64 form is accepted. Percent-encoded payloads are rejected instead of being
/// decoded as text.
pub fn decode_data_uri(uri: &UriRef) -> Result<Vec<u8>, DataUriError> {
    let url = uri
        .as_url()
        .filter(|url| url.scheme() == "data")
        .ok_or_else(|| DataUriError::NotDataUri(uri.to_string()))?;

    let (meta, data) = url.path().split_once(',').ok_or(DataUriError::Malformed)?;
    if !meta.contains(";base64") {
        return Err(DataUriError::UnsupportedEncoding);
    }

    Ok(STANDARD.decode(data)?)
}
