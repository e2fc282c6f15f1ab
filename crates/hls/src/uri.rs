use std::fmt;

use serde::Serialize;
use url::{ParseError, Url};

/// A URI reference as written in a playlist.
///
/// Relative references keep their original text until [`Resolve::resolve`] joins them with a
/// base, after which they become [`UriRef::Absolute`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UriRef {
    Absolute(Url),
    Relative(String),
}

impl UriRef {
    /// Parse a URI-reference: either an absolute URI, or a relative reference that can be joined
    /// with an absolute base.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        match Url::parse(input) {
            Ok(url) => Ok(Self::Absolute(url)),
            Err(ParseError::RelativeUrlWithoutBase) => {
                Url::parse("https://placeholder.invalid/")?.join(input)?;
                Ok(Self::Relative(input.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    /// Parse a URI taken from a playlist line or attribute.
    ///
    /// Empty and malformed input yields `None`, which is how playlists record an absent URI.
    pub(crate) fn parse_lossy(input: &str) -> Option<Self> {
        if input.is_empty() {
            return None;
        }

        match Self::parse(input) {
            Ok(uri) => Some(uri),
            Err(e) => {
                log::warn!("Ignored invalid URI {input:?}: {e}");
                None
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Absolute(url) => url.as_str(),
            Self::Relative(reference) => reference.as_str(),
        }
    }

    pub fn as_url(&self) -> Option<&Url> {
        match self {
            Self::Absolute(url) => Some(url),
            Self::Relative(_) => None,
        }
    }

    pub fn is_absolute(&self) -> bool {
        matches!(self, Self::Absolute(_))
    }

    pub fn scheme(&self) -> Option<&str> {
        self.as_url().map(Url::scheme)
    }
}

impl fmt::Display for UriRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait Resolve {
    /// Resolve every relative URI held by `self` against `base`, in place.
    ///
    /// Absolute URIs are left untouched.
    fn resolve(&mut self, base: &Url);
}

impl Resolve for UriRef {
    fn resolve(&mut self, base: &Url) {
        if let Self::Relative(reference) = self {
            match base.join(reference) {
                Ok(url) => *self = Self::Absolute(url),
                Err(e) => log::warn!("Failed to resolve {reference:?} against {base}: {e}"),
            }
        }
    }
}

impl<T: Resolve> Resolve for Option<T> {
    fn resolve(&mut self, base: &Url) {
        if let Some(inner) = self {
            inner.resolve(base);
        }
    }
}

impl<T: Resolve> Resolve for Vec<T> {
    fn resolve(&mut self, base: &Url) {
        for item in self.iter_mut() {
            item.resolve(base);
        }
    }
}
