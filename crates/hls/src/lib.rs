mod attributes;
mod error;
mod key;
mod master;
mod media;
mod tag;
mod uri;

pub use attributes::AttributeList;
pub use error::*;
pub use key::{decode_data_uri, Key};
pub use master::{MasterPlaylist, Rendition, RenditionType, VariantStream};
pub use media::{MediaPlaylist, Segment};
pub use uri::{Resolve, UriRef};
pub use url;

use serde::Serialize;
use url::Url;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Playlist {
    Master(MasterPlaylist),
    Media(MediaPlaylist),
}

impl Playlist {
    /// Parse `text` as a master playlist when an `#EXT-X-STREAM-INF` tag shows up before the
    /// first `#EXTINF`, and as a media playlist otherwise.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<_> = text.lines().collect();
        if is_master(&lines) {
            MasterPlaylist::from_lines(&lines).map(Self::Master)
        } else {
            MediaPlaylist::from_lines(&lines).map(Self::Media)
        }
    }

    pub fn resolve_uris(&mut self, base: &Url) {
        self.resolve(base);
    }

    pub fn as_master(&self) -> Option<&MasterPlaylist> {
        match self {
            Self::Master(playlist) => Some(playlist),
            Self::Media(_) => None,
        }
    }

    pub fn as_media(&self) -> Option<&MediaPlaylist> {
        match self {
            Self::Media(playlist) => Some(playlist),
            Self::Master(_) => None,
        }
    }
}

impl Resolve for Playlist {
    fn resolve(&mut self, base: &Url) {
        match self {
            Self::Master(playlist) => playlist.resolve(base),
            Self::Media(playlist) => playlist.resolve(base),
        }
    }
}

fn is_master(lines: &[&str]) -> bool {
    lines
        .iter()
        .find_map(|line| {
            if line.starts_with(tag::STREAM_INF) {
                Some(true)
            } else if line.starts_with(tag::INF) {
                Some(false)
            } else {
                None
            }
        })
        .unwrap_or(false)
}
