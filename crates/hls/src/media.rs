use std::str::FromStr;

use serde::Serialize;
use url::Url;

use crate::{
    attributes::AttributeList,
    error::{Error, Result},
    key::Key,
    tag,
    uri::{Resolve, UriRef},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaPlaylist {
    pub target_duration: i64,
    pub media_sequence: i64,
    pub version: i64,
    /// `VOD`, `EVENT`, or whatever else the playlist declared
    pub playlist_type: String,
    pub end_list: bool,
    pub segments: Vec<Segment>,
    /// Every `#EXT-X-KEY` in order of appearance
    pub keys: Vec<Key>,
    /// The last `#EXT-X-MAP` URI
    pub map: Option<UriRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Segment {
    pub uri: Option<UriRef>,
    pub duration: f64,
    pub title: String,
}

impl MediaPlaylist {
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_lines(&text.lines().collect::<Vec<_>>())
    }

    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let mut playlist = Self::default();

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i].as_ref();

            if let Some(value) = line.strip_prefix(tag::VERSION) {
                playlist.version = parse_integer(tag::VERSION, value)?;
            } else if let Some(value) = line.strip_prefix(tag::TARGET_DURATION) {
                playlist.target_duration = parse_integer(tag::TARGET_DURATION, value)?;
            } else if let Some(value) = line.strip_prefix(tag::MEDIA_SEQUENCE) {
                playlist.media_sequence = parse_integer(tag::MEDIA_SEQUENCE, value)?;
            } else if let Some(value) = line.strip_prefix(tag::PLAYLIST_TYPE) {
                playlist.playlist_type = value.to_string();
            } else if line.starts_with(tag::END_LIST) {
                playlist.end_list = true;
            } else if line.starts_with(tag::KEY) {
                playlist.keys.push(Key::from_tag(line, tag::KEY));
            } else if line.starts_with(tag::MAP) {
                let attrs = AttributeList::parse(line, tag::MAP);
                if let Some(map) = UriRef::parse_lossy(attrs.get_or_empty("URI")) {
                    playlist.map = Some(map);
                }
            } else if let Some(value) = line.strip_prefix(tag::INF) {
                let (duration, title) = value.split_once(',').unwrap_or((value, ""));
                let duration =
                    f64::from_str(duration.trim()).map_err(|source| Error::InvalidDuration {
                        tag: tag::name(tag::INF),
                        value: duration.to_string(),
                        source,
                    })?;

                // the URI line directly follows its EXTINF
                let uri = match lines.get(i + 1).map(AsRef::as_ref) {
                    Some(next) if !next.is_empty() && !next.starts_with('#') => {
                        i += 1;
                        UriRef::parse_lossy(next.trim())
                    }
                    _ => None,
                };

                playlist.segments.push(Segment {
                    uri,
                    duration,
                    title: title.trim().to_string(),
                });
            }

            i += 1;
        }

        log::debug!(
            "Parsed media playlist: {} segments, {} keys",
            playlist.segments.len(),
            playlist.keys.len()
        );
        Ok(playlist)
    }

    /// Resolve segment, key and map URIs against `base`.
    pub fn resolve_uris(&mut self, base: &Url) {
        self.resolve(base);
    }

    pub fn total_duration(&self) -> f64 {
        self.segments.iter().map(|segment| segment.duration).sum()
    }
}

impl Resolve for MediaPlaylist {
    fn resolve(&mut self, base: &Url) {
        self.keys.resolve(base);
        self.segments.resolve(base);
        self.map.resolve(base);
    }
}

impl Resolve for Segment {
    fn resolve(&mut self, base: &Url) {
        self.uri.resolve(base);
    }
}

fn parse_integer(prefix: &'static str, value: &str) -> Result<i64> {
    value
        .trim()
        .parse()
        .map_err(|source| Error::InvalidInteger {
            tag: tag::name(prefix),
            value: value.to_string(),
            source,
        })
}
