use std::{collections::HashMap, fmt};

use serde::{Serialize, Serializer};
use url::Url;

use crate::{
    attributes::AttributeList,
    error::Result,
    key::Key,
    tag,
    uri::{Resolve, UriRef},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MasterPlaylist {
    /// One entry per distinct variant URI, in first-appearance order
    pub streams: Vec<VariantStream>,
    pub renditions: Vec<Rendition>,
    pub session_keys: Vec<Key>,
}

/// A single media playlist URI, aggregated over every `#EXT-X-STREAM-INF` tag pointing to it.
///
/// The primary attributes come from the tag with the lowest `BANDWIDTH`, while `audio` collects
/// the `AUDIO` group of every tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VariantStream {
    pub uri: Option<UriRef>,
    pub id: usize,
    pub bandwidth: i64,
    pub average_bandwidth: i64,
    pub codecs: String,
    pub resolution: String,
    pub frame_rate: String,
    /// `GROUP-ID` of the subtitles renditions
    pub subtitles: String,
    /// `GROUP-ID`s of the audio renditions, one per contributing tag
    pub audio: Vec<String>,
}

impl VariantStream {
    fn apply_primary(&mut self, attrs: &AttributeList) {
        self.codecs = attrs.get_or_empty("CODECS").to_string();
        self.resolution = attrs.get_or_empty("RESOLUTION").to_string();
        self.frame_rate = attrs.get_or_empty("FRAME-RATE").to_string();
        self.subtitles = attrs.get_or_empty("SUBTITLES").to_string();
        self.bandwidth = attrs.get_i64("BANDWIDTH");
        self.average_bandwidth = attrs.get_i64("AVERAGE-BANDWIDTH");
    }

    /// Average bandwidth when the playlist declared one, peak bandwidth otherwise.
    pub fn sort_bandwidth(&self) -> i64 {
        if self.average_bandwidth > 0 {
            self.average_bandwidth
        } else {
            self.bandwidth
        }
    }

    /// First entry of `CODECS`, which is the video codec in practice.
    pub fn video_codec(&self) -> Option<&str> {
        self.codecs.split(',').next().filter(|codec| !codec.is_empty())
    }
}

impl fmt::Display for VariantStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.average_bandwidth > 0 {
            writeln!(f, "average_bandwidth = {}", self.average_bandwidth)?;
        }
        write!(f, "bandwidth = {}", self.bandwidth)?;
        if !self.resolution.is_empty() {
            write!(f, "\nresolution = {}", self.resolution)?;
        }
        if let Some(codec) = self.video_codec() {
            write!(f, "\ncodecs = {codec}")?;
        }
        write!(f, "\nid = {}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenditionType {
    Audio,
    Video,
    Subtitles,
    ClosedCaptions,
    Other(String),
}

impl RenditionType {
    pub fn from_attribute(value: &str) -> Self {
        match value {
            "AUDIO" => Self::Audio,
            "VIDEO" => Self::Video,
            "SUBTITLES" => Self::Subtitles,
            "CLOSED-CAPTIONS" => Self::ClosedCaptions,
            _ => Self::Other(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Audio => "AUDIO",
            Self::Video => "VIDEO",
            Self::Subtitles => "SUBTITLES",
            Self::ClosedCaptions => "CLOSED-CAPTIONS",
            Self::Other(value) => value.as_str(),
        }
    }
}

impl Serialize for RenditionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// An `#EXT-X-MEDIA` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendition {
    pub r#type: RenditionType,
    pub group_id: String,
    pub name: String,
    pub language: String,
    pub uri: Option<UriRef>,
    pub autoselect: bool,
    pub default: bool,
    pub forced: bool,
    pub channels: String,
    pub characteristics: String,
    pub id: usize,
}

impl Rendition {
    fn from_attributes(attrs: &AttributeList, id: usize) -> Self {
        Self {
            r#type: RenditionType::from_attribute(attrs.get_or_empty("TYPE")),
            group_id: attrs.get_or_empty("GROUP-ID").to_string(),
            name: attrs.get_or_empty("NAME").to_string(),
            language: attrs.get_or_empty("LANGUAGE").to_string(),
            uri: UriRef::parse_lossy(attrs.get_or_empty("URI")),
            autoselect: attrs.is_yes("AUTOSELECT"),
            default: attrs.is_yes("DEFAULT"),
            forced: attrs.is_yes("FORCED"),
            channels: attrs.get_or_empty("CHANNELS").to_string(),
            characteristics: attrs.get_or_empty("CHARACTERISTICS").to_string(),
            id,
        }
    }
}

impl fmt::Display for Rendition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type = {}", self.r#type.as_str())?;
        if !self.name.is_empty() {
            write!(f, "\nname = {}", self.name)?;
        }
        if !self.language.is_empty() {
            write!(f, "\nlang = {}", self.language)?;
        }
        if !self.group_id.is_empty() {
            write!(f, "\ngroup = {}", self.group_id)?;
        }
        write!(f, "\nid = {}", self.id)
    }
}

/// State of a single master playlist parse.
///
/// Renditions and streams share one id counter, and streams are looked up by the exact text of
/// their URI line before it is resolved.
struct StreamAggregator<'a> {
    playlist: MasterPlaylist,
    next_id: usize,
    seen: HashMap<&'a str, usize>,
}

impl<'a> StreamAggregator<'a> {
    fn new() -> Self {
        Self {
            playlist: MasterPlaylist::default(),
            next_id: 0,
            seen: HashMap::new(),
        }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn add_rendition(&mut self, attrs: &AttributeList) {
        let id = self.next_id();
        self.playlist
            .renditions
            .push(Rendition::from_attributes(attrs, id));
    }

    fn add_session_key(&mut self, key: Key) {
        self.playlist.session_keys.push(key);
    }

    fn add_stream(&mut self, attrs: &AttributeList, uri: &'a str) {
        let index = match self.seen.get(uri).copied() {
            Some(index) => {
                let stream = &mut self.playlist.streams[index];
                let bandwidth = attrs.get_i64("BANDWIDTH");
                if bandwidth < stream.bandwidth {
                    log::debug!(
                        "Lower bandwidth variant of {uri}: {bandwidth} < {}",
                        stream.bandwidth
                    );
                    stream.apply_primary(attrs);
                }
                index
            }
            None => {
                let mut stream = VariantStream {
                    id: self.next_id(),
                    uri: UriRef::parse_lossy(uri.trim()),
                    ..Default::default()
                };
                stream.apply_primary(attrs);

                let index = self.playlist.streams.len();
                self.playlist.streams.push(stream);
                self.seen.insert(uri, index);
                index
            }
        };

        if let Some(audio) = attrs.get("AUDIO").filter(|audio| !audio.is_empty()) {
            self.playlist.streams[index].audio.push(audio.to_string());
        }
    }

    fn finish(self) -> MasterPlaylist {
        self.playlist
    }
}

impl MasterPlaylist {
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_lines(&text.lines().collect::<Vec<_>>())
    }

    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let mut aggregator = StreamAggregator::new();

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i].as_ref();

            if line.starts_with(tag::MEDIA) {
                aggregator.add_rendition(&AttributeList::parse(line, tag::MEDIA));
            } else if line.starts_with(tag::SESSION_KEY) {
                aggregator.add_session_key(Key::from_tag(line, tag::SESSION_KEY));
            } else if line.starts_with(tag::STREAM_INF) {
                let attrs = AttributeList::parse(line, tag::STREAM_INF);
                match lines.get(i + 1) {
                    Some(uri) => {
                        i += 1;
                        aggregator.add_stream(&attrs, uri.as_ref());
                    }
                    None => {
                        log::debug!("Dropped {} without URI line", tag::name(tag::STREAM_INF))
                    }
                }
            }

            i += 1;
        }

        let playlist = aggregator.finish();
        log::debug!(
            "Parsed master playlist: {} streams, {} renditions",
            playlist.streams.len(),
            playlist.renditions.len()
        );
        Ok(playlist)
    }

    /// Resolve stream, rendition and session key URIs against `base`.
    pub fn resolve_uris(&mut self, base: &Url) {
        self.resolve(base);
    }

    /// Order streams by [`VariantStream::sort_bandwidth`] and renditions by group id.
    ///
    /// Both sorts are stable, so entries with equal keys stay in first-appearance order.
    pub fn sort(&mut self) {
        self.streams.sort_by_key(VariantStream::sort_bandwidth);
        self.renditions.sort_by(|a, b| a.group_id.cmp(&b.group_id));
    }

    pub fn stream_by_id(&self, id: usize) -> Option<&VariantStream> {
        self.streams.iter().find(|stream| stream.id == id)
    }

    pub fn renditions_in_group<'s>(
        &'s self,
        group_id: &'s str,
    ) -> impl Iterator<Item = &'s Rendition> + 's {
        self.renditions
            .iter()
            .filter(move |rendition| rendition.group_id == group_id)
    }

    /// Audio renditions belonging to any of the audio groups of `stream`.
    pub fn audio_renditions(&self, stream: &VariantStream) -> Vec<&Rendition> {
        self.renditions
            .iter()
            .filter(|rendition| {
                rendition.r#type == RenditionType::Audio
                    && stream.audio.contains(&rendition.group_id)
            })
            .collect()
    }
}

impl Resolve for MasterPlaylist {
    fn resolve(&mut self, base: &Url) {
        self.streams.resolve(base);
        self.renditions.resolve(base);
        self.session_keys.resolve(base);
    }
}

impl Resolve for VariantStream {
    fn resolve(&mut self, base: &Url) {
        self.uri.resolve(base);
    }
}

impl Resolve for Rendition {
    fn resolve(&mut self, base: &Url) {
        self.uri.resolve(base);
    }
}
