pub(crate) const VERSION: &str = "#EXT-X-VERSION:";
pub(crate) const TARGET_DURATION: &str = "#EXT-X-TARGETDURATION:";
pub(crate) const MEDIA_SEQUENCE: &str = "#EXT-X-MEDIA-SEQUENCE:";
pub(crate) const PLAYLIST_TYPE: &str = "#EXT-X-PLAYLIST-TYPE:";
pub(crate) const END_LIST: &str = "#EXT-X-ENDLIST";
pub(crate) const KEY: &str = "#EXT-X-KEY:";
pub(crate) const MAP: &str = "#EXT-X-MAP:";
pub(crate) const INF: &str = "#EXTINF:";

pub(crate) const MEDIA: &str = "#EXT-X-MEDIA:";
pub(crate) const SESSION_KEY: &str = "#EXT-X-SESSION-KEY:";
pub(crate) const STREAM_INF: &str = "#EXT-X-STREAM-INF:";

/// `#EXT-X-VERSION:` -> `EXT-X-VERSION`
pub(crate) fn name(prefix: &'static str) -> &'static str {
    prefix.trim_start_matches('#').trim_end_matches(':')
}
