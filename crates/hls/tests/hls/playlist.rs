use super::{base, uri_of};
use crate::AssertWrapper;
use iori_hls::Playlist;

#[test]
fn test_detect_playlist_kind() -> anyhow::Result<()> {
    let master = Playlist::parse(include_str!("../fixtures/cmaf-master.m3u8"))?;
    assert_eq!(master.as_master().assert_success().streams.len(), 4);
    master.as_media().assert_error();

    let media = Playlist::parse(include_str!(
        "../fixtures/rfc8216/8-1-simple-media-playlist.m3u8"
    ))?;
    assert_eq!(media.as_media().assert_success().segments.len(), 3);
    media.as_master().assert_error();

    // without any stream or segment tag the playlist is treated as an empty media playlist
    let empty = Playlist::parse("#EXTM3U\n")?;
    assert!(empty.as_media().assert_success().segments.is_empty());

    Ok(())
}

#[test]
fn test_detected_playlist_errors() {
    Playlist::parse("#EXT-X-TARGETDURATION:ten\n#EXTINF:10,\na.ts").assert_error();
}

#[test]
fn test_resolve_detected_playlist() -> anyhow::Result<()> {
    let mut playlist = Playlist::parse("#EXT-X-STREAM-INF:BANDWIDTH=1\n../low/index.m3u8")?;
    playlist.resolve_uris(&base("https://example.com/hls/master/index.m3u8"));

    let stream = &playlist.as_master().assert_success().streams[0];
    assert_eq!(
        uri_of(&stream.uri),
        Some("https://example.com/hls/low/index.m3u8")
    );

    Ok(())
}

#[test]
fn test_serialize_playlist() -> anyhow::Result<()> {
    let mut playlist = Playlist::parse(
        "#EXT-X-MEDIA:TYPE=AUDIO,GROUP-ID=\"aac\",NAME=\"English\",DEFAULT=YES,URI=\"en.m3u8\"
#EXT-X-STREAM-INF:BANDWIDTH=1280000,AUDIO=\"aac\"
low.m3u8",
    )?;
    playlist.resolve_uris(&base("https://example.com/"));

    let json = serde_json::to_value(&playlist)?;
    assert_eq!(json["kind"], "master");
    assert_eq!(json["streams"][0]["uri"], "https://example.com/low.m3u8");
    assert_eq!(json["streams"][0]["bandwidth"], 1280000);
    assert_eq!(json["streams"][0]["audio"][0], "aac");
    assert_eq!(json["renditions"][0]["type"], "AUDIO");
    assert_eq!(json["renditions"][0]["default"], true);
    assert_eq!(json["session_keys"], serde_json::json!([]));

    Ok(())
}
