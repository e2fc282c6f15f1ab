use super::{base, uri_of};
use crate::AssertWrapper;
use iori_hls::{MasterPlaylist, MediaPlaylist, RenditionType};

#[test]
fn rfc8216_8_1_simple_media_playlist() -> anyhow::Result<()> {
    let data = include_str!("../fixtures/rfc8216/8-1-simple-media-playlist.m3u8");
    let playlist = MediaPlaylist::parse(data)?;

    assert_eq!(playlist.target_duration, 10);
    assert_eq!(playlist.version, 3);
    assert_eq!(playlist.media_sequence, 0);
    assert!(playlist.end_list);
    assert!(playlist.keys.is_empty());
    assert_eq!(playlist.map, None);

    let segments = &playlist.segments;
    assert_eq!(segments.len(), 3);
    assert_eq!(
        uri_of(&segments[0].uri),
        Some("http://media.example.com/first.ts")
    );
    assert_eq!(segments[0].duration, 9.009);
    assert_eq!(segments[0].title, "");
    assert_eq!(
        uri_of(&segments[1].uri),
        Some("http://media.example.com/second.ts")
    );
    assert_eq!(
        uri_of(&segments[2].uri),
        Some("http://media.example.com/third.ts")
    );
    assert_eq!(segments[2].duration, 3.003);

    Ok(())
}

#[test]
fn rfc8216_8_2_live_media_playlist_using_https() -> anyhow::Result<()> {
    let data = include_str!("../fixtures/rfc8216/8-2-live-media-playlist-using-https.m3u8");
    let playlist = MediaPlaylist::parse(data)?;

    assert!(!playlist.end_list);
    assert_eq!(playlist.target_duration, 8);
    assert_eq!(playlist.media_sequence, 2680);
    assert_eq!(playlist.segments.len(), 3);
    assert_eq!(
        uri_of(&playlist.segments[1].uri),
        Some("https://priv.example.com/fileSequence2681.ts")
    );
    assert_eq!(playlist.segments[1].duration, 7.941);

    Ok(())
}

#[test]
fn rfc8216_8_3_playlist_with_encrypted_media_segments() -> anyhow::Result<()> {
    let data =
        include_str!("../fixtures/rfc8216/8-3-playlist-with-encrypted-media-segments.m3u8");
    let playlist = MediaPlaylist::parse(data)?;

    assert_eq!(playlist.media_sequence, 7794);
    assert_eq!(playlist.target_duration, 15);
    assert_eq!(playlist.segments.len(), 4);
    assert_eq!(
        uri_of(&playlist.segments[3].uri),
        Some("http://media.example.com/fileSequence53-A.ts")
    );

    assert_eq!(playlist.keys.len(), 2);
    assert_eq!(playlist.keys[0].method, "AES-128");
    assert_eq!(
        uri_of(&playlist.keys[0].uri),
        Some("https://priv.example.com/key.php?r=52")
    );
    assert_eq!(
        uri_of(&playlist.keys[1].uri),
        Some("https://priv.example.com/key.php?r=53")
    );
    assert!(playlist.keys.iter().all(|key| key.is_encrypted()));
    playlist.keys[0].iv_bytes().assert_error();

    Ok(())
}

#[test]
fn rfc8216_8_4_master_playlist() -> anyhow::Result<()> {
    let data = include_str!("../fixtures/rfc8216/8-4-master-playlist.m3u8");
    let mut playlist = MasterPlaylist::parse(data)?;

    assert!(playlist.renditions.is_empty());
    assert_eq!(playlist.streams.len(), 4);

    let ids: Vec<_> = playlist.streams.iter().map(|stream| stream.id).collect();
    assert_eq!(ids, [0, 1, 2, 3]);

    let low = &playlist.streams[0];
    assert_eq!(uri_of(&low.uri), Some("http://example.com/low.m3u8"));
    assert_eq!(low.bandwidth, 1280000);
    assert_eq!(low.average_bandwidth, 1000000);
    assert!(low.audio.is_empty());

    let audio_only = &playlist.streams[3];
    assert_eq!(audio_only.codecs, "mp4a.40.5");
    assert_eq!(audio_only.average_bandwidth, 0);
    assert_eq!(audio_only.sort_bandwidth(), 65000);

    playlist.sort();
    let uris: Vec<_> = playlist
        .streams
        .iter()
        .map(|stream| uri_of(&stream.uri).assert_success())
        .collect();
    assert_eq!(
        uris,
        [
            "http://example.com/audio-only.m3u8",
            "http://example.com/low.m3u8",
            "http://example.com/mid.m3u8",
            "http://example.com/hi.m3u8",
        ]
    );

    Ok(())
}

#[test]
fn rfc8216_8_6_master_playlist_with_alternative_audio() -> anyhow::Result<()> {
    let data =
        include_str!("../fixtures/rfc8216/8-6-master-playlist-with-alternative-audio.m3u8");
    let mut playlist = MasterPlaylist::parse(data)?;
    playlist.resolve_uris(&base("http://example.com/"));

    assert_eq!(playlist.renditions.len(), 3);
    assert_eq!(playlist.streams.len(), 4);

    let english = &playlist.renditions[0];
    assert_eq!(english.r#type, RenditionType::Audio);
    assert_eq!(english.group_id, "aac");
    assert_eq!(english.language, "en");
    assert_eq!(english.name, "English");
    assert!(english.default);
    assert!(english.autoselect);
    assert!(!english.forced);
    assert_eq!(
        uri_of(&english.uri),
        Some("http://example.com/main/english-audio.m3u8")
    );

    let commentary = &playlist.renditions[2];
    assert!(!commentary.default);
    assert!(!commentary.autoselect);
    assert_eq!(commentary.id, 2);

    // renditions take ids 0..3, streams continue from there
    let ids: Vec<_> = playlist.streams.iter().map(|stream| stream.id).collect();
    assert_eq!(ids, [3, 4, 5, 6]);

    let hi = &playlist.streams[2];
    assert_eq!(
        uri_of(&hi.uri),
        Some("http://example.com/hi/video-only.m3u8")
    );
    assert_eq!(hi.codecs, "...");
    assert_eq!(hi.audio, ["aac"]);
    assert_eq!(playlist.audio_renditions(hi).len(), 3);

    Ok(())
}
