use iori_hls::{DataUriError, Key, MasterPlaylist, MediaPlaylist, Playlist, UriRef};

pub fn playlist(playlist: &Playlist) {
    match playlist {
        Playlist::Master(master) => print_master(master),
        Playlist::Media(media) => print_media(media),
    }
}

fn print_master(playlist: &MasterPlaylist) {
    println!("--- Renditions ({}) ---", playlist.renditions.len());
    for rendition in &playlist.renditions {
        println!("{rendition}");
        print_uri(rendition.uri.as_ref());
        println!();
    }

    println!("--- Streams ({}) ---", playlist.streams.len());
    for stream in &playlist.streams {
        println!("{stream}");
        if !stream.audio.is_empty() {
            println!("audio = {}", stream.audio.join(", "));
        }
        print_uri(stream.uri.as_ref());
        println!();
    }

    print_keys("Session Keys", &playlist.session_keys);
}

fn print_media(playlist: &MediaPlaylist) {
    println!("version = {}", playlist.version);
    println!("target_duration = {}", playlist.target_duration);
    println!("media_sequence = {}", playlist.media_sequence);
    if !playlist.playlist_type.is_empty() {
        println!("playlist_type = {}", playlist.playlist_type);
    }
    println!("end_list = {}", playlist.end_list);
    if let Some(map) = &playlist.map {
        println!("map = {map}");
    }
    println!();

    println!(
        "--- Segments ({}, {:.3}s) ---",
        playlist.segments.len(),
        playlist.total_duration()
    );
    for segment in &playlist.segments {
        let uri = segment.uri.as_ref().map_or("<none>", UriRef::as_str);
        if segment.title.is_empty() {
            println!("{:>10.3} {uri}", segment.duration);
        } else {
            println!("{:>10.3} {uri} ({})", segment.duration, segment.title);
        }
    }
    println!();

    print_keys("Keys", &playlist.keys);
}

fn print_keys(title: &str, keys: &[Key]) {
    if keys.is_empty() {
        return;
    }

    println!("--- {title} ({}) ---", keys.len());
    for key in keys {
        println!("method = {}", key.method);
        if !key.key_format.is_empty() {
            println!("keyformat = {}", key.key_format);
        }
        if !key.iv.is_empty() {
            println!("iv = {}", key.iv);
        }
        print_uri(key.uri.as_ref());
        println!();
    }
}

fn print_uri(uri: Option<&UriRef>) {
    if let Some(uri) = uri {
        println!("uri = {uri}");
    }
}

/// Prints every inline key of the playlist as hex. Goes to stderr when stdout carries JSON.
pub fn decoded_keys(playlist: &Playlist, to_stderr: bool) {
    let keys = match playlist {
        Playlist::Master(master) => &master.session_keys,
        Playlist::Media(media) => &media.keys,
    };

    for (index, key) in keys.iter().enumerate() {
        match key.decode_data() {
            Ok(data) => {
                let line = format!("key[{index}] {} = {}", key.method, hex::encode(data));
                if to_stderr {
                    eprintln!("{line}");
                } else {
                    println!("{line}");
                }
            }
            // keys served from a key server are expected here
            Err(e @ (DataUriError::MissingUri | DataUriError::NotDataUri(_))) => {
                log::debug!("Skipping key[{index}]: {e}")
            }
            Err(e) => log::warn!("Failed to decode key[{index}]: {e}"),
        }
    }
}
