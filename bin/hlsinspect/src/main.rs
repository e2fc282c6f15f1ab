mod input;
mod print;

use clap::{Parser, ValueEnum};
use iori_hls::{url::Url, MasterPlaylist, MediaPlaylist, Playlist};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistKind {
    /// Master if a variant stream shows up before the first segment
    Auto,
    Media,
    Master,
}

#[derive(Parser, Debug, Clone)]
#[clap(version, author)]
/// Parses an HLS playlist and prints what it describes.
pub struct HlsInspectArgs {
    /// Debug output
    #[clap(long, alias = "debug")]
    verbose: bool,

    /// Base URL used to resolve relative URIs.
    ///
    /// Defaults to the URL the playlist was fetched from, or the file URL of a local playlist.
    #[clap(short, long, env = "HLSINSPECT_BASE")]
    base: Option<Url>,

    /// Playlist type to parse the input as
    #[clap(short, long, value_enum, default_value = "auto")]
    kind: PlaylistKind,

    /// Sort variant streams by bandwidth and renditions by group
    #[clap(long)]
    sort: bool,

    /// Print the parsed playlist as JSON
    #[clap(long)]
    json: bool,

    /// Decode inline `data:` keys and print them as hex
    #[clap(long)]
    decode_keys: bool,

    /// User agent used to fetch remote playlists. A random Chrome user agent is used if not set.
    #[clap(long, env = "HLSINSPECT_USER_AGENT")]
    user_agent: Option<String>,

    /// Playlist path or http(s) URL. Reads from stdin if not specified or `-`.
    input: Option<String>,
}

impl HlsInspectArgs {
    fn parse_playlist(&self, text: &str) -> iori_hls::Result<Playlist> {
        match self.kind {
            PlaylistKind::Auto => Playlist::parse(text),
            PlaylistKind::Media => MediaPlaylist::parse(text).map(Playlist::Media),
            PlaylistKind::Master => MasterPlaylist::parse(text).map(Playlist::Master),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = HlsInspectArgs::parse();

    let level = if args.verbose {
        tracing_subscriber::filter::LevelFilter::DEBUG
    } else {
        tracing_subscriber::filter::LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let input = input::load(&args).await?;
    let mut playlist = args.parse_playlist(&input.text)?;

    match args.base.as_ref().or(input.base.as_ref()) {
        Some(base) => {
            log::debug!("Resolving URIs against {base}");
            playlist.resolve_uris(base);
        }
        None => log::warn!("No base URL available, relative URIs are kept as-is"),
    }

    if args.sort {
        match &mut playlist {
            Playlist::Master(master) => master.sort(),
            Playlist::Media(_) => log::warn!("--sort only applies to master playlists"),
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&playlist)?);
    } else {
        print::playlist(&playlist);
    }

    if args.decode_keys {
        print::decoded_keys(&playlist, args.json);
    }

    Ok(())
}
