use std::io::Read;

use anyhow::Context;
use fake_user_agent::get_chrome_rua;
use iori_hls::url::Url;
use reqwest::Client;

use crate::HlsInspectArgs;

pub struct Input {
    pub text: String,
    /// Where the playlist came from, if it can serve as a base URL
    pub base: Option<Url>,
}

pub async fn load(args: &HlsInspectArgs) -> anyhow::Result<Input> {
    match args.input.as_deref() {
        None | Some("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read playlist from stdin")?;
            Ok(Input { text, base: None })
        }
        Some(input) if input.starts_with("http://") || input.starts_with("https://") => {
            let url = Url::parse(input).with_context(|| format!("Invalid playlist URL {input}"))?;
            let user_agent = args
                .user_agent
                .clone()
                .unwrap_or_else(|| get_chrome_rua().to_string());
            fetch(url, &user_agent).await
        }
        Some(path) => {
            let path = std::fs::canonicalize(path)
                .with_context(|| format!("Failed to locate playlist {path}"))?;
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read playlist {}", path.display()))?;
            let base = Url::from_file_path(&path).ok();
            Ok(Input { text, base })
        }
    }
}

async fn fetch(url: Url, user_agent: &str) -> anyhow::Result<Input> {
    let client = Client::builder().user_agent(user_agent).build()?;

    log::info!("Fetching {url}");
    let response = client.get(url).send().await?.error_for_status()?;
    // relative URIs are relative to the final location
    let base = response.url().clone();
    if let Some(length) = response.content_length() {
        log::debug!("Playlist size: {length} bytes");
    }
    let text = response.text().await?;

    Ok(Input {
        text,
        base: Some(base),
    })
}
