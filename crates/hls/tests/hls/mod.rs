mod playlist;
mod rfc8216;

use iori_hls::url::Url;

fn base(url: &str) -> Url {
    Url::parse(url).expect("base url")
}

fn uri_of(uri: &Option<iori_hls::UriRef>) -> Option<&str> {
    uri.as_ref().map(iori_hls::UriRef::as_str)
}
