use crate::config::FetchConfig;
use crate::error::FetchError;
use encoding_rs::{Encoding, UTF_8};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

/// Raw body of a fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub url: String,
    pub bytes: Vec<u8>,
    /// Charset declared in the Content-Type header, if any
    pub encoding: Option<String>,
}

impl FetchedPage {
    /// Body size in whole kilobytes
    pub fn size_kb(&self) -> u64 {
        self.bytes.len() as u64 / 1024
    }

    /// Decodes the body with the declared charset, UTF-8 when none is declared
    /// or the label is unknown
    pub fn decode(&self) -> String {
        let encoding = match self.encoding.as_deref() {
            None => UTF_8,
            Some(label) => Encoding::for_label(label.as_bytes()).unwrap_or_else(|| {
                ::log::warn!("Unknown charset {}, decoding {} as UTF-8", label, self.url);
                UTF_8
            }),
        };

        let (text, used, had_errors) = encoding.decode(&self.bytes);
        if had_errors {
            ::log::warn!("Malformed {} sequences in {} replaced", used.name(), self.url);
        }
        text.into_owned()
    }
}

/// Parses a URL and checks that it can be fetched over HTTP
pub fn validate_url(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url)?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::UnsupportedScheme(other.to_string())),
    }
}

/// Fetches a single page, failing on transport errors and non-success statuses
pub async fn fetch(url: &str, config: &FetchConfig) -> Result<FetchedPage, FetchError> {
    let url = validate_url(url)?;
    ::log::info!("Fetching {}", url);

    let client = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .build()?;

    match timeout(
        Duration::from_secs(config.timeout_secs),
        fetch_with_client(&client, url),
    )
    .await
    {
        Ok(result) => result,
        Err(_) => {
            ::log::error!("Timeout fetching page after {}s", config.timeout_secs);
            Err(FetchError::Timeout(config.timeout_secs))
        }
    }
}

async fn fetch_with_client(
    client: &reqwest::Client,
    url: Url,
) -> Result<FetchedPage, FetchError> {
    let response = client.get(url.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let final_url = response.url().to_string();
    let encoding = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(charset_from_content_type);

    let bytes = response.bytes().await?.to_vec();
    ::log::info!("Fetched {} ({} bytes, status {})", final_url, bytes.len(), status);

    Ok(FetchedPage {
        url: final_url,
        bytes,
        encoding,
    })
}

/// Pulls the charset parameter out of a Content-Type header value
fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        if key.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches('"').to_string())
        } else {
            None
        }
    })
}
