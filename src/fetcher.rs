use crate::{CrawlerError, Fetcher};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use scraper::Html;
use tracing::{debug, warn};

pub const ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.5";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub bytes: Vec<u8>,
    pub status: u16,
}

impl RawResponse {
    pub fn ok<B: Into<Vec<u8>>>(bytes: B) -> Self {
        RawResponse {
            bytes: bytes.into(),
            status: 200,
        }
    }
}

/// One GET per call: no timeout, no retry.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, CrawlerError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE),
        );
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        Ok(HttpFetcher { client })
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<RawResponse, CrawlerError> {
        debug!("Visit {}", url);
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            warn!("Non-success status {} for {}", status, url);
        }

        let bytes = resp.bytes().await?.to_vec();
        Ok(RawResponse {
            bytes,
            status: status.as_u16(),
        })
    }
}

/// Invalid UTF-8 sequences are replaced, never rejected.
pub fn parse(bytes: &[u8]) -> Result<Html, CrawlerError> {
    let html = String::from_utf8_lossy(bytes);
    let doc = Html::parse_document(&html);
    if !doc.errors.is_empty() {
        debug!("Recovered from {} markup errors", doc.errors.len());
    }
    Ok(doc)
}
