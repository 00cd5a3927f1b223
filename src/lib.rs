use scraper::Html;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod nature;

mod config;
mod data;
mod error;
mod fetcher;
mod storage;
pub mod utils;

pub use config::{CrawlerConfig, DEFAULT_BASE_URL, DEFAULT_YEAR};
pub use data::{ArticleContent, ArticleRecord, CrawlReport};
pub use error::CrawlerError;
pub use fetcher::{parse, HttpFetcher, RawResponse, ACCEPT_LANGUAGE_VALUE};
pub use storage::{FsStorage, WriteMode};

/// Site-specific knowledge: where listings live and how to read them.
pub trait Crawler {
    fn is_valid_url(&self, url: &str) -> bool;
    fn listing_url(&self, config: &CrawlerConfig, page: u32) -> String;
    fn article_url(&self, config: &CrawlerConfig, record: &ArticleRecord) -> String;
    /// One entry per article node, in document order.
    fn extract_articles(&self, doc: &Html) -> Vec<Result<ArticleRecord, CrawlerError>>;
    fn extract_content(&self, doc: &Html) -> Result<ArticleContent, CrawlerError>;
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<RawResponse, CrawlerError>;
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    async fn ensure_page_dir(&self, page: u32) -> Result<PathBuf, CrawlerError>;
    async fn save(
        &self,
        content: &str,
        file_name: &str,
        mode: WriteMode,
        dir: &Path,
    ) -> Result<PathBuf, CrawlerError>;
}

pub async fn fetch_article_content<C, F>(
    crawler: &C,
    fetcher: &F,
    url: &str,
) -> Result<ArticleContent, CrawlerError>
where
    C: Crawler,
    F: Fetcher,
{
    let resp = fetcher.fetch(url).await?;
    let doc = parse(&resp.bytes)?;
    crawler.extract_content(&doc)
}

/// Walks listing pages `1..=max_pages` in order and saves the teaser of every
/// article whose type matches `config.article_type`. Returns the saved file
/// names in discovery order. The first error aborts the run.
pub async fn run_crawler<C, F, S>(
    config: &CrawlerConfig,
    crawler: &C,
    fetcher: &F,
    storage: &S,
) -> Result<Vec<String>, CrawlerError>
where
    C: Crawler,
    F: Fetcher,
    S: Storage,
{
    let mut files_created = vec![];

    for page in 1..=config.max_pages {
        let url = crawler.listing_url(config, page);
        if !crawler.is_valid_url(&url) {
            return Err(CrawlerError::ConfigurationError(format!(
                "Invalid listing url: {}",
                url
            )));
        }

        let page_dir = storage.ensure_page_dir(page).await?;

        info!("Page {}/{}: {}", page, config.max_pages, url);
        let resp = fetcher.fetch(&url).await?;

        let records = {
            let doc = parse(&resp.bytes)?;
            crawler.extract_articles(&doc)
        };
        debug!("Found {} articles on page {}", records.len(), page);

        for record in records {
            let record = record?;

            if record.article_type != config.article_type {
                debug!("Skip [{}] {}", record.article_type, record.title);
                continue;
            }
            info!("[{}] {}", record.article_type, record.title);
            debug!("Matched article\n{}", record);

            let article_url = crawler.article_url(config, &record);
            let content = fetch_article_content(crawler, fetcher, &article_url).await?;

            let file_name = record.file_name();
            storage
                .save(&content.text, &file_name, config.write_mode, &page_dir)
                .await?;
            files_created.push(file_name);
        }
    }

    Ok(files_created)
}
