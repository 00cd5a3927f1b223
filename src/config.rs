use crate::{storage::WriteMode, CrawlerError};
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://www.nature.com/nature";
pub const DEFAULT_YEAR: u16 = 2020;

/// Everything one crawl run needs, validated up front so the pipeline never
/// sees a zero page count or an empty filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlerConfig {
    pub max_pages: u32,
    pub article_type: String,
    pub year: u16,
    pub base_url: String,
    pub output_dir: PathBuf,
    pub write_mode: WriteMode,
}

impl CrawlerConfig {
    pub fn new<S: Into<String>>(max_pages: u32, article_type: S) -> Result<Self, CrawlerError> {
        if max_pages == 0 {
            return Err(CrawlerError::ConfigurationError(
                "max pages must be at least 1".to_string(),
            ));
        }

        let article_type = article_type.into();
        if article_type.is_empty() {
            return Err(CrawlerError::ConfigurationError(
                "article type must not be empty".to_string(),
            ));
        }

        Ok(CrawlerConfig {
            max_pages,
            article_type,
            year: DEFAULT_YEAR,
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("."),
            write_mode: WriteMode::default(),
        })
    }

    /// Builds a config from free-text answers, as typed at the prompts.
    pub fn from_input(max_pages: &str, article_type: &str) -> Result<Self, CrawlerError> {
        let max_pages = max_pages.trim().parse::<u32>().map_err(|_| {
            CrawlerError::ConfigurationError(format!(
                "max pages must be a positive integer, got {:?}",
                max_pages.trim()
            ))
        })?;
        Self::new(max_pages, article_type.trim())
    }

    pub fn with_year(mut self, year: u16) -> Self {
        self.year = year;
        self
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }
}
