use crate::{
    utils::{sanitize_title, validate_url},
    ArticleContent, ArticleRecord, Crawler, CrawlerConfig, CrawlerError,
};
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

const E: &str = "Invalid selector";
lazy_static! {
    static ref ARTICLE: Selector = Selector::parse("article").expect(E);
    static ref A: Selector = Selector::parse("a").expect(E);
    static ref VIEW_ARTICLE: Selector =
        Selector::parse(r#"a[data-track-action="view article"]"#).expect(E);
    static ref ARTICLE_TYPE: Selector =
        Selector::parse(r#"span[data-test="article.type"]"#).expect(E);
    static ref TEASER: Selector = Selector::parse("p.article__teaser").expect(E);
}

fn missing(field: &'static str) -> CrawlerError {
    CrawlerError::MissingFieldError { field }
}

#[derive(Debug)]
pub struct NatureCrawler;

impl NatureCrawler {
    pub fn extract_article(&self, node: ElementRef) -> Result<ArticleRecord, CrawlerError> {
        let raw_title = node
            .select(&A)
            .next()
            .map(|a| a.text().collect::<String>())
            .ok_or_else(|| missing("title"))?;

        let relative_url = node
            .select(&VIEW_ARTICLE)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(ToString::to_string)
            .ok_or_else(|| missing("url"))?;

        let article_type = node
            .select(&ARTICLE_TYPE)
            .next()
            .map(|span| span.text().collect::<String>())
            .ok_or_else(|| missing("type"))?;

        Ok(ArticleRecord {
            article_type,
            title: sanitize_title(raw_title.trim()),
            relative_url,
        })
    }
}

impl Crawler for NatureCrawler {
    fn is_valid_url(&self, url: &str) -> bool {
        validate_url(url)
    }

    fn listing_url(&self, config: &CrawlerConfig, page: u32) -> String {
        format!(
            "{}/articles?sort=PubDate&year={}&page={}",
            config.base_url, config.year, page
        )
    }

    // Plain concatenation; listing hrefs are site-absolute paths.
    fn article_url(&self, config: &CrawlerConfig, record: &ArticleRecord) -> String {
        format!("{}{}", config.base_url, record.relative_url)
    }

    fn extract_articles(&self, doc: &Html) -> Vec<Result<ArticleRecord, CrawlerError>> {
        doc.select(&ARTICLE)
            .map(|node| self.extract_article(node))
            .collect()
    }

    fn extract_content(&self, doc: &Html) -> Result<ArticleContent, CrawlerError> {
        doc.select(&TEASER)
            .next()
            .map(|p| ArticleContent {
                text: p.text().collect::<String>(),
            })
            .ok_or_else(|| missing("teaser"))
    }
}
