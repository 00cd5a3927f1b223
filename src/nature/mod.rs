mod crawler;

pub use crawler::NatureCrawler;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArticleContent, ArticleRecord, Crawler, CrawlerConfig, CrawlerError};
    use pretty_assertions::assert_eq;
    use scraper::{Html, Selector};
    use std::fs;

    fn load(name: &str) -> Html {
        let html = fs::read_to_string(format!("tests/htmls/{}", name)).expect("Invalid file url");
        Html::parse_document(&html)
    }

    fn record(article_type: &str, title: &str, relative_url: &str) -> ArticleRecord {
        ArticleRecord {
            article_type: article_type.to_string(),
            title: title.to_string(),
            relative_url: relative_url.to_string(),
        }
    }

    #[test]
    fn test_extract_articles_from_listing() {
        let c = NatureCrawler;
        let doc = load("listing.html");

        let records = c
            .extract_articles(&doc)
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .expect("Every article is well formed");

        assert_eq!(
            records,
            vec![
                record("News", "Hello_World", "/articles/123"),
                record("Comment", "Why_we_need_a_Plan_B_for_vaccines", "/articles/456"),
                record("News", "Gene_editing", "/articles/789"),
            ]
        );
    }

    #[test]
    fn test_extract_single_article() {
        let c = NatureCrawler;
        let doc = Html::parse_fragment(
            r#"<article>
                <a href="/articles/123" data-track-action="view article">Hello, World</a>
                <span data-test="article.type">News</span>
            </article>"#,
        );
        let article = Selector::parse("article").expect("Invalid selector");
        let node = doc.select(&article).next().expect("Article node");

        let res = c.extract_article(node).expect("Well formed article");
        assert_eq!(res, record("News", "Hello_World", "/articles/123"));
    }

    #[test]
    fn test_title_comes_from_first_anchor() {
        let c = NatureCrawler;
        let doc = Html::parse_fragment(
            r#"<article>
                <a href="/subjects/genetics">Genetics</a>
                <a href="/articles/1" data-track-action="view article">Real title</a>
                <span data-test="article.type">News</span>
            </article>"#,
        );

        let records = c.extract_articles(&doc);
        assert_eq!(records.len(), 1);
        let res = records.into_iter().next().expect("One record").expect("Ok");
        assert_eq!(res, record("News", "Genetics", "/articles/1"));
    }

    #[test]
    fn test_missing_fields() {
        let c = NatureCrawler;
        let cases = [
            (
                r#"<article><span data-test="article.type">News</span></article>"#,
                "title",
            ),
            (
                r#"<article><a href="/articles/1">T</a><span data-test="article.type">News</span></article>"#,
                "url",
            ),
            (
                r#"<article><a data-track-action="view article">T</a><span data-test="article.type">News</span></article>"#,
                "url",
            ),
            (
                r#"<article><a href="/articles/1" data-track-action="view article">T</a></article>"#,
                "type",
            ),
        ];

        for (html, expected) in cases {
            let doc = Html::parse_fragment(html);
            let res = c.extract_articles(&doc).into_iter().next().expect("One node");
            match res {
                Err(CrawlerError::MissingFieldError { field }) => assert_eq!(field, expected),
                other => panic!("Expected missing {}, got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn test_extract_content() {
        let c = NatureCrawler;

        let doc = load("article_123.html");
        assert_eq!(
            c.extract_content(&doc).expect("Teaser present"),
            ArticleContent {
                text: "Researchers greet the world with a new greeting.".to_string()
            }
        );

        let doc = load("article_789.html");
        assert_eq!(
            c.extract_content(&doc).expect("Teaser present").text,
            "CRISPR tools are finally reaching the clinic."
        );
    }

    #[test]
    fn test_extract_content_missing_teaser() {
        let c = NatureCrawler;
        let doc = load("article_no_teaser.html");
        assert!(matches!(
            c.extract_content(&doc),
            Err(CrawlerError::MissingFieldError { field: "teaser" })
        ));
    }

    #[test]
    fn test_urls() {
        let c = NatureCrawler;
        let config = CrawlerConfig::new(3, "News").expect("Valid config");

        let listing = c.listing_url(&config, 3);
        assert_eq!(
            listing,
            "https://www.nature.com/nature/articles?sort=PubDate&year=2020&page=3"
        );
        assert!(c.is_valid_url(&listing));

        let detail = c.article_url(&config, &record("News", "X", "/articles/123"));
        assert_eq!(detail, "https://www.nature.com/nature/articles/123");
        assert!(c.is_valid_url(&detail));

        let elsewhere = config.with_base_url("https://example.com");
        assert!(!c.is_valid_url(&c.listing_url(&elsewhere, 1)));
    }
}
