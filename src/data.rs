use serde::Serialize;
use std::fmt;

/// One teaser entry from a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    pub article_type: String,
    /// Already sanitized, safe to use as a file stem.
    pub title: String,
    /// Raw `href`, neither validated nor normalized.
    pub relative_url: String,
}

impl ArticleRecord {
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.title)
    }
}

impl fmt::Display for ArticleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Type            : {}", self.article_type)?;
        writeln!(f, "Title           : {}", self.title)?;
        write!(f, "Url             : {}", self.relative_url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent {
    pub text: String,
}

/// Final summary of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlReport {
    pub pages: u32,
    pub article_type: String,
    pub files: Vec<String>,
}

impl fmt::Display for CrawlReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use itertools::Itertools;

        write!(
            f,
            "Saved articles: [{}]",
            self.files.iter().map(|name| format!("'{}'", name)).join(", ")
        )
    }
}
