use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CrawlerError {
    #[error("Network error")]
    NetworkError(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Missing field `{field}`")]
    MissingFieldError { field: &'static str },

    #[error("Filesystem error at {}", path.display())]
    FilesystemError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
