use clap::Parser;
use nature_article_crawler::nature::NatureCrawler;
use nature_article_crawler::{
    run_crawler, CrawlReport, CrawlerConfig, CrawlerError, FsStorage, HttpFetcher, WriteMode,
    DEFAULT_BASE_URL, DEFAULT_YEAR,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, error, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

/// Save the teasers of Nature articles of one type, page by page.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Number of listing pages to walk; prompted for when omitted
    #[arg(short = 'p', long)]
    max_pages: Option<String>,

    /// Article type to keep, e.g. "News"; prompted for when omitted
    #[arg(short = 't', long)]
    article_type: Option<String>,

    /// Publication year of the listing
    #[arg(short, long, default_value_t = DEFAULT_YEAR)]
    year: u16,

    /// Site root the listing and article paths are appended to
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Directory the Page_<N> folders are created in
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Append to existing files instead of overwriting them
    #[arg(long)]
    append: bool,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<String, CrawlerError> {
    let io_err =
        |e: io::Error| CrawlerError::ConfigurationError(format!("Could not read input: {}", e));

    write!(output, "{}", question).map_err(io_err)?;
    output.flush().map_err(io_err)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(io_err)?;
    Ok(line)
}

fn ask(question: &str) -> Result<String, CrawlerError> {
    prompt(&mut io::stdin().lock(), &mut io::stdout(), question)
}

fn build_config(cli: Cli) -> Result<CrawlerConfig, CrawlerError> {
    let max_pages = match cli.max_pages {
        Some(p) => p,
        None => ask("Enter max number of pages to look for articles: (e.g '4')")?,
    };
    let article_type = match cli.article_type {
        Some(t) => t,
        None => ask("Enter article type: (e.g 'News')")?,
    };

    let write_mode = if cli.append {
        WriteMode::Append
    } else {
        WriteMode::Overwrite
    };

    Ok(CrawlerConfig::from_input(&max_pages, &article_type)?
        .with_year(cli.year)
        .with_base_url(cli.base_url)
        .with_output_dir(cli.output_dir)
        .with_write_mode(write_mode))
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let config = build_config(cli)?;
    debug!("{:?}", config);

    let fetcher = HttpFetcher::new()?;
    let storage = FsStorage::new(&config.output_dir);

    let files = run_crawler(&config, &NatureCrawler, &fetcher, &storage).await?;
    info!("Saved {} articles", files.len());

    let report = CrawlReport {
        pages: config.max_pages,
        article_type: config.article_type,
        files,
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
                "info,html5ever=error,selectors=error,hyper=warn,reqwest=info".into()
            }),
        )
        .with(ErrorLayer::default())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
