use anyhow::Context;
use clap::Parser;
use scrapey::config::{
    Config, ConfigOverride, LoadOptions, ScrapingOptionsOverride, UrlOverride,
    DEFAULT_CONFIG_PATH,
};
use scrapey::crawler::{crawl, Crawler};
use scrapey::output::{Palette, Tone};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scrapey")]
#[command(about = "Configurable command-line web scraper", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// URL to scrape (overrides URL.Base)
    #[arg(long)]
    url: Option<String>,

    /// Comma-separated routes (overrides URL.Routes; empty clears them)
    #[arg(long, value_delimiter = ',')]
    routes: Option<Vec<String>>,

    /// Maximum crawl depth (overrides ScrapingOptions.MaxDepth)
    #[arg(long = "maxDepth", alias = "max-depth")]
    max_depth: Option<i64>,

    /// Requests per second (overrides ScrapingOptions.RateLimit)
    #[arg(long = "rateLimit", alias = "rate-limit")]
    rate_limit: Option<f64>,

    /// Print loaded config fields and debug logs
    #[arg(short, long)]
    verbose: bool,

    /// Fetch, parse and store every configured route after loading
    #[arg(long)]
    crawl: bool,
}

impl Cli {
    /// Only flags that were passed end up as `Some`
    fn overrides(&self) -> ConfigOverride {
        let routes = self.routes.as_ref().map(|routes| {
            routes
                .iter()
                .filter(|r| !r.is_empty())
                .cloned()
                .collect::<Vec<_>>()
        });

        ConfigOverride {
            url: Some(UrlOverride {
                base: self.url.clone(),
                routes,
                include_base: None,
            }),
            scraping_options: Some(ScrapingOptionsOverride {
                max_depth: self.max_depth,
                rate_limit: self.rate_limit,
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "scrapey=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let palette = Palette::from_env();
    let mut out = io::stdout().lock();

    palette.line(&mut out, "Welcome to Scrapey CLI!", "", Tone::Cyan)?;

    let options = LoadOptions {
        verbose: cli.verbose,
        palette,
    };
    let mut config = match Config::load_with_output(&cli.config, &options, &mut out) {
        Ok(config) => config,
        Err(e) => {
            palette.line(&mut out, "Failed to load config: ", &e.to_string(), Tone::Red)?;
            out.flush().ok();
            std::process::exit(1);
        }
    };

    for change in cli.overrides().apply(&mut config) {
        palette.line(
            &mut out,
            &format!("Overriding {}: ", change.field),
            &change.value,
            Tone::BrightMagenta,
        )?;
    }

    palette.line(&mut out, "Scrapey CLI initialization complete.", "", Tone::Green)?;
    palette.line(&mut out, "Base URL: ", &config.url.base, Tone::Yellow)?;
    if config.url.include_base {
        palette.line(&mut out, "Including base URL in scraping.", "", Tone::Green)?;
    }
    for route in &config.url.routes {
        palette.line(&mut out, "Scraping route: ", route, Tone::BrightBlue)?;
    }

    if cli.crawl {
        let crawler = Crawler::from_config(&config)?;
        let pages = crawl(&crawler, &config)
            .await
            .with_context(|| format!("Crawl of {} failed", config.url.base))?;
        for page in &pages {
            let fields = format!(" ({} fields)", page.fields.len());
            palette.segments(
                &mut out,
                &[
                    ("Scraped: ", Tone::BrightGreen),
                    (page.url.as_str(), Tone::White),
                    (fields.as_str(), Tone::Cyan),
                ],
            )?;
        }
    }

    Ok(())
}
