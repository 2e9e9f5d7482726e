use clap::Parser;
use news_archive_extractors::selftest;
use news_archive_extractors::source::FixtureSource;
use news_archive_extractors::Family;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

/// Checks every extraction rule against saved pages.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Directory holding `index.json`, `cases.json` and the saved pages
    #[arg(long, default_value = "tests/fixtures")]
    fixtures: PathBuf,

    /// Only run these families (repeatable)
    #[arg(long, value_enum)]
    family: Vec<Family>,
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL")
                .unwrap_or_else(|_| "info,html5ever=error,selectors=error".into()),
        )
        .with(ErrorLayer::default())
        .init();

    let args = Args::parse();

    let result = FixtureSource::open(&args.fixtures).and_then(|source| {
        let cases = selftest::load_cases(&args.fixtures)?;
        info!("Loaded {} cases over {} pages", cases.len(), source.len());
        selftest::run(&source, &cases, &args.family)
    });

    match result {
        Ok(checked) => info!("{} cases passed", checked),
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    }
}
