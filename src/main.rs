use clap::Parser;

use pricefeed::cli::{Cli, Commands, Envelope};
use pricefeed::config::Config;
use pricefeed::domain::BestPrice;
use pricefeed::errors::{PricefeedError, PricefeedResult};
use pricefeed::services::{median_service, PriceService};
use pricefeed::sources::YmlCatalogSource;

fn main() {
    match run() {
        Ok(failed) => {
            if failed {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}

/// Dispatches the subcommand and reports whether the printed envelope
/// carried a failure status.
fn run() -> PricefeedResult<bool> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::MinPrice { vendor, urls } => cmd_min_price(&vendor, &urls, &config),
        Commands::Offers { vendor, url } => cmd_offers(&vendor, &url, &config),
        Commands::Median { list1, list2 } => cmd_median(&list1, &list2),
    }
}

fn cmd_min_price(vendor: &str, urls: &[String], config: &Config) -> PricefeedResult<bool> {
    let mut errors = validate_vendor(vendor);
    if urls.is_empty() {
        errors.push("No urls passed".to_string());
    }
    for url in urls {
        validate_url(url, &mut errors);
    }
    if !errors.is_empty() {
        return print_envelope(Envelope::new(errors, Vec::<BestPrice>::new()));
    }

    let service = PriceService::new(YmlCatalogSource::new(config));
    let outcome = service.min_prices(vendor, urls);

    print_envelope(Envelope::new(outcome.errors, outcome.best))
}

fn cmd_offers(vendor: &str, url: &str, config: &Config) -> PricefeedResult<bool> {
    let mut errors = validate_vendor(vendor);
    validate_url(url, &mut errors);
    if !errors.is_empty() {
        return print_envelope(Envelope::new(errors, Vec::<String>::new()));
    }

    let service = PriceService::new(YmlCatalogSource::new(config));
    match service.list_offers(vendor, url) {
        Ok(names) => print_envelope(Envelope::new(Vec::new(), names)),
        // A single feed yields no partial results: the failure is the sole error.
        Err(e) => print_envelope(Envelope::new(
            vec![format!("Failed getting data from {}: {}", url, e)],
            Vec::<String>::new(),
        )),
    }
}

fn cmd_median(list1: &[f64], list2: &[f64]) -> PricefeedResult<bool> {
    match median_service::merged_median(list1, list2) {
        Ok(value) => print_envelope(Envelope::new(Vec::new(), Some(value))),
        Err(e) => print_envelope(Envelope::new(vec![e.to_string()], None::<f64>)),
    }
}

fn validate_vendor(vendor: &str) -> Vec<String> {
    if vendor.trim().is_empty() {
        vec!["Vendor name is empty".to_string()]
    } else {
        Vec::new()
    }
}

fn validate_url(url: &str, errors: &mut Vec<String>) {
    if url::Url::parse(url).is_err() {
        errors.push(PricefeedError::InvalidUrl(url.to_string()).to_string());
    }
}

fn print_envelope<T: serde::Serialize>(envelope: Envelope<T>) -> PricefeedResult<bool> {
    println!("{}", envelope.to_json()?);
    Ok(envelope.is_failure())
}
