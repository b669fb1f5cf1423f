use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pricefeed")]
#[command(about = "Vendor price lookup across supplier YML catalog feeds")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Minimum price per distinct product for a vendor, aggregated across catalog feeds
    MinPrice {
        /// Vendor name to filter offers by
        #[arg(long)]
        vendor: String,

        /// Catalog feed URLs, processed in the order given
        urls: Vec<String>,
    },

    /// List a vendor's offer names from a single catalog feed
    Offers {
        /// Vendor name to filter offers by
        #[arg(long)]
        vendor: String,

        /// Catalog feed URL
        #[arg(long)]
        url: String,
    },

    /// Median of two numeric lists, merged and deduplicated
    Median {
        /// First list of values (comma-separated)
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        list1: Vec<f64>,

        /// Second list of values (comma-separated)
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        list2: Vec<f64>,
    },
}
