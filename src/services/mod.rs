pub mod median_service;
pub mod price_service;

pub use price_service::{MinPriceOutcome, PriceService};
