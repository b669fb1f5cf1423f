pub mod catalog;
pub mod vendor;
pub mod product;
pub mod best_price;

pub use catalog::{Catalog, Offer, Shop};
pub use product::ProductRegistry;
pub use best_price::{BestPrice, BestPriceBook};
