use crate::domain::Catalog;
use crate::errors::PricefeedResult;

#[cfg(test)]
use mockall::automock;

/// Retrieves a catalog document and parses it into a traversable tree.
/// Aggregation services depend on this seam only, never on transport details.
#[cfg_attr(test, automock)]
pub trait CatalogSource: Send + Sync {
    /// Fetch and parse the catalog at `url`. Fails on any retrieval or
    /// malformed-document condition.
    fn fetch_catalog(&self, url: &str) -> PricefeedResult<Catalog>;
}
