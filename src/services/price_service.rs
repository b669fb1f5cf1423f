use crate::domain::{vendor, BestPrice, BestPriceBook, Catalog, ProductRegistry};
use crate::errors::PricefeedResult;
use crate::sources::CatalogSource;

/// Result of a multi-feed aggregation: whatever was collected from the
/// reachable feeds, plus one error entry per failed feed. Callers must not
/// discard `best` just because `errors` is non-empty.
#[derive(Debug)]
pub struct MinPriceOutcome {
    pub best: Vec<BestPrice>,
    pub errors: Vec<String>,
}

pub struct PriceService<S: CatalogSource> {
    source: S,
}

impl<S: CatalogSource> PriceService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Minimum price per distinct product across all given feeds, restricted
    /// to offers from `vendor_name`. Feeds are processed in the order given;
    /// a fetch/parse failure on one URL is recorded as an error and
    /// processing continues with the remaining URLs.
    pub fn min_prices(&self, vendor_name: &str, urls: &[String]) -> MinPriceOutcome {
        let mut registry = ProductRegistry::new();
        let mut book = BestPriceBook::new();
        let mut errors = Vec::new();

        for url in urls {
            match self.source.fetch_catalog(url) {
                Ok(catalog) => fold_catalog(&catalog, vendor_name, &mut registry, &mut book),
                Err(e) => {
                    eprintln!("Error fetching {}: {}", url, e);
                    errors.push(format!("Failed getting data from {}: {}", url, e));
                }
            }
        }

        MinPriceOutcome {
            best: book.into_records(),
            errors,
        }
    }

    /// Trimmed names of `vendor_name`'s offers in one feed, in document
    /// order. No deduplication and no price logic; a fetch/parse failure
    /// aborts the whole call.
    pub fn list_offers(&self, vendor_name: &str, url: &str) -> PricefeedResult<Vec<String>> {
        let catalog = self.source.fetch_catalog(url)?;

        Ok(catalog
            .shops
            .iter()
            .flat_map(|shop| shop.offers.iter())
            .filter(|offer| vendor::matches(&offer.vendor, vendor_name))
            .map(|offer| offer.name.trim().to_string())
            .collect())
    }
}

fn fold_catalog(
    catalog: &Catalog,
    vendor_name: &str,
    registry: &mut ProductRegistry,
    book: &mut BestPriceBook,
) {
    for shop in &catalog.shops {
        for offer in &shop.offers {
            if !vendor::matches(&offer.vendor, vendor_name) {
                continue;
            }

            let offer_name = offer.name.trim();
            let key = registry.resolve(offer.vendor_code.as_deref(), offer_name);

            book.offer_min(
                key,
                BestPrice {
                    price: offer.price,
                    offer_name: offer_name.to_string(),
                    shop_name: shop.name.clone(),
                    currency_id: offer.currency_id.clone(),
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Offer, Shop};
    use crate::errors::PricefeedError;
    use crate::sources::traits::MockCatalogSource;
    use mockall::predicate::eq;

    fn offer(vendor: &str, code: Option<&str>, name: &str, price: f64) -> Offer {
        Offer::new(
            vendor.to_string(),
            name.to_string(),
            price,
            "RUR".to_string(),
        )
        .with_vendor_code(code.map(str::to_string))
    }

    fn catalog(shop_name: &str, offers: Vec<Offer>) -> Catalog {
        Catalog {
            shops: vec![Shop {
                name: shop_name.to_string(),
                offers,
            }],
        }
    }

    #[test]
    fn test_min_price_across_two_feeds() {
        let mut source = MockCatalogSource::new();
        source
            .expect_fetch_catalog()
            .with(eq("http://a.example/feed.xml"))
            .returning(|_| {
                Ok(catalog(
                    "ShopA",
                    vec![offer("Apple", Some("A-100"), "iPhone X", 10.0)],
                ))
            });
        source
            .expect_fetch_catalog()
            .with(eq("http://b.example/feed.xml"))
            .returning(|_| {
                Ok(catalog(
                    "ShopB",
                    vec![offer("Apple", Some("A-100"), "iPhone X", 7.0)],
                ))
            });

        let service = PriceService::new(source);
        let outcome = service.min_prices(
            "apple",
            &[
                "http://a.example/feed.xml".to_string(),
                "http://b.example/feed.xml".to_string(),
            ],
        );

        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.best.len(), 1);
        assert_eq!(outcome.best[0].price, 7.0);
        assert_eq!(outcome.best[0].shop_name, "ShopB");
    }

    #[test]
    fn test_tie_keeps_first_seen_shop() {
        let mut source = MockCatalogSource::new();
        source.expect_fetch_catalog().returning(|url| {
            let shop = if url.contains("first") { "First" } else { "Second" };
            Ok(catalog(
                shop,
                vec![offer("Apple", Some("A-100"), "iPhone X", 10.0)],
            ))
        });

        let service = PriceService::new(source);
        let outcome = service.min_prices(
            "Apple",
            &[
                "http://first.example/feed.xml".to_string(),
                "http://second.example/feed.xml".to_string(),
            ],
        );

        assert_eq!(outcome.best.len(), 1);
        assert_eq!(outcome.best[0].shop_name, "First");
    }

    #[test]
    fn test_other_vendors_ignored() {
        let mut source = MockCatalogSource::new();
        source.expect_fetch_catalog().returning(|_| {
            Ok(catalog(
                "ShopA",
                vec![
                    offer("Apple", Some("A-100"), "iPhone X", 10.0),
                    offer("Samsung", Some("S-200"), "Galaxy S9", 8.0),
                ],
            ))
        });

        let service = PriceService::new(source);
        let outcome = service.min_prices("apple", &["http://a.example/feed.xml".to_string()]);

        assert_eq!(outcome.best.len(), 1);
        assert_eq!(outcome.best[0].offer_name, "iPhone X");
    }

    #[test]
    fn test_codeless_offers_merge_by_trimmed_name() {
        let mut source = MockCatalogSource::new();
        source.expect_fetch_catalog().returning(|url| {
            if url.contains("a.example") {
                Ok(catalog("ShopA", vec![offer("Acme", None, "  Widget ", 12.0)]))
            } else {
                Ok(catalog("ShopB", vec![offer("Acme", None, "Widget", 9.0)]))
            }
        });

        let service = PriceService::new(source);
        let outcome = service.min_prices(
            "acme",
            &[
                "http://a.example/feed.xml".to_string(),
                "http://b.example/feed.xml".to_string(),
            ],
        );

        assert_eq!(outcome.best.len(), 1);
        assert_eq!(outcome.best[0].price, 9.0);
        assert_eq!(outcome.best[0].offer_name, "Widget");
    }

    #[test]
    fn test_codeless_offers_with_distinct_names_stay_separate() {
        let mut source = MockCatalogSource::new();
        source.expect_fetch_catalog().returning(|_| {
            Ok(catalog(
                "ShopA",
                vec![
                    offer("Acme", None, "Widget", 12.0),
                    offer("Acme", None, "Gadget", 9.0),
                ],
            ))
        });

        let service = PriceService::new(source);
        let outcome = service.min_prices("acme", &["http://a.example/feed.xml".to_string()]);

        assert_eq!(outcome.best.len(), 2);
    }

    #[test]
    fn test_unreachable_url_records_error_and_keeps_partial_results() {
        let mut source = MockCatalogSource::new();
        source
            .expect_fetch_catalog()
            .with(eq("http://good.example/feed.xml"))
            .returning(|_| {
                Ok(catalog(
                    "ShopA",
                    vec![offer("Apple", Some("A-100"), "iPhone X", 10.0)],
                ))
            });
        source
            .expect_fetch_catalog()
            .with(eq("http://down.example/feed.xml"))
            .returning(|_| Err(PricefeedError::CatalogParse("connection refused".to_string())));

        let service = PriceService::new(source);
        let outcome = service.min_prices(
            "apple",
            &[
                "http://good.example/feed.xml".to_string(),
                "http://down.example/feed.xml".to_string(),
            ],
        );

        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("http://down.example/feed.xml"));
        assert!(outcome.errors[0].contains("connection refused"));
        assert_eq!(outcome.best.len(), 1);
        assert_eq!(outcome.best[0].price, 10.0);
    }

    #[test]
    fn test_min_prices_is_idempotent_on_same_feed() {
        let feed = catalog(
            "ShopA",
            vec![
                offer("Acme", None, "Widget", 12.0),
                offer("Acme", Some("C-1"), "Gadget", 5.0),
            ],
        );

        let mut source = MockCatalogSource::new();
        let returned = feed.clone();
        source
            .expect_fetch_catalog()
            .returning(move |_| Ok(returned.clone()));

        let service = PriceService::new(source);
        let urls = vec!["http://a.example/feed.xml".to_string()];

        let first = service.min_prices("acme", &urls);
        let second = service.min_prices("acme", &urls);

        assert_eq!(first.best, second.best);
    }

    #[test]
    fn test_list_offers_keeps_document_order_and_duplicates() {
        let mut source = MockCatalogSource::new();
        source.expect_fetch_catalog().returning(|_| {
            Ok(catalog(
                "ShopA",
                vec![
                    offer("Acme", None, " Widget ", 12.0),
                    offer("Other", None, "Doohickey", 3.0),
                    offer("Acme", None, "Gadget", 9.0),
                    offer("Acme", None, "Widget", 11.0),
                ],
            ))
        });

        let service = PriceService::new(source);
        let names = service
            .list_offers("ACME", "http://a.example/feed.xml")
            .unwrap();

        assert_eq!(names, vec!["Widget", "Gadget", "Widget"]);
    }

    #[test]
    fn test_list_offers_fails_on_fetch_error() {
        let mut source = MockCatalogSource::new();
        source
            .expect_fetch_catalog()
            .returning(|_| Err(PricefeedError::CatalogParse("bad document".to_string())));

        let service = PriceService::new(source);
        let result = service.list_offers("acme", "http://a.example/feed.xml");

        assert!(result.is_err());
    }
}
