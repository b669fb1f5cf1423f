use serde::{Deserialize, Serialize};

/// One `<offer>` entry of a supplier catalog. Lives only for the duration of
/// one feed traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub vendor: String,
    /// Supplier's own product code. `None` when the element is absent or
    /// empty; such offers fall back to name-based identity resolution.
    pub vendor_code: Option<String>,
    pub name: String,
    pub price: f64,
    pub currency_id: String,
}

impl Offer {
    pub fn new(vendor: String, name: String, price: f64, currency_id: String) -> Self {
        Self {
            vendor,
            vendor_code: None,
            name,
            price,
            currency_id,
        }
    }

    pub fn with_vendor_code(mut self, vendor_code: Option<String>) -> Self {
        self.vendor_code = vendor_code;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    pub name: String,
    pub offers: Vec<Offer>,
}

/// A fully parsed price-catalog feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub shops: Vec<Shop>,
}

impl Catalog {
    pub fn offer_count(&self) -> usize {
        self.shops.iter().map(|s| s.offers.len()).sum()
    }
}
