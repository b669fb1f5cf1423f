use std::collections::HashMap;

use serde::Serialize;

/// The cheapest offer observed for one product during an aggregation run.
/// Field names match the JSON the service emits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestPrice {
    pub price: f64,
    #[serde(rename = "offer")]
    pub offer_name: String,
    #[serde(rename = "shop")]
    pub shop_name: String,
    #[serde(rename = "currency")]
    pub currency_id: String,
}

/// Accumulator mapping product keys to their cheapest observed offer.
///
/// Replacement is strict-improvement only: an offer at the same price as the
/// stored record does not overwrite it, so ties keep the first-seen shop.
/// Records come back out in first-seen key order.
#[derive(Debug, Default)]
pub struct BestPriceBook {
    records: HashMap<String, BestPrice>,
    order: Vec<String>,
}

impl BestPriceBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offer_min(&mut self, key: String, candidate: BestPrice) {
        match self.records.get_mut(&key) {
            Some(existing) => {
                if candidate.price < existing.price {
                    *existing = candidate;
                }
            }
            None => {
                self.order.push(key.clone());
                self.records.insert(key, candidate);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn into_records(mut self) -> Vec<BestPrice> {
        self.order
            .into_iter()
            .filter_map(|key| self.records.remove(&key))
            .collect()
    }
}
