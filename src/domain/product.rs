use std::collections::HashMap;

/// Resolves offers to a stable product key for the duration of one
/// aggregation run.
///
/// Offers carrying a non-empty vendor code use it directly; vendor codes are
/// trusted as globally unique. Offers without one are keyed by their exact
/// offer name: the first such offer mints a synthetic key, later offers with
/// the same name resolve to it. Two distinct code-less products that share a
/// display name therefore merge into one key — a known precision limit of
/// name-based fallback, kept deliberately.
#[derive(Debug, Default)]
pub struct ProductRegistry {
    keys_by_name: HashMap<String, String>,
    next_synthetic: u64,
}

impl ProductRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve an offer to its product key. `offer_name` is expected to be
    /// trimmed already; lookups are case-sensitive exact matches.
    pub fn resolve(&mut self, vendor_code: Option<&str>, offer_name: &str) -> String {
        if let Some(code) = vendor_code {
            if !code.is_empty() {
                return code.to_string();
            }
        }

        if let Some(key) = self.keys_by_name.get(offer_name) {
            return key.clone();
        }

        let key = self.mint_key();
        self.keys_by_name.insert(offer_name.to_string(), key.clone());
        key
    }

    // The ':' keeps minted keys out of any real vendor-code namespace.
    fn mint_key(&mut self) -> String {
        self.next_synthetic += 1;
        format!("generated:{}", self.next_synthetic)
    }
}
