use std::collections::BTreeSet;

use crate::errors::{PricefeedError, PricefeedResult};

/// Median of the two lists merged and deduplicated.
///
/// Values are truncated to integers (toward zero) before merging, and
/// duplicates collapse to one occurrence — the median is taken over the set,
/// not the multiset. Fails with [`PricefeedError::EmptyInput`] when nothing
/// remains after the merge.
pub fn merged_median(list1: &[f64], list2: &[f64]) -> PricefeedResult<f64> {
    let values: BTreeSet<i64> = list1.iter().chain(list2).map(|v| *v as i64).collect();

    if values.is_empty() {
        return Err(PricefeedError::EmptyInput);
    }

    let values: Vec<i64> = values.into_iter().collect();
    let mid = values.len() / 2;

    if values.len() % 2 == 1 {
        Ok(values[mid] as f64)
    } else {
        Ok((values[mid - 1] + values[mid]) as f64 / 2.0)
    }
}
