use std::cmp::Ordering;

use crate::selection::{MAX_ITEM_WEIGHT_AND_PRICE, MAX_PACKAGE_WEIGHT};
use crate::types::Item;

/// Effective weight limit: the stated limit capped at [`MAX_PACKAGE_WEIGHT`].
pub fn clamp_weight_limit(stated_limit: f64) -> f64 {
    if stated_limit > MAX_PACKAGE_WEIGHT {
        MAX_PACKAGE_WEIGHT
    } else {
        stated_limit
    }
}

/// An item over the per-item weight or price cap can never be packed.
pub fn is_eligible(item: &Item) -> bool {
    item.weight <= MAX_ITEM_WEIGHT_AND_PRICE && item.price <= MAX_ITEM_WEIGHT_AND_PRICE
}

/// Eligible items ordered by price descending.
///
/// The sort is stable, so items with equal prices keep their input-relative
/// order and the search order is deterministic.
pub fn eligible_items_by_price(items: &[Item]) -> Vec<Item> {
    let mut eligible: Vec<Item> = items.iter().copied().filter(is_eligible).collect();
    eligible.sort_by(|a, b| b.price.partial_cmp(&a.price).unwrap_or(Ordering::Equal));
    eligible
}
