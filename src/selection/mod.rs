pub mod filters;
pub mod search;

use crate::types::{Item, Selection};

pub use filters::{clamp_weight_limit, eligible_items_by_price, is_eligible};
pub use search::{find_best_combination, select_better};

/// Max weight that a package can take.
pub const MAX_PACKAGE_WEIGHT: f64 = 100.0;
/// Max weight and price of a single item; anything heavier or dearer is
/// never eligible.
pub const MAX_ITEM_WEIGHT_AND_PRICE: f64 = 100.0;
/// Hard cap on the number of items in one selection, independent of weight.
pub const ITEM_QUANTITY_LIMIT: usize = 15;

/// Select the best combination of items for one package.
///
/// Returns the selection with the globally maximum total price; among
/// equal-price selections, the one with minimum total weight. The empty
/// selection is returned when nothing fits. Pure and total: any well-formed
/// case (including zero items or a zero weight limit) produces a result.
pub fn select(items: &[Item], weight_limit: f64) -> Selection {
    // 1. Clamp Phase
    let effective_limit = clamp_weight_limit(weight_limit);

    // 2. Filter & Ordering Phase
    // Drop ineligible items, sort the rest by price descending (stable).
    let candidates = eligible_items_by_price(items);

    debug_assert!(candidates
        .windows(2)
        .all(|pair| pair[0].price >= pair[1].price));

    // 3. Search Phase
    find_best_combination(&candidates, effective_limit, 0.0, 0)
}
