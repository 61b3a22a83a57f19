use crate::selection::ITEM_QUANTITY_LIMIT;
use crate::types::{Item, Selection};

/// Exhaustive two-branch subset search over the candidate list.
///
/// At every item the reject branch (skip it) is explored unconditionally; the
/// accept branch is explored only when adding the item keeps the accumulated
/// weight within the limit. The better of the two branch results propagates
/// upward via [`select_better`]. Accumulated weight and count travel down the
/// call stack as plain values, so no state is shared between branches.
pub fn find_best_combination(
    candidates: &[Item],
    weight_limit: f64,
    accumulated_weight: f64,
    accumulated_count: usize,
) -> Selection {
    let Some((first, rest)) = candidates.split_first() else {
        return Selection::empty();
    };
    if accumulated_count == ITEM_QUANTITY_LIMIT {
        return Selection::empty();
    }

    let without_first =
        find_best_combination(rest, weight_limit, accumulated_weight, accumulated_count);

    let weight_with_first = accumulated_weight + first.weight;
    if weight_with_first > weight_limit {
        return without_first;
    }

    let mut with_first =
        find_best_combination(rest, weight_limit, weight_with_first, accumulated_count + 1);
    with_first.push(*first);

    select_better(with_first, without_first)
}

/// Tie-break comparator between two candidate selections.
///
/// Strictly greater total price wins; on equal price the strictly smaller
/// total weight wins; on a full tie the first argument is returned.
pub fn select_better(a: Selection, b: Selection) -> Selection {
    if a.total_price() > b.total_price() {
        a
    } else if a.total_price() < b.total_price() {
        b
    } else if a.total_weight() > b.total_weight() {
        b
    } else {
        a
    }
}
