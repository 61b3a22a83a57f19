use serde::{Deserialize, Serialize};

use crate::types::item::{Item, ItemId};

/// The chosen combination of items for one test case.
///
/// Totals are carried alongside the items so the search can compare two
/// candidate selections without re-summing the lists at every branch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Selection {
    items: Vec<Item>,
    total_weight: f64,
    total_price: f64,
}

impl Selection {
    pub fn empty() -> Self {
        Selection::default()
    }

    /// Add an item to the selection, updating the cached totals.
    pub fn push(&mut self, item: Item) {
        self.total_weight += item.weight;
        self.total_price += item.price;
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    /// Item ids in ascending numeric order.
    ///
    /// The search accumulates items in price order; the id order of the
    /// output line is computed here, at the very end, and nowhere else.
    pub fn ids(&self) -> Vec<ItemId> {
        let mut ids: Vec<ItemId> = self.items.iter().map(|item| item.id).collect();
        ids.sort();
        ids
    }
}
