use std::fmt;

use serde::{Deserialize, Serialize};

/// Index number of an item within one test case.
///
/// Ids are unique per case but not required to be contiguous or sorted in
/// the input; ordering on the id is what the output line is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    pub fn new(id: u32) -> Self {
        ItemId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate unit that can go into the package.
///
/// Identity is `id`; weight and price are non-negative reals as parsed from
/// the input line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub weight: f64,
    pub price: f64,
}

impl Item {
    pub fn new(id: u32, weight: f64, price: f64) -> Self {
        Item {
            id: ItemId::new(id),
            weight,
            price,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},€{})", self.id, self.weight, self.price)
    }
}
