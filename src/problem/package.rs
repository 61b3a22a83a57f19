use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Item;

/// One test case: a weight limit and the candidate items, as parsed from a
/// single input line.
///
/// A package is constructed once per line, handed to the selector, and
/// discarded; cases never share state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub weight_limit: f64,
    pub items: Vec<Item>,
}

impl Package {
    pub fn new(weight_limit: f64, items: Vec<Item>) -> Self {
        Package {
            weight_limit,
            items,
        }
    }
}

impl fmt::Display for Package {
    /// Renders the canonical input-line form `<limit> : (<…>) (<…>)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :", self.weight_limit)?;
        for item in &self.items {
            write!(f, " {item}")?;
        }
        Ok(())
    }
}
