//! Deterministic package selection.
//!
//! `packer` reads test cases of the form `<limit> : (<id>,<weight>,€<price>) …`,
//! one per line, and for each case picks the combination of items that
//! maximizes total price without exceeding the weight limit, preferring the
//! lighter combination on price ties. All operations are deterministic —
//! identical inputs always produce identical outputs, byte-for-byte.

pub mod packing;
pub mod problem;
pub mod selection;
pub mod types;

pub use packing::{pack, PackError};
pub use problem::{parse_line, FormatError, Package};
pub use selection::select;
pub use types::{Item, ItemId, Selection};
