pub mod item;
pub mod selection;

pub use item::{Item, ItemId};
pub use selection::Selection;
