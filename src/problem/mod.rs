pub mod package;
pub mod parser;

pub use package::Package;
pub use parser::{parse_item, parse_line, FormatError};
