use thiserror::Error;

use crate::problem::package::Package;
use crate::types::Item;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("line has no ':' separator: {0}")]
    MissingSeparator(String),
    #[error("line has more than one ':' separator: {0}")]
    DuplicateSeparator(String),
    #[error("item group must be '(<id>,<weight>,€<price>)': {0}")]
    MalformedItem(String),
    #[error("price must begin with '€': {0}")]
    MissingCurrencyMarker(String),
    #[error("invalid number: {0}")]
    InvalidNumber(String),
}

/// Parse one non-blank input line into a [`Package`].
///
/// Line format: `<weightLimit> : (<id>,<weight>,€<price>) (<id>,<weight>,€<price>) …`
/// A line with zero item groups after the separator is a valid empty case.
pub fn parse_line(line: &str) -> Result<Package, FormatError> {
    let parts: Vec<&str> = line.split(':').collect();
    if parts.len() < 2 {
        return Err(FormatError::MissingSeparator(line.to_string()));
    }
    if parts.len() > 2 {
        return Err(FormatError::DuplicateSeparator(line.to_string()));
    }

    let weight_limit = parse_number(parts[0])?;

    // Item groups are space-separated; whitespace between them is tolerated.
    let mut items = Vec::new();
    for group in parts[1].split_whitespace() {
        items.push(parse_item(group)?);
    }

    Ok(Package::new(weight_limit, items))
}

/// Parse a single parenthesized item group `(<id>,<weight>,€<price>)`.
pub fn parse_item(group: &str) -> Result<Item, FormatError> {
    let inner = group
        .strip_prefix('(')
        .and_then(|g| g.strip_suffix(')'))
        .ok_or_else(|| FormatError::MalformedItem(group.to_string()))?;

    let fields: Vec<&str> = inner.split(',').collect();
    if fields.len() != 3 {
        return Err(FormatError::MalformedItem(group.to_string()));
    }

    let id: u32 = fields[0]
        .parse()
        .map_err(|_| FormatError::InvalidNumber(fields[0].to_string()))?;
    let weight = parse_number(fields[1])?;

    let price_text = fields[2]
        .strip_prefix('€')
        .ok_or_else(|| FormatError::MissingCurrencyMarker(fields[2].to_string()))?;
    let price = parse_number(price_text)?;

    Ok(Item::new(id, weight, price))
}

fn parse_number(text: &str) -> Result<f64, FormatError> {
    let trimmed = text.trim();
    trimmed
        .parse()
        .map_err(|_| FormatError::InvalidNumber(trimmed.to_string()))
}
