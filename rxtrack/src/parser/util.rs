//! Validating parsers for individual argument values.

use std::num::NonZeroU32;

use crate::commands::Index;

use super::ParseError;

/// Parses a 1-based index: digits only, non-zero.
pub fn parse_index(text: &str) -> Result<Index, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

/// Parses a positive dose amount.
pub fn parse_amount(text: &str) -> Result<NonZeroU32, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidAmount);
    }
    trimmed
        .parse::<u32>()
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or(ParseError::InvalidAmount)
}

/// Parses an optional prefixed value with `parse`, mapping its error.
pub fn parse_optional<T, E>(
    value: Option<&str>,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> Result<Option<T>, ParseError>
where
    ParseError: From<E>,
{
    value.map(parse).transpose().map_err(ParseError::from)
}
