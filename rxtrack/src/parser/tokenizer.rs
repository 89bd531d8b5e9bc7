//! Splits prefix-tagged argument text into values.
//!
//! `" 1 n/Aspirin d/2 tablets"` with prefixes `n/` and `d/` yields the
//! preamble `"1"`, `n/ -> ["Aspirin"]` and `d/ -> ["2 tablets"]`. A prefix is
//! only recognised at the start of the text or directly after whitespace,
//! so dates such as `01/02/2024` are never mistaken for tags.

use std::collections::HashMap;

use super::syntax::Prefix;
use super::ParseError;

/// Values keyed by prefix, in the order they appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    values: HashMap<Prefix, Vec<String>>,
    preamble: String,
}

impl ArgumentMultimap {
    /// The last value given for `prefix`.
    #[must_use]
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`.
    #[must_use]
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values
            .get(&prefix)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Text before the first prefix, trimmed.
    #[must_use]
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    #[must_use]
    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Fails if any of `prefixes` was given more than once.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let duplicated: Vec<&'static str> = prefixes
            .iter()
            .filter(|p| self.all_values(**p).len() > 1)
            .map(|p| p.as_str())
            .collect();
        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes {
                prefixes: duplicated,
            })
        }
    }
}

/// Tokenizes `args` against `prefixes`.
#[must_use]
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|&prefix| find_prefix_positions(args, prefix).map(move |pos| (pos, prefix)))
        .collect();
    positions.sort_by_key(|(pos, _)| *pos);

    let preamble_end = positions.first().map_or(args.len(), |(pos, _)| *pos);
    let mut multimap = ArgumentMultimap {
        values: HashMap::new(),
        preamble: args[..preamble_end].trim().to_string(),
    };

    for (i, (pos, prefix)) in positions.iter().enumerate() {
        let value_start = pos + prefix.as_str().len();
        let value_end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    multimap
}

fn find_prefix_positions(args: &str, prefix: Prefix) -> impl Iterator<Item = usize> + '_ {
    args.match_indices(prefix.as_str())
        .map(|(pos, _)| pos)
        .filter(move |&pos| {
            pos == 0
                || args[..pos]
                    .chars()
                    .next_back()
                    .is_some_and(char::is_whitespace)
        })
}
