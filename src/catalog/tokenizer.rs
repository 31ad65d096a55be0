//! Query tokenization for free-text search.

use super::normalize::normalize;

/// Split a free-text query into lower-cased match tokens.
///
/// Order is preserved and repeats are kept. An empty result means
/// "no results", never "match everything".
pub fn tokenize(query: &str) -> Vec<String> {
    normalize(query)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
