//! Free-text search and autocomplete suggestions.

use std::collections::HashSet;

use super::matcher::{matches, Field, Predicate};
use super::normalize::normalize;
use super::tokenizer::tokenize;
use crate::models::CatalogItem;

/// Free-text search: an item is kept when any token is a substring of any
/// searchable field. Snapshot order is preserved; results are capped at `limit`.
pub fn search(query: &str, catalog: &[CatalogItem], limit: usize) -> Vec<CatalogItem> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    catalog
        .iter()
        .filter(|item| {
            tokens.iter().any(|token| {
                Field::SEARCHABLE
                    .iter()
                    .any(|&field| matches(item, &Predicate::Contains(field, token)))
            })
        })
        .take(limit)
        .cloned()
        .collect()
}

/// Autocomplete suggestions for a partially typed query.
///
/// The whole trimmed query is one pattern. Only the first `limit` items that
/// match on name, flavour or a category are examined, so the result may hold
/// fewer distinct strings than exist further down the catalog. Matching
/// names, flavours and categories are returned once each, first-seen order.
pub fn suggest(query: &str, catalog: &[CatalogItem], limit: usize) -> Vec<String> {
    let pattern = normalize(query);
    if pattern.is_empty() {
        return Vec::new();
    }

    let scanned = catalog
        .iter()
        .filter(|item| {
            Field::SUGGESTABLE
                .iter()
                .any(|&field| matches(item, &Predicate::Contains(field, &pattern)))
        })
        .take(limit);

    let mut seen = HashSet::new();
    let mut suggestions = Vec::new();
    for item in scanned {
        for field in Field::SUGGESTABLE {
            for value in field.values(item) {
                if normalize(value).contains(&pattern) && seen.insert(value) {
                    suggestions.push(value.to_string());
                }
            }
        }
    }
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cake(id: &str, name: &str, flavour: Option<&str>, categories: &[&str]) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            flavour: flavour.map(str::to_string),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            weight_options: vec!["500g".to_string()],
            prices: vec![400.0],
            cut_prices: vec![],
            tags: vec![],
            short_description: None,
            long_description: None,
            veg: Some(true),
            images: vec![],
        }
    }

    fn catalog() -> Vec<CatalogItem> {
        vec![
            cake("a", "Dark Chocolate Cake", Some("Dark Chocolate"), &["Chocolate"]),
            cake("b", "Wedding White Cake", Some("Vanilla"), &["Wedding"]),
            cake("c", "Kids Birthday Cake", Some("Vanilla"), &["Birthday", "Chocolate"]),
        ]
    }

    fn ids(items: &[CatalogItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_search_empty_query_returns_nothing() {
        assert!(search("", &catalog(), 50).is_empty());
        assert!(search("   ", &catalog(), 50).is_empty());
    }

    #[test]
    fn test_search_any_token_any_field() {
        let results = search("wedding birthday", &catalog(), 50);
        assert_eq!(ids(&results), vec!["b", "c"]);
    }

    #[test]
    fn test_search_matches_categories_and_weights() {
        assert_eq!(ids(&search("CHOCOLATE", &catalog(), 50)), vec!["a", "c"]);
        assert_eq!(ids(&search("500g", &catalog(), 50)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_search_preserves_snapshot_order_without_ranking() {
        // "c" matches two tokens, "a" only one; order is still snapshot order.
        let results = search("dark kids birthday", &catalog(), 50);
        assert_eq!(ids(&results), vec!["a", "c"]);
    }

    #[test]
    fn test_search_respects_limit() {
        assert_eq!(ids(&search("cake", &catalog(), 2)), vec!["a", "b"]);
        assert!(search("cake", &catalog(), 0).is_empty());
    }

    #[test]
    fn test_search_no_match_is_empty() {
        assert!(search("strawberry", &catalog(), 50).is_empty());
    }

    #[test]
    fn test_suggest_empty_query() {
        assert!(suggest("", &catalog(), 10).is_empty());
        assert!(suggest("  ", &catalog(), 10).is_empty());
    }

    #[test]
    fn test_suggest_collects_matching_fields_deduplicated() {
        let suggestions = suggest("choc", &catalog(), 10);
        assert_eq!(
            suggestions,
            vec!["Dark Chocolate Cake", "Dark Chocolate", "Chocolate"]
        );
    }

    #[test]
    fn test_suggest_treats_query_as_single_pattern() {
        assert_eq!(suggest("white cake", &catalog(), 10), vec!["Wedding White Cake"]);
        assert!(suggest("white dark", &catalog(), 10).is_empty());
    }

    #[test]
    fn test_suggest_limits_items_scanned() {
        let suggestions = suggest("vanilla", &catalog(), 1);
        assert_eq!(suggestions, vec!["Vanilla"]);

        let suggestions = suggest("cake", &catalog(), 1);
        assert_eq!(suggestions, vec!["Dark Chocolate Cake"]);
    }
}
