//! Facet aggregation: distinct filter values and the catalog price range.

use std::collections::{BTreeSet, HashSet};

use crate::models::{CatalogItem, DietOption, FacetSummary, PriceRange};

/// Distinct facet values and the price range across the whole catalog.
///
/// Values are trimmed, empty ones dropped, and each list is sorted
/// case-insensitively so clients render a stable order.
pub fn aggregate(catalog: &[CatalogItem]) -> FacetSummary {
    let categories = distinct(catalog.iter().flat_map(|c| c.categories.iter()));
    let flavours = distinct(catalog.iter().filter_map(|c| c.flavour.as_ref()));
    let weights = distinct(catalog.iter().flat_map(|c| c.weight_options.iter()));

    let diet_options: BTreeSet<DietOption> =
        catalog.iter().filter_map(CatalogItem::diet).collect();

    FacetSummary {
        categories,
        flavours,
        weights,
        diet_options: diet_options.into_iter().collect(),
        price_range: price_range(catalog),
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    let unique: HashSet<&str> = values.map(|v| v.trim()).filter(|v| !v.is_empty()).collect();
    let mut out: Vec<String> = unique.into_iter().map(str::to_string).collect();
    out.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
    out
}

/// Min and max over every price of every item; `{0, 0}` when there are none.
pub fn price_range(catalog: &[CatalogItem]) -> PriceRange {
    let mut prices = catalog
        .iter()
        .flat_map(|c| c.prices.iter().copied())
        .filter(|p| p.is_finite());

    let Some(first) = prices.next() else {
        return PriceRange::default();
    };
    prices.fold(PriceRange { min: first, max: first }, |range, p| PriceRange {
        min: range.min.min(p),
        max: range.max.max(p),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cake(
        id: &str,
        categories: &[&str],
        flavour: Option<&str>,
        weights: &[&str],
        prices: &[f64],
        veg: Option<bool>,
    ) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: format!("Cake {id}"),
            flavour: flavour.map(str::to_string),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            weight_options: weights.iter().map(|w| w.to_string()).collect(),
            prices: prices.to_vec(),
            cut_prices: vec![],
            tags: vec![],
            short_description: None,
            long_description: None,
            veg,
            images: vec![],
        }
    }

    #[test]
    fn test_empty_catalog() {
        let summary = aggregate(&[]);
        assert!(summary.categories.is_empty());
        assert!(summary.flavours.is_empty());
        assert!(summary.weights.is_empty());
        assert!(summary.diet_options.is_empty());
        assert_eq!(summary.price_range, PriceRange { min: 0.0, max: 0.0 });
    }

    #[test]
    fn test_price_range_over_all_prices() {
        let catalog = vec![
            cake("a", &["Chocolate"], None, &["500g"], &[400.0], Some(true)),
            cake("b", &["Wedding"], None, &["1kg"], &[1200.0], Some(true)),
            cake("c", &["Birthday"], None, &["500g"], &[600.0], Some(true)),
        ];
        assert_eq!(
            aggregate(&catalog).price_range,
            PriceRange { min: 400.0, max: 1200.0 }
        );

        let multi = vec![cake("d", &["X"], None, &["500g", "2kg"], &[350.0, 1500.0], None)];
        assert_eq!(price_range(&multi), PriceRange { min: 350.0, max: 1500.0 });
    }

    #[test]
    fn test_priceless_catalog() {
        let catalog = vec![cake("a", &["Chocolate"], None, &["500g"], &[], None)];
        assert_eq!(price_range(&catalog), PriceRange::default());
    }

    #[test]
    fn test_distinct_values_trimmed_deduplicated_sorted() {
        let catalog = vec![
            cake(
                "a",
                &["Wedding", " Chocolate "],
                Some("Vanilla"),
                &["1kg"],
                &[1.0],
                Some(true),
            ),
            cake(
                "b",
                &["chocolate", "Chocolate", ""],
                Some("Dark Chocolate"),
                &["500g", " "],
                &[2.0],
                Some(true),
            ),
            cake("c", &["birthday"], Some("Vanilla"), &["1kg"], &[3.0], Some(true)),
        ];
        let summary = aggregate(&catalog);
        assert_eq!(
            summary.categories,
            vec!["birthday", "Chocolate", "chocolate", "Wedding"]
        );
        assert_eq!(summary.flavours, vec!["Dark Chocolate", "Vanilla"]);
        assert_eq!(summary.weights, vec!["1kg", "500g"]);
        assert_eq!(summary.diet_options, vec![DietOption::Veg]);
    }

    #[test]
    fn test_diet_options_both() {
        let catalog = vec![
            cake("a", &["X"], None, &[], &[], Some(false)),
            cake("b", &["X"], None, &[], &[], Some(true)),
        ];
        assert_eq!(
            aggregate(&catalog).diet_options,
            vec![DietOption::Veg, DietOption::NonVeg]
        );
    }
}
