//! Structured filter engine: conjunctive criteria plus price sort.

use super::matcher::{matches, Field, Predicate};
use crate::models::{CatalogItem, FilterCriteria, SortOrder};

/// Active clauses of `criteria`; inactive (`"all"` / absent) criteria add none.
fn clauses(criteria: &FilterCriteria) -> Vec<Predicate<'_>> {
    let mut clauses = Vec::new();
    if let Some(category) = criteria.category() {
        clauses.push(Predicate::Equals(Field::Categories, category));
    }
    if let Some(flavour) = criteria.flavour() {
        clauses.push(Predicate::Equals(Field::Flavour, flavour));
    }
    if let Some(weight) = criteria.weight() {
        clauses.push(Predicate::SameWeight(weight));
    }
    if let Some(diet) = criteria.diet.as_option() {
        clauses.push(Predicate::Diet(diet));
    }
    clauses
}

/// Items satisfying every active criterion, then sorted by first price.
///
/// The sort is stable, so items with equal first prices keep snapshot order.
pub fn filter(criteria: &FilterCriteria, catalog: &[CatalogItem]) -> Vec<CatalogItem> {
    let clauses = clauses(criteria);

    let mut items: Vec<CatalogItem> = catalog
        .iter()
        .filter(|item| clauses.iter().all(|clause| matches(item, clause)))
        .cloned()
        .collect();

    sort_by_price(&mut items, criteria.sort);
    items
}

pub fn sort_by_price(items: &mut [CatalogItem], order: SortOrder) {
    match order {
        SortOrder::None => {}
        SortOrder::PriceAscending => {
            items.sort_by(|a, b| a.sort_price().total_cmp(&b.sort_price()));
        }
        SortOrder::PriceDescending => {
            items.sort_by(|a, b| b.sort_price().total_cmp(&a.sort_price()));
        }
    }
}

/// Browse one category: a filter with only `category` active.
pub fn by_category(category: &str, catalog: &[CatalogItem]) -> Vec<CatalogItem> {
    let criteria = FilterCriteria {
        category: Some(category.to_string()),
        ..Default::default()
    };
    filter(&criteria, catalog)
}
