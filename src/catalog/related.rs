//! Related cakes: items sharing a category with a given cake.

use crate::error::{CatalogError, Result};
use crate::models::CatalogItem;

/// Items sharing at least one category with `item_id`, at most `limit` of them.
pub fn related(
    item_id: &str,
    catalog: &[CatalogItem],
    limit: usize,
) -> Result<Vec<CatalogItem>> {
    let source = find_source(item_id, catalog)?;
    Ok(siblings(source, catalog).take(limit).cloned().collect())
}

/// Every item sharing at least one category with `item_id`.
pub fn related_all(item_id: &str, catalog: &[CatalogItem]) -> Result<Vec<CatalogItem>> {
    let source = find_source(item_id, catalog)?;
    Ok(siblings(source, catalog).cloned().collect())
}

fn find_source<'a>(item_id: &str, catalog: &'a [CatalogItem]) -> Result<&'a CatalogItem> {
    catalog
        .iter()
        .find(|item| item.id == item_id)
        .ok_or_else(|| CatalogError::NotFound(item_id.to_string()))
}

fn siblings<'a>(
    source: &'a CatalogItem,
    catalog: &'a [CatalogItem],
) -> impl Iterator<Item = &'a CatalogItem> {
    catalog.iter().filter(move |item| {
        item.id != source.id
            && item
                .categories
                .iter()
                .any(|c| source.categories.contains(c))
    })
}
