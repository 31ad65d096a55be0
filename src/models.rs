use serde::{Deserialize, Serialize};

/// A cake in the catalog, as stored by the external document store.
///
/// Only `id` and `name` are required; every other attribute may be absent
/// and an absent attribute never matches a query clause on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavour: Option<String>,
    /// First entry is the primary category for display.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Index-aligned with `prices`.
    #[serde(default)]
    pub weight_options: Vec<String>,
    #[serde(default)]
    pub prices: Vec<f64>,
    /// Pre-discount prices, display only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cut_prices: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub veg: Option<bool>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl CatalogItem {
    /// Price bound to `weight_options[index]`, or `None` when the price list is short.
    pub fn price_at(&self, index: usize) -> Option<f64> {
        self.prices.get(index).copied()
    }

    /// Price used for sorting: the first price, with a missing one compared as 0.
    pub fn sort_price(&self) -> f64 {
        self.price_at(0).unwrap_or(0.0)
    }

    pub fn diet(&self) -> Option<DietOption> {
        self.veg.map(DietOption::from_veg)
    }
}

/// A browsable category with an optional cover image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// On-disk layout of the catalog document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub cakes: Vec<CatalogItem>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DietOption {
    Veg,
    #[serde(alias = "non-veg")]
    NonVeg,
}

impl DietOption {
    pub fn from_veg(veg: bool) -> Self {
        if veg {
            DietOption::Veg
        } else {
            DietOption::NonVeg
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Distinct facet values over the whole catalog.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FacetSummary {
    pub categories: Vec<String>,
    pub flavours: Vec<String>,
    pub weights: Vec<String>,
    pub diet_options: Vec<DietOption>,
    pub price_range: PriceRange,
}

/// Price sort order. Unrecognised values (e.g. `default`) mean no sort.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(from = "String")]
pub enum SortOrder {
    #[default]
    None,
    PriceAscending,
    PriceDescending,
}

impl From<String> for SortOrder {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "priceascending" | "price_asc" | "low" | "asc" => SortOrder::PriceAscending,
            "pricedescending" | "price_desc" | "high" | "desc" => SortOrder::PriceDescending,
            _ => SortOrder::None,
        }
    }
}

/// Diet filter value; `All` places no constraint. Parsed case-insensitively,
/// with `all`, empty and unrecognised values meaning `All`.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(from = "String")]
pub enum DietFilter {
    #[default]
    All,
    Veg,
    NonVeg,
}

impl From<String> for DietFilter {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "veg" => DietFilter::Veg,
            "nonveg" | "non-veg" => DietFilter::NonVeg,
            _ => DietFilter::All,
        }
    }
}

impl DietFilter {
    pub fn as_option(self) -> Option<DietOption> {
        match self {
            DietFilter::All => None,
            DietFilter::Veg => Some(DietOption::Veg),
            DietFilter::NonVeg => Some(DietOption::NonVeg),
        }
    }
}

/// Structured filter. Absent fields and the sentinel `"all"` mean "no constraint".
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FilterCriteria {
    pub category: Option<String>,
    pub flavour: Option<String>,
    pub weight: Option<String>,
    #[serde(default, alias = "veg")]
    pub diet: DietFilter,
    #[serde(default)]
    pub sort: SortOrder,
}

impl FilterCriteria {
    pub fn category(&self) -> Option<&str> {
        active(&self.category)
    }

    pub fn flavour(&self) -> Option<&str> {
        active(&self.flavour)
    }

    pub fn weight(&self) -> Option<&str> {
        active(&self.weight)
    }
}

const ALL: &str = "all";

fn active(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL))
}

/// Free-text search / suggestion query string
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitParams {
    pub limit: Option<usize>,
}

/// Search response
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub results: Vec<CatalogItem>,
}
