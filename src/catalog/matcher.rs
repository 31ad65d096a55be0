//! Per-item match predicates.
//!
//! Each predicate names a match kind explicitly instead of compiling a
//! pattern, so filter values are always compared as literal text.

use super::normalize::{normalize, normalize_weight};
use crate::models::{CatalogItem, DietOption};

/// A searchable attribute of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Flavour,
    Categories,
    Tags,
    LongDescription,
    WeightOptions,
}

impl Field {
    /// Fields a free-text token is matched against.
    pub const SEARCHABLE: [Field; 6] = [
        Field::Name,
        Field::Flavour,
        Field::Categories,
        Field::Tags,
        Field::LongDescription,
        Field::WeightOptions,
    ];

    /// Fields an autocomplete pattern is matched against.
    pub const SUGGESTABLE: [Field; 3] = [Field::Name, Field::Flavour, Field::Categories];

    /// Raw values of this field on `item`. Absent scalars yield no values.
    pub fn values(self, item: &CatalogItem) -> Vec<&str> {
        match self {
            Field::Name => vec![item.name.as_str()],
            Field::Flavour => item.flavour.as_deref().into_iter().collect(),
            Field::Categories => item.categories.iter().map(String::as_str).collect(),
            Field::Tags => item.tags.iter().map(String::as_str).collect(),
            Field::LongDescription => item.long_description.as_deref().into_iter().collect(),
            Field::WeightOptions => item.weight_options.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate<'a> {
    /// Normalized value contains `needle`, which must already be normalized.
    Contains(Field, &'a str),
    /// Normalized value equals the normalized candidate.
    Equals(Field, &'a str),
    /// Some weight option is the same weight as the candidate.
    SameWeight(&'a str),
    Diet(DietOption),
}

/// True when `item` satisfies `predicate`. Set fields match when any element does.
pub fn matches(item: &CatalogItem, predicate: &Predicate<'_>) -> bool {
    match *predicate {
        Predicate::Contains(field, needle) => field
            .values(item)
            .into_iter()
            .any(|v| normalize(v).contains(needle)),
        Predicate::Equals(field, candidate) => {
            let candidate = normalize(candidate);
            field
                .values(item)
                .into_iter()
                .any(|v| normalize(v) == candidate)
        }
        Predicate::SameWeight(candidate) => {
            let candidate = normalize_weight(candidate);
            item.weight_options
                .iter()
                .any(|w| normalize_weight(w) == candidate)
        }
        Predicate::Diet(diet) => item.diet() == Some(diet),
    }
}
