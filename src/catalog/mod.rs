//! Catalog query engine: turns a query or filter into an ordered subset of a
//! catalog snapshot, and derives facet and related-item views from it.
//!
//! Every function here is a pure function of its input and a borrowed
//! snapshot; nothing is cached between calls.

pub mod facets;
pub mod filter;
pub mod matcher;
pub mod normalize;
pub mod related;
pub mod search;
pub mod tokenizer;
