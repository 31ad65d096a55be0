//! # cake-catalog
//!
//! An online cake catalog service: browsing, category filtering, free-text
//! search, autocomplete and "related cakes".
//!
//! ## Architecture
//!
//! Every request reads one snapshot from the catalog store and runs a pure
//! query over it:
//!
//! ```text
//!            ┌──────────────────────┐
//!            │   HTTP query façade  │
//!            └──────────┬───────────┘
//!                       │ query / criteria
//!                       ▼
//!            ┌──────────────────────┐
//!            │ CatalogStore         │   find_all() → snapshot
//!            └──────────┬───────────┘
//!                       │
//!     ┌──────────┬──────┴─────┬────────────┐
//!     ▼          ▼            ▼            ▼
//! ┌────────┐ ┌────────┐ ┌──────────┐ ┌─────────┐
//! │ Search │ │ Filter │ │  Facets  │ │ Related │
//! │  any   │ │  all   │ │ distinct │ │ shared  │
//! │ token  │ │ clauses│ │ + prices │ │category │
//! └───┬────┘ └───┬────┘ └──────────┘ └─────────┘
//!     │          │
//!     ▼          ▼
//! ┌──────────────────┐
//! │ Matcher          │  contains / equals / same weight / diet
//! │ Tokenizer        │
//! │ Normalizer       │
//! └──────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for bind address, data dir and limits
//! - [`models`] - `CatalogItem`, `Category`, facet summary, filter criteria, DTOs
//! - [`error`] - `CatalogError`: not found vs. store unavailable
//! - [`store`] - Catalog store trait with file-backed and in-memory implementations
//! - [`catalog::normalize`] - Case/whitespace folding and weight unit unification
//! - [`catalog::tokenizer`] - Splits free-text queries into tokens
//! - [`catalog::matcher`] - Substring, exact, weight-equivalence and diet predicates
//! - [`catalog::search`] - Disjunctive free-text search and autocomplete
//! - [`catalog::filter`] - Conjunctive structured filter with stable price sort
//! - [`catalog::facets`] - Distinct categories, flavours, weights, diets and price range
//! - [`catalog::related`] - Cakes sharing a category with a given cake
//! - [`api`] - Axum HTTP handlers
//! - [`state`] - Shared application state and the blocking-pool query helper

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
