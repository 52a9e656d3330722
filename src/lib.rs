//! Fetch-and-aggregate core of a PokeAPI catalog browser.
//!
//! [`fetch::fetch_catalog`] builds the list screen's rows from one page of
//! summaries plus a detail request per row, [`fetch::fetch_entity_detail`]
//! assembles everything the detail screen shows, and
//! [`filter::filter_catalog`] backs the search box.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod models;
pub mod tabs;
pub mod utils;

pub use client::PokeClient;
pub use config::Config;
pub use error::FetchError;
pub use fetch::{fetch_catalog, fetch_entity_detail};
pub use filter::filter_catalog;
pub use models::{Catalog, CatalogEntry, EntityDetail, EntityProfile, SpeciesInfo, Stat, VariantRef, VariantView};
pub use tabs::DetailTab;
