//! In-memory property listing catalog with a pure query engine.
//!
//! The heart of the crate is [`query::query`]: filter, free-text search
//! and sort over a read-only [`catalog::Catalog`] of listings. Around it
//! sit the pieces a listing site needs: catalog sources ([`catalog::CatalogSource`]),
//! per-property engagement state ([`engagement::Engagement`]) and an admin
//! working copy for managing listings and customers ([`admin::AdminSession`]).

pub mod admin;
pub mod catalog;
pub mod engagement;
pub mod models;
pub mod query;
