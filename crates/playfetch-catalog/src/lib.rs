//! Package catalog support for playfetch.
//!
//! This crate provides a small static catalog of popular apps and games,
//! with search, category filters, sorting and "load more" pagination.

pub mod actions;
pub mod error;
pub mod query;
pub mod seed;
pub mod types;
pub mod view;

pub use actions::{DEFAULT_REDIRECT_BASE, copy_package, redirect_to_download, redirect_url};
pub use error::{CatalogError, Result};
pub use query::{CatalogQuery, sort_entries};
pub use seed::CATALOG;
pub use types::{CatalogEntry, EntryKind, KindFilter, POPULARITY_THRESHOLD, SortKey};
pub use view::{CatalogView, DEFAULT_PAGE_SIZE, Ticket, ViewPhase};
