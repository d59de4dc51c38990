//! Catalog provider contracts.
//!
//! Pages load every dataset through [`CatalogProvider`] so the view layer never owns mock data.
//! The built-in [`StaticCatalog`] adapter serves the tables compiled in from `data/catalog.toml`;
//! a networked adapter can replace it without touching any component.

mod static_catalog;

use std::{future::Future, pin::Pin};

use thiserror::Error;

use crate::model::{AccountSnapshot, LibraryEntry, ReaderBook, ShelfSection, WorkDetail, WorkId};

pub use static_catalog::StaticCatalog;

/// Object-safe boxed future used by [`CatalogProvider`] async methods.
pub type CatalogFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors reported by catalog providers.
pub enum CatalogError {
    /// No record exists for the requested work id.
    #[error("unknown work `{id}`")]
    UnknownWork {
        /// Requested id.
        id: WorkId,
    },
    /// The backing tables could not be decoded.
    #[error("catalog tables are malformed: {0}")]
    MalformedCatalog(String),
}

/// Data source for every storefront screen.
pub trait CatalogProvider {
    /// Loads the home-page shelves in display order.
    fn fetch_catalog<'a>(&'a self) -> CatalogFuture<'a, Result<Vec<ShelfSection>, CatalogError>>;

    /// Loads the detail record for one work.
    ///
    /// Unknown ids yield [`CatalogError::UnknownWork`]; callers decide whether to fall back.
    fn fetch_work<'a>(
        &'a self,
        id: &'a WorkId,
    ) -> CatalogFuture<'a, Result<WorkDetail, CatalogError>>;

    /// Loads the record shown when no usable work id is available.
    fn fetch_fallback_work<'a>(&'a self) -> CatalogFuture<'a, Result<WorkDetail, CatalogError>>;

    /// Loads the reader's personal library.
    fn fetch_library<'a>(&'a self) -> CatalogFuture<'a, Result<Vec<LibraryEntry>, CatalogError>>;

    /// Loads reading-session content for a work.
    fn fetch_reader_book<'a>(
        &'a self,
        id: Option<&'a WorkId>,
    ) -> CatalogFuture<'a, Result<ReaderBook, CatalogError>>;

    /// Loads the account page snapshot.
    fn fetch_account<'a>(&'a self) -> CatalogFuture<'a, Result<AccountSnapshot, CatalogError>>;
}
