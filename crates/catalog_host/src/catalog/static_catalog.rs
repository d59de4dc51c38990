//! In-memory catalog adapter backed by the build-time generated tables.

use std::sync::{Arc, OnceLock};

use serde::Deserialize;

use super::{CatalogError, CatalogFuture, CatalogProvider};
use crate::model::{
    AccountSnapshot, LibraryEntry, PublicationDetails, ReaderBook, Review, ShelfSection, Work,
    WorkDetail, WorkId,
};

include!(concat!(env!("OUT_DIR"), "/catalog_generated.rs"));

#[derive(Debug, Clone, Deserialize)]
struct ShelfRow {
    title: String,
    #[serde(default)]
    works: Option<Vec<WorkId>>,
}

#[derive(Debug, Clone, Deserialize)]
struct DetailRow {
    work_id: WorkId,
    rating: f32,
    reviews_count: u32,
    price: String,
    synopsis: String,
    details: PublicationDetails,
    author_bio: String,
    #[serde(default)]
    reviews: Vec<Review>,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogTables {
    fallback_work: WorkId,
    default_shelf: Vec<WorkId>,
    works: Vec<Work>,
    #[serde(default)]
    shelves: Vec<ShelfRow>,
    #[serde(default)]
    details: Vec<DetailRow>,
    #[serde(default)]
    library: Vec<LibraryEntry>,
    reader: ReaderBook,
    account: AccountSnapshot,
}

fn parse_tables(raw: &str) -> Result<CatalogTables, CatalogError> {
    serde_json::from_str(raw).map_err(|err| CatalogError::MalformedCatalog(err.to_string()))
}

fn builtin_tables() -> Result<Arc<CatalogTables>, CatalogError> {
    static TABLES: OnceLock<Result<Arc<CatalogTables>, CatalogError>> = OnceLock::new();
    TABLES
        .get_or_init(|| parse_tables(STATIC_CATALOG_JSON).map(Arc::new))
        .clone()
}

#[derive(Debug, Clone)]
/// [`CatalogProvider`] serving fixed mock tables.
pub struct StaticCatalog {
    tables: Arc<CatalogTables>,
}

impl StaticCatalog {
    /// Opens the catalog compiled in from `data/catalog.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MalformedCatalog`] when the generated JSON does not decode.
    pub fn builtin() -> Result<Self, CatalogError> {
        builtin_tables().map(|tables| Self { tables })
    }

    /// Opens a catalog from raw JSON tables in the generated layout.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MalformedCatalog`] when `raw` does not decode.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        parse_tables(raw).map(|tables| Self {
            tables: Arc::new(tables),
        })
    }

    /// Works on the default shelf, used when a shelf is rendered without its own list.
    pub fn default_shelf_works(&self) -> Vec<Work> {
        self.resolve_works(&self.tables.default_shelf)
    }

    /// Id of the record served when no usable id is supplied.
    pub fn fallback_work_id(&self) -> &WorkId {
        &self.tables.fallback_work
    }

    fn resolve_works(&self, ids: &[WorkId]) -> Vec<Work> {
        ids.iter()
            .filter_map(|id| self.tables.works.iter().find(|work| &work.id == id))
            .cloned()
            .collect()
    }

    fn shelves(&self) -> Vec<ShelfSection> {
        self.tables
            .shelves
            .iter()
            .map(|row| ShelfSection {
                title: row.title.clone(),
                works: match &row.works {
                    Some(ids) => self.resolve_works(ids),
                    None => self.default_shelf_works(),
                },
            })
            .collect()
    }

    fn detail(&self, id: &WorkId) -> Result<WorkDetail, CatalogError> {
        let work = self
            .tables
            .works
            .iter()
            .find(|work| &work.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownWork { id: id.clone() })?;

        let detail = match self.tables.details.iter().find(|row| &row.work_id == id) {
            Some(row) => WorkDetail {
                work,
                rating: row.rating,
                reviews_count: row.reviews_count,
                price: row.price.clone(),
                synopsis: row.synopsis.clone(),
                details: row.details.clone(),
                author_bio: row.author_bio.clone(),
                reviews: row.reviews.clone(),
            },
            // Catalog works without an editorial record still get a page.
            None => WorkDetail {
                work,
                rating: 0.0,
                reviews_count: 0,
                price: String::new(),
                synopsis: String::new(),
                details: PublicationDetails::default(),
                author_bio: String::new(),
                reviews: Vec::new(),
            },
        };
        Ok(detail)
    }
}

impl CatalogProvider for StaticCatalog {
    fn fetch_catalog<'a>(&'a self) -> CatalogFuture<'a, Result<Vec<ShelfSection>, CatalogError>> {
        Box::pin(async move { Ok(self.shelves()) })
    }

    fn fetch_work<'a>(
        &'a self,
        id: &'a WorkId,
    ) -> CatalogFuture<'a, Result<WorkDetail, CatalogError>> {
        Box::pin(async move { self.detail(id) })
    }

    fn fetch_fallback_work<'a>(&'a self) -> CatalogFuture<'a, Result<WorkDetail, CatalogError>> {
        Box::pin(async move { self.detail(&self.tables.fallback_work) })
    }

    fn fetch_library<'a>(&'a self) -> CatalogFuture<'a, Result<Vec<LibraryEntry>, CatalogError>> {
        Box::pin(async move { Ok(self.tables.library.clone()) })
    }

    fn fetch_reader_book<'a>(
        &'a self,
        _id: Option<&'a WorkId>,
    ) -> CatalogFuture<'a, Result<ReaderBook, CatalogError>> {
        // A single mock book backs every reading session.
        Box::pin(async move { Ok(self.tables.reader.clone()) })
    }

    fn fetch_account<'a>(&'a self) -> CatalogFuture<'a, Result<AccountSnapshot, CatalogError>> {
        Box::pin(async move { Ok(self.tables.account.clone()) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    fn catalog() -> StaticCatalog {
        StaticCatalog::builtin().expect("builtin catalog")
    }

    #[test]
    fn builtin_catalog_has_three_shelves_with_default_fill() {
        let catalog = catalog();
        let shelves = block_on(catalog.fetch_catalog()).expect("shelves");

        let titles = shelves
            .iter()
            .map(|shelf| shelf.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec![
                "Featured New Arrivals",
                "Timeless Classics",
                "Current Bestsellers"
            ]
        );
        assert_eq!(shelves[0].works, catalog.default_shelf_works());
        assert_eq!(shelves[0].works.len(), 8);
        assert_eq!(shelves[1].works.len(), 5);
    }

    #[test]
    fn unknown_work_is_reported_not_substituted() {
        let catalog = catalog();
        let missing = WorkId::from("does-not-exist");

        assert_eq!(
            block_on(catalog.fetch_work(&missing)),
            Err(CatalogError::UnknownWork { id: missing.clone() })
        );
    }

    #[test]
    fn fallback_work_carries_editorial_record() {
        let catalog = catalog();
        let detail = block_on(catalog.fetch_fallback_work()).expect("fallback");

        assert_eq!(&detail.work.id, catalog.fallback_work_id());
        assert_eq!(detail.work.title, "A Tale of Two Cities");
        assert_eq!(detail.reviews.len(), 3);
        assert_eq!(detail.details.pages, 448);
        assert!(!detail.work.owned);
    }

    #[test]
    fn works_without_editorial_record_get_summary_detail() {
        let catalog = catalog();
        let detail = block_on(catalog.fetch_work(&WorkId::from("2"))).expect("detail");

        assert_eq!(detail.work.title, "To Kill a Mockingbird");
        assert!(detail.synopsis.is_empty());
        assert!(detail.reviews.is_empty());
    }

    #[test]
    fn reader_book_ignores_requested_id() {
        let catalog = catalog();
        let any = WorkId::from("1");
        let with_id = block_on(catalog.fetch_reader_book(Some(&any))).expect("book");
        let without_id = block_on(catalog.fetch_reader_book(None)).expect("book");

        assert_eq!(with_id, without_id);
        assert_eq!(with_id.chapters.len(), 3);
        assert_eq!(with_id.characters.len(), 5);
    }

    #[test]
    fn library_and_account_tables_load() {
        let catalog = catalog();
        let library = block_on(catalog.fetch_library()).expect("library");
        let account = block_on(catalog.fetch_account()).expect("account");

        assert_eq!(library.len(), 6);
        assert_eq!(library.iter().filter(|entry| entry.audiobook).count(), 3);
        assert_eq!(account.profile.name, "Alex Doe");
        assert_eq!(account.purchases.len(), 3);
    }

    #[test]
    fn malformed_tables_are_rejected() {
        assert!(matches!(
            StaticCatalog::from_json("{\"works\": 3}"),
            Err(CatalogError::MalformedCatalog(_))
        ));
    }
}
