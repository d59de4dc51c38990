//! Typed data contracts and host-service traits for the storefront.
//!
//! This crate is the API boundary between the storefront UI and everything it does not own:
//! catalog data, user intents that leave the storefront, and page-level scroll locking. Browser
//! adapters live in `catalog_host_web`; the view layer lives in `storefront_runtime`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod catalog;
pub mod host;
pub mod intents;
pub mod model;
pub mod scroll_lock;

pub use catalog::{CatalogError, CatalogFuture, CatalogProvider, StaticCatalog};
pub use host::{HostStrategy, StorefrontServices};
pub use intents::{IntentSink, MemoryIntentSink, NoopIntentSink, StorefrontIntent};
pub use model::{
    AccountSnapshot, Chapter, Character, CharacterId, LibraryEntry, PaymentMethod,
    ProfileDetails, PublicationDetails, PurchaseRecord, ReaderBook, Review, ShelfSection,
    StarRating, Voice, VoiceAssignment, VoiceId, Work, WorkDetail, WorkId, PLACEHOLDER_COVER_URL,
};
pub use scroll_lock::{MemoryScrollLock, NoopScrollLock, ScrollLockGuard, ScrollLockService};
