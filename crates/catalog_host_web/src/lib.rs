//! Browser (`wasm32`) implementations of [`catalog_host`] service contracts.
//!
//! Non-wasm builds compile every adapter with inert DOM access so the storefront runtime can be
//! exercised by native tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Host service bundle factory for the browser target.
pub mod adapters;
pub mod intents;
pub mod scroll_lock;

pub use adapters::{build_storefront_services, host_strategy_name};
pub use intents::ConsoleIntentSink;
pub use scroll_lock::BodyScrollLock;
