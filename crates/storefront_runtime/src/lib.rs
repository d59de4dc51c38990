//! Storefront state machines, components and pages.
//!
//! Pure logic (reader reducer, voice assignment session, shelf cursor, library filter, profile
//! form, route resolution) lives in plain modules with unit tests. Leptos components and routed
//! pages read host services through [`StorefrontProvider`].

pub mod account;
pub mod components;
pub mod config;
pub mod diagnostics;
pub mod library;
pub mod model;
pub mod pages;
pub mod reducer;
pub mod routes;
pub mod runtime_context;
pub mod shelf;
pub mod voice_session;

pub use components::{
    CatalogItem, PageLayout, ReadingSurface, ShelfCarousel, SiteFooter, SiteHeader, StarRow,
    VoiceAssignmentEditor,
};
pub use config::{StorefrontConfig, UnknownWorkPolicy};
pub use diagnostics::{DiagnosticLevel, Diagnostics};
pub use model::*;
pub use pages::{AccountPage, HomePage, LibraryPage, NotFoundPage, ReaderPage, WorkDetailPage};
pub use reducer::{reduce_reader, ReaderAction, ReaderEffect, ReaderError};
pub use routes::AppRoute;
pub use runtime_context::{use_storefront, StorefrontContext, StorefrontProvider};
pub use voice_session::{SessionEvent, VoiceAssignmentSession, VoiceSessionError};
