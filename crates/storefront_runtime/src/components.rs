//! Storefront UI composition: chrome, catalog items, shelves and the reading surface.

mod catalog_item;
mod chrome;
mod rating;
mod reading_surface;
mod shelf;
mod voice_editor;

use catalog_host::{
    Character, CharacterId, ReaderBook, StarRating, StaticCatalog, StorefrontIntent, Voice,
    VoiceAssignment, VoiceId, Work, WorkId,
};
use leptos::*;
use leptos_router::use_location;
use system_ui::prelude::*;

use crate::{
    diagnostics::Diagnostics,
    model::{FontFamily, ReaderSettings, ReaderState},
    reducer::{reduce_reader, ReaderAction, ReaderEffect},
    routes::AppRoute,
    runtime_context::use_storefront,
    shelf::ShelfCursor,
    voice_session::VoiceAssignmentSession,
};

pub use catalog_item::CatalogItem;
pub use chrome::{PageLayout, SiteFooter, SiteHeader};
pub use rating::StarRow;
pub use reading_surface::ReadingSurface;
pub use shelf::ShelfCarousel;
pub use voice_editor::VoiceAssignmentEditor;

/// `data-ui-*` boolean token.
pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
