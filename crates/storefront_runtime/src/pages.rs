//! Routed page shells.
//!
//! Every page loads its own data through the context's [`CatalogProvider`] and passes it by value
//! into display components. Loads run on `spawn_local` and land in a [`LoadState`] signal.

mod account;
mod home;
mod library;
mod not_found;
mod reader;
mod work_detail;

use std::future::Future;

use catalog_host::{
    AccountSnapshot, CatalogError, CatalogProvider, LibraryEntry, PaymentMethod, PurchaseRecord,
    ShelfSection, StorefrontIntent, WorkDetail, WorkId,
};
use leptos::*;
use leptos_router::{use_location, use_query_map};
use system_ui::prelude::*;

use crate::{
    account::{AccountTab, ProfileForm, ProfileFormStatus},
    components::{CatalogItem, PageLayout, ReadingSurface, ShelfCarousel, StarRow},
    config::UnknownWorkPolicy,
    diagnostics::Diagnostics,
    library::{filter_library, progress_label, LibraryTab},
    routes::{work_id_param, AppRoute},
    runtime_context::{use_storefront, StorefrontContext},
};

pub use account::AccountPage;
pub use home::HomePage;
pub use library::LibraryPage;
pub use not_found::NotFoundPage;
pub use reader::ReaderPage;
pub use work_detail::{resolve_work_detail, WorkDetailOutcome, WorkDetailPage};

#[derive(Debug, Clone, PartialEq)]
/// Progress of one page-level catalog load.
pub enum LoadState<T> {
    /// Request in flight.
    Pending,
    /// Data available.
    Ready(T),
    /// Provider error, already logged.
    Failed(String),
}

/// Runs `load` on the local executor and publishes its outcome into `state`.
pub(crate) fn spawn_load<T: 'static>(
    state: RwSignal<LoadState<T>>,
    diagnostics: Diagnostics,
    scope: &'static str,
    load: impl Future<Output = Result<T, CatalogError>> + 'static,
) {
    state.set(LoadState::Pending);
    spawn_local(async move {
        match load.await {
            Ok(value) => state.set(LoadState::Ready(value)),
            Err(err) => {
                let error = err.to_string();
                diagnostics.error(scope, "load failed", &[("error", error.as_str())]);
                state.set(LoadState::Failed(error));
            }
        }
    });
}

fn loading_view() -> View {
    view! {
        <div class="page-loading" role="status" aria-live="polite" data-ui-kind="page-loading">
            <Text tone=TextTone::Secondary>"Loading..."</Text>
        </div>
    }
    .into_view()
}

fn failed_view(message: String) -> View {
    view! {
        <EmptyState icon=IconName::Dismiss>
            <p>"Something went wrong while loading this page."</p>
            <Text role=TextRole::Caption tone=TextTone::Secondary>{message}</Text>
        </EmptyState>
    }
    .into_view()
}

/// Renders `state` with `ready` once data arrives.
pub(crate) fn render_load<T: Clone + 'static>(
    state: RwSignal<LoadState<T>>,
    ready: impl Fn(T) -> View + 'static,
) -> impl IntoView {
    move || match state.get() {
        LoadState::Pending => loading_view(),
        LoadState::Ready(value) => ready(value),
        LoadState::Failed(message) => failed_view(message),
    }
}

/// Tab and panel DOM ids for a tabbed page section.
pub(crate) fn tab_ids(prefix: &str, token: &str) -> (String, String) {
    (
        format!("{prefix}-tab-{token}"),
        format!("{prefix}-panel-{token}"),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tab_ids_pair_trigger_and_panel() {
        assert_eq!(
            tab_ids("library", "audiobooks"),
            (
                "library-tab-audiobooks".to_string(),
                "library-panel-audiobooks".to_string()
            )
        );
    }
}
