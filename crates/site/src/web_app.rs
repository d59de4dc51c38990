use catalog_host_web::build_storefront_services;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use storefront_runtime::{
    AccountPage, HomePage, LibraryPage, NotFoundPage, ReaderPage, StorefrontProvider,
    WorkDetailPage,
};

/// Paths registered with the router, excluding the catch-all.
pub const ROUTE_PATHS: [&str; 5] = [
    "/",
    "/account",
    "/book-detail",
    "/digital-reader",
    "/library",
];

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Bibliotheca" />
        <Meta
            name="description"
            content="Browse the catalog, manage your library and read with character voices."
        />
        <StorefrontEntry />
    }
}

#[component]
/// Assembles the browser service bundle and mounts the routed storefront inside it.
pub fn StorefrontEntry() -> impl IntoView {
    match build_storefront_services() {
        Ok(services) => view! {
            <StorefrontProvider services>
                <Router>
                    <Routes>
                        <Route path="" view=HomePage />
                        <Route path="/account" view=AccountPage />
                        <Route path="/book-detail" view=WorkDetailPage />
                        <Route path="/digital-reader" view=ReaderPage />
                        <Route path="/library" view=LibraryPage />
                        <Route path="/*any" view=|| view! { <NotFoundPage /> } />
                    </Routes>
                </Router>
            </StorefrontProvider>
        }
        .into_view(),
        Err(err) => {
            logging::error!("[bibliotheca:site] storefront services unavailable error={err}");
            view! {
                <main class="site-root site-error" role="alert">
                    <h1>"Bibliotheca is unavailable"</h1>
                    <p>"The catalog could not be loaded. Please try again later."</p>
                </main>
            }
            .into_view()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use storefront_runtime::AppRoute;

    use super::*;

    #[test]
    fn every_registered_path_resolves_to_a_page() {
        let resolved = ROUTE_PATHS
            .iter()
            .map(|path| AppRoute::resolve(path, ""))
            .collect::<Vec<_>>();

        assert_eq!(
            resolved,
            vec![
                AppRoute::Home,
                AppRoute::Account,
                AppRoute::WorkDetail { id: None },
                AppRoute::Reader { id: None },
                AppRoute::Library,
            ]
        );
    }

    #[test]
    fn registered_paths_round_trip_through_href() {
        for path in ROUTE_PATHS {
            assert_eq!(AppRoute::resolve(path, "").href(), path);
        }
    }
}
