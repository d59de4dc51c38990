use super::*;

fn shelves_view(shelves: Vec<ShelfSection>) -> View {
    shelves
        .into_iter()
        .map(|shelf| view! { <ShelfCarousel title=shelf.title works=shelf.works /> })
        .collect_view()
}

#[component]
/// Catalog landing page: hero copy followed by the home shelves.
pub fn HomePage() -> impl IntoView {
    let runtime = use_storefront();
    runtime.diagnostics.debug("page", "mounted", &[("page", "home")]);

    let shelves = create_rw_signal(LoadState::Pending);
    let catalog = runtime.catalog();
    spawn_load(shelves, runtime.diagnostics, "home", async move {
        catalog.fetch_catalog().await
    });

    view! {
        <PageLayout page="home">
            <section class="home-hero" aria-labelledby="home-hero-title">
                <Heading level=1 role=TextRole::Display id="home-hero-title">
                    "Welcome to Your Digital Athenaeum"
                </Heading>
                <Text tone=TextTone::Secondary layout_class="home-hero-subtitle">
                    "Discover new worlds, listen to stories brought to life, and build your personal library in a space designed for readers."
                </Text>
            </section>
            <div class="home-shelves">{render_load(shelves, shelves_view)}</div>
        </PageLayout>
    }
}
