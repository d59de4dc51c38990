use super::*;

#[component]
/// Immersive reader for `/digital-reader?id={id}`.
///
/// The id is only logged; every session opens the same book.
pub fn ReaderPage() -> impl IntoView {
    let runtime = use_storefront();
    let diagnostics = runtime.diagnostics;
    let requested = use_query_map().with_untracked(work_id_param);
    let requested_label = requested
        .as_ref()
        .map_or("none", WorkId::as_str)
        .to_string();
    diagnostics.debug(
        "page",
        "mounted",
        &[("page", "reader"), ("id", requested_label.as_str())],
    );

    let book = create_rw_signal(LoadState::Pending);
    let catalog = runtime.catalog();
    spawn_load(book, diagnostics, "reader", async move {
        catalog.fetch_reader_book(requested.as_ref()).await
    });

    view! {
        <div class="reader-page" data-page="reader">
            {render_load(book, |book| view! { <ReadingSurface book /> }.into_view())}
        </div>
    }
}
