use super::*;

/// DOM-safe slug for shelf heading ids.
pub(crate) fn shelf_dom_id(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    format!("shelf-{}", slug.trim_matches('-'))
}

fn builtin_shelf_works(diagnostics: Diagnostics) -> Vec<Work> {
    match StaticCatalog::builtin() {
        Ok(catalog) => catalog.default_shelf_works(),
        Err(err) => {
            let error = err.to_string();
            diagnostics.error(
                "shelf",
                "default works unavailable",
                &[("error", error.as_str())],
            );
            Vec::new()
        }
    }
}

#[component]
/// Labeled, horizontally browsable run of catalog items.
///
/// Without `works` the built-in default shelf is shown. Previous/next wrap around only when the
/// shelf holds more works than the configured loop threshold; an empty shelf renders with inert
/// controls.
pub fn ShelfCarousel(
    #[prop(into)] title: String,
    #[prop(optional)] works: Option<Vec<Work>>,
) -> impl IntoView {
    let runtime = use_storefront();
    let works = works.unwrap_or_else(|| builtin_shelf_works(runtime.diagnostics));
    let heading_id = shelf_dom_id(&title);
    let cursor = create_rw_signal(ShelfCursor::with_threshold(
        works.len(),
        runtime.config.shelf.loop_threshold,
    ));
    let count = works.len().to_string();
    runtime
        .diagnostics
        .debug("shelf", "mounted", &[("title", title.as_str()), ("works", count.as_str())]);

    let items = works
        .into_iter()
        .enumerate()
        .map(|(index, work)| {
            view! {
                <li
                    class="shelf-slot"
                    data-ui-selected=move || bool_token(cursor.with(|cursor| cursor.index() == index))
                >
                    <CatalogItem work />
                </li>
            }
        })
        .collect_view();

    view! {
        <section
            class="shelf"
            data-ui-kind="shelf"
            aria-labelledby=heading_id.clone()
            data-ui-looping=move || bool_token(cursor.with(ShelfCursor::is_looping))
        >
            <Heading level=2 role=TextRole::Display id=heading_id>{title}</Heading>
            <div class="shelf-viewport">
                <IconButton
                    icon=IconName::ChevronLeft
                    aria_label="Previous books"
                    ui_slot="previous"
                    disabled=Signal::derive(move || !cursor.with(ShelfCursor::can_previous))
                    on_click=Callback::new(move |_| {
                        cursor.update(|cursor| {
                            cursor.previous();
                        })
                    })
                />
                <ul
                    class="shelf-track"
                    style=move || format!("--shelf-index: {}", cursor.with(ShelfCursor::index))
                >
                    {items}
                </ul>
                <IconButton
                    icon=IconName::ChevronRight
                    aria_label="Next books"
                    ui_slot="next"
                    disabled=Signal::derive(move || !cursor.with(ShelfCursor::can_next))
                    on_click=Callback::new(move |_| {
                        cursor.update(|cursor| {
                            cursor.next();
                        })
                    })
                />
            </div>
            <div class="shelf-plank" aria-hidden="true"></div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn shelf_ids_are_slugged_titles() {
        assert_eq!(shelf_dom_id("Featured New Arrivals"), "shelf-featured-new-arrivals");
        assert_eq!(shelf_dom_id("  Timeless   Classics! "), "shelf-timeless-classics");
    }

    #[test]
    fn builtin_default_shelf_is_not_empty() {
        assert!(!builtin_shelf_works(Diagnostics::default()).is_empty());
    }
}
