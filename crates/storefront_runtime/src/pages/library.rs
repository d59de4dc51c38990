use super::*;

fn library_entry_view(entry: LibraryEntry) -> impl IntoView {
    let caption = progress_label(&entry);
    let progress = entry.progress_percent();
    let aria_label = format!("Reading progress for {}", entry.title);
    let work = entry.as_owned_work();

    view! {
        <div class="library-entry" data-work-id=entry.id.to_string()>
            <CatalogItem work />
            <Stack gap=LayoutGap::Sm ui_slot="progress">
                <Text role=TextRole::Caption tone=TextTone::Secondary>{caption}</Text>
                <ProgressBar max=100 value=progress aria_label />
            </Stack>
        </div>
    }
}

fn library_panel(entries: StoredValue<Vec<LibraryEntry>>, tab: LibraryTab) -> View {
    let visible = entries.with_value(|entries| filter_library(entries, tab));
    if visible.is_empty() {
        return view! {
            <EmptyState icon=IconName::Headphones layout_class="library-empty">
                <p>{tab.empty_message()}</p>
            </EmptyState>
        }
        .into_view();
    }

    view! {
        <Grid gap=LayoutGap::Lg columns=6 layout_class="library-grid">
            {visible.into_iter().map(library_entry_view).collect_view()}
        </Grid>
    }
    .into_view()
}

fn library_tabs(entries: Vec<LibraryEntry>, active: RwSignal<LibraryTab>) -> View {
    let entries = store_value(entries);
    let tabs = LibraryTab::ALL
        .into_iter()
        .map(|tab| {
            let (tab_id, panel_id) = tab_ids("library", tab.token());
            view! {
                <Tab
                    id=tab_id
                    controls=panel_id
                    selected=Signal::derive(move || active.get() == tab)
                    on_click=Callback::new(move |_| active.set(tab))
                >
                    {tab.label()}
                </Tab>
            }
        })
        .collect_view();
    let panels = LibraryTab::ALL
        .into_iter()
        .map(|tab| {
            let (tab_id, panel_id) = tab_ids("library", tab.token());
            view! {
                <TabPanel
                    id=panel_id
                    labelled_by=tab_id
                    selected=Signal::derive(move || active.get() == tab)
                >
                    {library_panel(entries, tab)}
                </TabPanel>
            }
        })
        .collect_view();

    view! {
        <TabList aria_label="Library filters">{tabs}</TabList>
        {panels}
    }
    .into_view()
}

#[component]
/// Personal library with "All Titles" and "Audiobooks" tabs.
pub fn LibraryPage() -> impl IntoView {
    let runtime = use_storefront();
    runtime.diagnostics.debug("page", "mounted", &[("page", "library")]);

    let entries = create_rw_signal(LoadState::Pending);
    let active = create_rw_signal(LibraryTab::default());
    let catalog = runtime.catalog();
    spawn_load(entries, runtime.diagnostics, "library", async move {
        catalog.fetch_library().await
    });

    view! {
        <PageLayout page="library">
            <section class="library" aria-labelledby="library-title">
                <Heading level=1 role=TextRole::Display id="library-title">"My Library"</Heading>
                <Text tone=TextTone::Secondary>
                    "All your purchased books and audiobooks in one place."
                </Text>
                {render_load(entries, move |entries| library_tabs(entries, active))}
            </section>
        </PageLayout>
    }
}
