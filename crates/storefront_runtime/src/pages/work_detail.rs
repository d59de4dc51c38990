use catalog_host::{PublicationDetails, Review};

use super::*;

#[derive(Debug, Clone, PartialEq)]
/// What the detail page shows for a requested id.
pub enum WorkDetailOutcome {
    /// The catalog knows the requested work.
    Found(WorkDetail),
    /// No usable id, or an unknown id under [`UnknownWorkPolicy::Fallback`].
    Fallback {
        requested: Option<WorkId>,
        detail: WorkDetail,
    },
    /// Unknown id under [`UnknownWorkPolicy::NotFound`].
    Missing { id: WorkId },
}

/// Loads the detail record for `id`, applying `policy` to ids the catalog does not know.
///
/// A missing id always falls back.
///
/// # Errors
///
/// Propagates provider errors other than [`CatalogError::UnknownWork`].
pub async fn resolve_work_detail(
    catalog: &dyn CatalogProvider,
    id: Option<&WorkId>,
    policy: UnknownWorkPolicy,
) -> Result<WorkDetailOutcome, CatalogError> {
    let Some(id) = id else {
        let detail = catalog.fetch_fallback_work().await?;
        return Ok(WorkDetailOutcome::Fallback {
            requested: None,
            detail,
        });
    };

    match catalog.fetch_work(id).await {
        Ok(detail) => Ok(WorkDetailOutcome::Found(detail)),
        Err(CatalogError::UnknownWork { .. }) => match policy {
            UnknownWorkPolicy::Fallback => Ok(WorkDetailOutcome::Fallback {
                requested: Some(id.clone()),
                detail: catalog.fetch_fallback_work().await?,
            }),
            UnknownWorkPolicy::NotFound => Ok(WorkDetailOutcome::Missing { id: id.clone() }),
        },
        Err(err) => Err(err),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailTab {
    Author,
    Reviews,
}

impl DetailTab {
    const ALL: [Self; 2] = [Self::Author, Self::Reviews];

    const fn token(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Reviews => "reviews",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Author => "About the Author",
            Self::Reviews => "Reviews",
        }
    }
}

fn details_list(details: StoredValue<PublicationDetails>) -> View {
    details.with_value(|details| {
        let rows = [
            ("Publisher", details.publisher.clone()),
            ("Publication Date", details.publication_date.clone()),
            ("Pages", details.pages.to_string()),
            ("Genre", details.genre.clone()),
            ("ISBN", details.isbn.clone()),
        ];
        view! {
            <dl class="work-details-list">
                {rows
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="work-details-row">
                            <dt>{format!("{label}:")}</dt>
                            <dd>{value}</dd>
                        </div>
                    })
                    .collect_view()}
            </dl>
        }
        .into_view()
    })
}

fn review_view(review: Review) -> impl IntoView {
    view! {
        <div class="review" data-review-id=review.id.to_string()>
            <Cluster gap=LayoutGap::Md>
                <Text role=TextRole::Label>{review.user}</Text>
                <StarRow rating=f32::from(review.rating) />
            </Cluster>
            <Text tone=TextTone::Secondary>{format!("\"{}\"", review.comment)}</Text>
        </div>
    }
}

fn tab_body(
    tab: DetailTab,
    author_bio: StoredValue<String>,
    reviews: StoredValue<Vec<Review>>,
) -> View {
    match tab {
        DetailTab::Author => view! {
            <Card>
                <Text>{author_bio.get_value()}</Text>
            </Card>
        }
        .into_view(),
        DetailTab::Reviews => view! {
            <Card>
                <Stack gap=LayoutGap::Lg>
                    <Heading level=3>"Reader Reviews"</Heading>
                    {reviews.get_value().into_iter().map(review_view).collect_view()}
                </Stack>
            </Card>
        }
        .into_view(),
    }
}

fn detail_view(detail: WorkDetail) -> View {
    let runtime = use_storefront();
    let WorkDetail {
        work,
        rating,
        reviews_count,
        price,
        synopsis,
        details,
        author_bio,
        reviews,
    } = detail;
    let details_open = create_rw_signal(false);
    let active_tab = create_rw_signal(DetailTab::Author);
    let details = store_value(details);
    let author_bio = store_value(author_bio);
    let reviews = store_value(reviews);

    let title = work.title.clone();
    let byline = format!("by {}", work.author);
    let sample_work_id = work.id.clone();

    let primary = if work.owned {
        view! {
            <LinkButton
                href=AppRoute::reader(&work.id).href()
                variant=ButtonVariant::Primary
                size=ButtonSize::Lg
                leading_icon=IconName::BookOpen
            >
                "Read Online"
            </LinkButton>
        }
        .into_view()
    } else {
        let work_id = work.id.clone();
        let label = format!("Purchase for {price}");
        view! {
            <Button
                variant=ButtonVariant::Primary
                size=ButtonSize::Lg
                leading_icon=IconName::Cart
                on_click=Callback::new(move |_| {
                    runtime.report(StorefrontIntent::PurchaseRequested {
                        work_id: work_id.clone(),
                    })
                })
            >
                {label}
            </Button>
        }
        .into_view()
    };

    let tabs = DetailTab::ALL
        .into_iter()
        .map(|tab| {
            let (tab_id, panel_id) = tab_ids("work-detail", tab.token());
            view! {
                <Tab
                    id=tab_id
                    controls=panel_id
                    selected=Signal::derive(move || active_tab.get() == tab)
                    on_click=Callback::new(move |_| active_tab.set(tab))
                >
                    {tab.label()}
                </Tab>
            }
        })
        .collect_view();
    let panels = DetailTab::ALL
        .into_iter()
        .map(|tab| {
            let (tab_id, panel_id) = tab_ids("work-detail", tab.token());
            view! {
                <TabPanel
                    id=panel_id
                    labelled_by=tab_id
                    selected=Signal::derive(move || active_tab.get() == tab)
                >
                    {tab_body(tab, author_bio, reviews)}
                </TabPanel>
            }
        })
        .collect_view();

    let crumbs = vec![
        BreadcrumbItem::link("Home", AppRoute::Home.href()),
        BreadcrumbItem::link("Library", AppRoute::Library.href()),
        BreadcrumbItem::current(title.clone()),
    ];
    let work_id_attr = work.id.to_string();

    view! {
        <div class="work-detail" data-work-id=work_id_attr>
            <Breadcrumb items=crumbs />
            <div class="work-detail-grid">
                <aside class="work-detail-cover">
                    <CatalogItem work />
                </aside>
                <Stack gap=LayoutGap::Md layout_class="work-detail-summary">
                    <Heading level=1 role=TextRole::Display>{title}</Heading>
                    <Text tone=TextTone::Secondary>{byline}</Text>
                    <StarRow rating reviews_count />
                    <Text layout_class="work-detail-synopsis">{synopsis}</Text>
                    <Cluster gap=LayoutGap::Sm>
                        {primary}
                        <Button
                            variant=ButtonVariant::Standard
                            size=ButtonSize::Lg
                            leading_icon=IconName::Headphones
                            on_click=Callback::new(move |_| {
                                runtime.report(StorefrontIntent::SampleRequested {
                                    work_id: sample_work_id.clone(),
                                })
                            })
                        >
                            "Listen to a Sample"
                        </Button>
                    </Cluster>
                    <DisclosurePanel
                        title="Book Details"
                        expanded=details_open
                        on_toggle=Callback::new(move |_| details_open.update(|open| *open = !*open))
                    >
                        {details_list(details)}
                    </DisclosurePanel>
                </Stack>
            </div>
            <section class="work-detail-tabs">
                <TabList aria_label="About this book">{tabs}</TabList>
                {panels}
            </section>
        </div>
    }
    .into_view()
}

#[component]
/// Work detail page for `/book-detail?id={id}`.
///
/// Reloads whenever the `id` query parameter changes. Unknown ids follow the configured
/// [`UnknownWorkPolicy`].
pub fn WorkDetailPage() -> impl IntoView {
    let runtime = use_storefront();
    let diagnostics = runtime.diagnostics;
    diagnostics.debug("page", "mounted", &[("page", "work-detail")]);

    let query = use_query_map();
    let requested = create_memo(move |_| query.with(work_id_param));
    let state = create_rw_signal(LoadState::Pending);
    let policy = runtime.config.catalog.unknown_work;

    create_effect(move |_| {
        let id = requested.get();
        let catalog = runtime.catalog();
        spawn_load(state, diagnostics, "work-detail", async move {
            resolve_work_detail(catalog.as_ref(), id.as_ref(), policy).await
        });
    });

    move || match state.get() {
        LoadState::Ready(WorkDetailOutcome::Missing { id }) => {
            diagnostics.info("work-detail", "unknown work", &[("id", id.as_str())]);
            view! { <NotFoundPage path=AppRoute::work_detail(&id).href() /> }.into_view()
        }
        LoadState::Ready(WorkDetailOutcome::Found(detail)) => view! {
            <PageLayout page="work-detail">{detail_view(detail)}</PageLayout>
        }
        .into_view(),
        LoadState::Ready(WorkDetailOutcome::Fallback { requested, detail }) => {
            let requested = requested.as_ref().map_or("", WorkId::as_str).to_string();
            diagnostics.info(
                "work-detail",
                "showing fallback work",
                &[("requested", requested.as_str())],
            );
            view! { <PageLayout page="work-detail">{detail_view(detail)}</PageLayout> }.into_view()
        }
        LoadState::Pending => view! { <PageLayout page="work-detail">{loading_view()}</PageLayout> }
            .into_view(),
        LoadState::Failed(message) => view! {
            <PageLayout page="work-detail">{failed_view(message)}</PageLayout>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use catalog_host::StaticCatalog;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    fn catalog() -> StaticCatalog {
        StaticCatalog::builtin().expect("builtin catalog")
    }

    #[test]
    fn known_id_is_found() {
        let catalog = catalog();
        let id = WorkId::from("2");
        let outcome =
            block_on(resolve_work_detail(&catalog, Some(&id), UnknownWorkPolicy::NotFound))
                .expect("outcome");

        match outcome {
            WorkDetailOutcome::Found(detail) => assert_eq!(detail.work.id, id),
            other => panic!("expected found, got {other:?}"),
        }
    }

    #[test]
    fn missing_id_falls_back_under_either_policy() {
        let catalog = catalog();
        for policy in [UnknownWorkPolicy::Fallback, UnknownWorkPolicy::NotFound] {
            let outcome = block_on(resolve_work_detail(&catalog, None, policy)).expect("outcome");
            match outcome {
                WorkDetailOutcome::Fallback { requested, detail } => {
                    assert_eq!(requested, None);
                    assert_eq!(&detail.work.id, catalog.fallback_work_id());
                }
                other => panic!("expected fallback, got {other:?}"),
            }
        }
    }

    #[test]
    fn unknown_id_follows_policy() {
        let catalog = catalog();
        let id = WorkId::from("nope");

        let fallback =
            block_on(resolve_work_detail(&catalog, Some(&id), UnknownWorkPolicy::Fallback))
                .expect("outcome");
        assert!(matches!(
            fallback,
            WorkDetailOutcome::Fallback { requested: Some(ref requested), .. } if requested == &id
        ));

        let missing =
            block_on(resolve_work_detail(&catalog, Some(&id), UnknownWorkPolicy::NotFound))
                .expect("outcome");
        assert_eq!(missing, WorkDetailOutcome::Missing { id });
    }
}
