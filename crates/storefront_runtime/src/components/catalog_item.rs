use super::*;

/// Action offered first on a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PrimaryAction {
    Purchase,
    ReadOnline,
}

impl PrimaryAction {
    pub(crate) fn for_work(work: &Work) -> Self {
        if work.owned {
            Self::ReadOnline
        } else {
            Self::Purchase
        }
    }
}

#[component]
/// Cover art with an ownership-dependent action panel revealed on hover or focus.
///
/// Unowned works offer "Purchase", which calls `on_purchase` or, when none is given, reports
/// [`StorefrontIntent::PurchaseRequested`] to the host sink. Owned works link to the reader.
/// "View Details" is always present.
pub fn CatalogItem(
    work: Work,
    #[prop(optional)] on_purchase: Option<Callback<WorkId>>,
) -> impl IntoView {
    let runtime = use_storefront();
    let revealed = create_rw_signal(false);
    let work_id = work.id.clone();
    let detail_href = AppRoute::work_detail(&work.id).href();
    let title = work.title.clone();

    let primary = match PrimaryAction::for_work(&work) {
        PrimaryAction::ReadOnline => view! {
            <LinkButton
                href=AppRoute::reader(&work.id).href()
                variant=ButtonVariant::Primary
                ui_slot="primary-action"
                leading_icon=IconName::BookOpen
            >
                "Read Online"
            </LinkButton>
        }
        .into_view(),
        PrimaryAction::Purchase => {
            let work_id = work_id.clone();
            view! {
                <Button
                    variant=ButtonVariant::Primary
                    ui_slot="primary-action"
                    leading_icon=IconName::Cart
                    on_click=Callback::new(move |ev: ev::MouseEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        match on_purchase.as_ref() {
                            Some(on_purchase) => on_purchase.call(work_id.clone()),
                            None => runtime.report(StorefrontIntent::PurchaseRequested {
                                work_id: work_id.clone(),
                            }),
                        }
                    })
                >
                    "Purchase"
                </Button>
            }
            .into_view()
        }
    };

    view! {
        <article
            class="catalog-item"
            data-ui-kind="catalog-item"
            data-work-id=work.id.to_string()
            data-ui-owned=bool_token(work.owned)
            data-ui-state=move || if revealed.get() { "revealed" } else { "idle" }
            on:mouseenter=move |_| revealed.set(true)
            on:mouseleave=move |_| revealed.set(false)
            on:focusin=move |_| revealed.set(true)
            on:focusout=move |_| revealed.set(false)
        >
            <a
                class="catalog-item-cover"
                href=detail_href.clone()
                aria-label=format!("View details for {title}")
            >
                <img
                    src=work.cover_or_placeholder().to_string()
                    alt=format!("Cover of {title}")
                    loading="lazy"
                />
            </a>
            <div class="catalog-item-panel" data-ui-slot="actions">
                <div data-ui-slot="buttons">
                    {primary}
                    <LinkButton href=detail_href leading_icon=IconName::Eye>
                        "View Details"
                    </LinkButton>
                </div>
                <div data-ui-slot="caption">
                    <h3>{work.title.clone()}</h3>
                    <p>{work.author.clone()}</p>
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn work(owned: bool) -> Work {
        Work {
            id: WorkId::from("3"),
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            cover_url: String::new(),
            owned,
        }
    }

    #[test]
    fn ownership_selects_primary_action() {
        assert_eq!(PrimaryAction::for_work(&work(false)), PrimaryAction::Purchase);
        assert_eq!(PrimaryAction::for_work(&work(true)), PrimaryAction::ReadOnline);
    }
}
