use super::*;

#[component]
/// Shared disclosure panel for secondary details.
pub fn DisclosurePanel(
    #[prop(optional)] layout_class: Option<&'static str>,
    title: &'static str,
    #[prop(optional)] description: Option<&'static str>,
    #[prop(optional, into)] expanded: MaybeSignal<bool>,
    #[prop(optional)] on_toggle: Option<Callback<MouseEvent>>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-disclosure", layout_class)
            data-ui-primitive="true"
            data-ui-kind="disclosure"
            data-ui-state=move || if expanded.get() { "open" } else { "closed" }
            data-ui-expanded=move || bool_token(expanded.get())
        >
            <Button
                layout_class="ui-disclosure-toggle"
                ui_slot="toggle"
                variant=ButtonVariant::Quiet
                selected=expanded
                aria_expanded=expanded
                trailing_icon=IconName::ChevronDown
                on_click=Callback::new(move |ev| {
                    if let Some(on_toggle) = on_toggle.as_ref() {
                        on_toggle.call(ev);
                    }
                })
            >
                <span data-ui-slot="copy">
                    <span data-ui-slot="title">{title}</span>
                    {description.map(|description| view! { <span data-ui-slot="description">{description}</span> })}
                </span>
            </Button>
            <Show when=move || expanded.get() fallback=|| ()>
                <div data-ui-slot="body">{children()}</div>
            </Show>
        </section>
    }
}

#[component]
/// Shared tab list primitive.
pub fn TabList(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-tab-list", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tab-list"
            role="tablist"
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared tab trigger primitive.
pub fn Tab(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] id: String,
    #[prop(into)] controls: String,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-tab", layout_class)
            id=id
            role="tab"
            aria-controls=controls
            aria-selected=move || bool_token(selected.get())
            tabindex=move || if selected.get() { 0 } else { -1 }
            data-ui-primitive="true"
            data-ui-kind="tab"
            data-ui-variant=ButtonVariant::Quiet.token()
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Panel associated with a [`Tab`]; only rendered while selected.
pub fn TabPanel(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] id: String,
    #[prop(into)] labelled_by: String,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    let class = merge_layout_class("ui-tab-panel", layout_class);
    view! {
        <Show when=move || selected.get() fallback=|| ()>
            <div
                class=class.clone()
                id=id.clone()
                role="tabpanel"
                aria-labelledby=labelled_by.clone()
                data-ui-primitive="true"
                data-ui-kind="tab-panel"
            >
                {children()}
            </div>
        </Show>
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One crumb in a [`Breadcrumb`] trail. The last item is rendered as the current page.
pub struct BreadcrumbItem {
    /// Visible label.
    pub label: String,
    /// Link target; `None` renders plain text.
    pub href: Option<String>,
}

impl BreadcrumbItem {
    /// Linked crumb.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    /// Unlinked crumb, typically the current page.
    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

#[component]
/// Breadcrumb navigation trail.
pub fn Breadcrumb(
    #[prop(optional)] layout_class: Option<&'static str>,
    items: Vec<BreadcrumbItem>,
) -> impl IntoView {
    let last = items.len().saturating_sub(1);
    let crumbs = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let current = index == last;
            let label = item.label;
            let body = match item.href {
                Some(href) if !current => view! { <a href=href>{label}</a> }.into_view(),
                _ => view! { <span aria-current="page">{label}</span> }.into_view(),
            };
            view! {
                <li data-ui-slot="crumb" data-ui-selected=bool_token(current)>
                    {body}
                    {(!current).then(|| view! {
                        <span data-ui-slot="separator" aria-hidden="true">
                            <Icon icon=IconName::ChevronRight size=IconSize::Xs />
                        </span>
                    })}
                </li>
            }
        })
        .collect_view();

    view! {
        <nav
            class=merge_layout_class("ui-breadcrumb", layout_class)
            aria-label="Breadcrumb"
            data-ui-primitive="true"
            data-ui-kind="breadcrumb"
        >
            <ol>{crumbs}</ol>
        </nav>
    }
}
