use super::*;

#[component]
/// Shared card surface for catalog tiles, summaries, and document-like regions.
pub fn Card(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
            data-ui-elevation=Elevation::Raised.token()
        >
            {children()}
        </article>
    }
}

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Shared heading primitive rendered as a real `h1`-`h4` element.
pub fn Heading(
    #[prop(default = TextRole::Title)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(default = 2)] level: u8,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-heading", layout_class);
    let body = children();
    match level {
        1 => view! {
            <h1 class=class id=id data-ui-primitive="true" data-ui-kind="heading" data-ui-slot=ui_slot data-ui-variant=role.token() data-ui-tone=tone.token()>{body}</h1>
        }
        .into_view(),
        3 => view! {
            <h3 class=class id=id data-ui-primitive="true" data-ui-kind="heading" data-ui-slot=ui_slot data-ui-variant=role.token() data-ui-tone=tone.token()>{body}</h3>
        }
        .into_view(),
        4 => view! {
            <h4 class=class id=id data-ui-primitive="true" data-ui-kind="heading" data-ui-slot=ui_slot data-ui-variant=role.token() data-ui-tone=tone.token()>{body}</h4>
        }
        .into_view(),
        _ => view! {
            <h2 class=class id=id data-ui-primitive="true" data-ui-kind="heading" data-ui-slot=ui_slot data-ui-variant=role.token() data-ui-tone=tone.token()>{body}</h2>
        }
        .into_view(),
    }
}

#[component]
/// Empty state content block.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] icon: Option<IconName>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            role="status"
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Lg /> })}
            {children()}
        </div>
    }
}
