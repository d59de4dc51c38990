use super::*;

#[component]
/// Modal dialog layered over a dimmed backdrop.
///
/// Pressing Escape or clicking the backdrop calls `on_dismiss` when one is supplied; otherwise
/// the dialog can only be closed by its own controls.
pub fn Modal(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] aria_labelledby: Option<String>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-modal-backdrop"
            data-ui-primitive="true"
            data-ui-kind="modal-backdrop"
            on:click=move |_| {
                if let Some(on_dismiss) = on_dismiss.as_ref() {
                    on_dismiss.call(());
                }
            }
        >
            <div
                class=merge_layout_class("ui-modal", layout_class)
                role="dialog"
                aria-modal="true"
                aria-label=aria_label
                aria-labelledby=aria_labelledby
                tabindex="-1"
                data-ui-primitive="true"
                data-ui-kind="modal"
                data-ui-elevation=Elevation::Overlay.token()
                on:click=|ev| ev.stop_propagation()
                on:keydown=move |ev| {
                    if ev.key() == "Escape" {
                        if let Some(on_dismiss) = on_dismiss.as_ref() {
                            ev.prevent_default();
                            on_dismiss.call(());
                        }
                    }
                }
            >
                {children()}
            </div>
        </div>
    }
}

#[component]
/// Anchored popover surface shown next to its trigger while `open` is true.
pub fn Popover(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] id: String,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(into)] open: MaybeSignal<bool>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    children: ChildrenFn,
) -> impl IntoView {
    let class = merge_layout_class("ui-popover", layout_class);
    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                class=class.clone()
                id=id.clone()
                role="dialog"
                aria-label=aria_label.clone()
                data-ui-primitive="true"
                data-ui-kind="popover"
                data-ui-elevation=Elevation::Overlay.token()
                on:keydown=move |ev| {
                    if ev.key() == "Escape" {
                        if let Some(on_dismiss) = on_dismiss.as_ref() {
                            on_dismiss.call(());
                        }
                    }
                }
            >
                {children()}
            </div>
        </Show>
    }
}
