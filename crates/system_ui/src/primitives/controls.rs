use super::*;

fn invalid_token(error: &MaybeSignal<Option<String>>) -> &'static str {
    bool_token(error.with(Option::is_some))
}

fn clamp_percent(value: &str, min: Option<&str>, max: Option<&str>) -> f32 {
    let value = value.parse::<f32>().unwrap_or(0.0);
    let min = min.and_then(|raw| raw.parse::<f32>().ok()).unwrap_or(0.0);
    let max = max.and_then(|raw| raw.parse::<f32>().ok()).unwrap_or(100.0);
    let span = (max - min).max(1.0);
    (((value - min) / span) * 100.0).clamp(0.0, 100.0)
}

#[component]
/// Shared button primitive with standardized states, icon slots, and semantic shape tokens.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(default = ButtonShape::Standard)] shape: ButtonShape,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_expanded: MaybeSignal<bool>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] tabindex: Option<i32>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-button", layout_class);
    view! {
        <button
            type=button_type.unwrap_or("button")
            class=class
            id=id
            role=role
            aria-label=move || aria_label.get()
            aria-expanded=move || aria_expanded.get()
            title=move || title.get()
            tabindex=tabindex
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-shape=shape.token()
            data-ui-state=move || {
                if pressed.get() {
                    "pressed"
                } else if selected.get() {
                    "selected"
                } else {
                    "idle"
                }
            }
            data-ui-selected=move || bool_token(selected.get())
            data-ui-pressed=move || bool_token(pressed.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
        </button>
    }
}

#[component]
/// Shared circular icon button used for transport controls and compact surface actions.
pub fn IconButton(
    icon: IconName,
    #[prop(default = ButtonVariant::Icon)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_expanded: MaybeSignal<bool>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-icon-button", layout_class)
            aria-label=move || aria_label.get()
            aria-expanded=move || aria_expanded.get()
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="icon-button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-shape=ButtonShape::Circle.token()
            data-ui-pressed=move || bool_token(pressed.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Icon icon size=IconSize::Md />
        </button>
    }
}

#[component]
/// Navigation link rendered with the [`Button`] DOM contract.
///
/// Use for actions that change the route so the router can intercept the click.
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional)] leading_icon: Option<IconName>,
    /// Renders an icon-only circular link; `children` are ignored.
    #[prop(optional)]
    icon_only: Option<IconName>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let (base, kind, shape) = match icon_only {
        Some(_) => ("ui-icon-button", "icon-button", ButtonShape::Circle),
        None => ("ui-button", "button", ButtonShape::Standard),
    };
    let body = match icon_only {
        Some(icon) => view! { <Icon icon size=IconSize::Md /> }.into_view(),
        None => view! {
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            <span>{children.map(|children| children())}</span>
        }
        .into_view(),
    };

    view! {
        <a
            class=merge_layout_class(base, layout_class)
            href=href
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind=kind
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-shape=shape.token()
        >
            {body}
        </a>
    }
}

#[component]
/// Shared pill-style segmented control container.
pub fn SegmentedControl(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-segmented-control", layout_class)
            role="group"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="segmented-control"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared segmented control option button.
pub fn SegmentedControlOption(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-segmented-control-option", layout_class)
            aria-label=move || aria_label.get()
            aria-pressed=move || bool_token(selected.get())
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="segmented-control-option"
            data-ui-slot=ui_slot
            data-ui-variant=ButtonVariant::Segmented.token()
            data-ui-selected=move || bool_token(selected.get())
            data-ui-disabled=move || bool_token(disabled.get())
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
/// Labeled field wrapper with an optional inline validation message.
pub fn FieldGroup(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <label
            class=merge_layout_class("ui-field-group", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field-group"
            data-ui-invalid={
                let error = error.clone();
                move || invalid_token(&error)
            }
        >
            <span data-ui-slot="copy">
                {title.map(|title| view! { <span data-ui-slot="title">{title}</span> })}
                {description.map(|description| view! { <span data-ui-slot="description">{description}</span> })}
            </span>
            <span data-ui-slot="control">{children()}</span>
            {move || {
                error
                    .get()
                    .map(|message| view! { <span data-ui-slot="error" role="alert">{message}</span> })
            }}
        </label>
    }
}

#[component]
/// Shared text input primitive.
pub fn TextField(
    #[prop(optional, into)] variant: MaybeSignal<FieldVariant>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    view! {
        <input
            class=merge_layout_class("ui-field", layout_class)
            id=id
            name=name
            placeholder=placeholder
            aria-label=aria_label
            aria-invalid=move || bool_token(variant.get() == FieldVariant::Invalid)
            autocomplete=autocomplete
            type=input_type.unwrap_or("text")
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="text-field"
            data-ui-slot=ui_slot
            data-ui-variant=move || variant.get().token()
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
        />
    }
}

#[component]
/// Shared select-field primitive.
pub fn SelectField(
    #[prop(default = FieldVariant::Standard)] variant: FieldVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
    children: Children,
) -> impl IntoView {
    view! {
        <select
            class=merge_layout_class("ui-field", layout_class)
            aria-label=aria_label
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="select"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            on:change=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(ev);
                }
            }
        >
            {children()}
        </select>
    }
}

#[component]
/// Shared range-field primitive with a percent CSS hook for active-track styling.
pub fn RangeField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] min: Option<&'static str>,
    #[prop(optional)] max: Option<&'static str>,
    #[prop(optional)] step: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    let value_signal = Signal::derive(move || value.get());
    let percent = Signal::derive(move || clamp_percent(&value_signal.get(), min, max));

    view! {
        <input
            class=merge_layout_class("ui-field", layout_class)
            type="range"
            min=min
            max=max
            step=step
            aria-label=aria_label
            prop:value=move || value_signal.get()
            data-ui-primitive="true"
            data-ui-kind="range"
            data-ui-slot=ui_slot
            data-ui-variant="standard"
            data-ui-value=move || value_signal.get()
            data-ui-min=min.unwrap_or("0")
            data-ui-max=max.unwrap_or("100")
            data-ui-percent=move || format!("{:.2}", percent.get())
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
        />
    }
}

#[component]
/// Shared linear progress indicator.
pub fn ProgressBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    max: u16,
    value: u16,
) -> impl IntoView {
    let capped_value = value.min(max);

    view! {
        <progress
            class=merge_layout_class("ui-progress", layout_class)
            max=max
            value=capped_value
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="progress"
            data-ui-slot=ui_slot
            data-ui-variant="linear"
            data-ui-value=capped_value
            data-ui-max=max
        ></progress>
    }
}

#[cfg(test)]
mod tests {
    use leptos::MaybeSignal;

    use super::{clamp_percent, invalid_token};

    #[test]
    fn field_group_flags_only_present_errors() {
        let error = MaybeSignal::Static(Some("Required.".to_string()));
        assert_eq!(invalid_token(&error), "true");
        assert_eq!(invalid_token(&error), "true");
        assert_eq!(invalid_token(&MaybeSignal::Static(None)), "false");
    }

    #[test]
    fn range_percent_is_relative_to_bounds() {
        assert_eq!(clamp_percent("22", Some("12"), Some("32")), 50.0);
        assert_eq!(clamp_percent("500", None, None), 100.0);
        assert_eq!(clamp_percent("not-a-number", None, None), 0.0);
    }
}
