use super::*;

fn form_state_token(status: ProfileFormStatus) -> &'static str {
    match status {
        ProfileFormStatus::Idle => "idle",
        ProfileFormStatus::Dirty => "dirty",
        ProfileFormStatus::ErrorsShown => "invalid",
        ProfileFormStatus::Saved => "saved",
    }
}

fn card_header(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Sm ui_slot="header">
            <Heading level=2>{title}</Heading>
            <Text tone=TextTone::Secondary>{description}</Text>
        </Stack>
    }
}

fn field_variant(invalid: bool) -> FieldVariant {
    if invalid {
        FieldVariant::Invalid
    } else {
        FieldVariant::Standard
    }
}

/// Validates the form and reports a save intent only when it passes.
fn submit_profile(runtime: StorefrontContext, form: RwSignal<ProfileForm>) {
    match form.try_update(ProfileForm::submit) {
        Some(Ok(details)) => {
            runtime.diagnostics.info("account", "profile saved", &[]);
            runtime.report(StorefrontIntent::ProfileSaveRequested(details));
        }
        Some(Err(errors)) => {
            let fields = [errors.name.map(|_| "name"), errors.email.map(|_| "email")]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(",");
            runtime
                .diagnostics
                .debug("account", "profile rejected", &[("fields", fields.as_str())]);
        }
        None => {}
    }
}

fn profile_panel(form: RwSignal<ProfileForm>) -> View {
    let runtime = use_storefront();
    let name_error =
        Signal::derive(move || form.with(|form| form.errors().name.map(str::to_string)));
    let email_error =
        Signal::derive(move || form.with(|form| form.errors().email.map(str::to_string)));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit_profile(runtime, form);
    };

    view! {
        <Card layout_class="account-card">
            {card_header("Profile Information", "Update your personal details here.")}
            <form
                class="account-profile-form"
                novalidate=true
                data-ui-state=move || form.with(|form| form_state_token(form.status()))
                on:submit=on_submit
            >
                <Stack gap=LayoutGap::Md>
                    <FieldGroup title="Full Name" error=name_error>
                        <TextField
                            id="profile-name"
                            name="name"
                            placeholder="Your Name"
                            autocomplete="name"
                            variant=Signal::derive(move || field_variant(name_error.with(Option::is_some)))
                            value=Signal::derive(move || form.with(|form| form.name().to_string()))
                            on_input=Callback::new(move |ev| {
                                form.update(|form| form.set_name(event_target_value(&ev)))
                            })
                        />
                    </FieldGroup>
                    <FieldGroup title="Email Address" error=email_error>
                        <TextField
                            id="profile-email"
                            name="email"
                            input_type="email"
                            placeholder="your@email.com"
                            autocomplete="email"
                            variant=Signal::derive(move || field_variant(email_error.with(Option::is_some)))
                            value=Signal::derive(move || form.with(|form| form.email().to_string()))
                            on_input=Callback::new(move |ev| {
                                form.update(|form| form.set_email(event_target_value(&ev)))
                            })
                        />
                    </FieldGroup>
                    <Cluster justify=LayoutJustify::Start ui_slot="footer">
                        <Button variant=ButtonVariant::Primary button_type="submit">
                            "Save Changes"
                        </Button>
                    </Cluster>
                </Stack>
            </form>
        </Card>
    }
    .into_view()
}

fn purchase_row(purchase: PurchaseRecord) -> impl IntoView {
    let purchased_on = format!("Purchased on {}", purchase.date);
    view! {
        <li class="account-purchase" data-purchase-id=purchase.id.to_string()>
            <div>
                <Text role=TextRole::Label>{purchase.title}</Text>
                <Text role=TextRole::Caption tone=TextTone::Secondary>{purchased_on}</Text>
            </div>
            <Text role=TextRole::Label>{purchase.price}</Text>
        </li>
    }
}

fn history_panel(purchases: Vec<PurchaseRecord>) -> View {
    view! {
        <Card layout_class="account-card">
            {card_header("Purchase History", "A record of your purchased books.")}
            <ul class="account-purchases">
                {purchases.into_iter().map(purchase_row).collect_view()}
            </ul>
        </Card>
    }
    .into_view()
}

fn payment_row(method: PaymentMethod) -> impl IntoView {
    let runtime = use_storefront();
    let method_id = method.id.clone();
    let expires = format!("Expires {}", method.expires);

    view! {
        <div class="account-payment-method" data-method-id=method.id>
            <div>
                <Text role=TextRole::Label>{method.label}</Text>
                <Text role=TextRole::Caption tone=TextTone::Secondary>{expires}</Text>
            </div>
            <Button
                variant=ButtonVariant::Standard
                on_click=Callback::new(move |_| {
                    runtime.report(StorefrontIntent::RemovePaymentMethodRequested {
                        method_id: method_id.clone(),
                    })
                })
            >
                "Remove"
            </Button>
        </div>
    }
}

fn payment_panel(methods: Vec<PaymentMethod>) -> View {
    let runtime = use_storefront();
    view! {
        <Card layout_class="account-card">
            {card_header("Payment Methods", "Manage your saved payment methods.")}
            <Stack gap=LayoutGap::Md>
                {methods.into_iter().map(payment_row).collect_view()}
            </Stack>
            <Cluster ui_slot="footer">
                <Button
                    variant=ButtonVariant::Primary
                    on_click=Callback::new(move |_| runtime.report(StorefrontIntent::AddPaymentMethodRequested))
                >
                    "Add New Card"
                </Button>
            </Cluster>
        </Card>
    }
    .into_view()
}

fn security_panel() -> View {
    let runtime = use_storefront();
    view! {
        <Card layout_class="account-card">
            {card_header("Security & Login", "Manage your password and session.")}
            <Stack gap=LayoutGap::Md>
                <div>
                    <Button
                        variant=ButtonVariant::Outline
                        on_click=Callback::new(move |_| runtime.report(StorefrontIntent::ChangePasswordRequested))
                    >
                        "Change Password"
                    </Button>
                </div>
                <hr class="account-separator" />
                <Stack gap=LayoutGap::Sm>
                    <Text role=TextRole::Label>"Log Out"</Text>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                        "This will log you out of your account on this device."
                    </Text>
                    <div>
                        <Button
                            variant=ButtonVariant::Danger
                            on_click=Callback::new(move |_| {
                                runtime.diagnostics.info("account", "logout requested", &[]);
                                runtime.report(StorefrontIntent::LogoutRequested);
                            })
                        >
                            "Log Out"
                        </Button>
                    </div>
                </Stack>
            </Stack>
        </Card>
    }
    .into_view()
}

fn account_panel(
    tab: AccountTab,
    snapshot: StoredValue<AccountSnapshot>,
    form: RwSignal<ProfileForm>,
) -> View {
    match tab {
        AccountTab::Profile => profile_panel(form),
        AccountTab::PurchaseHistory => history_panel(snapshot.with_value(|s| s.purchases.clone())),
        AccountTab::Payment => payment_panel(snapshot.with_value(|s| s.payment_methods.clone())),
        AccountTab::Security => security_panel(),
    }
}

fn account_tabs(snapshot: AccountSnapshot, active: RwSignal<AccountTab>) -> View {
    let form = create_rw_signal(ProfileForm::new(&snapshot.profile));
    let snapshot = store_value(snapshot);

    let tabs = AccountTab::ALL
        .into_iter()
        .map(|tab| {
            let (tab_id, panel_id) = tab_ids("account", tab.token());
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
    let panels = AccountTab::ALL
        .into_iter()
        .map(|tab| {
            let (tab_id, panel_id) = tab_ids("account", tab.token());
            view! {
                <TabPanel
                    id=panel_id
                    labelled_by=tab_id
                    selected=Signal::derive(move || active.get() == tab)
                >
                    {account_panel(tab, snapshot, form)}
                </TabPanel>
            }
        })
        .collect_view();

    view! {
        <TabList aria_label="Account sections">{tabs}</TabList>
        {panels}
    }
    .into_view()
}

#[component]
/// Account settings: profile form, purchase history, payment methods and security actions.
///
/// Every button reports a [`StorefrontIntent`]; nothing is persisted here.
pub fn AccountPage() -> impl IntoView {
    let runtime = use_storefront();
    runtime.diagnostics.debug("page", "mounted", &[("page", "account")]);

    let snapshot = create_rw_signal(LoadState::Pending);
    let active = create_rw_signal(AccountTab::default());
    let catalog = runtime.catalog();
    spawn_load(snapshot, runtime.diagnostics, "account", async move {
        catalog.fetch_account().await
    });

    view! {
        <PageLayout page="account">
            <section class="account" aria-labelledby="account-title">
                <Heading level=1 role=TextRole::Display id="account-title">"My Account"</Heading>
                {render_load(snapshot, move |snapshot| account_tabs(snapshot, active))}
            </section>
        </PageLayout>
    }
}

#[cfg(test)]
mod tests {
    use catalog_host::{MemoryIntentSink, MemoryScrollLock, ProfileDetails, StorefrontServices};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{account::NAME_TOO_SHORT, config::StorefrontConfig};

    fn memory_context(intents: MemoryIntentSink) -> StorefrontContext {
        let services = StorefrontServices::builtin_memory(intents, MemoryScrollLock::default())
            .expect("memory services");
        StorefrontContext {
            services: store_value(services),
            config: StorefrontConfig::builtin(),
            diagnostics: Diagnostics::default(),
        }
    }

    fn defaults() -> ProfileDetails {
        ProfileDetails {
            name: "Alex Doe".to_string(),
            email: "alex.doe@example.com".to_string(),
        }
    }

    #[test]
    fn valid_submit_reports_one_save_with_the_entered_values() {
        let runtime = create_runtime();
        let intents = MemoryIntentSink::default();
        let context = memory_context(intents.clone());
        let form = create_rw_signal(ProfileForm::new(&defaults()));

        submit_profile(context, form);

        assert_eq!(
            intents.reported(),
            vec![StorefrontIntent::ProfileSaveRequested(defaults())]
        );
        assert_eq!(form.with_untracked(ProfileForm::status), ProfileFormStatus::Saved);
        runtime.dispose();
    }

    #[test]
    fn invalid_submit_reports_nothing() {
        let runtime = create_runtime();
        let intents = MemoryIntentSink::default();
        let context = memory_context(intents.clone());
        let form = create_rw_signal(ProfileForm::new(&defaults()));
        form.update(|form| form.set_name("A"));

        submit_profile(context, form);

        assert!(intents.reported().is_empty());
        assert_eq!(
            form.with_untracked(|form| form.errors().name),
            Some(NAME_TOO_SHORT)
        );
        runtime.dispose();
    }

    #[test]
    fn form_state_tokens_follow_status() {
        assert_eq!(form_state_token(ProfileFormStatus::Idle), "idle");
        assert_eq!(form_state_token(ProfileFormStatus::ErrorsShown), "invalid");
        assert_eq!(form_state_token(ProfileFormStatus::Saved), "saved");
    }

    #[test]
    fn only_flagged_fields_render_invalid() {
        assert_eq!(field_variant(true), FieldVariant::Invalid);
        assert_eq!(field_variant(false), FieldVariant::Standard);
    }
}
