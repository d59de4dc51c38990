use super::*;

#[component]
/// Screen for locations no route matches, or works the catalog does not know.
pub fn NotFoundPage(
    /// Location reported in diagnostics; defaults to the current pathname.
    #[prop(optional, into)]
    path: Option<String>,
) -> impl IntoView {
    let runtime = use_storefront();
    let path = path.unwrap_or_else(|| use_location().pathname.get_untracked());
    runtime
        .diagnostics
        .warn("route", "no page for location", &[("path", path.as_str())]);

    view! {
        <PageLayout page="not-found">
            <section class="not-found" aria-labelledby="not-found-title">
                <Stack gap=LayoutGap::Md>
                    <Heading level=1 role=TextRole::Display id="not-found-title">"404"</Heading>
                    <Text tone=TextTone::Secondary>"Oops! Page not found"</Text>
                    <LinkButton
                        href=AppRoute::Home.href()
                        variant=ButtonVariant::Primary
                        leading_icon=IconName::ArrowLeft
                    >
                        "Return to Home"
                    </LinkButton>
                </Stack>
            </section>
        </PageLayout>
    }
}
