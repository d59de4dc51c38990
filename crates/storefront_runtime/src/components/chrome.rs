use chrono::{DateTime, Datelike, Local};

use super::*;

struct NavLink {
    label: &'static str,
    href: &'static str,
    icon: IconName,
}

const NAV_LINKS: [NavLink; 2] = [
    NavLink {
        label: "My Library",
        href: "/library",
        icon: IconName::Library,
    },
    NavLink {
        label: "Account",
        href: "/account",
        icon: IconName::Person,
    },
];

const FOOTER_LINKS: [(&str, &str); 4] = [
    ("About Us", "/about"),
    ("Contact", "/contact"),
    ("Terms of Service", "/terms"),
    ("Privacy Policy", "/privacy"),
];

/// Whether the nav entry for `target` should be highlighted at `pathname`.
pub(crate) fn is_active_path(pathname: &str, target: &str) -> bool {
    let current = match pathname.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    current == target
}

fn copyright_notice(now: DateTime<Local>) -> String {
    format!("\u{a9} {} Bibliotheca. All rights reserved.", now.year())
}

#[component]
/// Global header with brand, catalog search and primary navigation.
pub fn SiteHeader() -> impl IntoView {
    let runtime = use_storefront();
    let pathname = use_location().pathname;
    let query = create_rw_signal(String::new());

    let submit_search = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let query = query.get_untracked();
        let query = query.trim();
        if !query.is_empty() {
            runtime
                .diagnostics
                .info("search", "submitted", &[("query", query)]);
        }
    };

    let links = NAV_LINKS
        .iter()
        .map(|link| {
            let href = link.href;
            let active = Signal::derive(move || pathname.with(|path| is_active_path(path, href)));
            view! {
                <a
                    class="site-nav-link"
                    href=href
                    aria-current=move || active.get().then_some("page")
                    data-ui-selected=move || bool_token(active.get())
                >
                    <Icon icon=link.icon size=IconSize::Sm />
                    <span>{link.label}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <header class="site-header" data-ui-kind="site-header">
            <a class="site-brand" href="/" aria-label="Bibliotheca home">
                <Icon icon=IconName::BookOpen size=IconSize::Md />
                <span data-ui-slot="wordmark">"Bibliotheca"</span>
            </a>
            <form class="site-search" role="search" on:submit=submit_search>
                <Icon icon=IconName::Search size=IconSize::Sm />
                <TextField
                    input_type="search"
                    name="q"
                    placeholder="Search for books, authors, or genres..."
                    aria_label="Search the catalog"
                    value=query
                    on_input=Callback::new(move |ev| query.set(event_target_value(&ev)))
                />
            </form>
            <nav class="site-nav" aria-label="Primary">
                {links}
            </nav>
        </header>
    }
}

#[component]
/// Global footer with copyright notice and informational links.
pub fn SiteFooter() -> impl IntoView {
    let notice = copyright_notice(Local::now());
    let links = FOOTER_LINKS
        .iter()
        .map(|(label, href)| view! { <a href=*href>{*label}</a> })
        .collect_view();

    view! {
        <footer class="site-footer" data-ui-kind="site-footer">
            <Text role=TextRole::Caption tone=TextTone::Secondary>
                {notice}
            </Text>
            <nav aria-label="Footer">{links}</nav>
        </footer>
    }
}

#[component]
/// Header, scrollable body and footer shared by every non-immersive page.
pub fn PageLayout(
    /// Page slug used for styling hooks.
    page: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-shell" data-page=page>
            <SiteHeader />
            <main class="page-body" id="main-content">
                {children()}
            </main>
            <SiteFooter />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn nav_highlight_matches_exact_route() {
        assert!(is_active_path("/library", "/library"));
        assert!(is_active_path("/library/", "/library"));
        assert!(!is_active_path("/", "/library"));
        assert!(!is_active_path("/account", "/library"));
    }

    #[test]
    fn copyright_notice_uses_the_local_year() {
        let now = Local
            .with_ymd_and_hms(2031, 1, 1, 12, 0, 0)
            .single()
            .expect("unambiguous local time");
        assert_eq!(
            copyright_notice(now),
            "\u{a9} 2031 Bibliotheca. All rights reserved."
        );
    }
}
