//! Centralized storefront icon catalog.
//!
//! Components refer to glyphs by [`IconName`]; the SVG bodies live here so no component embeds
//! raw markup. Paths are drawn on a 24px grid and filled with `currentColor`.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by storefront components.
pub enum IconName {
    /// Open book, used for reading actions and the brand mark.
    BookOpen,
    /// Shopping cart for purchases.
    Cart,
    /// Eye for "view details".
    Eye,
    /// Back arrow.
    ArrowLeft,
    /// Playback start.
    Play,
    /// Playback pause.
    Pause,
    /// Decrease.
    Minus,
    /// Increase.
    Plus,
    /// Character roster / voice assignment.
    People,
    /// Typography settings.
    TextFont,
    /// Search field glyph.
    Search,
    /// Library shelf.
    Library,
    /// Account avatar.
    Person,
    /// Previous in a carousel.
    ChevronLeft,
    /// Next in a carousel or breadcrumb separator.
    ChevronRight,
    /// Expand/collapse indicator.
    ChevronDown,
    /// Audiobook edition marker.
    Headphones,
    /// Filled rating star.
    Star,
    /// Half-filled rating star.
    StarHalf,
    /// Outline rating star.
    StarOutline,
    /// Dismiss/close.
    Dismiss,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::BookOpen => "book-open",
            Self::Cart => "cart",
            Self::Eye => "eye",
            Self::ArrowLeft => "arrow-left",
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Minus => "minus",
            Self::Plus => "plus",
            Self::People => "people",
            Self::TextFont => "text-font",
            Self::Search => "search",
            Self::Library => "library",
            Self::Person => "person",
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::ChevronDown => "chevron-down",
            Self::Headphones => "headphones",
            Self::Star => "star",
            Self::StarHalf => "star-half",
            Self::StarOutline => "star-outline",
            Self::Dismiss => "dismiss",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::BookOpen => {
                r#"<path d="M2 5.5C2 4.67 2.67 4 3.5 4H9c1.2 0 2.27.53 3 1.37A3.99 3.99 0 0 1 15 4h5.5c.83 0 1.5.67 1.5 1.5v12c0 .83-.67 1.5-1.5 1.5H15c-.97 0-1.75.78-1.75 1.75a1.25 1.25 0 0 1-2.5 0C10.75 19.78 9.97 19 9 19H3.5A1.5 1.5 0 0 1 2 17.5v-12Zm9.25 2.5A2.5 2.5 0 0 0 8.75 5.5H3.5v12H9c.84 0 1.62.27 2.25.73V8Zm1.5 10.23A3.73 3.73 0 0 1 15 17.5h5.5v-12H15a2.5 2.5 0 0 0-2.25 2.5v10.23Z"/>"#
            }
            Self::Cart => {
                r#"<path d="M2.5 3.25c0-.41.34-.75.75-.75h1.6c.8 0 1.48.56 1.64 1.34L6.7 5.5h13.55c.8 0 1.38.76 1.17 1.53l-1.72 6.5A2 2 0 0 1 17.77 15H8.6l.3 1.5h9.85a.75.75 0 0 1 0 1.5H8.9a1.5 1.5 0 0 1-1.47-1.2L5.02 4.14a.25.25 0 0 0-.17-.14h-1.6a.75.75 0 0 1-.75-.75ZM7 7l1.3 6.5h9.47a.5.5 0 0 0 .48-.37L19.92 7H7Zm1.5 13a1.5 1.5 0 1 1 3 0 1.5 1.5 0 0 1-3 0Zm7 0a1.5 1.5 0 1 1 3 0 1.5 1.5 0 0 1-3 0Z"/>"#
            }
            Self::Eye => {
                r#"<path d="M12 9a3 3 0 1 0 0 6 3 3 0 0 0 0-6Zm-1.5 3a1.5 1.5 0 1 1 3 0 1.5 1.5 0 0 1-3 0ZM12 5C7.4 5 3.68 7.9 2.1 11.66a.85.85 0 0 0 0 .68C3.68 16.1 7.4 19 12 19s8.32-2.9 9.9-6.66a.85.85 0 0 0 0-.68C20.32 7.9 16.6 5 12 5Zm0 12.5c-3.8 0-6.97-2.3-8.39-5.5C5.03 8.8 8.2 6.5 12 6.5s6.97 2.3 8.39 5.5c-1.42 3.2-4.59 5.5-8.39 5.5Z"/>"#
            }
            Self::ArrowLeft => {
                r#"<path d="M10.3 4.22a.75.75 0 0 1 .02 1.06L4.77 11.25h15.48a.75.75 0 0 1 0 1.5H4.77l5.55 5.97a.75.75 0 0 1-1.1 1.02l-6.75-7.25a.75.75 0 0 1 0-1.02l6.75-7.25a.75.75 0 0 1 1.06-.02Z"/>"#
            }
            Self::Play => {
                r#"<path d="M7.6 3.2A1.05 1.05 0 0 0 6 4.1v15.8c0 .82.9 1.32 1.6.9l12.9-7.9a1.05 1.05 0 0 0 0-1.8L7.6 3.2Zm-.1 15.25V5.55L18.04 12 7.5 18.45Z"/>"#
            }
            Self::Pause => {
                r#"<path d="M6.25 3C5.56 3 5 3.56 5 4.25v15.5c0 .69.56 1.25 1.25 1.25h3.5c.69 0 1.25-.56 1.25-1.25V4.25C11 3.56 10.44 3 9.75 3h-3.5Zm.25 16.5v-15h3v15h-3Zm7.75-16.5c-.69 0-1.25.56-1.25 1.25v15.5c0 .69.56 1.25 1.25 1.25h3.5c.69 0 1.25-.56 1.25-1.25V4.25C19 3.56 18.44 3 17.75 3h-3.5Zm.25 16.5v-15h3v15h-3Z"/>"#
            }
            Self::Minus => r#"<path d="M3.75 12.75h16.5a.75.75 0 0 0 0-1.5H3.75a.75.75 0 0 0 0 1.5Z"/>"#,
            Self::Plus => {
                r#"<path d="M12.75 3.75a.75.75 0 0 0-1.5 0v7.5h-7.5a.75.75 0 0 0 0 1.5h7.5v7.5a.75.75 0 0 0 1.5 0v-7.5h7.5a.75.75 0 0 0 0-1.5h-7.5v-7.5Z"/>"#
            }
            Self::People => {
                r#"<path d="M8.5 3a3.5 3.5 0 1 0 0 7 3.5 3.5 0 0 0 0-7Zm-2 3.5a2 2 0 1 1 4 0 2 2 0 0 1-4 0ZM16.5 6a2.5 2.5 0 1 0 0 5 2.5 2.5 0 0 0 0-5Zm-1 2.5a1 1 0 1 1 2 0 1 1 0 0 1-2 0ZM4.25 12C3.01 12 2 13 2 14.25v.5C2 17.3 4.66 20 8.5 20s6.5-2.7 6.5-5.25v-.5C15 13.01 14 12 12.75 12h-8.5Zm-.75 2.25c0-.41.34-.75.75-.75h8.5c.41 0 .75.34.75.75v.5c0 1.6-1.8 3.75-5 3.75s-5-2.15-5-3.75v-.5ZM16.5 18.5c-.37 0-.72-.03-1.06-.08.4-.44.73-.93.98-1.46l.08.04c2.43 0 3.5-1.31 3.5-2.25v-.25a.5.5 0 0 0-.5-.5h-3.1a3.24 3.24 0 0 0-.78-1.5h3.88c1.1 0 2 .9 2 2v.25c0 1.87-1.86 3.75-5 3.75Z"/>"#
            }
            Self::TextFont => {
                r#"<path d="M9.7 4.47a.75.75 0 0 0-1.4 0l-5.5 14.5a.75.75 0 1 0 1.4.53L5.87 15h6.26l1.67 4.5a.75.75 0 1 0 1.4-.53L9.7 4.47ZM11.57 13.5H6.43L9 6.6l2.57 6.9Zm6.68-3.5c-1.2 0-2.2.47-2.87 1.22a.75.75 0 1 0 1.12 1c.38-.43.96-.72 1.75-.72 1.2 0 2 .85 2 1.75v.3a5.6 5.6 0 0 0-2-.3c-1.9 0-3.5 1.1-3.5 2.88 0 1.73 1.43 2.87 3.2 2.87.87 0 1.67-.27 2.3-.74v.04a.75.75 0 0 0 1.5 0v-4.05c0-1.76-1.5-3.25-3.5-3.25Zm2 5.55c0 .88-.93 1.95-2.3 1.95-1.13 0-1.7-.68-1.7-1.37 0-.74.72-1.38 2-1.38.8 0 1.48.14 2 .4v.4Z"/>"#
            }
            Self::Search => {
                r#"<path d="M10 2.75a7.25 7.25 0 0 1 5.63 11.82l4.9 4.9a.75.75 0 0 1-.98 1.13l-.08-.07-4.9-4.9A7.25 7.25 0 1 1 10 2.75Zm0 1.5a5.75 5.75 0 1 0 0 11.5 5.75 5.75 0 0 0 0-11.5Z"/>"#
            }
            Self::Library => {
                r#"<path d="M5.5 3C4.67 3 4 3.67 4 4.5v15c0 .83.67 1.5 1.5 1.5h1c.83 0 1.5-.67 1.5-1.5v-15C8 3.67 7.33 3 6.5 3h-1Zm0 1.5h1v15h-1v-15Zm4.5 0c0-.83.67-1.5 1.5-1.5h1c.83 0 1.5.67 1.5 1.5v15c0 .83-.67 1.5-1.5 1.5h-1c-.83 0-1.5-.67-1.5-1.5v-15Zm2.5 0h-1v15h1v-15Zm3.68 1.6a1.5 1.5 0 0 1 1.84-1.06l.97.26a1.5 1.5 0 0 1 1.06 1.84l-3.63 13.53a1.5 1.5 0 0 1-1.84 1.06l-.96-.26a1.5 1.5 0 0 1-1.06-1.84l3.62-13.53Zm2.42-.35-.97-.26-3.62 13.53.97.26 3.62-13.53Z"/>"#
            }
            Self::Person => {
                r#"<path d="M17.75 14C19 14 20 15 20 16.25v.57c0 .9-.32 1.76-.9 2.44C17.53 21.1 15.15 22 12 22s-5.53-.9-7.1-2.74a3.75 3.75 0 0 1-.9-2.43v-.58C4 15.01 5 14 6.25 14h11.5Zm0 1.5H6.25a.75.75 0 0 0-.75.75v.58c0 .53.2 1.05.54 1.46C7.3 19.76 9.26 20.5 12 20.5c2.74 0 4.7-.74 5.96-2.21.35-.41.54-.93.54-1.47v-.57a.75.75 0 0 0-.75-.75ZM12 2a5 5 0 1 1 0 10 5 5 0 0 1 0-10Zm0 1.5a3.5 3.5 0 1 0 0 7 3.5 3.5 0 0 0 0-7Z"/>"#
            }
            Self::ChevronLeft => {
                r#"<path d="M15.53 4.22a.75.75 0 0 1 0 1.06L8.81 12l6.72 6.72a.75.75 0 1 1-1.06 1.06l-7.25-7.25a.75.75 0 0 1 0-1.06l7.25-7.25a.75.75 0 0 1 1.06 0Z"/>"#
            }
            Self::ChevronRight => {
                r#"<path d="M8.47 4.22a.75.75 0 0 0 0 1.06L15.19 12l-6.72 6.72a.75.75 0 1 0 1.06 1.06l7.25-7.25a.75.75 0 0 0 0-1.06L9.53 4.22a.75.75 0 0 0-1.06 0Z"/>"#
            }
            Self::ChevronDown => {
                r#"<path d="M4.22 8.47c.3-.3.77-.3 1.06 0L12 15.19l6.72-6.72a.75.75 0 1 1 1.06 1.06l-7.25 7.25c-.3.3-.77.3-1.06 0L4.22 9.53a.75.75 0 0 1 0-1.06Z"/>"#
            }
            Self::Headphones => {
                r#"<path d="M12 3.5A7.5 7.5 0 0 0 4.5 11v1H7a2 2 0 0 1 2 2v5a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-8a9 9 0 0 1 18 0v8a2 2 0 0 1-2 2h-2a2 2 0 0 1-2-2v-5a2 2 0 0 1 2-2h2.5v-1A7.5 7.5 0 0 0 12 3.5Zm-7.5 10V19c0 .28.22.5.5.5h2a.5.5 0 0 0 .5-.5v-5a.5.5 0 0 0-.5-.5H4.5Zm15 0H17a.5.5 0 0 0-.5.5v5c0 .28.22.5.5.5h2a.5.5 0 0 0 .5-.5v-5.5Z"/>"#
            }
            Self::Star => {
                r#"<path d="M10.79 3.1c.5-1 1.92-1 2.42 0l2.36 4.78 5.27.77c1.1.16 1.55 1.52.75 2.3l-3.82 3.72.9 5.25a1.35 1.35 0 0 1-1.96 1.42L12 18.86l-4.72 2.48a1.35 1.35 0 0 1-1.96-1.42l.9-5.25-3.81-3.72c-.8-.78-.36-2.14.75-2.3l5.27-.77 2.36-4.78Z"/>"#
            }
            Self::StarHalf => {
                r#"<path d="M13.21 3.1c-.5-1-1.92-1-2.42 0L8.43 7.88l-5.27.77c-1.1.16-1.55 1.52-.75 2.3l3.81 3.72-.9 5.25a1.35 1.35 0 0 0 1.96 1.42L12 18.86l4.72 2.48a1.35 1.35 0 0 0 1.96-1.42l-.9-5.25 3.81-3.72c.8-.78.36-2.14-.75-2.3l-5.27-.77-2.36-4.78ZM12 17.34V4.1l2.33 4.72c.2.4.58.67 1.02.74l5.2.75-3.77 3.68c-.32.3-.46.76-.39 1.2l.9 5.18-4.66-2.45a1.35 1.35 0 0 0-.63-.16v-.42Z"/>"#
            }
            Self::StarOutline => {
                r#"<path d="M10.79 3.1c.5-1 1.92-1 2.42 0l2.36 4.78 5.27.77c1.1.16 1.55 1.52.75 2.3l-3.82 3.72.9 5.25a1.35 1.35 0 0 1-1.96 1.42L12 18.86l-4.72 2.48a1.35 1.35 0 0 1-1.96-1.42l.9-5.25-3.81-3.72c-.8-.78-.36-2.14.75-2.3l5.27-.77 2.36-4.78ZM12 4.1 9.67 8.82c-.2.4-.58.67-1.02.74l-5.2.75 3.77 3.68c.32.3.46.76.39 1.2l-.9 5.18 4.66-2.45c.39-.2.85-.2 1.26 0l4.65 2.45-.89-5.18c-.07-.44.07-.89.39-1.2l3.77-3.68-5.2-.75a1.35 1.35 0 0 1-1.02-.74L12 4.1Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 14px compact icon (breadcrumb separators, dense rows).
    Xs,
    /// 16px standard icon (buttons, inline labels).
    #[default]
    Sm,
    /// 20px medium icon (icon buttons).
    Md,
    /// 24px large icon (empty states, brand mark).
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an SVG glyph from the centralized icon catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_a_path_body() {
        for icon in [
            IconName::BookOpen,
            IconName::Star,
            IconName::StarHalf,
            IconName::StarOutline,
            IconName::Headphones,
            IconName::Dismiss,
        ] {
            assert!(icon.svg_body().starts_with("<path d=\""), "{}", icon.token());
        }
    }

    #[test]
    fn icon_sizes_map_to_pixels() {
        assert_eq!(IconSize::default().px(), 16);
        assert_eq!(IconSize::Lg.token(), "lg");
    }
}
