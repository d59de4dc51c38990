//! Storefront primitives: controls, data display, layout, navigation and overlays.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod layout;
mod navigation;
mod overlays;

pub use controls::{
    Button, FieldGroup, IconButton, LinkButton, ProgressBar, RangeField, SegmentedControl,
    SegmentedControlOption, SelectField, TextField,
};
pub use data_display::{Card, EmptyState, Heading, Text};
pub use layout::{Cluster, Grid, Stack};
pub use navigation::{Breadcrumb, BreadcrumbItem, DisclosurePanel, Tab, TabList, TabPanel};
pub use overlays::{Modal, Popover};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Elevation {
    Raised,
    Overlay,
}

impl Elevation {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Raised => "raised",
            Self::Overlay => "overlay",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Quiet/toggle style button.
    Quiet,
    /// Outlined secondary button.
    Outline,
    /// Danger/destructive button.
    Danger,
    /// Icon-only circular button.
    Icon,
    /// Option inside a segmented control.
    Segmented,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
            Self::Outline => "outline",
            Self::Danger => "danger",
            Self::Icon => "icon",
            Self::Segmented => "segmented",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Default button.
    #[default]
    Md,
    /// Large button.
    Lg,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button outline shapes.
pub enum ButtonShape {
    /// Rounded rectangle.
    #[default]
    Standard,
    /// Circle, for icon-only buttons.
    Circle,
}

impl ButtonShape {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Circle => "circle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared input-field variants.
pub enum FieldVariant {
    /// Standard input.
    #[default]
    Standard,
    /// Input carrying a validation error.
    Invalid,
}

impl FieldVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Invalid => "invalid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared text roles.
pub enum TextRole {
    /// Body text.
    #[default]
    Body,
    /// Label text.
    Label,
    /// Caption text.
    Caption,
    /// Title text.
    Title,
    /// Large display text for hero sections.
    Display,
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Title => "title",
            Self::Display => "display",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared text tone.
pub enum TextTone {
    /// Primary text.
    #[default]
    Primary,
    /// Secondary text.
    Secondary,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout gap tokens.
pub enum LayoutGap {
    /// Small gap.
    Sm,
    /// Default gap.
    #[default]
    Md,
    /// Large gap.
    Lg,
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout justification tokens.
pub enum LayoutJustify {
    /// Start justification.
    #[default]
    Start,
    /// End justification.
    End,
}

impl LayoutJustify {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("ui-card", None), "ui-card");
        assert_eq!(merge_layout_class("ui-card", Some("")), "ui-card");
        assert_eq!(
            merge_layout_class("ui-card", Some("catalog-item")),
            "ui-card catalog-item"
        );
    }

    #[test]
    fn tokens_are_stable() {
        assert_eq!(ButtonVariant::default().token(), "standard");
        assert_eq!(ButtonShape::Circle.token(), "circle");
        assert_eq!(FieldVariant::Invalid.token(), "invalid");
        assert_eq!(Elevation::Overlay.token(), "overlay");
        assert_eq!(LayoutGap::default().token(), "md");
        assert_eq!(bool_token(true), "true");
    }
}
