//! Shared UI primitive library for the storefront pages.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the stable `data-ui-*`
//! DOM contract consumed by the storefront stylesheet. Pages compose these primitives instead of
//! emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Breadcrumb, BreadcrumbItem, Button, ButtonShape, ButtonSize, ButtonVariant, Card, Cluster,
    DisclosurePanel, EmptyState, FieldGroup, FieldVariant, Grid, Heading, IconButton, LayoutGap,
    LayoutJustify, LinkButton, Modal, Popover, ProgressBar, RangeField, SegmentedControl,
    SegmentedControlOption, SelectField, Stack, Tab, TabList, TabPanel, Text, TextField, TextRole,
    TextTone,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Breadcrumb, BreadcrumbItem, Button, ButtonShape, ButtonSize, ButtonVariant, Card, Cluster,
        DisclosurePanel, EmptyState, FieldGroup, FieldVariant, Grid, Heading, Icon, IconButton,
        IconName, IconSize, LayoutGap, LayoutJustify, LinkButton, Modal, Popover, ProgressBar,
        RangeField, SegmentedControl, SegmentedControlOption, SelectField, Stack, Tab, TabList,
        TabPanel, Text, TextField, TextRole, TextTone,
    };
}
