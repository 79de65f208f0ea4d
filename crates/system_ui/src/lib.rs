//! Shared UI primitive library for the site shell.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the stable
//! `data-ui-*` DOM contract consumed by the site stylesheet. Views should compose these
//! primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Button, ButtonVariant, CodeBlock, Cluster, EmptyState, Heading, LayoutAlign, LayoutGap,
    LayoutJustify, LayoutPadding, LinkButton, Panel, Stack, Text, TextTone,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonVariant, CodeBlock, Cluster, EmptyState, Heading, Icon, IconName,
        IconSize, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, LinkButton, Panel,
        Stack, Text, TextTone,
    };
}
