//! Centralized icon registry rendered as inline SVG.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icons available to site views.
pub enum IconName {
    /// Warning triangle.
    Warning,
    /// Circular refresh arrow.
    Refresh,
    /// House outline.
    Home,
    /// Left-pointing arrow.
    ArrowLeft,
    /// Bug glyph for developer diagnostics.
    Bug,
}

impl IconName {
    /// Stable token for the `data-ui-icon` attribute.
    pub fn token(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Refresh => "refresh",
            Self::Home => "home",
            Self::ArrowLeft => "arrow-left",
            Self::Bug => "bug",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::Warning => "M12 3 2 21h20L12 3Zm0 6v6m0 3v.01",
            Self::Refresh => "M20 12a8 8 0 1 1-2.34-5.66M20 4v5h-5",
            Self::Home => "M3 11 12 3l9 8M5 9.5V21h5v-6h4v6h5V9.5",
            Self::ArrowLeft => "M19 12H5m6-7-7 7 7 7",
            Self::Bug => "M9 7a3 3 0 0 1 6 0M6 11h12M8 7h8v7a4 4 0 0 1-8 0V7Zm-4 6h4m8 0h4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// 16px, inline with control labels.
    #[default]
    Sm,
    /// 48px hero icon.
    Xl,
}

impl IconSize {
    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Xl => "xl",
        }
    }

    fn pixels(self) -> u32 {
        match self {
            Self::Sm => 16,
            Self::Xl => 48,
        }
    }
}

#[component]
/// Decorative inline SVG icon.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Sm)] size: IconSize) -> impl IntoView {
    let pixels = size.pixels();
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            <svg
                width=pixels
                height=pixels
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            >
                <path d=icon.path() />
            </svg>
        </span>
    }
}
