use super::*;

#[component]
/// Shared raised panel surface.
pub fn Panel(
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-panel", layout_class)
            data-ui-primitive="true"
            data-ui-kind="panel"
            data-ui-elevation="raised"
            data-ui-padding=padding.token()
            aria-label=aria_label
        >
            {children()}
        </section>
    }
}

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Shared heading primitive.
pub fn Heading(
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <h1
            class=merge_layout_class("ui-heading", layout_class)
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-tone=tone.token()
        >
            {children()}
        </h1>
    }
}

#[component]
/// Shared empty/recovery state wrapper.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
            role=role
        >
            {children()}
        </div>
    }
}

#[component]
/// Preformatted monospace block for logs and diagnostics.
pub fn CodeBlock(
    #[prop(into)] text: String,
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
) -> impl IntoView {
    view! {
        <pre
            class=merge_layout_class("ui-code-block", layout_class)
            data-ui-primitive="true"
            data-ui-kind="code-block"
            data-ui-tone=tone.token()
            aria-label=aria_label
        >
            <code>{text}</code>
        </pre>
    }
}
