//! Built-in recovery screen rendered by [`crate::AppErrorBoundary`].

use leptos::*;
use render_guard::{DiagnosticsPanel, LinkTarget, RecoveryContent, RecoveryLink};
use system_ui::prelude::*;

fn link_icon(link: &RecoveryLink) -> IconName {
    match &link.target {
        LinkTarget::Route(path) if path == "/" => IconName::Home,
        LinkTarget::Route(_) | LinkTarget::HistoryBack => IconName::ArrowLeft,
    }
}

#[component]
/// Themed recovery view: icon, message, retry action, and static navigation links.
pub fn RecoveryScreen(content: RecoveryContent, on_retry: Callback<()>) -> impl IntoView {
    let RecoveryContent {
        title,
        message,
        retry_label,
        links,
        diagnostics,
    } = content;

    let links = links
        .into_iter()
        .map(|link| {
            let href = link.href().to_string();
            let icon = link_icon(&link);
            view! {
                <LinkButton href leading_icon=icon>
                    {link.label}
                </LinkButton>
            }
        })
        .collect_view();

    view! {
        <EmptyState layout_class="recovery-screen" role="alert">
            <Panel
                padding=LayoutPadding::Lg
                layout_class="recovery-panel"
                aria_label="Page error"
            >
                <Stack gap=LayoutGap::Md align=LayoutAlign::Center>
                    <Text tone=TextTone::Warning ui_slot="recovery-icon">
                        <Icon icon=IconName::Warning size=IconSize::Xl />
                    </Text>
                    <Heading>{title}</Heading>
                    <Text tone=TextTone::Secondary>{message}</Text>
                    <Cluster gap=LayoutGap::Sm justify=LayoutJustify::Center ui_slot="recovery-actions">
                        <Button
                            variant=ButtonVariant::Primary
                            leading_icon=IconName::Refresh
                            on_click=Callback::new(move |_| on_retry.call(()))
                        >
                            {retry_label}
                        </Button>
                        {links}
                    </Cluster>
                    {diagnostics.map(|panel| view! { <DiagnosticsDetails panel /> })}
                </Stack>
            </Panel>
        </EmptyState>
    }
}

#[component]
fn DiagnosticsDetails(panel: DiagnosticsPanel) -> impl IntoView {
    view! {
        <details class="recovery-diagnostics" open=true>
            <summary>
                <Icon icon=IconName::Bug size=IconSize::Sm />
                "Developer details"
            </summary>
            <CodeBlock text=panel.text() tone=TextTone::Danger aria_label="Error details" />
        </details>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_route_gets_home_icon() {
        assert_eq!(link_icon(&RecoveryLink::route("Go home", "/")), IconName::Home);
        assert_eq!(link_icon(&RecoveryLink::route("Docs", "/docs")), IconName::ArrowLeft);
        assert_eq!(link_icon(&RecoveryLink::back("Go back")), IconName::ArrowLeft);
    }
}
