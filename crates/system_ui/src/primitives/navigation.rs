use super::*;

#[component]
/// Anchor styled with the shared button tokens, for navigation that should read as an action.
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(default = ButtonVariant::Quiet)] variant: ButtonVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] leading_icon: Option<IconName>,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=href
            class=merge_layout_class("ui-button ui-link-button", layout_class)
            data-ui-primitive="true"
            data-ui-kind="link-button"
            data-ui-variant=variant.token()
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
        </a>
    }
}
