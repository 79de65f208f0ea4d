use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use system_ui::prelude::*;

use crate::{config::SiteConfig, error_boundary::AppErrorBoundary};

#[component]
pub fn SiteApp(
    /// Injected configuration; defaults to the build environment when omitted.
    #[prop(optional)]
    config: Option<SiteConfig>,
) -> impl IntoView {
    provide_meta_context();

    let config = config.unwrap_or_else(SiteConfig::from_build_env);
    let title = config.title.clone();
    let description = config.description.clone();
    let profile = config.boundary.profile;
    provide_context(config);

    view! {
        <Title text=title />
        <Meta name="description" content=description />

        <Router>
            <main class="site-root" data-build-profile=profile.token()>
                <AppErrorBoundary name="SiteRoutes">
                    <Routes>
                        <Route path="" view=HomeRoute />
                        <Route path="/*any" view=NotFoundRoute />
                    </Routes>
                </AppErrorBoundary>
            </main>
        </Router>
    }
}

#[component]
fn HomeRoute() -> impl IntoView {
    let title = use_context::<SiteConfig>()
        .map(|config| config.title)
        .unwrap_or_default();

    view! {
        <section class="site-home">
            <Heading>{title}</Heading>
        </section>
    }
}

#[component]
fn NotFoundRoute() -> impl IntoView {
    let location = use_location();

    view! {
        <section class="site-not-found">
            <Heading>"Page not found"</Heading>
            <Text tone=TextTone::Secondary>
                {move || format!("Nothing lives at {}.", location.pathname.get())}
            </Text>
            <A href="/">"Go home"</A>
        </section>
    }
}
