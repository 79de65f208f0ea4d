mod config;
mod error_boundary;
mod recovery;
mod web_app;

pub use config::{use_site_config, SiteConfig, CONFIG_ELEMENT_ID};
pub use error_boundary::{use_error_boundary, AppErrorBoundary, BoundaryHandle};
pub use recovery::RecoveryScreen;
pub use web_app::SiteApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    let config = SiteConfig::from_document();
    leptos::logging::log!("mounting site ({} build)", config.boundary.profile.token());
    leptos::mount_to_body(move || leptos::view! { <SiteApp config /> })
}
