//! Site configuration injected at mount time and read by views at render time.

use leptos::*;
use render_guard::{BoundaryConfig, BuildProfile, ConfigError};
use serde::{Deserialize, Serialize};

/// DOM id of the optional `<script type="application/json">` config block in `index.html`.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

fn default_title() -> String {
    "Site".to_string()
}

fn default_description() -> String {
    "A client-rendered site shell.".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Top-level configuration provided to the view tree as context.
pub struct SiteConfig {
    /// Document title.
    #[serde(default = "default_title")]
    pub title: String,
    /// Meta description.
    #[serde(default = "default_description")]
    pub description: String,
    /// Error boundary settings, including the build profile.
    #[serde(default)]
    pub boundary: BoundaryConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            boundary: BoundaryConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Configuration derived from the build environment.
    ///
    /// `SITE_BUILD_PROFILE` set at compile time wins; otherwise debug builds run as development.
    pub fn from_build_env() -> Self {
        let profile =
            BuildProfile::resolve(option_env!("SITE_BUILD_PROFILE"), cfg!(debug_assertions));
        Self {
            boundary: BoundaryConfig::for_profile(profile),
            ..Self::default()
        }
    }

    /// Parses a JSON configuration document.
    ///
    /// A document that omits `boundary.profile` inherits the build-environment profile.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        let has_profile = value
            .get("boundary")
            .and_then(|boundary| boundary.get("profile"))
            .is_some();
        let mut config: Self = serde_json::from_value(value)?;
        if !has_profile {
            config.boundary.profile = Self::from_build_env().boundary.profile;
        }
        Ok(config)
    }

    /// Resolves the config from an optional injected document, logging and falling back on errors.
    pub fn from_injected(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => Self::from_json(raw).unwrap_or_else(|err| {
                logging::warn!("site config ignored: {err}");
                Self::from_build_env()
            }),
            None => Self::from_build_env(),
        }
    }

    /// Reads the config block embedded in the host page, if any.
    #[cfg(target_arch = "wasm32")]
    pub fn from_document() -> Self {
        let raw = document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content());
        Self::from_injected(raw.as_deref())
    }
}

/// Returns the [`SiteConfig`] provided by the root shell, or the build-environment default.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_else(SiteConfig::from_build_env)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use render_guard::RecoveryLink;

    use super::*;

    #[test]
    fn explicit_profile_in_document_is_honored() {
        let config = SiteConfig::from_json(
            r#"{ "title": "Docs", "boundary": { "profile": "production" } }"#,
        )
        .unwrap();

        assert_eq!(config.title, "Docs");
        assert_eq!(config.description, default_description());
        assert_eq!(config.boundary.profile, BuildProfile::Production);
    }

    #[test]
    fn missing_profile_inherits_build_environment() {
        let config = SiteConfig::from_json(r#"{ "boundary": {} }"#).unwrap();
        assert_eq!(
            config.boundary.profile,
            SiteConfig::from_build_env().boundary.profile
        );
        assert_eq!(config.boundary.links, BoundaryConfig::default().links);
    }

    #[test]
    fn custom_recovery_links_are_parsed() {
        let config = SiteConfig::from_json(
            r#"{ "boundary": { "profile": "development", "links": [ { "label": "Back", "target": "history-back" } ] } }"#,
        )
        .unwrap();
        assert_eq!(config.boundary.links, vec![RecoveryLink::back("Back")]);
    }

    #[test]
    fn injected_garbage_falls_back_to_build_environment() {
        assert_eq!(
            SiteConfig::from_injected(Some("not json")),
            SiteConfig::from_build_env()
        );
        assert_eq!(SiteConfig::from_injected(Some("   ")), SiteConfig::from_build_env());
        assert_eq!(SiteConfig::from_injected(None), SiteConfig::from_build_env());
    }
}
