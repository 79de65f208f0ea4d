//! Build profile and recovery-view configuration injected into boundaries.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading boundary configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Profile string matched neither development nor production.
    #[error("unknown build profile `{0}`; expected `development` or `production`")]
    UnknownProfile(String),
    /// Configuration document failed to parse.
    #[error("invalid boundary configuration: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Build flavor controlling whether diagnostics are rendered.
pub enum BuildProfile {
    /// Local development build; diagnostics visible.
    Development,
    /// Release build; diagnostics suppressed.
    Production,
}

impl Default for BuildProfile {
    fn default() -> Self {
        Self::Production
    }
}

impl BuildProfile {
    /// Returns `true` for development builds.
    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    /// Stable token used in `data-*` attributes and logs.
    pub fn token(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    /// Resolves a profile from an optional build-time value, using `debug_build` when unset.
    ///
    /// Unrecognized values fall back to production so a typo never leaks diagnostics.
    pub fn resolve(raw: Option<&str>, debug_build: bool) -> Self {
        match raw.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => value.parse().unwrap_or(Self::Production),
            None if debug_build => Self::Development,
            None => Self::Production,
        }
    }
}

impl FromStr for BuildProfile {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::UnknownProfile(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Where a recovery link leads.
pub enum LinkTarget {
    /// In-app route path.
    Route(String),
    /// Browser history back navigation.
    HistoryBack,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Static navigation link offered by the default recovery view.
pub struct RecoveryLink {
    /// Visible link label.
    pub label: String,
    /// Navigation target.
    pub target: LinkTarget,
}

impl RecoveryLink {
    /// Link to an in-app route.
    pub fn route(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: LinkTarget::Route(path.into()),
        }
    }

    /// Link that walks back one history entry.
    pub fn back(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: LinkTarget::HistoryBack,
        }
    }

    /// Anchor `href` for the link.
    pub fn href(&self) -> &str {
        match &self.target {
            LinkTarget::Route(path) => path,
            LinkTarget::HistoryBack => "javascript:history.back()",
        }
    }
}

fn default_links() -> Vec<RecoveryLink> {
    vec![
        RecoveryLink::route("Go home", "/"),
        RecoveryLink::back("Go back"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Configuration read by a boundary at render time.
pub struct BoundaryConfig {
    /// Active build profile.
    #[serde(default)]
    pub profile: BuildProfile,
    /// Links rendered by the default recovery view.
    #[serde(default = "default_links")]
    pub links: Vec<RecoveryLink>,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            profile: BuildProfile::default(),
            links: default_links(),
        }
    }
}

impl BoundaryConfig {
    /// Default configuration for the given profile.
    pub fn for_profile(profile: BuildProfile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    /// Parses a JSON configuration document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn profile_parses_long_and_short_forms() {
        assert_eq!("development".parse::<BuildProfile>().unwrap(), BuildProfile::Development);
        assert_eq!(" Dev ".parse::<BuildProfile>().unwrap(), BuildProfile::Development);
        assert_eq!("PROD".parse::<BuildProfile>().unwrap(), BuildProfile::Production);
        assert!(matches!(
            "staging".parse::<BuildProfile>(),
            Err(ConfigError::UnknownProfile(raw)) if raw == "staging"
        ));
    }

    #[test]
    fn resolve_prefers_explicit_value_then_debug_flag() {
        assert_eq!(BuildProfile::resolve(Some("production"), true), BuildProfile::Production);
        assert_eq!(BuildProfile::resolve(Some("dev"), false), BuildProfile::Development);
        assert_eq!(BuildProfile::resolve(None, true), BuildProfile::Development);
        assert_eq!(BuildProfile::resolve(Some("  "), false), BuildProfile::Production);
        assert_eq!(BuildProfile::resolve(Some("typo"), true), BuildProfile::Production);
    }

    #[test]
    fn json_config_fills_missing_fields_with_defaults() {
        let config = BoundaryConfig::from_json(r#"{ "profile": "development" }"#).unwrap();
        assert_eq!(config.profile, BuildProfile::Development);
        assert_eq!(config.links, default_links());

        let empty = BoundaryConfig::from_json("{}").unwrap();
        assert_eq!(empty, BoundaryConfig::default());
    }

    #[test]
    fn json_config_accepts_custom_links() {
        let config = BoundaryConfig::from_json(
            r#"{ "links": [ { "label": "Status", "target": { "route": "/status" } } ] }"#,
        )
        .unwrap();
        assert_eq!(config.links, vec![RecoveryLink::route("Status", "/status")]);
        assert_eq!(config.links[0].href(), "/status");
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = BoundaryConfig::from_json("{ profile: }").unwrap_err();
        assert!(err.to_string().starts_with("invalid boundary configuration"));
    }
}
