//! Content model for the built-in recovery view.

use serde::Serialize;

use crate::{BoundaryConfig, ErrorRecord, RecoveryLink};

/// Title shown by the built-in recovery view.
pub const RECOVERY_TITLE: &str = "Something went wrong";
/// Body copy shown by the built-in recovery view.
pub const RECOVERY_MESSAGE: &str =
    "This part of the page failed to load. You can try again or head somewhere else.";
/// Label of the retry action.
pub const RETRY_LABEL: &str = "Try again";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Developer-only details about a captured failure.
pub struct DiagnosticsPanel {
    /// String form of the failure.
    pub error_text: String,
    /// Component trace, one frame per line.
    pub component_trace: String,
}

impl DiagnosticsPanel {
    /// Full panel text as rendered inside the `<pre>` block.
    pub fn text(&self) -> String {
        if self.component_trace.is_empty() {
            self.error_text.clone()
        } else {
            format!("{}\n\n{}", self.error_text, self.component_trace)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Everything the default recovery view renders, independent of the UI framework.
pub struct RecoveryContent {
    /// Heading.
    pub title: &'static str,
    /// Explanatory message.
    pub message: &'static str,
    /// Retry button label.
    pub retry_label: &'static str,
    /// Static navigation links.
    pub links: Vec<RecoveryLink>,
    /// Present only for development builds.
    pub diagnostics: Option<DiagnosticsPanel>,
}

impl RecoveryContent {
    /// Builds the content for `record` under `config`.
    pub fn for_record(record: &ErrorRecord, config: &BoundaryConfig) -> Self {
        let diagnostics = config.profile.is_development().then(|| DiagnosticsPanel {
            error_text: record.failure.to_string(),
            component_trace: record.trace.to_string(),
        });

        Self {
            title: RECOVERY_TITLE,
            message: RECOVERY_MESSAGE,
            retry_label: RETRY_LABEL,
            links: config.links.clone(),
            diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{BuildProfile, ComponentTrace, RenderFailure};

    fn record() -> ErrorRecord {
        ErrorRecord::new(
            RenderFailure::new("X failed").in_component("ProjectCard"),
            ComponentTrace::rooted("AppErrorBoundary"),
        )
    }

    #[test]
    fn development_profile_shows_error_text_and_trace() {
        let content = RecoveryContent::for_record(
            &record(),
            &BoundaryConfig::for_profile(BuildProfile::Development),
        );

        let panel = content.diagnostics.expect("diagnostics in development");
        assert!(panel.text().contains("X failed"));
        assert_eq!(
            panel.component_trace,
            "in <AppErrorBoundary>\n  in <ProjectCard>"
        );
    }

    #[test]
    fn production_profile_hides_diagnostics() {
        let content = RecoveryContent::for_record(
            &record(),
            &BoundaryConfig::for_profile(BuildProfile::Production),
        );

        assert_eq!(content.diagnostics, None);
        assert_eq!(content.title, RECOVERY_TITLE);
        assert_eq!(content.retry_label, RETRY_LABEL);
    }

    #[test]
    fn links_come_from_config() {
        let mut config = BoundaryConfig::default();
        config.links = vec![RecoveryLink::route("Status", "/status")];

        let content = RecoveryContent::for_record(&record(), &config);

        assert_eq!(content.links, config.links);
    }

    #[test]
    fn panel_text_without_trace_is_error_only() {
        let panel = DiagnosticsPanel {
            error_text: "boom".to_string(),
            component_trace: String::new(),
        };
        assert_eq!(panel.text(), "boom");
    }
}
