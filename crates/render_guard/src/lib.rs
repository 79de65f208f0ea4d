//! Framework-independent render-failure supervision for UI subtrees.
//!
//! A boundary wraps a descendant subtree, intercepts failures raised while that subtree
//! renders, and switches to a recovery view until it is reset. This crate owns the state
//! machine, the captured failure types, and the recovery-view content model so the Leptos
//! adapter in `site` stays a thin view layer and the behavior can be tested headless.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod config;
mod failure;
mod guard;
mod recovery;
mod state;

pub use config::{BoundaryConfig, BuildProfile, ConfigError, LinkTarget, RecoveryLink};
pub use failure::{ComponentTrace, ErrorRecord, RenderFailure};
pub use guard::{run_guarded, RenderGuard};
pub use recovery::{
    DiagnosticsPanel, RecoveryContent, RECOVERY_MESSAGE, RECOVERY_TITLE, RETRY_LABEL,
};
pub use state::BoundaryState;
