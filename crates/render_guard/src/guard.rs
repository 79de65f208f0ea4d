//! Headless supervisor for a descendant subtree.
//!
//! [`RenderGuard`] owns the [`BoundaryState`] of one boundary instance. Rendering goes through
//! [`RenderGuard::render`], which wraps the subtree's render call so a failure is recorded
//! before it can reach whoever asked for the whole tree. Framework adapters that receive
//! failures from another channel (for example an error signal) feed them in through
//! [`RenderGuard::capture`].

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::{
    BoundaryConfig, BoundaryState, ComponentTrace, ErrorRecord, RecoveryContent, RenderFailure,
};

type Reporter = Box<dyn FnMut(&RenderFailure, &ComponentTrace)>;

/// Runs `render` and converts an `Err` or an unwinding panic into a [`RenderFailure`].
///
/// On targets built with `panic = "abort"` (the default for `wasm32-unknown-unknown`) a panic
/// cannot be observed here; only `Err` results are converted.
pub fn run_guarded<T>(
    render: impl FnOnce() -> Result<T, RenderFailure>,
) -> Result<T, RenderFailure> {
    match panic::catch_unwind(AssertUnwindSafe(render)) {
        Ok(result) => result,
        Err(payload) => Err(RenderFailure::from_panic(payload)),
    }
}

/// Capture/report/reset state machine for one boundary instance.
pub struct RenderGuard {
    name: String,
    config: BoundaryConfig,
    state: BoundaryState,
    generation: u64,
    reporter: Option<Reporter>,
}

impl fmt::Debug for RenderGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderGuard")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("generation", &self.generation)
            .field("reporter", &self.reporter.is_some())
            .finish()
    }
}

impl RenderGuard {
    /// Creates a guard named after the boundary component that owns it.
    pub fn new(name: impl Into<String>, config: BoundaryConfig) -> Self {
        Self {
            name: name.into(),
            config,
            state: BoundaryState::Clear,
            generation: 0,
            reporter: None,
        }
    }

    /// Installs the hook invoked once per captured failure.
    pub fn with_reporter(
        mut self,
        reporter: impl FnMut(&RenderFailure, &ComponentTrace) + 'static,
    ) -> Self {
        self.reporter = Some(Box::new(reporter));
        self
    }

    /// Boundary name, used as the outermost trace frame.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current boundary state.
    pub fn state(&self) -> &BoundaryState {
        &self.state
    }

    /// Active configuration.
    pub fn config(&self) -> &BoundaryConfig {
        &self.config
    }

    /// Replaces the configuration; takes effect on the next render.
    pub fn set_config(&mut self, config: BoundaryConfig) {
        self.config = config;
    }

    /// Remount generation; changes on every reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Renders `component` through the guard.
    ///
    /// While a failure is captured the render closure is not called and the stored record is
    /// returned. Otherwise a successful result passes through untouched and a failure is
    /// captured, reported, and returned.
    pub fn render<T>(
        &mut self,
        component: &str,
        render: impl FnOnce() -> Result<T, RenderFailure>,
    ) -> Result<T, ErrorRecord> {
        if let BoundaryState::Captured(record) = &self.state {
            return Err(record.clone());
        }

        run_guarded(render).map_err(|failure| {
            let trace = ComponentTrace::rooted(self.name.clone()).with(component);
            let record = ErrorRecord::new(failure, trace);
            self.commit(record.clone());
            record
        })
    }

    /// Records a failure delivered out of band.
    ///
    /// Returns `false` without reporting when a failure is already captured. The state
    /// transition happens before the reporter runs.
    pub fn capture(&mut self, failure: RenderFailure, trace: ComponentTrace) -> bool {
        if self.state.has_error() {
            return false;
        }
        self.commit(ErrorRecord::new(failure, trace));
        true
    }

    fn commit(&mut self, record: ErrorRecord) {
        self.state = BoundaryState::Captured(record.clone());
        if let Some(reporter) = self.reporter.as_mut() {
            reporter(&record.failure, &record.trace);
        }
    }

    /// Clears the captured failure and bumps the remount generation.
    pub fn reset(&mut self) {
        self.state = BoundaryState::Clear;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Default recovery content for the captured failure, if any.
    pub fn recovery_content(&self) -> Option<RecoveryContent> {
        self.state
            .record()
            .map(|record| RecoveryContent::for_record(record, &self.config))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::BuildProfile;

    type Reports = Rc<RefCell<Vec<(String, Vec<String>)>>>;

    fn guard_with_reports(profile: BuildProfile) -> (RenderGuard, Reports) {
        let reports: Reports = Rc::default();
        let sink = Rc::clone(&reports);
        let guard = RenderGuard::new("AppErrorBoundary", BoundaryConfig::for_profile(profile))
            .with_reporter(move |failure, trace| {
                sink.borrow_mut()
                    .push((failure.to_string(), trace.frames().to_vec()));
            });
        (guard, reports)
    }

    #[test]
    fn successful_render_passes_through_unchanged() {
        let (mut guard, reports) = guard_with_reports(BuildProfile::Production);

        let direct = String::from("<p>hello</p>");
        let guarded = guard.render("Greeting", || Ok(direct.clone()));

        assert_eq!(guarded, Ok(direct));
        assert_eq!(guard.state(), &BoundaryState::Clear);
        assert!(reports.borrow().is_empty());
    }

    #[test]
    fn failing_render_is_captured_and_reported_once() {
        let (mut guard, reports) = guard_with_reports(BuildProfile::Production);

        let record = guard
            .render::<()>("Widget", || Err(RenderFailure::new("X failed")))
            .unwrap_err();

        assert_eq!(record.failure.message(), "X failed");
        assert_eq!(
            record.trace.frames(),
            ["AppErrorBoundary".to_string(), "Widget".to_string()]
        );
        assert!(guard.state().has_error());
        assert_eq!(guard.state().record(), Some(&record));
        assert_eq!(
            *reports.borrow(),
            vec![(
                "X failed".to_string(),
                vec!["AppErrorBoundary".to_string(), "Widget".to_string()]
            )]
        );
    }

    #[test]
    fn captured_state_skips_rendering_and_reporting() {
        let (mut guard, reports) = guard_with_reports(BuildProfile::Production);
        let _ = guard.render::<()>("Widget", || Err("first".into()));

        let mut called = false;
        let second = guard.render("Widget", || {
            called = true;
            Ok(())
        });

        assert!(!called);
        assert_eq!(second.unwrap_err().failure.message(), "first");
        assert!(!guard.capture("second".into(), ComponentTrace::new()));
        assert_eq!(reports.borrow().len(), 1);
    }

    #[test]
    fn panics_are_captured_as_failures() {
        let (mut guard, reports) = guard_with_reports(BuildProfile::Production);

        let record = guard
            .render::<()>("Exploder", || panic!("kaboom"))
            .unwrap_err();

        assert_eq!(record.failure.message(), "kaboom");
        assert_eq!(reports.borrow().len(), 1);
    }

    #[test]
    fn reset_clears_state_and_bumps_generation() {
        let (mut guard, _reports) = guard_with_reports(BuildProfile::Production);
        let _ = guard.render::<()>("Widget", || Err("broken".into()));
        assert_eq!(guard.generation(), 0);

        guard.reset();

        assert_eq!(guard.state(), &BoundaryState::Clear);
        assert_eq!(guard.generation(), 1);
        assert!(guard.recovery_content().is_none());
    }

    #[test]
    fn state_flag_tracks_record_presence() {
        let (mut guard, _reports) = guard_with_reports(BuildProfile::Production);
        assert_eq!(guard.state().has_error(), guard.state().record().is_some());

        let _ = guard.render::<()>("Widget", || Err("broken".into()));
        assert_eq!(guard.state().has_error(), guard.state().record().is_some());

        guard.reset();
        assert_eq!(guard.state().has_error(), guard.state().record().is_some());
    }

    #[test]
    fn capture_then_retry_shows_replacement_descendant() {
        let (mut guard, reports) = guard_with_reports(BuildProfile::Development);

        let failed = guard.render::<String>("Descendant", || Err(RenderFailure::new("X failed")));
        let content = guard.recovery_content().expect("recovery content");
        assert!(failed.is_err());
        assert_eq!(content.title, "Something went wrong");
        assert_eq!(reports.borrow()[0].0, "X failed");

        guard.reset();
        let rendered = guard.render("Descendant", || Ok("all good".to_string()));

        assert_eq!(rendered, Ok("all good".to_string()));
        assert!(guard.recovery_content().is_none());
        assert_eq!(reports.borrow().len(), 1);
    }

    #[test]
    fn reporter_sees_captured_state_already_committed() {
        let observed = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&observed);
        let mut guard = RenderGuard::new("Boundary", BoundaryConfig::default())
            .with_reporter(move |failure, _| *sink.borrow_mut() = Some(failure.clone()));

        assert!(guard.capture(
            RenderFailure::new("late").in_component("Chart"),
            ComponentTrace::rooted("Boundary"),
        ));

        assert_eq!(observed.borrow().as_ref().map(RenderFailure::message), Some("late"));
        assert_eq!(
            guard.state().record().map(|record| record.trace.frames().to_vec()),
            Some(vec!["Boundary".to_string(), "Chart".to_string()])
        );
    }
}
