//! Leptos adapter over [`render_guard::RenderGuard`].
//!
//! [`AppErrorBoundary`] guards its children two ways. The render call itself runs through
//! [`run_guarded`], so an `Err` or (on unwinding targets) a panic is captured before it leaves
//! the boundary. Descendant `Result` views report their `Err` values through the Leptos
//! [`Errors`] context, which the boundary provides and watches. Either path ends in the same
//! capture: state flips to captured, the failure is logged, and `on_error` runs once.
//!
//! Inside a router the boundary follows navigation: leaving the failed route while captured
//! resets it, so recovery links work without a full page load.

use leptos::{error::Error, *};
use leptos_router::{use_location, RouterContext};
use render_guard::{
    run_guarded, BoundaryState, ComponentTrace, ErrorRecord, RenderFailure, RenderGuard,
};

use crate::{config::use_site_config, recovery::RecoveryScreen};

#[derive(Clone, Copy)]
/// Handle to the nearest [`AppErrorBoundary`], available to descendants and custom fallbacks.
pub struct BoundaryHandle {
    state: RwSignal<BoundaryState>,
    generation: RwSignal<u64>,
    raise: Callback<RenderFailure>,
    reset: Callback<()>,
}

impl BoundaryHandle {
    /// Current boundary state.
    pub fn state(&self) -> BoundaryState {
        self.state.get()
    }

    /// The captured record, if any.
    pub fn record(&self) -> Option<ErrorRecord> {
        self.state.with(|state| state.record().cloned())
    }

    /// Returns `true` while a failure is captured.
    pub fn has_error(&self) -> bool {
        self.state.with(BoundaryState::has_error)
    }

    /// Remount generation; bumped by every reset.
    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// Surfaces a failure into the boundary from outside the render phase.
    ///
    /// Event handlers and async work are not intercepted automatically; this is the explicit
    /// route for them.
    pub fn raise(&self, failure: RenderFailure) {
        self.raise.call(failure);
    }

    /// Clears the captured failure and remounts the children.
    pub fn reset(&self) {
        self.reset.call(());
    }
}

/// Returns the handle of the nearest enclosing [`AppErrorBoundary`], if any.
pub fn use_error_boundary() -> Option<BoundaryHandle> {
    use_context::<BoundaryHandle>()
}

/// Recovers the typed failure when a descendant returned a [`RenderFailure`].
fn failure_from_error(error: &Error) -> RenderFailure {
    error
        .downcast_ref::<RenderFailure>()
        .cloned()
        .unwrap_or_else(|| RenderFailure::new(error.to_string()))
}

fn descendant_trace(name: &'static str, route: Option<String>) -> ComponentTrace {
    let trace = ComponentTrace::rooted(name);
    match route {
        Some(path) => trace.with(format!("route {path}")),
        None => trace,
    }
}

/// Records the current path in `route` and resets the boundary when the path changes while a
/// failure is captured.
fn follow_navigation(
    pathname: impl Fn() -> String + 'static,
    route: StoredValue<Option<String>>,
    state: RwSignal<BoundaryState>,
    reset: Callback<()>,
) {
    create_effect(move |previous: Option<String>| {
        let path = pathname();
        route.set_value(Some(path.clone()));
        let navigated = matches!(&previous, Some(previous) if *previous != path);
        if navigated && state.with_untracked(BoundaryState::has_error) {
            reset.call(());
        }
        path
    });
}

#[component]
/// Guards `children` and renders a fallback view after a render-phase failure.
pub fn AppErrorBoundary(
    /// Outermost frame in captured traces and the prefix of log lines.
    #[prop(default = "AppErrorBoundary")]
    name: &'static str,
    /// Replaces the built-in recovery screen; reach the boundary through [`use_error_boundary`].
    #[prop(optional, into)]
    fallback: Option<ViewFn>,
    /// Invoked once per captured failure, after the boundary has switched to its fallback state.
    #[prop(optional, into)]
    on_error: Option<Callback<ErrorRecord>>,
    children: ChildrenFn,
) -> impl IntoView {
    run_as_child(move || {
        let guard = store_value(RenderGuard::new(name, use_site_config().boundary).with_reporter(
            move |failure, trace| {
                logging::error!("{name}: render failure captured: {failure}\n{trace}");
            },
        ));
        let state = create_rw_signal(BoundaryState::Clear);
        let generation = create_rw_signal(0_u64);
        let errors = create_rw_signal(Errors::default());
        let route = store_value(None::<String>);
        let fallback = store_value(fallback);

        // The user callback runs outside the guard borrow so it may touch the handle.
        let capture = move |failure: RenderFailure, trace: ComponentTrace| {
            let captured = guard
                .try_update_value(|guard| {
                    guard
                        .capture(failure, trace)
                        .then(|| guard.state().clone())
                })
                .flatten();
            let Some(next) = captured else {
                return;
            };
            let record = next.record().cloned();
            state.set(next);
            if let (Some(on_error), Some(record)) = (on_error, record) {
                on_error.call(record);
            }
        };

        let reset = Callback::new(move |()| {
            guard.update_value(RenderGuard::reset);
            errors.set(Errors::default());
            state.set(BoundaryState::Clear);
            generation.set(guard.with_value(RenderGuard::generation));
        });

        let raise = Callback::new(move |failure: RenderFailure| {
            capture(failure, descendant_trace(name, route.get_value()));
        });

        provide_context(errors);
        provide_context(BoundaryHandle {
            state,
            generation,
            raise,
            reset,
        });

        if use_context::<RouterContext>().is_some() {
            let location = use_location();
            follow_navigation(move || location.pathname.get(), route, state, reset);
        }

        create_effect(move |_| {
            let first = errors.with(|errors| {
                errors
                    .iter()
                    .next()
                    .map(|(_, error)| failure_from_error(error))
            });
            if let Some(failure) = first {
                capture(failure, descendant_trace(name, route.get_value()));
            }
        });

        let render_fallback = move || -> View {
            if let Some(view) =
                fallback.with_value(|fallback| fallback.as_ref().map(ViewFn::run))
            {
                return view;
            }
            let config = use_site_config().boundary;
            let content = guard.try_update_value(|guard| {
                guard.set_config(config);
                guard.recovery_content()
            });
            match content.flatten() {
                Some(content) => view! { <RecoveryScreen content on_retry=reset /> }.into_view(),
                None => ().into_view(),
            }
        };

        // Children render once per generation; the inner closure only picks what to show.
        move || {
            generation.track();
            let children = children.clone();
            let rendered = untrack(move || run_guarded(move || Ok(children().into_view())));
            let view = match rendered {
                Ok(view) => Some(view),
                Err(failure) => {
                    capture(failure, ComponentTrace::rooted(name).with("children"));
                    None
                }
            };
            (move || match &view {
                Some(view) if !state.with(BoundaryState::has_error) => view.clone(),
                _ => render_fallback(),
            })
            .into_view()
        }
    })
}
