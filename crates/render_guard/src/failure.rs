//! Captured failure values and the trace describing where they originated.

use std::any::Any;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A failure raised by a descendant while its view was being rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct RenderFailure {
    message: String,
    component: Option<String>,
}

impl RenderFailure {
    /// Creates a failure with the given message and no known origin.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            component: None,
        }
    }

    /// Tags the failure with the name of the component that raised it.
    pub fn in_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Builds a failure from a panic payload recovered by `catch_unwind`.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&'static str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "render panicked with a non-string payload".to_string()
        };
        Self::new(message)
    }

    /// Human-readable failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Name of the originating component, when known.
    pub fn component(&self) -> Option<&str> {
        self.component.as_deref()
    }
}

impl From<String> for RenderFailure {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for RenderFailure {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Ordered component frames, outermost first, leading to a failed descendant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentTrace {
    frames: Vec<String>,
}

impl ComponentTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a trace rooted at `frame`.
    pub fn rooted(frame: impl Into<String>) -> Self {
        Self {
            frames: vec![frame.into()],
        }
    }

    /// Appends an inner frame.
    pub fn push(&mut self, frame: impl Into<String>) {
        let frame = frame.into();
        if !frame.is_empty() {
            self.frames.push(frame);
        }
    }

    /// Returns a copy of the trace with `frame` appended.
    pub fn with(mut self, frame: impl Into<String>) -> Self {
        self.push(frame);
        self
    }

    /// Frames from outermost to innermost.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Innermost frame, i.e. the component closest to the failure.
    pub fn innermost(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    /// Returns `true` when no frame was recorded.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl fmt::Display for ComponentTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, frame) in self.frames.iter().enumerate() {
            if depth > 0 {
                writeln!(f)?;
            }
            write!(f, "{:indent$}in <{frame}>", "", indent = depth * 2)?;
        }
        Ok(())
    }
}

/// A captured failure together with the trace of the descendant that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// The captured failure.
    pub failure: RenderFailure,
    /// Which descendant produced the failure.
    pub trace: ComponentTrace,
}

impl ErrorRecord {
    /// Builds a record, extending the trace with the failure's own origin when it names one.
    pub fn new(failure: RenderFailure, mut trace: ComponentTrace) -> Self {
        if let Some(component) = failure.component() {
            if trace.innermost() != Some(component) {
                trace.push(component);
            }
        }
        Self { failure, trace }
    }
}
