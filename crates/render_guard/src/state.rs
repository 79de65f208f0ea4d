use crate::ErrorRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Boundary state: either nothing captured, or exactly one captured record.
pub enum BoundaryState {
    /// No failure captured; descendants render normally.
    #[default]
    Clear,
    /// A descendant failed; the fallback view is shown.
    Captured(ErrorRecord),
}

impl BoundaryState {
    /// Returns `true` while a failure is captured.
    pub fn has_error(&self) -> bool {
        matches!(self, Self::Captured(_))
    }

    /// The captured record, if any.
    pub fn record(&self) -> Option<&ErrorRecord> {
        match self {
            Self::Clear => None,
            Self::Captured(record) => Some(record),
        }
    }

    /// Stable token for `data-ui-state` attributes.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Captured(_) => "captured",
        }
    }
}
