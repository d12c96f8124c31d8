//! Error types for theme parsing and the toggle controller.

/// Failures surfaced by the toggle controller and its browser adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToggleError {
    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
    /// The view transition's readiness signal rejected.
    #[error("view transition rejected: {0}")]
    TransitionRejected(String),
    /// A required host object is missing (no window, no root element).
    #[error("unsupported environment: {0}")]
    Unsupported(&'static str),
}

/// Failures parsing a persisted or user-supplied theme name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("unknown theme mode: {0}")]
    UnknownMode(String),
}
