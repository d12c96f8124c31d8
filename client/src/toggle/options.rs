//! Tunables for the reveal animation.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

pub const DEFAULT_DURATION_MS: f64 = 700.0;
pub const DEFAULT_EASING: &str = "ease-in-out";
pub const DEFAULT_PSEUDO_ELEMENT: &str = "::view-transition-new(root)";

/// Animation settings for the theme toggler.
///
/// Override single fields with struct update syntax over `Default`.
#[derive(Clone, Debug, PartialEq)]
pub struct ToggleOptions {
    pub duration_ms: f64,
    pub easing: String,
    /// Animation target; only the newly revealed snapshot layer is clipped.
    pub pseudo_element: String,
}

impl Default for ToggleOptions {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            easing: DEFAULT_EASING.to_owned(),
            pseudo_element: DEFAULT_PSEUDO_ELEMENT.to_owned(),
        }
    }
}
