//! Circular reveal geometry.
//!
//! The reveal grows a circle from the toggle's center until it covers the
//! farthest viewport corner.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use super::options::ToggleOptions;

/// Screen-space point the reveal grows from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerOrigin {
    pub x: f64,
    pub y: f64,
}

impl PointerOrigin {
    /// Center of a bounding box given in client coordinates.
    pub fn center_of(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { x: left + width / 2.0, y: top + height / 2.0 }
    }
}

/// Inner size of the browser viewport in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Distance from `origin` to the farthest viewport corner.
pub fn reveal_radius(origin: PointerOrigin, viewport: Viewport) -> f64 {
    let dx = origin.x.max(viewport.width - origin.x);
    let dy = origin.y.max(viewport.height - origin.y);
    (dx * dx + dy * dy).sqrt()
}

/// Fully resolved clip-path animation handed to the browser.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealAnimation {
    pub origin: PointerOrigin,
    pub radius: f64,
    pub duration_ms: f64,
    pub easing: String,
    pub pseudo_element: String,
}

impl RevealAnimation {
    pub fn new(origin: PointerOrigin, viewport: Viewport, options: &ToggleOptions) -> Self {
        Self {
            origin,
            radius: reveal_radius(origin, viewport),
            duration_ms: options.duration_ms,
            easing: options.easing.clone(),
            pseudo_element: options.pseudo_element.clone(),
        }
    }

    /// `clip-path` keyframes: a zero circle growing to the full radius.
    pub fn clip_path_keyframes(&self) -> [String; 2] {
        let PointerOrigin { x, y } = self.origin;
        [
            format!("circle(0px at {x}px {y}px)"),
            format!("circle({}px at {x}px {y}px)", self.radius),
        ]
    }
}
