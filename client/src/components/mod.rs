//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render application chrome while reading/writing shared state
//! from Leptos context providers.

pub mod theme_provider;
pub mod theme_toggler;
