//! Application state shared through Leptos context.
//!
//! DESIGN
//! ======
//! State types here are plain data so they can be unit-tested without a
//! browser or reactive runtime.

pub mod theme;
