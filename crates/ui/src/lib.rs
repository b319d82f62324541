//! Atrium UI: accessible, styleable form and calendar components for Dioxus.
//!
//! Every component renders plain DOM with semantic class names, `data-*`
//! variant attributes and explicit ARIA roles, so the same markup works under
//! web, desktop and server-side rendering. State is either owned by the
//! component (uncontrolled) or by the caller (controlled); see
//! [`components::controlled`].

pub mod attrs;
pub mod components;
pub mod id;
pub mod theme;

pub use components::*;
pub use theme::{ThemeFamily, ThemeState};
