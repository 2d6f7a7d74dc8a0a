//! # uiprefs-domain
//!
//! Pure domain model for the uiprefs page-preference controller.
//!
//! ## Responsibilities
//! - Define the two preferences: [`theme::ThemeMode`] and [`sidebar::SidebarState`]
//! - Define how each preference is persisted as a string and how it is shown
//!   on its toggle control ([`label::ControlLabel`])
//! - Define **change records** ([`event::PreferenceChanged`])
//! - Define the error taxonomy shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod event;
pub mod label;
pub mod sidebar;
pub mod theme;
