//! # uiprefs-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Document` — root attribute, container class, and control label access
//!   - `PreferenceStore` — synchronous string key/value persistence
//!   - `ChangePublisher` — notification of preference changes
//! - Define the **driving/inbound** use-case: `PreferenceController`
//!   (`initialize`, `on_ready`, `toggle_theme`, `toggle_sidebar`, …)
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (in-memory store, session fallback store, local event bus)
//! - Own the controller configuration
//!
//! ## Dependency rule
//! Depends on `uiprefs-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod event_bus;
pub mod fallback_store;
pub mod memory_store;
pub mod ports;
pub mod services;
