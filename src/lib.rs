//! Local persistence bootstrap for the Ivresse application.
//!
//! Resolves the application's private storage area, lazily opens the single
//! SQLite-backed store named `ivresse-database`, and hands the shared
//! handle out through [`state::AppState`].

pub mod domain;
pub mod infra;
pub mod state;
