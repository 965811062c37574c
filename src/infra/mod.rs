//! Infrastructure layer (adapters/implementations).
//!
//! This module contains IO-heavy integrations (SQLite, filesystem paths,
//! configuration).

pub mod app_config;
pub mod context;
pub mod db;
