//! Domain types for the Ivresse application
//! Defines the storage failure taxonomy shared across the crate.

pub mod error;

pub use error::*;
