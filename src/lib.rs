//! Fibertrack - single-seed fiber-tracking stage runner
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod error;
pub mod naming;
pub mod stage;
pub mod tools;

pub use error::{Error, Result};
