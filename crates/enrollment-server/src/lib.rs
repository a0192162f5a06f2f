//! Enrollment API HTTP Server Library
//!
//! Provides the REST API components for the binary and for tests.

pub mod api;
pub mod config;
pub mod error;
