//! Utility modules for common functionality.
//!
//! This module provides various utility functions and types that are used
//! across the crate. Currently includes:
//!
//! - http: blocking HTTP fetch helper with an explicit timeout
//! - logging: logging utilities

mod http;

pub mod logging;

pub use http::fetch_text;
