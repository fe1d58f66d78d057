//! Canastra test support utilities
//!
//! Shared helpers for the backend integration suites: unified logging
//! initialization, response envelope assertions, and unique test data.

pub mod envelope;
pub mod logging;
pub mod unique_helpers;
