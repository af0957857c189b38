//! AWS-oriented adapters and handlers for the news feed functions.
//!
//! This crate owns runtime integration details (Lambda handlers, table
//! access and logging) on top of the domain primitives in `news_core`.

pub mod adapters;
pub mod config;
pub mod handlers;
pub mod telemetry;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
