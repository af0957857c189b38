//! Shared news feed domain primitives.
//!
//! This crate owns the entry model, request validation, read ordering and
//! identifier generation. It intentionally excludes AWS SDK and Lambda
//! runtime concerns.

pub mod contract;
pub mod ids;
pub mod ordering;
