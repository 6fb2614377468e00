//! Integration test utilities for the ban list gate
//!
//! This crate serves a fake ban list feed over HTTP and provides CSV fixtures for
//! end-to-end tests of the fetch, decode and login gate pipeline.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
