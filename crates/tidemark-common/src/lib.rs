//! Common utilities for the Tidemark conformance checker.
//!
//! This crate provides shared infrastructure used by all Tidemark components:
//! - **Warning System** - deduplicated, colored terminal output for conditions
//!   that are worth telling the operator about but are not document diagnostics

pub mod warning;
