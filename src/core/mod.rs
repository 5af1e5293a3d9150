//! Core business logic module
//!
//! - `registry` - the in-memory collection of accounts

pub mod registry;

pub use registry::AccountRegistry;
