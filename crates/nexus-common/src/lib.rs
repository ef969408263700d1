//! # nexus-common
//!
//! Shared error types, validation primitives, and configuration used by the Nexus builder crates.
//! This is the foundation layer — no component knowledge, just primitives and contracts.

pub mod config;
pub mod error;
pub mod snowflake;
pub mod validation;

pub use error::ValidationError;
pub use snowflake::Snowflake;
