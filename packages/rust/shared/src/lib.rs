//! Shared types, error model, and configuration for claimsift.
//!
//! This crate is the foundation depended on by all other claimsift crates.
//! It provides:
//! - [`ClaimsiftError`] — the unified error type
//! - [`schema`] — column names of the owner-record dataset
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod schema;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, config_dir, config_file_path, init_config, load_config,
    load_config_from,
};
pub use error::{ClaimsiftError, Result};
