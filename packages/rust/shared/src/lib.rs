//! Shared types, error model, and configuration for docdex.
//!
//! This crate is the foundation depended on by all other docdex crates.
//! It provides:
//! - [`DocdexError`] — the unified error type
//! - Domain types ([`Component`], [`Document`], [`Segment`], [`Reference`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, config_dir, config_file_path, init_config, load_config,
    load_config_from,
};
pub use error::{DocdexError, Result};
pub use types::{
    CURRENT_MANIFEST_VERSION, Category, Component, ComponentKind, Document, IndexFileMeta,
    IndexManifest, Reference, ReferenceIndex, Segment,
};
