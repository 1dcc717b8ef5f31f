//! Shared plumbing: configuration and load errors.

pub mod config;
pub mod error;

pub use config::CatalogConfig;
pub use error::{LoadError, Result};
