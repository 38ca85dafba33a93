//! Configuration module for dict2anki.
//!
//! Provides loading of the per-user config file (API key and deck name).

#[allow(clippy::module_inception)]
mod config;

pub use config::Config;
