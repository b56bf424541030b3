//! Configuration loading
//!
//! Environment variables first, then a JSON or TOML file.

pub mod loader;

pub use loader::{find_config_file, load, load_from_env, load_from_file};
