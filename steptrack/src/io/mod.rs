//! I/O helpers: configuration and the steps file.

pub mod config;
pub mod loader;
