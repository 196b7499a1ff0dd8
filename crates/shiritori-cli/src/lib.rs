//! Library components of the shiritori CLI.

pub mod config;
pub mod logging;
