//! Runtime settings.

pub mod config;
