//! `notifi-history` library crate.
//!
//! Re-exports internal modules for integration testing. The binary
//! entrypoint lives in `main.rs`.

pub mod args;
pub mod config;
pub mod input;
pub mod locale;
pub mod output;
