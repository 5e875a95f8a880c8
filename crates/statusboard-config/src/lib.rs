//! Configuration types and loaders for the status board.
//!
//! Owns the on-disk `config.toml` schema so the app and UI crates share a
//! single source of truth.

pub mod board;

pub use board::{config_path, BoardConfig, StatusEntry};
