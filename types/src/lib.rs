//! Shared types for Zenith
//!
//! The hero data model decoded from `data.json` and the page configuration
//! consumed by both the headless core and the web frontend.

pub mod config;
pub mod formatting;
pub mod hero;

pub use config::PageConfig;
pub use hero::{HeroRecord, SeriesGroup, Variant};

/// Sentinel role identifier that disables role filtering.
pub const ROLE_ALL: &str = "all";
