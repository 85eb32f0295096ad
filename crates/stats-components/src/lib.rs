//! # stats-components
//!
//! Leptos shell for the statistics dashboard: filter panel, placeholder,
//! chapter info card and chart cards.

pub mod chapter;
pub mod config;
pub mod dashboard;
pub mod filter;

pub use chapter::*;
pub use config::*;
pub use dashboard::*;
pub use filter::*;
