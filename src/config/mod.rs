//! Configuration module for Sahla Budget
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SahlaPaths;
pub use settings::{Language, Settings};
