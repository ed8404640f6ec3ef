//! Shared domain types for Runeforge.
//!
//! Character classes, profiles, weapons, playstyles, configuration and the
//! error enums used across the workspace.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod character;
pub mod config;
pub mod error;
pub mod playstyle;
pub mod stats;
pub mod weapon;
