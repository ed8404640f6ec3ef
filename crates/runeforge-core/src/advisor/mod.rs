//! Build advice: stat growth under a playstyle and weapon suggestions.

pub mod allocation;
pub mod recommend;
pub mod registry;
pub mod report;
