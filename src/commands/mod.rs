//! Command implementations for Backpack CLI

pub mod completions;
pub mod menu;
pub mod version;
