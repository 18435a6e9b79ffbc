//! Domain models for Backpack
//!
//! This module contains pure domain objects representing the items carried
//! in the backpack. These types hold no I/O and no store bookkeeping.

pub mod item;

pub use item::Item;
