//! Terminal presentation layer
//!
//! Rendering of the backpack listing, single items and operation results.
//! The interactive loop in [`crate::session`] decides what to show; this
//! module only decides how it looks.

pub mod display;

pub use display::{
    display_add_outcome, display_error, display_inventory, display_item_detail, display_removed,
};
