//! Item domain type
//!
//! One stack of a resource: a name used as the key, a free-text kind and a
//! positive quantity.

use std::fmt;

/// A named, typed, quantified stack held in the backpack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    kind: String,
    quantity: u32,
}

impl Item {
    pub(crate) fn new(name: String, kind: String, quantity: u32) -> Self {
        Self {
            name,
            kind,
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Whether `key` names this item, ignoring ASCII case
    pub fn matches(&self, key: &str) -> bool {
        self.name.eq_ignore_ascii_case(key)
    }

    /// Add to the stack, `None` on overflow (the item is left untouched)
    pub(crate) fn try_increase(&mut self, amount: u32) -> Option<u32> {
        let total = self.quantity.checked_add(amount)?;
        self.quantity = total;
        Some(total)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {} | Kind: {} | Quantity: {}",
            self.name, self.kind, self.quantity
        )
    }
}
