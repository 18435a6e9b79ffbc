//! Inventory store
//!
//! Holds the backpack's items in insertion order, up to a fixed capacity.
//! Lookups are a sequential search over the stored items comparing names
//! with ASCII case folding; there is no index.
//!
//! Invariants kept by every operation:
//! - `len() <= capacity()`
//! - every stored quantity is greater than zero
//! - no two stored names are equal ignoring ASCII case

use tracing::debug;

use crate::common::string_utils::clamp_field;
use crate::config::StoreConfig;
use crate::domain::Item;
use crate::error::{
    Result, empty_name, invalid_quantity, not_found, quantity_overflow, store_full,
};

/// What a successful [`Inventory::add`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new item was appended at `position`
    Inserted { position: usize },
    /// The quantity of the existing item at `position` is now `quantity`
    Merged { position: usize, quantity: u32 },
}

/// Parse a quantity typed at the console
///
/// Anything that is not a whole number is rejected here; the sign is
/// checked by [`Inventory::add`].
pub fn parse_quantity(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| invalid_quantity(trimmed))
}

/// Fixed-capacity, insertion-ordered collection of items
#[derive(Debug, Clone)]
pub struct Inventory {
    config: StoreConfig,
    items: Vec<Item>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl Inventory {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            items: Vec::with_capacity(config.capacity),
            config,
        }
    }

    #[cfg(test)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(StoreConfig::with_capacity(capacity))
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.config.capacity
    }

    /// Sequential search: index of the item named `name`, if any
    pub fn position_of(&self, name: &str) -> Option<usize> {
        let key = self.name_key(name);
        self.items.iter().position(|item| item.matches(&key))
    }

    /// Add `quantity` of `name`, merging into an existing stack when present
    ///
    /// A merge keeps the kind the item was first registered with.
    pub fn add(&mut self, name: &str, kind: &str, quantity: i64) -> Result<AddOutcome> {
        if self.is_full() {
            return Err(store_full(self.capacity()));
        }

        let name = self.name_key(name);
        if name.is_empty() {
            return Err(empty_name());
        }

        if quantity <= 0 {
            return Err(invalid_quantity(quantity.to_string()));
        }
        let amount = u32::try_from(quantity).map_err(|_| quantity_overflow(name.as_str()))?;

        if let Some(position) = self.items.iter().position(|item| item.matches(&name)) {
            let item = &mut self.items[position];
            let total = item
                .try_increase(amount)
                .ok_or_else(|| quantity_overflow(item.name()))?;
            debug!(name = %item.name(), added = amount, total, "merged into existing item");
            return Ok(AddOutcome::Merged {
                position,
                quantity: total,
            });
        }

        let kind = clamp_field(kind, self.config.kind_max_chars);
        debug!(name = %name, kind = %kind, quantity = amount, "inserted new item");
        self.items.push(Item::new(name, kind, amount));
        Ok(AddOutcome::Inserted {
            position: self.items.len() - 1,
        })
    }

    /// Remove the item named `name`, closing the gap it leaves
    pub fn remove(&mut self, name: &str) -> Result<Item> {
        let position = self
            .position_of(name)
            .ok_or_else(|| not_found(self.name_key(name)))?;
        let removed = self.items.remove(position);
        debug!(name = %removed.name(), position, "removed item");
        Ok(removed)
    }

    /// Find the item named `name`
    pub fn find(&self, name: &str) -> Result<&Item> {
        let key = self.name_key(name);
        self.items
            .iter()
            .find(|item| item.matches(&key))
            .ok_or_else(|| not_found(key))
    }

    /// All items in storage order
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    fn name_key(&self, name: &str) -> String {
        clamp_field(name, self.config.name_max_chars)
    }
}
