//! Display functions for the backpack and its items
//!
//! Everything is written to a caller supplied writer so the session can be
//! driven against a buffer in tests. `console::Style` drops its escape codes
//! on its own when stdout is not a terminal.

use std::io::{self, Write};

use console::Style;

use crate::domain::Item;
use crate::error::BackpackError;
use crate::store::{AddOutcome, Inventory};

/// Render the full listing: header with counts, then one line per item
pub fn display_inventory<W: Write>(out: &mut W, inventory: &Inventory) -> io::Result<()> {
    writeln!(
        out,
        "\n{}",
        Style::new().bold().apply_to(format!(
            "--- Backpack contents ({}/{}) ---",
            inventory.len(),
            inventory.capacity()
        ))
    )?;

    if inventory.is_empty() {
        writeln!(out, "{}", Style::new().dim().apply_to("Backpack is empty."))?;
        return Ok(());
    }

    for (index, item) in inventory.list().iter().enumerate() {
        display_item_line(out, index + 1, item)?;
    }
    Ok(())
}

fn display_item_line<W: Write>(out: &mut W, number: usize, item: &Item) -> io::Result<()> {
    writeln!(
        out,
        "{}) Name: {} | Kind: {} | Quantity: {}",
        number,
        Style::new().bold().yellow().apply_to(item.name()),
        item.kind(),
        item.quantity()
    )
}

/// Render a single item found by name
pub fn display_item_detail<W: Write>(out: &mut W, item: &Item) -> io::Result<()> {
    writeln!(out, "{}", Style::new().green().apply_to("Item found:"))?;
    writeln!(out, "{} {}", Style::new().bold().apply_to("Name:"), item.name())?;
    writeln!(out, "{} {}", Style::new().bold().apply_to("Kind:"), item.kind())?;
    writeln!(
        out,
        "{} {}",
        Style::new().bold().apply_to("Quantity:"),
        item.quantity()
    )
}

/// Report the outcome of an add, naming the slot as numbered in the listing
pub fn display_add_outcome<W: Write>(out: &mut W, outcome: AddOutcome) -> io::Result<()> {
    let message = match outcome {
        AddOutcome::Inserted { position } => {
            format!("Item added successfully to slot {}.", position + 1)
        }
        AddOutcome::Merged { position, quantity } => format!(
            "Item already in backpack (slot {}). Quantity updated to {quantity}.",
            position + 1
        ),
    };
    writeln!(out, "{}", Style::new().green().apply_to(message))
}

/// Report a removed item
pub fn display_removed<W: Write>(out: &mut W, item: &Item) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        Style::new()
            .green()
            .apply_to(format!("Item '{}' removed successfully.", item.name()))
    )
}

/// Report a store error the session recovers from
pub fn display_error<W: Write>(out: &mut W, err: &BackpackError) -> io::Result<()> {
    let message = match err {
        BackpackError::StoreFull { .. } => {
            "Backpack is full! Remove an item before adding another.".to_string()
        }
        BackpackError::InvalidQuantity { .. } => {
            "Invalid quantity. Operation cancelled.".to_string()
        }
        other => other.to_string(),
    };
    writeln!(out, "{}", Style::new().red().apply_to(message))
}
