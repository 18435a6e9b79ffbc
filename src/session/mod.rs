//! Interactive command loop
//!
//! A [`Session`] owns the [`Inventory`] and talks to the user through any
//! `BufRead`/`Write` pair: the real stdin/stdout in the binary, byte buffers
//! in tests. Store errors are reported and the loop continues; only I/O
//! failures end the session with an error. End of input ends it cleanly.

pub mod menu;

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use console::Style;
use tracing::{debug, info};

use crate::common::string_utils::trim_newline;
use crate::error::{BackpackError, Result, store_full};
use crate::store::{Inventory, parse_quantity};
use crate::ui;

pub use menu::MenuChoice;

/// Interactive loop over an owned inventory
pub struct Session<R, W> {
    inventory: Inventory,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(inventory: Inventory, input: R, output: W) -> Self {
        Self {
            inventory,
            input,
            output,
        }
    }

    /// Give back the inventory to inspect it after a scripted run
    #[cfg(test)]
    pub fn into_inventory(self) -> Inventory {
        self.inventory
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        info!(capacity = self.inventory.capacity(), "session started");
        writeln!(
            self.output,
            "{}",
            Style::new()
                .bold()
                .green()
                .apply_to("=== Backpack Inventory (Starting Loot) ===")
        )?;

        loop {
            menu::display_menu(&mut self.output)?;
            let Some(line) = self.read_line()? else {
                debug!("input closed at menu");
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(
                    self.output,
                    "{}",
                    Style::new().red().apply_to("Invalid option. Try again.")
                )?;
                continue;
            };
            debug!(?choice, "menu choice");

            if self.handle(choice)?.is_break() {
                break;
            }
        }

        self.output.flush()?;
        info!(items = self.inventory.len(), "session ended");
        Ok(())
    }

    /// Carry out one menu choice
    pub fn handle(&mut self, choice: MenuChoice) -> Result<ControlFlow<()>> {
        match choice {
            MenuChoice::Add => self.add_item(),
            MenuChoice::Remove => self.remove_item(),
            MenuChoice::Find => self.find_item(),
            MenuChoice::List => {
                ui::display_inventory(&mut self.output, &self.inventory)?;
                Ok(ControlFlow::Continue(()))
            }
            MenuChoice::Exit => {
                writeln!(self.output, "Leaving. See you next time!")?;
                Ok(ControlFlow::Break(()))
            }
        }
    }

    fn add_item(&mut self) -> Result<ControlFlow<()>> {
        if self.inventory.is_full() {
            self.report(&store_full(self.inventory.capacity()))?;
            ui::display_inventory(&mut self.output, &self.inventory)?;
            return Ok(ControlFlow::Continue(()));
        }

        writeln!(self.output, "\n{}", Style::new().bold().apply_to("Add new item"))?;
        let config = *self.inventory.config();

        let Some(name) = self.prompt(&format!("Name (up to {} chars): ", config.name_max_chars))?
        else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(kind) = self.prompt(&format!(
            "Kind (e.g. weapon, ammo, healing) (up to {} chars): ",
            config.kind_max_chars
        ))?
        else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(quantity) = self.prompt("Quantity: ")? else {
            return Ok(ControlFlow::Break(()));
        };

        let result =
            parse_quantity(&quantity).and_then(|qty| self.inventory.add(&name, &kind, qty));
        match result {
            Ok(outcome) => ui::display_add_outcome(&mut self.output, outcome)?,
            Err(err) => self.report(&err)?,
        }

        ui::display_inventory(&mut self.output, &self.inventory)?;
        Ok(ControlFlow::Continue(()))
    }

    fn remove_item(&mut self) -> Result<ControlFlow<()>> {
        writeln!(self.output, "\n{}", Style::new().bold().apply_to("Remove item"))?;
        let Some(name) = self.prompt("Name of the item to remove: ")? else {
            return Ok(ControlFlow::Break(()));
        };

        match self.inventory.remove(&name) {
            Ok(removed) => ui::display_removed(&mut self.output, &removed)?,
            Err(err) => self.report(&err)?,
        }

        ui::display_inventory(&mut self.output, &self.inventory)?;
        Ok(ControlFlow::Continue(()))
    }

    fn find_item(&mut self) -> Result<ControlFlow<()>> {
        writeln!(self.output, "\n{}", Style::new().bold().apply_to("Find item"))?;
        let Some(name) = self.prompt("Name of the item: ")? else {
            return Ok(ControlFlow::Break(()));
        };

        match self.inventory.find(&name) {
            Ok(item) => ui::display_item_detail(&mut self.output, item)?,
            Err(err) => self.report(&err)?,
        }

        ui::display_inventory(&mut self.output, &self.inventory)?;
        Ok(ControlFlow::Continue(()))
    }

    /// Show a recoverable error, hand back anything else
    fn report(&mut self, err: &BackpackError) -> Result<()> {
        if !err.is_recoverable() {
            return Err(err.clone());
        }
        debug!(error = %err, "operation rejected");
        ui::display_error(&mut self.output, err)?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Next input line without its terminator, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(trim_newline(&line).to_string()))
    }
}
