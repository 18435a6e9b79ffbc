//! Interactive menu command
//!
//! Wires a fresh inventory to the process's stdin and stdout and runs the
//! session until the user exits or input ends.

use std::io;

use crate::config::StoreConfig;
use crate::error::Result;
use crate::session::Session;
use crate::store::Inventory;

/// Run the interactive menu
pub fn run(config: StoreConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(Inventory::new(config), stdin.lock(), stdout.lock());
    session.run()
}
