//! Main menu options and their rendering

use std::io::{self, Write};

use console::Style;

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Find,
    List,
    Exit,
}

impl MenuChoice {
    /// Parse a menu line; `None` for anything that is not a listed option
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().parse::<i64>().ok()? {
            1 => Some(MenuChoice::Add),
            2 => Some(MenuChoice::Remove),
            3 => Some(MenuChoice::Find),
            4 => Some(MenuChoice::List),
            0 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU_ENTRIES: [(u8, &str); 5] = [
    (1, "Add item"),
    (2, "Remove item by name"),
    (3, "Find item by name (sequential search)"),
    (4, "List items"),
    (0, "Exit"),
];

/// Write the menu followed by the option prompt
pub fn display_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", Style::new().bold().apply_to("Choose an option:"))?;
    for (key, label) in MENU_ENTRIES {
        writeln!(out, "{} - {}", Style::new().cyan().bold().apply_to(key), label)?;
    }
    write!(out, "Option: ")?;
    out.flush()
}
