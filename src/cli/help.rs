use crate::cli::io;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::table::{Table, TableColumn, TableRenderer};

pub fn print_overview(registry: &CommandRegistry) {
    let mut table = Table::new(
        Some("Available commands"),
        vec![TableColumn::new("Command", 8), TableColumn::new("Description", 20)],
    );
    for entry in registry.list() {
        table.add_row(vec![entry.name, entry.description]);
    }
    TableRenderer::render(&table);
    io::print_hint("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    let mut table = Table::new(
        Some(format!("Help: {}", entry.name)),
        vec![TableColumn::new("Field", 11), TableColumn::new("Value", 20)],
    );
    table.add_row(vec!["description", entry.description]);
    table.add_row(vec!["usage", entry.usage]);
    TableRenderer::render(&table);
}
