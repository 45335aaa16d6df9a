use fintrack_config::model::CONFIG_KEYS;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::table::{Table, TableColumn, TableRenderer};

const CONFIG_USAGE: &str = "config [show | set <key> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change display preferences",
        CONFIG_USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => show(context),
        ["set", key, value @ ..] if !value.is_empty() => set(context, key, &value.join(" ")),
        _ => Err(CommandError::InvalidArguments(format!(
            "usage: {CONFIG_USAGE} (keys: {})",
            CONFIG_KEYS.join(", ")
        ))),
    }
}

fn show(context: &ShellContext) -> CommandResult {
    let mut table = Table::new(
        Some("Configuration"),
        vec![TableColumn::new("Key", 18), TableColumn::new("Value", 10)],
    );
    for (key, value) in context.config_read().entries() {
        table.add_row(vec![key.to_string(), value]);
    }
    TableRenderer::render(&table);
    io::print_info(format!(
        "Stored at {}",
        context.config_manager.config_path().display()
    ));
    Ok(())
}

fn set(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    context.config_write().set(key, value)?;
    context.persist_config()?;
    io::print_success(format!("Updated `{}`.", key));
    Ok(())
}
