use fintrack_core::{format_table_date, DateFormatter, TransactionForm};
use fintrack_domain::Transaction;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::table::{Table, TableColumn, TableRenderer};

const ADD_USAGE: &str = "add <earning|spent> <YYYY-MM-DD> <amount> <description...>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("add", "Record an earning or an expense", ADD_USAGE, cmd_add),
        CommandEntry::new(
            "list",
            "List transactions, newest first",
            "list [search text]",
            cmd_list,
        ),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [kind, date, amount, description @ ..] = args else {
        return Err(CommandError::InvalidArguments(format!("usage: {ADD_USAGE}")));
    };
    if description.is_empty() {
        return Err(CommandError::InvalidArguments(format!("usage: {ADD_USAGE}")));
    }

    let form = TransactionForm::new(*kind, *date, *amount, description.join(" "));
    let id = context.dashboard.submit(&form)?;
    let stored = context.dashboard.store().get(id)?;
    let date = stored
        .date()
        .map(|date| context.formatters.format_date(date))
        .unwrap_or_else(|| format_table_date(stored.timestamp));
    io::print_success(format!(
        "Transaction added: {} {} on {}",
        stored.description,
        context.formatters.format_signed(stored.amount),
        date
    ));
    Ok(())
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let query = args.join(" ");
    let transactions = context.dashboard.search(&query);
    let title = if query.trim().is_empty() {
        "Latest transactions".to_string()
    } else {
        format!("Transactions matching \"{}\"", query.trim())
    };
    let table = transaction_table(context, title, &transactions);
    TableRenderer::render(&table);
    Ok(())
}

fn transaction_table(context: &ShellContext, title: String, transactions: &[&Transaction]) -> Table {
    let mut table = Table::new(
        Some(title),
        vec![
            TableColumn::new("Date", 12),
            TableColumn::new("Description", 16),
            TableColumn::new("Type", 10),
            TableColumn::new("Amount", 10).right(),
        ],
    )
    .with_empty_message("No transactions yet.");

    for txn in transactions {
        table.add_row(vec![
            format_table_date(txn.timestamp),
            txn.description.clone(),
            txn.label.clone(),
            context.formatters.format_signed(txn.amount),
        ]);
    }
    table
}
