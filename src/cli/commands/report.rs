use fintrack_core::{Clock, CurrencyFormatter};

use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;
use crate::cli::table::{Table, TableColumn, TableRenderer};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "summary",
            "Show this month's income and expense and the total balance",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "chart",
            "Show income and expense per month of the current year",
            "chart",
            cmd_chart,
        ),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let totals = context.dashboard.totals();
    let today = context.dashboard.clock().today();
    let formatters = &context.formatters;

    let mut table = Table::new(
        Some(format!("Dashboard ({})", today.format("%B %Y"))),
        vec![TableColumn::new("Card", 20), TableColumn::new("Amount", 10).right()],
    );
    table.add_row(vec![
        "This Month's Income".to_string(),
        formatters.format_amount(totals.monthly_income),
    ]);
    table.add_row(vec![
        "This Month's Expense".to_string(),
        formatters.format_amount(totals.monthly_expense),
    ]);
    table.add_row(vec![
        "This Month's Net".to_string(),
        formatters.format_amount(totals.monthly_net()),
    ]);
    table.add_row(vec![
        "Total Balance".to_string(),
        formatters.format_amount(totals.balance),
    ]);
    TableRenderer::render(&table);
    Ok(())
}

fn cmd_chart(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let series = context.dashboard.monthly_series();
    let formatters = &context.formatters;

    let mut table = Table::new(
        Some(format!("Monthly report {}", series.year)),
        vec![
            TableColumn::new("Month", 5),
            TableColumn::new("Income", 10).right(),
            TableColumn::new("Expense", 10).right(),
            TableColumn::new("Net", 10).right(),
        ],
    );
    for bucket in &series {
        table.add_row(vec![
            bucket.month_label.to_string(),
            formatters.format_amount(bucket.income),
            formatters.format_amount(bucket.expense),
            formatters.format_amount(bucket.net()),
        ]);
    }
    table.add_row(vec![
        "Total".to_string(),
        formatters.format_amount(series.total_income()),
        formatters.format_amount(series.total_expense()),
        formatters.format_amount(series.total_income() - series.total_expense()),
    ]);
    TableRenderer::render(&table);
    Ok(())
}
