use colored::Colorize;

use crate::cli::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Declarative description of a table column.
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: String,
    pub width: usize,
    pub align: Align,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
            align: Align::Left,
        }
    }

    pub fn right(mut self) -> Self {
        self.align = Align::Right;
        self
    }
}

/// Simple table model used for rendering read-only overviews.
#[derive(Debug, Clone)]
pub struct Table {
    pub title: Option<String>,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub empty_message: Option<String>,
}

impl Table {
    pub fn new<T: Into<String>>(title: Option<T>, columns: Vec<TableColumn>) -> Self {
        Self {
            title: title.map(|value| value.into()),
            columns,
            rows: Vec::new(),
            empty_message: None,
        }
    }

    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = Some(message.into());
        self
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: Vec<S>) {
        self.rows
            .push(cells.into_iter().map(|value| value.into()).collect());
    }

    /// Lays the table out as plain lines, no color.
    pub fn lines(&self) -> Vec<String> {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(idx))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(column.header.chars().count()))
                    .chain(std::iter::once(column.width))
                    .max()
                    .unwrap_or(column.width)
            })
            .collect();
        let total_width = widths.iter().map(|w| w + 1).sum::<usize>().saturating_sub(1);

        let mut lines = Vec::new();
        let headers: Vec<&str> = self.columns.iter().map(|col| col.header.as_str()).collect();
        lines.push(self.render_row(&headers, &widths));
        lines.push("-".repeat(total_width.max(1)));

        if self.rows.is_empty() {
            if let Some(message) = &self.empty_message {
                lines.push(message.clone());
            }
        }
        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            lines.push(self.render_row(&cells, &widths));
        }
        lines
    }

    fn render_row(&self, cells: &[&str], widths: &[usize]) -> String {
        let mut line = String::new();
        for (idx, column) in self.columns.iter().enumerate() {
            if idx > 0 {
                line.push(' ');
            }
            let cell = cells.get(idx).copied().unwrap_or("");
            let width = widths.get(idx).copied().unwrap_or(column.width);
            let padding = width.saturating_sub(cell.chars().count());
            match column.align {
                Align::Left => {
                    line.push_str(cell);
                    line.push_str(&" ".repeat(padding));
                }
                Align::Right => {
                    line.push_str(&" ".repeat(padding));
                    line.push_str(cell);
                }
            }
        }
        line.trim_end().to_string()
    }
}

/// Prints [`Table`] instances using padded columns.
pub struct TableRenderer;

impl TableRenderer {
    pub fn render(table: &Table) {
        if let Some(title) = &table.title {
            output::section(title);
        }
        let color = output::preferences().color_enabled;
        for (idx, line) in table.lines().into_iter().enumerate() {
            if idx == 0 && color {
                println!("{}", line.bold());
            } else {
                println!("{}", line);
            }
        }
    }
}
