use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use catalog_cli::types::{RunResult, TermSummary};

pub fn print_summary(result: &RunResult) {
    if let Some(dir) = &result.output_dir {
        println!("Output: {}", dir.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Term"),
        header_cell("Rows"),
        header_cell("Records"),
        header_cell("Unparsed"),
        header_cell("Slots"),
        header_cell("Dropped"),
        header_cell("Output"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut totals = TermTotals::default();
    for summary in &result.terms {
        totals.add(summary);
        table.add_row(vec![
            Cell::new(&summary.term).fg(Color::Cyan),
            rows_cell(summary),
            Cell::new(summary.records),
            Cell::new(summary.normalize.unparsed_schedules),
            Cell::new(summary.normalize.slots),
            count_cell(summary.normalize.dropped_entries, Color::Yellow),
            Cell::new(summary.output.display()),
        ]);
    }
    if result.terms.len() > 1 {
        table.add_row(vec![
            Cell::new("TOTAL")
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new(totals.rows).add_attribute(Attribute::Bold),
            Cell::new(totals.records).add_attribute(Attribute::Bold),
            Cell::new(totals.unparsed).add_attribute(Attribute::Bold),
            Cell::new(totals.slots).add_attribute(Attribute::Bold),
            count_cell(totals.dropped, Color::Yellow).add_attribute(Attribute::Bold),
            dim_cell("-"),
        ]);
    }
    println!("{table}");

    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

#[derive(Default)]
struct TermTotals {
    rows: usize,
    records: usize,
    unparsed: usize,
    slots: usize,
    dropped: usize,
}

impl TermTotals {
    fn add(&mut self, summary: &TermSummary) {
        self.rows += summary.rows;
        self.records += summary.records;
        self.unparsed += summary.normalize.unparsed_schedules;
        self.slots += summary.normalize.slots;
        self.dropped += summary.normalize.dropped_entries;
    }
}

/// Row count, flagged when some rows were ragged.
fn rows_cell(summary: &TermSummary) -> Cell {
    if summary.ragged_rows > 0 {
        Cell::new(format!("{} ({} ragged)", summary.rows, summary.ragged_rows)).fg(Color::Yellow)
    } else {
        Cell::new(summary.rows)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
