//! Table rendering helpers.

use tabled::{Table, Tabled, settings::Style};

/// Print a table of rows, or a placeholder when there are none.
pub fn print_table<R: Tabled>(rows: Vec<R>) {
    if rows.is_empty() {
        println!("(none)");
        return;
    }
    println!("{}", Table::new(rows).with(Style::sharp()));
}

/// Render an optional index, `-` when absent.
pub fn optional_index(value: Option<i32>) -> String {
    value.map_or_else(|| "-".into(), |v| v.to_string())
}
