//! Plain-text rendering of a result table.

use std::fmt::Write;

use lift_sim::ResultTable;

/// Render `table` with a `Time` column followed by one column per elevator.
pub fn render(table: &ResultTable) -> String {
    let headers: Vec<String> = std::iter::once("Time".to_owned())
        .chain(table.headers.iter().map(|h| format!("{h} (Floor|Total)")))
        .collect();

    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|r| std::iter::once(r.time()).chain(r.labels.iter().cloned()).collect())
        .collect();

    let widths: Vec<usize> = (0..headers.len())
        .map(|col| {
            rows.iter()
                .map(|r| r[col].len())
                .chain(std::iter::once(headers[col].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_line(&mut out, &headers, &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", line.join(" | ").trim_end());
}
