//! Plain-text table rendering for finalized report rows.

use crate::report::ReportRow;

const HEADERS: [&str; 3] = ["handler", "total", "avg_response_time"];

/// Render report rows as a three-column table.
///
/// The handler column is left-aligned, numeric columns right-aligned, and
/// averages are shown with three decimal places.
pub fn render_table(rows: &[ReportRow]) -> String {
    let cells: Vec<[String; 3]> = rows
        .iter()
        .map(|row| {
            [
                row.url.clone(),
                row.count.to_string(),
                format!("{:.3}", row.average_time),
            ]
        })
        .collect();

    let mut widths = [HEADERS[0].len(), HEADERS[1].len(), HEADERS[2].len()];
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut lines = Vec::with_capacity(cells.len() + 2);
    lines.push(format!(
        "{:<w0$}  {:>w1$}  {:>w2$}",
        HEADERS[0],
        HEADERS[1],
        HEADERS[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
    ));
    lines.push(format!(
        "{}  {}  {}",
        "-".repeat(widths[0]),
        "-".repeat(widths[1]),
        "-".repeat(widths[2]),
    ));
    for row in &cells {
        lines.push(format!(
            "{:<w0$}  {:>w1$}  {:>w2$}",
            row[0],
            row[1],
            row[2],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
        ));
    }

    lines.join("\n")
}
