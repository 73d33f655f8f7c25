//! HTML fragment rendering for the coverage table
//!
//! The document is assembled from three kinds of fragments: a fixed header
//! (XHTML prologue, inline table styling, column headers), one table row per
//! coverage row, and a footer carrying the total branch coverage line. The
//! assembled document is then compacted for plain-text-preview viewers.

use crate::config::ConvertConfig;
use crate::types::{CoverageRow, Percentage};

/// Inline style carried by the table and every row
const GRID_STYLE: &str = "border: 1px solid black; border-collapse: collapse;";

/// Inline style carried by every cell
const CELL_STYLE: &str = "border: 1px solid black; border-collapse: collapse; padding: 5px;";

/// Color for percentages below the configured threshold
const COLOR_LOW: &str = "red";

/// Color for everything at or above it
const COLOR_OK: &str = "darkgreen";

/// Render the document header up to and including the open `<tbody>`
pub fn render_header(title: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">
<html xmlns="http://www.w3.org/1999/xhtml" lang="en">
<head>
<meta http-equiv="Content-Type" content="text/html;charset=UTF-8"/>
<title>{title}</title>
</head>
<body>
<table style="{grid}">
<thead>
<tr style="{grid}">
<th style="{cell}">Group</th>
<th style="{cell}">Package</th>
<th style="{cell}">Class</th>
<th style="{cell}">Instructions</th>
<th style="{cell}">Instructions Coverage</th>
<th style="{cell}">Branch</th>
<th style="{cell}">Branch Coverage</th>
</tr>
</thead>
<tbody>
"#,
        title = escape(title),
        grid = GRID_STYLE,
        cell = CELL_STYLE,
    )
}

/// Render one table row for a coverage row
///
/// Counter cells show `covered : missed`; percentage cells are wrapped in a
/// color span chosen by the configured threshold.
pub fn render_row(row: &CoverageRow, config: &ConvertConfig) -> String {
    let instruction_pct = row.instruction_percentage();
    let branch_pct = row.branch_percentage();
    format!(
        r#"<tr style="{grid}">
<td style="{cell}">{group}</td>
<td style="{cell}">{package}</td>
<td style="{cell}">{class}</td>
<td style="{cell}">{ic} : {im}</td>
<td style="{cell}"><span style="color: {ipct_color}">{ipct}</span></td>
<td style="{cell}">{bc} : {bm}</td>
<td style="{cell}"><span style="color: {bpct_color}">{bpct}</span></td>
</tr>
"#,
        grid = GRID_STYLE,
        cell = CELL_STYLE,
        group = escape(&row.group),
        package = escape(&row.package),
        class = escape(&row.class),
        ic = row.instructions_covered,
        im = row.instructions_missed,
        ipct_color = color_for(&instruction_pct, config),
        ipct = instruction_pct,
        bc = row.branch_covered,
        bm = row.branch_missed,
        bpct_color = color_for(&branch_pct, config),
        bpct = branch_pct,
    )
}

/// Render the footer: close the table, emit the total line, close the document
pub fn render_footer(total: Percentage, config: &ConvertConfig) -> String {
    format!(
        r#"</tbody>
</table>
<h1 style="color: {color}">Total Branch Coverage: {total}</h1>
</body>
</html>
"#,
        color = color_for(&total, config),
        total = total,
    )
}

fn color_for(percentage: &Percentage, config: &ConvertConfig) -> &'static str {
    if config.is_low(percentage) {
        COLOR_LOW
    } else {
        COLOR_OK
    }
}

/// Escape text for use in HTML content and attribute values
pub fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Compact an assembled document for plain-text-preview viewers
///
/// Collapses every whitespace run to a single space, then drops the spaces
/// left between adjacent tag boundaries.
pub fn compact(html: &str) -> String {
    let collapsed = html.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.replace("> <", "><")
}
