//! Pipe-table rendering.

use super::context::RenderContext;
use super::main::{element_name, render_children};

/// Render a `table` element as a Markdown pipe table, or the empty fragment
/// when no header is determinable.
///
/// Row collection: when any of thead/tbody/tfoot exist their direct rows are
/// collected in that order; otherwise the table's own direct rows are used.
/// The header is the first collected row containing a `th`, falling back to
/// the first row overall, and is excluded from the body. The header fixes
/// the column count; body rows are padded or truncated to match.
pub(crate) fn render_table(tag: &tl::HTMLTag, parser: &tl::Parser, ctx: &RenderContext) -> String {
    let rows = collect_rows(tag, parser);
    if rows.is_empty() {
        return String::new();
    }

    let header_idx = rows
        .iter()
        .position(|row| row_has_header_cell(*row, parser))
        .unwrap_or(0);

    let header_cells = row_cells(rows[header_idx], parser, ctx);
    if header_cells.is_empty() {
        return String::new();
    }
    let width = header_cells.len();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_row(&header_cells, width));
    lines.push(separator_row(width));
    for (idx, row) in rows.iter().enumerate() {
        if idx == header_idx {
            continue;
        }
        lines.push(format_row(&row_cells(*row, parser, ctx), width));
    }

    format!("\n\n{}\n\n", lines.join("\n"))
}

/// Direct rows of the table, honoring section elements when present.
fn collect_rows(tag: &tl::HTMLTag, parser: &tl::Parser) -> Vec<tl::NodeHandle> {
    let mut section_rows = Vec::new();
    let mut saw_section = false;

    for section in ["thead", "tbody", "tfoot"] {
        let children = tag.children();
        for handle in children.top().iter() {
            if element_name(handle, parser).as_deref() != Some(section) {
                continue;
            }
            saw_section = true;
            if let Some(tl::Node::Tag(section_tag)) = handle.get(parser) {
                let section_children = section_tag.children();
                for row in section_children.top().iter() {
                    if element_name(row, parser).as_deref() == Some("tr") {
                        section_rows.push(*row);
                    }
                }
            }
        }
    }
    if saw_section {
        return section_rows;
    }

    let mut direct_rows = Vec::new();
    let children = tag.children();
    for handle in children.top().iter() {
        if element_name(handle, parser).as_deref() == Some("tr") {
            direct_rows.push(*handle);
        }
    }
    direct_rows
}

fn row_has_header_cell(row: tl::NodeHandle, parser: &tl::Parser) -> bool {
    let Some(tl::Node::Tag(row_tag)) = row.get(parser) else {
        return false;
    };
    let children = row_tag.children();
    children
        .top()
        .iter()
        .any(|cell| element_name(cell, parser).as_deref() == Some("th"))
}

/// Cell text is inline-only: internal newlines are flattened to spaces so
/// the table never grows multi-line cells.
fn row_cells(row: tl::NodeHandle, parser: &tl::Parser, ctx: &RenderContext) -> Vec<String> {
    let Some(tl::Node::Tag(row_tag)) = row.get(parser) else {
        return Vec::new();
    };

    let mut cells = Vec::new();
    let children = row_tag.children();
    for handle in children.top().iter() {
        let name = element_name(handle, parser);
        if !matches!(name.as_deref(), Some("td" | "th")) {
            continue;
        }
        if let Some(tl::Node::Tag(cell)) = handle.get(parser) {
            let content = render_children(cell, parser, ctx);
            cells.push(content.split_whitespace().collect::<Vec<_>>().join(" "));
        }
    }
    cells
}

fn format_row(cells: &[String], width: usize) -> String {
    let mut line = String::from("|");
    for idx in 0..width {
        line.push(' ');
        line.push_str(cells.get(idx).map_or("", String::as_str));
        line.push_str(" |");
    }
    line
}

fn separator_row(width: usize) -> String {
    let mut line = String::from("|");
    for _ in 0..width {
        line.push_str(" --- |");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_pad_and_truncate_to_the_header_width() {
        let cells = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(format_row(&cells, 2), "| a | b |");
        assert_eq!(format_row(&cells[..1], 2), "| a |  |");
    }

    #[test]
    fn separator_has_no_alignment_markers() {
        assert_eq!(separator_row(3), "| --- | --- | --- |");
    }
}
