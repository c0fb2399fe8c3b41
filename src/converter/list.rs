//! List rendering: indented bullet and numbered lines with per-depth
//! counters.

use super::context::RenderContext;
use super::main::{attr_value, element_name, render_node};
use crate::text;

/// Render the direct list-item children of a `ul`/`ol` element.
///
/// Each item's children are rendered as block content under a context one
/// depth deeper, then joined onto bullet lines: continuation lines get a
/// two-space indent so wrapped text and nested lists align under the bullet
/// text rather than the marker. Sibling items are separated by single
/// newlines, never blank lines. A sibling list gets a fresh counter.
pub(crate) fn render_list(
    tag: &tl::HTMLTag,
    parser: &tl::Parser,
    ctx: &RenderContext,
    ordered: bool,
) -> String {
    let start = if ordered {
        attr_value(tag, "start")
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(1)
    } else {
        1
    };

    let mut counter = start;
    let mut lines: Vec<String> = Vec::new();
    let children = tag.children();
    for handle in children.top().iter() {
        if element_name(handle, parser).as_deref() != Some("li") {
            continue;
        }
        let Some(tl::Node::Tag(item)) = handle.get(parser) else {
            continue;
        };

        let item_ctx = ctx.descend_into_item(ordered, counter);
        let mut content = String::new();
        let item_children = item.children();
        for child in item_children.top().iter() {
            content.push_str(&render_node(child, parser, &item_ctx));
        }
        let content = text::squash_blank_lines(content.trim());

        let bullet = if ordered {
            format!("{}. ", item_ctx.ordered_index.last().copied().unwrap_or(counter))
        } else {
            "- ".to_string()
        };

        let mut item_lines = content.split('\n');
        let first = item_lines.next().unwrap_or("");
        lines.push(format!("{bullet}{first}"));
        for line in item_lines {
            lines.push(format!("  {line}"));
        }
        counter += 1;
    }

    if lines.is_empty() {
        return String::new();
    }
    format!("\n\n{}\n\n", lines.join("\n"))
}
