//! Inline code spans and fenced code blocks. Content in both is literal:
//! entity-decoded, never escaped.

use super::main::{collect_text, element_name};

/// Standalone `code` element: an inline span with a collision-avoiding
/// delimiter. One backtick, upgraded to two when the content itself contains
/// a backtick; longer runs inside the content are not checked.
pub(crate) fn render_code_span(tag: &tl::HTMLTag, parser: &tl::Parser) -> String {
    let content = collect_text(tag, parser);
    let delimiter = if content.contains('`') { "``" } else { "`" };
    format!("{delimiter}{content}{delimiter}")
}

/// `pre` element: a fenced block surrounded by blank lines.
///
/// The body and language come from a nested `code` child when present,
/// otherwise from the `pre` itself. Line endings are normalized to `\n` and
/// the fence is three backticks, four when the body contains a
/// triple-backtick run.
pub(crate) fn render_code_block(tag: &tl::HTMLTag, parser: &tl::Parser) -> String {
    let mut language = String::new();
    let mut content = None;

    let children = tag.children();
    for handle in children.top().iter() {
        if element_name(handle, parser).as_deref() != Some("code") {
            continue;
        }
        if let Some(tl::Node::Tag(inner)) = handle.get(parser) {
            language = language_from_class(inner);
            content = Some(collect_text(inner, parser));
        }
        break;
    }

    let content = content.unwrap_or_else(|| collect_text(tag, parser));
    let content = content.replace("\r\n", "\n").replace('\r', "\n");
    let body = content.trim_matches('\n');
    let fence = if body.contains("```") { "````" } else { "```" };

    format!("\n\n{fence}{language}\n{body}\n{fence}\n\n")
}

/// Language from a `language-x` or `lang-x` class token.
fn language_from_class(tag: &tl::HTMLTag) -> String {
    let Some(class) = tag.attributes().get("class").flatten() else {
        return String::new();
    };
    let class = class.as_utf8_str();
    for token in class.split_whitespace() {
        if let Some(language) = token
            .strip_prefix("language-")
            .or_else(|| token.strip_prefix("lang-"))
        {
            if !language.is_empty() {
                return language.to_string();
            }
        }
    }
    String::new()
}
