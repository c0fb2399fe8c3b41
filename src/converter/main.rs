//! Conversion entry points and the recursive render dispatcher.
//!
//! The dispatcher visits every node depth first; each visit returns a
//! Markdown fragment which the parent concatenates. There is no intermediate
//! AST: rendering is single-pass text production, and the final document is
//! normalized once at the end.

use std::borrow::Cow;

use log::{debug, trace};
use url::Url;

use super::context::RenderContext;
use super::{code, inline, link, list, table};
use crate::error::{ConversionError, Result};
use crate::options::ConvertOptions;
use crate::text;

/// Converts HTML text to Markdown using the provided options.
///
/// This is the main entry point. Parsing is delegated to `tl`; everything
/// the parser can produce renders without error.
///
/// # Errors
///
/// Returns [`ConversionError::Parse`] when the input cannot be parsed into
/// a DOM tree.
pub fn convert(html: &str, options: &ConvertOptions) -> Result<String> {
    trace!("converting {} bytes of HTML", html.len());
    let dom = tl::parse(html, tl::ParserOptions::default())
        .map_err(|_| ConversionError::Parse("failed to parse HTML".to_string()))?;
    Ok(render_dom(&dom, options))
}

/// Renders an already-parsed DOM tree to Markdown.
///
/// Total over any tree: unrecognized elements fall back to inline
/// passthrough, malformed URLs are emitted unresolved, and a table without a
/// determinable header renders empty. Non-empty output ends in exactly one
/// trailing newline and never contains a run of three or more newlines.
#[must_use]
pub fn render_dom(dom: &tl::VDom<'_>, options: &ConvertOptions) -> String {
    let base_url = options.base_url.as_deref().and_then(|raw| match Url::parse(raw) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            debug!("ignoring unusable base URL {raw:?}: {err}");
            None
        }
    });
    let ctx = RenderContext::new(base_url);
    let parser = dom.parser();

    let mut rendered = String::new();
    for handle in dom.children() {
        rendered.push_str(&render_node(handle, parser, &ctx));
    }
    text::normalize_document(&rendered)
}

/// Render a single DOM node to a Markdown fragment.
pub(crate) fn render_node(handle: &tl::NodeHandle, parser: &tl::Parser, ctx: &RenderContext) -> String {
    let Some(node) = handle.get(parser) else {
        return String::new();
    };

    match node {
        tl::Node::Raw(bytes) => {
            let raw = bytes.as_utf8_str();
            let decoded = text::decode_entities(raw.as_ref());
            let collapsed = text::collapse_text_whitespace(decoded.as_ref());
            text::escape_markdown(&collapsed)
        }
        tl::Node::Comment(_) => String::new(),
        tl::Node::Tag(tag) => render_element(tag, parser, ctx),
    }
}

/// Dispatch on tag identity, in priority order. Later rules only see tags
/// the earlier ones rejected.
fn render_element(tag: &tl::HTMLTag, parser: &tl::Parser, ctx: &RenderContext) -> String {
    let name = normalized_tag_name(tag.name().as_utf8_str());

    match name.as_ref() {
        "script" | "style" | "noscript" | "meta" | "link" | "title" => String::new(),
        "br" => "  \n".to_string(),
        "hr" => "\n\n---\n\n".to_string(),
        "img" => link::render_image(tag, ctx),
        "a" => link::render_link(tag, parser, ctx),
        "code" => code::render_code_span(tag, parser),
        "pre" => code::render_code_block(tag, parser),
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => render_heading(name.as_ref(), tag, parser, ctx),
        "blockquote" => render_blockquote(tag, parser, ctx),
        "ul" => list::render_list(tag, parser, ctx, false),
        "ol" => list::render_list(tag, parser, ctx, true),
        "table" => table::render_table(tag, parser, ctx),
        other => {
            if let Some(emphasis) = inline::classify(other, tag) {
                inline::render_emphasis(tag, parser, ctx, emphasis)
            } else if is_block_tag(other) {
                let content = render_children(tag, parser, ctx);
                let trimmed = content.trim();
                if trimmed.is_empty() {
                    String::new()
                } else {
                    format!("\n\n{trimmed}\n\n")
                }
            } else {
                render_children(tag, parser, ctx)
            }
        }
    }
}

/// Concatenate the rendered fragments of an element's children.
pub(crate) fn render_children(tag: &tl::HTMLTag, parser: &tl::Parser, ctx: &RenderContext) -> String {
    let mut out = String::new();
    let children = tag.children();
    for handle in children.top().iter() {
        out.push_str(&render_node(handle, parser, ctx));
    }
    out
}

fn render_heading(name: &str, tag: &tl::HTMLTag, parser: &tl::Parser, ctx: &RenderContext) -> String {
    let level = name
        .chars()
        .last()
        .and_then(|c| c.to_digit(10))
        .unwrap_or(1)
        .clamp(1, 6) as usize;

    let content = render_children(tag, parser, ctx);
    let flat = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.is_empty() {
        return String::new();
    }
    format!("\n\n{} {flat}\n\n", "#".repeat(level))
}

/// Blockquote content is rendered inline and line-prefixed; nested block
/// elements are flattened into the quoted lines rather than re-split.
fn render_blockquote(tag: &tl::HTMLTag, parser: &tl::Parser, ctx: &RenderContext) -> String {
    let content = render_children(tag, parser, ctx);
    let collapsed = text::collapse_blank_lines(content.trim());
    if collapsed.is_empty() {
        return String::new();
    }

    let mut quoted = String::with_capacity(collapsed.len() + 16);
    for line in collapsed.split('\n') {
        if !quoted.is_empty() {
            quoted.push('\n');
        }
        if line.is_empty() {
            quoted.push('>');
        } else {
            quoted.push_str("> ");
            quoted.push_str(line);
        }
    }
    format!("\n\n{quoted}\n\n")
}

/// Membership in the fixed block-tag set is a pure function of tag identity,
/// never of content or position. Tags with dedicated rules (headings, lists,
/// tables, pre, blockquote, hr) are dispatched before this set is consulted.
fn is_block_tag(name: &str) -> bool {
    matches!(
        name,
        "address"
            | "article"
            | "aside"
            | "dd"
            | "details"
            | "dialog"
            | "div"
            | "dl"
            | "dt"
            | "fieldset"
            | "figcaption"
            | "figure"
            | "footer"
            | "form"
            | "header"
            | "hgroup"
            | "main"
            | "nav"
            | "p"
            | "section"
            | "summary"
    )
}

/// Lowercase a tag name, borrowing when it already is lowercase.
pub(crate) fn normalized_tag_name(name: Cow<'_, str>) -> Cow<'_, str> {
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        name
    }
}

/// Tag name of the element behind `handle`, lowercased; `None` for text and
/// comment nodes.
pub(crate) fn element_name(handle: &tl::NodeHandle, parser: &tl::Parser) -> Option<String> {
    match handle.get(parser) {
        Some(tl::Node::Tag(tag)) => Some(normalized_tag_name(tag.name().as_utf8_str()).into_owned()),
        _ => None,
    }
}

/// Entity-decoded attribute value, if the attribute is present with a value.
pub(crate) fn attr_value(tag: &tl::HTMLTag, name: &str) -> Option<String> {
    tag.attributes().get(name).flatten().map(|bytes| {
        let raw = bytes.as_utf8_str();
        text::decode_entities(raw.as_ref()).into_owned()
    })
}

/// Literal text content of an element's subtree, entity-decoded but neither
/// escaped nor whitespace-collapsed. Code spans and fenced blocks read their
/// bodies through this.
pub(crate) fn collect_text(tag: &tl::HTMLTag, parser: &tl::Parser) -> String {
    let mut out = String::new();
    let children = tag.children();
    for handle in children.top().iter() {
        match handle.get(parser) {
            Some(tl::Node::Raw(bytes)) => {
                let raw = bytes.as_utf8_str();
                out.push_str(text::decode_entities(raw.as_ref()).as_ref());
            }
            Some(tl::Node::Tag(inner)) => out.push_str(&collect_text(inner, parser)),
            _ => {}
        }
    }
    out
}
