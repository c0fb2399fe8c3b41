//! Inline emphasis: classification from tag identity or inline style, and
//! marker application.

use super::context::RenderContext;
use super::main::render_children;

/// Emphasis derived from an element's tag or `style` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Emphasis {
    pub(crate) bold: bool,
    pub(crate) italic: bool,
    pub(crate) strike: bool,
}

impl Emphasis {
    const fn any(self) -> bool {
        self.bold || self.italic || self.strike
    }
}

/// Classify an element's emphasis. Tag identity and inline style are
/// combined with OR: a `style` attribute can add emphasis to a `<b>` but
/// never remove what the tag already implies.
pub(crate) fn classify(name: &str, tag: &tl::HTMLTag) -> Option<Emphasis> {
    let from_tag = Emphasis {
        bold: matches!(name, "b" | "strong"),
        italic: matches!(name, "i" | "em"),
        strike: matches!(name, "s" | "strike" | "del"),
    };

    let from_style = tag
        .attributes()
        .get("style")
        .flatten()
        .map(|bytes| {
            let style = bytes.as_utf8_str();
            parse_style(style.as_ref())
        })
        .unwrap_or_default();

    let emphasis = Emphasis {
        bold: from_tag.bold || from_style.bold,
        italic: from_tag.italic || from_style.italic,
        strike: from_tag.strike || from_style.strike,
    };
    emphasis.any().then_some(emphasis)
}

/// Parse an inline `style` attribute: declarations split on `;`, each split
/// on the first `:`, both sides trimmed. The last duplicate property wins.
fn parse_style(style: &str) -> Emphasis {
    let mut emphasis = Emphasis::default();
    for declaration in style.split(';') {
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };
        let property = property.trim().to_ascii_lowercase();
        let value = value.trim().to_ascii_lowercase();
        match property.as_str() {
            "font-weight" => {
                emphasis.bold = value == "bold" || value.parse::<u32>().is_ok_and(|weight| weight >= 600);
            }
            "font-style" => {
                emphasis.italic = value == "italic" || value.starts_with("oblique");
            }
            "text-decoration" => {
                emphasis.strike = value.contains("line-through");
            }
            _ => {}
        }
    }
    emphasis
}

/// Wrap the element's rendered content with the markers the classifier
/// chose, applied successively around the same content in the literal order
/// bold, italic, strike. Boundary whitespace is moved outside the markers so
/// they stay flush against the text.
pub(crate) fn render_emphasis(
    tag: &tl::HTMLTag,
    parser: &tl::Parser,
    ctx: &RenderContext,
    emphasis: Emphasis,
) -> String {
    let content = render_children(tag, parser, ctx);
    if content.trim().is_empty() {
        return content;
    }

    let prefix_len = content.len() - content.trim_start().len();
    let (prefix, rest) = content.split_at(prefix_len);
    let core_len = rest.trim_end().len();
    let (core, suffix) = rest.split_at(core_len);

    let mut wrapped = core.to_string();
    if emphasis.bold {
        wrapped = format!("**{wrapped}**");
    }
    if emphasis.italic {
        wrapped = format!("*{wrapped}*");
    }
    if emphasis.strike {
        wrapped = format!("~~{wrapped}~~");
    }
    format!("{prefix}{wrapped}{suffix}")
}
