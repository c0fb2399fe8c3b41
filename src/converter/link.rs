//! Links and images, including base-URL resolution.

use url::Url;

use super::context::RenderContext;
use super::main::{attr_value, render_children};
use crate::text;

/// Resolve `raw` against the base URL, if any. Resolution is pure string
/// manipulation and fails open: on error the original string is used
/// verbatim.
pub(crate) fn resolve_url(raw: &str, base_url: Option<&Url>) -> String {
    match base_url {
        Some(base) => base
            .join(raw)
            .map_or_else(|_| raw.to_string(), |resolved| resolved.to_string()),
        None => raw.to_string(),
    }
}

/// `[text](href "title")`. The link text is the trimmed inline rendering of
/// the children; when that is empty, the raw unresolved href stands in so
/// the target stays visible.
pub(crate) fn render_link(tag: &tl::HTMLTag, parser: &tl::Parser, ctx: &RenderContext) -> String {
    let href = attr_value(tag, "href").unwrap_or_default();
    let title = attr_value(tag, "title");

    let content = render_children(tag, parser, ctx);
    let rendered = content.split_whitespace().collect::<Vec<_>>().join(" ");
    let label = if rendered.is_empty() { href.clone() } else { rendered };
    if label.is_empty() {
        return String::new();
    }

    let target = resolve_url(&href, ctx.base_url.as_ref());
    match title {
        Some(title) => format!("[{label}]({target} \"{}\")", escape_title(&title)),
        None => format!("[{label}]({target})"),
    }
}

/// `![alt](src "title")`, with the alt text escaped and the source resolved.
pub(crate) fn render_image(tag: &tl::HTMLTag, ctx: &RenderContext) -> String {
    let src = attr_value(tag, "src").unwrap_or_default();
    let alt = text::escape_markdown(&attr_value(tag, "alt").unwrap_or_default());
    let title = attr_value(tag, "title");

    let target = resolve_url(&src, ctx.base_url.as_ref());
    match title {
        Some(title) => format!("![{alt}]({target} \"{}\")", escape_title(&title)),
        None => format!("![{alt}]({target})"),
    }
}

fn escape_title(title: &str) -> String {
    title.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_urls_resolve_against_the_base() {
        let base = Url::parse("https://h/").unwrap();
        assert_eq!(resolve_url("/x", Some(&base)), "https://h/x");
        assert_eq!(resolve_url("a/b", Some(&base)), "https://h/a/b");
    }

    #[test]
    fn absolute_urls_pass_through_resolution() {
        let base = Url::parse("https://h/").unwrap();
        assert_eq!(resolve_url("https://other/p", Some(&base)), "https://other/p");
    }

    #[test]
    fn without_a_base_urls_are_untouched() {
        assert_eq!(resolve_url("/x", None), "/x");
    }

    #[test]
    fn resolution_failure_falls_open() {
        // A cannot-be-a-base URL rejects every join.
        let base = Url::parse("mailto:someone@example.com").unwrap();
        assert_eq!(resolve_url("/x", Some(&base)), "/x");
    }
}
