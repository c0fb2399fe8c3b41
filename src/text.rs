//! Text-level helpers shared by the renderer: entity decoding, Markdown
//! escaping, and the whitespace-normalization rules that must compose
//! correctly under nesting.

use std::borrow::Cow;

/// Characters that carry Markdown meaning outside code contexts.
const MARKDOWN_SIGNIFICANT: &[char] = &['\\', '*', '_', '`', '#', '|', '>', '-'];

/// Decode HTML entities in raw text handed back by the parser.
pub(crate) fn decode_entities(raw: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(raw)
}

/// Backslash-escape Markdown-significant characters.
pub(crate) fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        if MARKDOWN_SIGNIFICANT.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Collapse whitespace runs in a text node: a run containing a newline
/// becomes a single newline, any other run a single space.
pub(crate) fn collapse_text_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    let mut run_has_newline = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            in_run = true;
            if ch == '\n' || ch == '\r' {
                run_has_newline = true;
            }
        } else {
            if in_run {
                out.push(if run_has_newline { '\n' } else { ' ' });
                in_run = false;
                run_has_newline = false;
            }
            out.push(ch);
        }
    }
    if in_run {
        out.push(if run_has_newline { '\n' } else { ' ' });
    }
    out
}

/// Collapse runs of blank lines inside a fragment to a single blank line
/// and drop any leading blanks. Non-blank lines pass through verbatim, so
/// two-space hard breaks survive.
pub(crate) fn collapse_blank_lines(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut pending_blank = false;
    for line in fragment.split('\n') {
        if line.trim().is_empty() {
            pending_blank = !out.is_empty();
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
            if pending_blank {
                out.push('\n');
            }
        }
        pending_blank = false;
        out.push_str(line);
    }
    out
}

/// Drop blank lines entirely, joining the remaining lines with single
/// newlines. List items use this so sibling items and nested lists sit on
/// adjacent lines.
pub(crate) fn squash_blank_lines(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    for line in fragment.split('\n') {
        if line.trim().is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(line);
    }
    out
}

/// Final document normalization: no leading blank line, no run of three or
/// more newlines, exactly one trailing newline. Whitespace-only documents
/// normalize to the empty string.
pub(crate) fn normalize_document(rendered: &str) -> String {
    let collapsed = collapse_blank_lines(rendered);
    let trimmed = collapsed.trim_end();
    if trimmed.is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(trimmed.len() + 1);
    out.push_str(trimmed);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markdown_significant_characters() {
        assert_eq!(escape_markdown("a * b"), "a \\* b");
        assert_eq!(
            escape_markdown(r"\ * _ ` # | > -"),
            r"\\ \* \_ \` \# \| \> \-"
        );
        assert_eq!(escape_markdown("plain text"), "plain text");
    }

    #[test]
    fn whitespace_runs_collapse_by_newline_content() {
        assert_eq!(collapse_text_whitespace("a   b"), "a b");
        assert_eq!(collapse_text_whitespace("a \n\t b"), "a\nb");
        assert_eq!(collapse_text_whitespace("  a"), " a");
        assert_eq!(collapse_text_whitespace("\r\n"), "\n");
    }

    #[test]
    fn blank_line_runs_collapse() {
        assert_eq!(collapse_blank_lines("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("\n\na"), "a");
        assert_eq!(collapse_blank_lines("a  \nb"), "a  \nb");
    }

    #[test]
    fn squash_joins_with_single_newlines() {
        assert_eq!(squash_blank_lines("b\n\n  - c"), "b\n  - c");
    }

    #[test]
    fn document_normalization_contract() {
        assert_eq!(normalize_document(""), "");
        assert_eq!(normalize_document("  \n \n"), "");
        assert_eq!(normalize_document("\n\nx\n\n"), "x\n");
        assert_eq!(normalize_document("a\n\n\n\n\nb"), "a\n\nb\n");
    }
}
