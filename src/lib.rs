//! Render parsed HTML documents as readable Markdown text.
//!
//! The crate walks a DOM tree produced by the `tl` parser and turns it into
//! a small set of Markdown primitives: paragraphs, headings, emphasis,
//! links, images, nested lists, pipe tables, and fenced code blocks. It is
//! built for clipboard/paste and scraped-content pipelines where visual
//! structure must survive as stable Markdown without byte-exact fidelity.
//!
//! ```
//! use htmldown::{convert, ConvertOptions};
//!
//! let markdown = convert("<p>Hello <b>world</b></p>", &ConvertOptions::default())?;
//! assert_eq!(markdown, "Hello **world**\n");
//! # Ok::<(), htmldown::ConversionError>(())
//! ```
//!
//! Rendering is total: unknown elements fall through to inline passthrough,
//! malformed URLs are emitted unresolved, and a table without a determinable
//! header renders empty. The only fallible step is parsing HTML text in
//! [`convert`]; callers that already hold a [`tl::VDom`] can use
//! [`render_dom`], which never errors.

mod converter;
mod error;
mod options;
mod text;

pub use converter::{convert, render_dom};
pub use error::{ConversionError, Result};
pub use options::ConvertOptions;
