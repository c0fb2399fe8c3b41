//! The recursive node-to-Markdown renderer.

mod code;
mod context;
mod inline;
mod link;
mod list;
mod main;
mod table;

pub use main::{convert, render_dom};
