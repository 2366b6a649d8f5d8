//! Renderer for the markdown subset used by help center articles.
//!
//! [`render_content`] turns an article body into an ordered list of
//! [`BlockNode`]s; [`translator`] maps that list to HTML, plain text or JSON.

pub mod block;
pub mod config;
pub mod document;
pub mod entity;
pub mod error;
pub mod parser;
pub mod translator;

pub use document::{render_content, Assembler};
pub use entity::{BlockNode, InlineSpan, InlineText, RenderTree};
pub use parser::tokenize;
