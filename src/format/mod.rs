//! Render tokenized snippets for the terminal.
//!
//! Themes map display styles to ANSI prefix/suffix pairs, the renderer lays
//! out an optional filename header and line-number gutter around the styled
//! tokens. The `none` theme emits no escape codes, so rendering with it (and
//! the chrome off) returns the input text unchanged.

mod render;
mod theme;

pub use render::{highlight, highlight_with_theme, render_header, render_lines};
pub use theme::{AnsiTheme, Style, Theme, category_style};
