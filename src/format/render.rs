//! Lay out tokenized lines: header, gutter, styled token runs.

use super::theme::{AnsiTheme, Style, Theme, category_style};
use crate::tokenizer::{self, Token};

/// Render tokenized lines to a string, one output line per input line.
/// With `gutter` set, each line is preceded by a right-aligned 1-based line
/// number sized to the widest number in the snippet.
pub fn render_lines<T: Theme>(lines: &[Vec<Token<'_>>], theme: &T, gutter: bool) -> String {
    let width = lines.len().to_string().len();
    let mut out = String::new();

    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if gutter {
            out.push_str(theme.prefix(Style::Gutter));
            out.push_str(&format!("{:>width$}", i + 1));
            out.push_str(theme.suffix(Style::Gutter));
            out.push_str("  ");
        }
        for token in line {
            let style = category_style(token.category);
            out.push_str(theme.prefix(style));
            out.push_str(token.text);
            out.push_str(theme.suffix(style));
        }
    }

    out
}

/// Header line above a snippet: source label plus the language tag, the tag
/// uppercased the way a badge would show it.
pub fn render_header<T: Theme>(label: &str, tag: &str, theme: &T) -> String {
    let mut out = String::new();
    out.push_str(theme.prefix(Style::Header));
    out.push_str(label);
    if !tag.is_empty() {
        out.push_str(" · ");
        out.push_str(&tag.to_uppercase());
    }
    out.push_str(theme.suffix(Style::Header));
    out
}

/// Tokenize and render with a specific theme.
pub fn highlight_with_theme<T: Theme>(
    code: &str,
    language: &str,
    theme: &T,
    gutter: bool,
) -> String {
    let lines = tokenizer::tokenize(code, language);
    render_lines(&lines, theme, gutter)
}

/// Tokenize and render with the default dark theme and a line-number gutter.
pub fn highlight(code: &str, language: &str) -> String {
    highlight_with_theme(code, language, &AnsiTheme::dark(), true)
}
