//! Styling: map token categories (plus layout chrome) to output styles.

use crate::tokenizer::Category;

/// Display style for a rendered segment: the six token categories plus the
/// two pieces of chrome the renderer draws itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Keyword,
    String,
    Comment,
    Function,
    Number,
    Plain,
    /// Line-number column.
    Gutter,
    /// Filename / language tag line above the snippet.
    Header,
}

/// Something that can map a style to a prefix/suffix (e.g. ANSI codes).
pub trait Theme {
    /// Prefix to emit before a segment with this style.
    fn prefix(&self, style: Style) -> &str;
    /// Suffix to emit after the segment (e.g. reset).
    fn suffix(&self, style: Style) -> &str;
}

/// Map a token category to its display style.
#[must_use]
pub fn category_style(category: Category) -> Style {
    match category {
        Category::Keyword => Style::Keyword,
        Category::String => Style::String,
        Category::Comment => Style::Comment,
        Category::Function => Style::Function,
        Category::Number => Style::Number,
        Category::Plain => Style::Plain,
    }
}

/// ANSI terminal theme.
#[derive(Debug)]
pub struct AnsiTheme {
    reset: String,
    keyword: String,
    string: String,
    comment: String,
    function: String,
    number: String,
    gutter: String,
    header: String,
}

impl AnsiTheme {
    /// Richer colors (One Dark / Dracula–inspired) for dark backgrounds.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            reset: "\x1b[0m".into(),
            keyword: "\x1b[38;5;204m".into(),  // pink/red (const, def, func)
            string: "\x1b[38;5;113m".into(),   // green
            comment: "\x1b[38;5;246m".into(),  // gray
            function: "\x1b[38;5;75m".into(),  // blue
            number: "\x1b[38;5;179m".into(),   // gold/amber
            gutter: "\x1b[38;5;240m".into(),   // dim gray (line numbers)
            header: "\x1b[2;38;5;246m".into(), // dim (filename line)
        }
    }

    /// No ANSI codes (plain text).
    #[must_use]
    pub fn none() -> Self {
        Self {
            reset: String::new(),
            keyword: String::new(),
            string: String::new(),
            comment: String::new(),
            function: String::new(),
            number: String::new(),
            gutter: String::new(),
            header: String::new(),
        }
    }

    fn style(&self, style: Style) -> &str {
        match style {
            Style::Keyword => self.keyword.as_str(),
            Style::String => self.string.as_str(),
            Style::Comment => self.comment.as_str(),
            Style::Function => self.function.as_str(),
            Style::Number => self.number.as_str(),
            Style::Plain => "",
            Style::Gutter => self.gutter.as_str(),
            Style::Header => self.header.as_str(),
        }
    }
}

impl Theme for AnsiTheme {
    fn prefix(&self, style: Style) -> &str {
        self.style(style)
    }

    // Plain segments have no prefix, so they get no reset either; styled
    // output stays free of stray escape codes around unstyled text.
    fn suffix(&self, style: Style) -> &str {
        if self.style(style).is_empty() {
            ""
        } else {
            self.reset.as_str()
        }
    }
}
