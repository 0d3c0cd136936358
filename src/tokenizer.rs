use crate::rules::{Profile, Rule};

/// Display category for one matched span of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Keyword,
    String,
    Comment,
    Function,
    Number,
    Plain,
}

/// One span of a line. Concatenating the `text` of every token in a line,
/// in order, reproduces that line unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub category: Category,
}

/// Tokenize a snippet into one token sequence per `\n`-separated line.
///
/// The language tag is matched case-sensitively against the known profiles;
/// anything unrecognized gets the default (JS/TS oriented) rules. Total over
/// all inputs: unrecognized text degrades to per-character `Plain` tokens.
pub fn tokenize<'a>(code: &'a str, language: &str) -> Vec<Vec<Token<'a>>> {
    let rules = Profile::from_tag(language).rules();
    code.split('\n').map(|line| scan_line(line, rules)).collect()
}

/// Scan one line: try each rule, in order, against the start of the
/// unconsumed suffix. First match wins. If nothing matches, emit a single
/// character as `Plain` so the cursor always advances.
fn scan_line<'a>(line: &'a str, rules: &[Rule]) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();
    let mut rest = line;

    'scan: while !rest.is_empty() {
        for rule in rules {
            if let Some(len) = rule.match_len(rest) {
                let (text, tail) = rest.split_at(len);
                tokens.push(Token { text, category: rule.category });
                rest = tail;
                continue 'scan;
            }
        }

        let step = rest.chars().next().map_or(1, char::len_utf8);
        let (text, tail) = rest.split_at(step);
        tokens.push(Token { text, category: Category::Plain });
        rest = tail;
    }

    tokens
}
