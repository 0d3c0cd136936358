//! Pattern rules and language profiles.
//!
//! A rule is an anchored pattern plus the category it assigns; each profile
//! owns an ordered rule list evaluated first-match-wins at the start of the
//! remaining text. The common rules (comments, strings, numbers) come first
//! in every profile, then the language-specific keyword/function rules.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::tokenizer::Category;

/// One recognition rule: an anchored pattern and the category assigned on a
/// match at offset 0. `follow`, when present, must match the text
/// immediately after the main match without consuming it (the lookahead in
/// the function-name rule: an identifier only counts as a function name
/// when `\s*\(` follows).
pub struct Rule {
    pattern: Regex,
    follow: Option<Regex>,
    pub category: Category,
}

impl Rule {
    fn new(pattern: &str, category: Category) -> Self {
        Rule { pattern: anchored(pattern), follow: None, category }
    }

    fn with_follow(pattern: &str, follow: &str, category: Category) -> Self {
        Rule {
            pattern: anchored(pattern),
            follow: Some(anchored(follow)),
            category,
        }
    }

    /// Length in bytes of the match at the start of `rest`, if any.
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        let m = self.pattern.find(rest)?;
        // A zero-width match would stall the scan; treat it as no match.
        if m.is_empty() {
            return None;
        }
        if let Some(follow) = &self.follow
            && !follow.is_match(&rest[m.end()..])
        {
            return None;
        }
        Some(m.end())
    }
}

/// All rule patterns are fixed literals; a failure here is a typo in this
/// file, not a runtime condition.
fn anchored(pattern: &str) -> Regex {
    Regex::new(pattern).expect("rule pattern must compile")
}

/// Comments, quoted strings, and numbers — shared by every profile and
/// checked before the language-specific rules.
fn common_rules() -> Vec<Rule> {
    vec![
        Rule::new(r"^//.*", Category::Comment),
        Rule::new(r"^/\*.*?\*/", Category::Comment),
        Rule::new(r"^#.*", Category::Comment),
        Rule::new(r#"^"(?:[^"\\]|\\.)*""#, Category::String),
        Rule::new(r"^'(?:[^'\\]|\\.)*'", Category::String),
        Rule::new(r"^`(?:[^`\\]|\\.)*`", Category::String),
        Rule::new(r"^\d+\.?\d*", Category::Number),
    ]
}

const JS_KEYWORDS: &str = r"^(?:const|let|var|function|return|if|else|for|while|class|import|export|from|default|async|await|try|catch|throw|new|this|typeof|instanceof|interface|type|extends|implements|enum|readonly|public|private|protected|static|abstract|declare|module|namespace|require|yield|of|in|as|is)\b";

const PY_KEYWORDS: &str = r"^(?:def|class|if|elif|else|for|while|return|import|from|as|try|except|finally|raise|with|yield|lambda|pass|break|continue|and|or|not|is|in|True|False|None|self|async|await|print)\b";

const GO_KEYWORDS: &str = r"^(?:func|package|import|var|const|type|struct|interface|return|if|else|for|range|switch|case|default|go|chan|select|defer|map|make|len|append|nil|true|false|error|string|int|float64|bool)\b";

static PYTHON_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    let mut rules = common_rules();
    rules.push(Rule::new(PY_KEYWORDS, Category::Keyword));
    rules.push(Rule::with_follow(r"^[a-zA-Z_]\w*", r"^\s*\(", Category::Function));
    rules.push(Rule::new(r"^@\w+", Category::Keyword));
    rules
});

static GO_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    let mut rules = common_rules();
    rules.push(Rule::new(GO_KEYWORDS, Category::Keyword));
    rules.push(Rule::with_follow(r"^[a-zA-Z_]\w*", r"^\s*\(", Category::Function));
    rules
});

// Tag rules stay after the function rule, matching the order the rule list
// was originally built in; `<T>` therefore tokenizes as a tag open.
static DEFAULT_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    let mut rules = common_rules();
    rules.push(Rule::new(JS_KEYWORDS, Category::Keyword));
    rules.push(Rule::with_follow(r"^[a-zA-Z_$]\w*", r"^\s*\(", Category::Function));
    rules.push(Rule::new(r"^</?[a-zA-Z][\w.-]*", Category::Keyword));
    rules.push(Rule::new(r"^/>", Category::Keyword));
    rules
});

/// Language profile: which ordered rule list a language tag selects.
/// A closed set — the default variant covers JS/TS/JSX and every
/// unrecognized tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Python,
    Go,
    Default,
}

impl Profile {
    /// Tags are matched case-sensitively; `"Python"` is not `"python"`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "python" | "py" => Profile::Python,
            "go" | "golang" => Profile::Go,
            _ => Profile::Default,
        }
    }

    #[must_use]
    pub fn rules(self) -> &'static [Rule] {
        match self {
            Profile::Python => &PYTHON_RULES,
            Profile::Go => &GO_RULES,
            Profile::Default => &DEFAULT_RULES,
        }
    }
}

/// Language tag from a file extension, for when no `-l` tag was given.
/// Extensions are conventionally case-insensitive, so match lowercased.
#[must_use]
pub fn tag_from_path(path: &str) -> Option<&'static str> {
    let ext = path.rsplit_once('.').map(|(_, e)| e.to_ascii_lowercase())?;
    match ext.as_str() {
        "py" | "pyw" | "pyi" => Some("py"),
        "go" => Some("go"),
        "js" | "mjs" | "cjs" => Some("js"),
        "jsx" => Some("jsx"),
        "ts" | "mts" | "cts" => Some("ts"),
        "tsx" => Some("tsx"),
        _ => None,
    }
}
