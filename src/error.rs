/// Structured error for a snippet source that could not be read.
#[derive(Debug)]
pub struct GlintError {
    pub source_label: String,
    pub message: String,
}

impl GlintError {
    #[must_use]
    pub fn new(source_label: impl Into<String>, message: impl Into<String>) -> Self {
        GlintError {
            source_label: source_label.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for GlintError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.source_label, self.message)
    }
}

impl std::error::Error for GlintError {}
