use std::fs;
use std::io::{self, Read};

use crate::error::GlintError;

/// One snippet source: stdin or a named file.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Stdin,
    File(String),
}

impl Source {
    /// Label for headers and error messages.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Source::Stdin => "(stdin)",
            Source::File(path) => path,
        }
    }

    /// Read the whole snippet. The tokenizer consumes complete blobs, so
    /// there is no record streaming here.
    pub fn read(&self) -> Result<String, GlintError> {
        match self {
            Source::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .lock()
                    .read_to_string(&mut buf)
                    .map_err(|e| GlintError::new(self.label(), e.to_string()))?;
                Ok(buf)
            }
            Source::File(path) => {
                fs::read_to_string(path).map_err(|e| GlintError::new(path, e.to_string()))
            }
        }
    }
}

/// Sources from the file operands. An empty list means stdin; `-` is the
/// conventional stdin alias.
#[must_use]
pub fn sources(files: &[String]) -> Vec<Source> {
    if files.is_empty() {
        return vec![Source::Stdin];
    }
    files
        .iter()
        .map(|f| {
            if f == "-" {
                Source::Stdin
            } else {
                Source::File(f.clone())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_list_reads_stdin() {
        assert_eq!(sources(&[]), vec![Source::Stdin]);
    }

    #[test]
    fn dash_is_stdin() {
        let files = vec!["a.py".to_string(), "-".to_string()];
        assert_eq!(
            sources(&files),
            vec![Source::File("a.py".to_string()), Source::Stdin]
        );
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = Source::File("no/such/file.py".to_string()).read().unwrap_err();
        assert_eq!(err.source_label, "no/such/file.py");
    }
}
