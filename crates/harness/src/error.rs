//! Harness error types.

use std::path::{Path, PathBuf};

/// Error type for harness operations.
///
/// File errors carry the path they happened on so the CLI can print a
/// useful message without extra context.
#[derive(Debug)]
pub enum HarnessError {
    /// Reading the input file or writing the output file failed
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The input file is not a single well-formed JSON value
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The decoded value cannot be converted to the kernel's input type
    Input(String),
    /// Invalid run settings
    Settings(String),
}

impl HarnessError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        HarnessError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn json(path: &Path, source: serde_json::Error) -> Self {
        HarnessError::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl std::fmt::Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HarnessError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            HarnessError::Json { path, source } => {
                write!(f, "{}: invalid JSON: {}", path.display(), source)
            }
            HarnessError::Input(s) => write!(f, "invalid input: {}", s),
            HarnessError::Settings(s) => write!(f, "invalid settings: {}", s),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HarnessError::Io { source, .. } => Some(source),
            HarnessError::Json { source, .. } => Some(source),
            HarnessError::Input(_) | HarnessError::Settings(_) => None,
        }
    }
}

impl From<toml::de::Error> for HarnessError {
    fn from(e: toml::de::Error) -> Self {
        HarnessError::Settings(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_io_error_names_path() {
        let err = HarnessError::io(
            Path::new("missing.json"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        let msg = err.to_string();
        assert!(msg.starts_with("missing.json"), "got: {}", msg);
        assert!(msg.contains("not found"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_json_error_names_path() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = HarnessError::json(Path::new("in.json"), source);
        assert!(err.to_string().starts_with("in.json: invalid JSON"));
    }

    #[test]
    fn test_message_errors_have_no_source() {
        let err = HarnessError::Input("expected an integer".to_string());
        assert_eq!(err.to_string(), "invalid input: expected an integer");
        assert!(err.source().is_none());

        let err = HarnessError::Settings("repetitions must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "invalid settings: repetitions must be at least 1"
        );
    }
}
