//! Errors from loading `seo.toml` and the diagnostics collected by validation.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid TOML in seo config")]
    Toml(#[from] toml::de::Error),

    #[error("no `{0}` found in this directory or any parent")]
    NotFound(PathBuf),

    // Displayed inline; a `source()` would print the list twice.
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// One validation error, e.g. a malformed `site.url`.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", "error".red().bold(), self.field, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

/// Errors and warnings gathered across all config sections.
///
/// Warnings mark values that still render, such as an unknown weekday token.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    warnings: Vec<(FieldPath, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, message));
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push((field, message.into()));
    }

    /// Print warnings to stderr under a single `[warning]` line.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }

        crate::log!("warning"; "suspicious values, output may be incomplete:");
        for (field, message) in &self.warnings {
            eprintln!("- {}: {}", field.as_str(), message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[(FieldPath, String)] {
        &self.warnings
    }

    /// `Err(self)` when any error was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    /// One diagnostic per line, followed by the error count.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for err in &self.errors {
            writeln!(f, "{err}")?;
        }
        let count = self.errors.len();
        write!(
            f,
            "{} {} config error{}",
            "found".dimmed(),
            count.to_string().red().bold(),
            if count == 1 { "" } else { "s" }
        )
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    const FIELD: FieldPath = FieldPath::new("site.url");

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("seo.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        assert_eq!(io_err.to_string(), "cannot read `seo.toml`");

        let missing = ConfigError::NotFound(PathBuf::from("seo.toml"));
        assert!(missing.to_string().starts_with("no `seo.toml` found"));
    }

    #[test]
    fn test_diagnostics_into_result() {
        let diag = ConfigDiagnostics::new();
        assert!(diag.into_result().is_ok());

        let mut diag = ConfigDiagnostics::new();
        diag.error_with_hint(FIELD, "invalid URL", "use https://example.com");
        assert!(diag.has_errors());
        assert_eq!(diag.len(), 1);
        let err = diag.into_result().unwrap_err();
        assert_eq!(err.errors()[0].hint.as_deref(), Some("use https://example.com"));
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FIELD, "looks odd");
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.into_result().is_ok());
    }

    #[test]
    fn test_diagnostics_display_counts_errors() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FIELD, "first");
        diag.error(FIELD, "second");
        let display = diag.to_string();
        assert!(display.contains("first"));
        assert!(display.contains("second"));
        assert!(display.contains("config errors"));
        assert!(display.contains("`site.url`"));
    }
}
