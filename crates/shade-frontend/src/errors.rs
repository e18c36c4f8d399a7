//! Error and diagnostic types shared by every stage.

use std::fmt;

use thiserror::Error;

/// 1-based source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourcePosition {
    pub line: u32,
    pub column: u32,
}

impl SourcePosition {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Severity attached to validation findings. Every current lint is a
/// warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LintSeverity {
    Warning,
}

impl fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A non-fatal finding produced by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationDiagnostic {
    /// Stable code, one of the `LINT_*` constants in [`crate::validate`].
    pub code: &'static str,
    pub message: String,
    pub severity: LintSeverity,
    /// Name of the definition the finding belongs to.
    pub definition: String,
    pub position: SourcePosition,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: [{}] in '{}': {}",
            self.position, self.code, self.definition, self.message
        )
    }
}

/// Errors that can occur while tokenizing, parsing or validating.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontendError {
    /// A character the tokenizer does not recognize.
    #[error("line {position}: unexpected character '{found}'")]
    Lex {
        position: SourcePosition,
        found: char,
    },

    /// Syntax error during parsing.
    #[error("line {position}: expecting {expected}, found '{found}'")]
    Syntax {
        position: SourcePosition,
        expected: String,
        found: String,
    },

    /// Semantic validation finding.
    #[error("{0}")]
    ValidationDiagnostic(ValidationDiagnostic),
}

impl FrontendError {
    pub(crate) fn syntax(
        position: SourcePosition,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::Syntax {
            position,
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Source position the error points at.
    pub fn position(&self) -> SourcePosition {
        match self {
            Self::Lex { position, .. } | Self::Syntax { position, .. } => *position,
            Self::ValidationDiagnostic(diag) => diag.position,
        }
    }

    /// Returns the validation diagnostic if present.
    pub fn validation_diagnostic(&self) -> Option<&ValidationDiagnostic> {
        match self {
            Self::ValidationDiagnostic(diag) => Some(diag),
            _ => None,
        }
    }
}
