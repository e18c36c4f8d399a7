//! In-process stage drivers and their text reports.
//!
//! Each driver takes source text and returns the report text (stdout) plus
//! any diagnostics (stderr). Lines that fail to lex or parse are left out of
//! the report; the remaining lines are still processed.

use std::fmt::Write;

use crate::config::ValidateConfig;
use crate::errors::FrontendError;
use crate::lexer::{lex_errors, tokenize};
use crate::parser::parse_recovering;
use crate::printer::{print_definition, print_token_line};
use crate::token::TokenKind;
use crate::validate::{validate_definitions, Program};

/// Front end stage selectable by drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lexer,
    Parser,
    Validator,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Lexer, Stage::Parser, Stage::Validator];

    pub fn name(self) -> &'static str {
        match self {
            Self::Lexer => "lexer",
            Self::Parser => "parser",
            Self::Validator => "validator",
        }
    }
}

/// Report text and diagnostics produced by one stage run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageOutput {
    pub text: String,
    pub diagnostics: Vec<FrontendError>,
    /// Set by the validator stage.
    pub program: Option<Program>,
}

impl StageOutput {
    /// True when a lex or syntax error dropped part of the input.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.validation_diagnostic().is_none())
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.validation_diagnostic().is_some())
            .count()
    }
}

/// Runs `stage` over `source`.
pub fn run_stage(stage: Stage, source: &str, config: &ValidateConfig) -> StageOutput {
    match stage {
        Stage::Lexer => lexer_report(source),
        Stage::Parser => parser_report(source),
        Stage::Validator => validator_report(source, config),
    }
}

/// Token texts of each statement line, joined by single spaces.
pub fn lexer_report(source: &str) -> StageOutput {
    let tokens = tokenize(source);
    let mut text = String::new();
    for line in tokens.split_inclusive(|t| t.kind == TokenKind::Newline) {
        let rendered = print_token_line(line);
        if !rendered.is_empty() {
            text.push_str(&rendered);
            text.push('\n');
        }
    }
    StageOutput {
        text,
        diagnostics: lex_errors(&tokens),
        program: None,
    }
}

/// One ` ( = ... )` line per parsed definition.
pub fn parser_report(source: &str) -> StageOutput {
    let unit = parse_recovering(&tokenize(source));
    StageOutput {
        text: unit.definitions.iter().map(print_definition).collect(),
        diagnostics: unit.errors,
        program: None,
    }
}

/// `Function:` blocks for every parsed definition, plus all findings.
pub fn validator_report(source: &str, config: &ValidateConfig) -> StageOutput {
    let unit = parse_recovering(&tokenize(source));
    let validation = validate_definitions(&unit.definitions, config);

    let mut diagnostics = unit.errors;
    diagnostics.extend(
        validation
            .diagnostics
            .into_iter()
            .map(FrontendError::ValidationDiagnostic),
    );
    StageOutput {
        text: format_program(&validation.program),
        diagnostics,
        program: Some(validation.program),
    }
}

/// Renders the program model as `Function:` blocks.
///
/// ```text
/// Function: mult
///   Arguments: matrix vector
///   Expression: (* matrix vector)
/// ```
pub fn format_program(program: &Program) -> String {
    let mut out = String::new();
    for function in &program.functions {
        let _ = writeln!(out, "Function: {}", function.name);
        if !function.arguments.is_empty() {
            let _ = writeln!(out, "  Arguments: {}", function.arguments.join(" "));
        }
        let _ = writeln!(out, "  Expression: {}", function.expression);
    }
    out
}

/// Formats a diagnostic for a terminal, with the offending line and a caret.
pub fn format_diagnostic(diag: &FrontendError, path: &str, source: &str) -> String {
    let position = diag.position();
    let line_text = source
        .lines()
        .nth((position.line as usize).saturating_sub(1))
        .unwrap_or("");
    let label = match diag {
        FrontendError::ValidationDiagnostic(d) => d.severity.to_string(),
        _ => "error".to_string(),
    };
    format!(
        "{}: {}: {}\n  {}\n  {}^",
        path,
        label,
        diag,
        line_text,
        " ".repeat((position.column as usize).saturating_sub(1))
    )
}
