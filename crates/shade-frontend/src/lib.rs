//! # Shade Frontend
//!
//! Tokenizer, parser, printer, and validation for the Shade definition
//! language. The stages are pure functions over owned data:
//!
//! ```text
//! tokenize -> parse -> validate -> report
//! ```

#![forbid(unsafe_code)]

pub mod ast;
pub mod canonical;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod report;
pub mod token;
pub mod validate;

// Re-export commonly used types
pub use ast::*;
pub use canonical::read_canonical;
pub use config::ValidateConfig;
pub use errors::{FrontendError, LintSeverity, SourcePosition, ValidationDiagnostic};
pub use lexer::tokenize;
pub use parser::{parse, parse_expression, parse_program, parse_recovering, ParsedUnit};
pub use printer::{print_definition, print_expr};
pub use report::{run_stage, Stage, StageOutput};
pub use token::{Token, TokenKind};
pub use validate::{
    validate_definitions, validate_program, FunctionSignature, Program, ValidationReport,
};

/// Parses and validates `source` with the default configuration.
///
/// Fails on the first lex or syntax error; validation findings are returned
/// alongside the program rather than as an error.
pub fn parse_and_validate(source: &str) -> Result<ValidationReport, FrontendError> {
    let defs = parse_program(source)?;
    Ok(validate_definitions(&defs, &ValidateConfig::default()))
}
