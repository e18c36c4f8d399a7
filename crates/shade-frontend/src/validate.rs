//! # Semantic Validation
//!
//! Builds the program model (name, arguments, canonical expression for each
//! definition) and collects non-fatal findings:
//!
//! - **Duplicate definitions**: one finding per extra binding of a name
//! - **Parameter shadowing**: a parameter spelled like its own function
//! - **Duplicate parameters**: the same parameter declared twice
//! - **Output arity**: shader outputs such as `gl_Position` taking parameters
//! - **Unresolved callees**: an application whose callee is not a top-level
//!   definition, a parameter in scope, or a built-in
//!
//! Findings never remove a definition from the program; every parsed
//! definition appears in the model in source order.

use std::collections::HashSet;

use crate::ast::{Definition, Expr};
use crate::config::ValidateConfig;
use crate::errors::{LintSeverity, SourcePosition, ValidationDiagnostic};
use crate::printer::print_expr;

/// Stable lint code: a top-level name is bound more than once.
pub const LINT_DUPLICATE_DEFINITION: &str = "duplicate_definition";
/// Stable lint code: a parameter has the same name as its function.
pub const LINT_PARAMETER_SHADOWS_FUNCTION: &str = "parameter_shadows_function";
/// Stable lint code: a parameter name repeats within one definition.
pub const LINT_DUPLICATE_PARAMETER: &str = "duplicate_parameter";
/// Stable lint code: a shader output declares parameters.
pub const LINT_OUTPUT_WITH_PARAMETERS: &str = "output_with_parameters";
/// Stable lint code: an applied name resolves nowhere.
pub const LINT_UNRESOLVED_CALLEE: &str = "unresolved_callee";

/// Signature and canonical body of one validated definition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionSignature {
    pub name: String,
    pub arguments: Vec<String>,
    /// Body in compact canonical form.
    pub expression: String,
    pub position: SourcePosition,
}

/// Validated program model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    pub functions: Vec<FunctionSignature>,
}

impl Program {
    /// First definition bound to `name`.
    pub fn get(&self, name: &str) -> Option<&FunctionSignature> {
        self.functions.iter().find(|f| f.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// Program model together with every finding collected while building it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub program: Program,
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == LintSeverity::Warning)
            .count()
    }

    /// Splits the report into the program and its findings.
    ///
    /// The program is returned on both sides: `Ok` when there are no
    /// findings, `Err` alongside the findings otherwise.
    pub fn into_result(self) -> Result<Program, (Program, Vec<ValidationDiagnostic>)> {
        if self.diagnostics.is_empty() {
            Ok(self.program)
        } else {
            Err((self.program, self.diagnostics))
        }
    }
}

/// Validates `defs` with the default configuration.
///
/// # Example
///
/// ```rust,ignore
/// use shade_frontend::{parse_program, validate_program};
///
/// let defs = parse_program("gl_Position = gl_ModelViewProjection * gl_Vertex\n")?;
/// let report = validate_program(&defs);
/// assert!(report.is_clean());
/// assert_eq!(report.program.functions[0].expression, "(* gl_ModelViewProjection gl_Vertex)");
/// ```
pub fn validate_program(defs: &[Definition]) -> ValidationReport {
    validate_definitions(defs, &ValidateConfig::default())
}

/// Builds the program model for `defs` and collects all findings.
pub fn validate_definitions(defs: &[Definition], config: &ValidateConfig) -> ValidationReport {
    let top_level: HashSet<&str> = defs.iter().map(|d| d.name.as_str()).collect();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut report = ValidationReport::default();

    for def in defs {
        if !seen.insert(def.name.as_str()) {
            push_finding(
                &mut report.diagnostics,
                LINT_DUPLICATE_DEFINITION,
                format!("'{}' is already defined", def.name),
                def,
                def.position,
            );
        }
        check_parameters(def, config, &mut report.diagnostics);
        if config.warn_unresolved {
            check_callees(def, &top_level, config, &mut report.diagnostics);
        }

        report.program.functions.push(FunctionSignature {
            name: def.name.clone(),
            arguments: def.params.clone(),
            expression: print_expr(&def.body),
            position: def.position,
        });
    }

    report
}

fn check_parameters(def: &Definition, config: &ValidateConfig, out: &mut Vec<ValidationDiagnostic>) {
    let mut params: HashSet<&str> = HashSet::new();
    for (index, param) in def.params.iter().enumerate() {
        if *param == def.name {
            push_finding(
                out,
                LINT_PARAMETER_SHADOWS_FUNCTION,
                format!("parameter '{}' has the same name as its function", param),
                def,
                def.param_position(index),
            );
        }
        if !params.insert(param.as_str()) {
            push_finding(
                out,
                LINT_DUPLICATE_PARAMETER,
                format!("parameter '{}' is declared more than once", param),
                def,
                def.param_position(index),
            );
        }
    }

    if def.is_function() && config.is_output(&def.name) {
        push_finding(
            out,
            LINT_OUTPUT_WITH_PARAMETERS,
            format!(
                "'{}' is a shader output and must not take arguments (declares {})",
                def.name,
                def.arity()
            ),
            def,
            def.position,
        );
    }
}

fn check_callees(
    def: &Definition,
    top_level: &HashSet<&str>,
    config: &ValidateConfig,
    out: &mut Vec<ValidationDiagnostic>,
) {
    let mut unresolved = Vec::new();
    def.body.walk(&mut |expr: &Expr| {
        if let Some(name) = expr.callee_name() {
            let resolved = top_level.contains(name)
                || def.params.iter().any(|p| p == name)
                || config.is_builtin(name);
            if !resolved {
                unresolved.push(name.to_string());
            }
        }
    });

    for name in unresolved {
        push_finding(
            out,
            LINT_UNRESOLVED_CALLEE,
            format!("'{}' is applied but never defined", name),
            def,
            def.position,
        );
    }
}

fn push_finding(
    out: &mut Vec<ValidationDiagnostic>,
    code: &'static str,
    message: impl Into<String>,
    def: &Definition,
    position: SourcePosition,
) {
    let diag = ValidationDiagnostic {
        code,
        message: message.into(),
        severity: LintSeverity::Warning,
        definition: def.name.clone(),
        position,
    };
    #[cfg(feature = "tracing")]
    tracing::debug!("{}", diag);
    out.push(diag);
}
