use shade_frontend::report::{format_diagnostic, format_program, validator_report};
use shade_frontend::validate::{
    LINT_DUPLICATE_DEFINITION, LINT_OUTPUT_WITH_PARAMETERS, LINT_PARAMETER_SHADOWS_FUNCTION,
    LINT_UNRESOLVED_CALLEE,
};
use shade_frontend::{parse_and_validate, parse_program, validate_program, ValidateConfig};

#[test]
fn function_script_builds_signatures() {
    let report = parse_and_validate(
        "mult matrix vector = matrix * vector\n\
         gl_Position = mult gl_ModelViewProjection gl_Vertex\n",
    )
    .expect("parse");
    assert!(report.is_clean());
    assert_eq!(
        format_program(&report.program),
        "Function: mult\n  Arguments: matrix vector\n  Expression: (* matrix vector)\n\
         Function: gl_Position\n  Expression: (mult gl_ModelViewProjection gl_Vertex)\n"
    );
}

#[test]
fn duplicates_keep_both_definitions() {
    let report = parse_and_validate("x = 1\ny = x\nx = 2\n").expect("parse");
    let dupes: Vec<_> = report
        .diagnostics
        .iter()
        .filter(|d| d.code == LINT_DUPLICATE_DEFINITION)
        .collect();
    assert_eq!(dupes.len(), 1);
    assert_eq!(dupes[0].definition, "x");
    assert_eq!(dupes[0].position.line, 3);
    let names: Vec<&str> = report.program.names().collect();
    assert_eq!(names, vec!["x", "y", "x"]);
}

#[test]
fn findings_are_collected_not_fatal() {
    let report = parse_and_validate(
        "f f = undefined_fn f\n\
         gl_Position v = v\n\
         ok = f 1\n",
    )
    .expect("parse");
    let codes: Vec<&str> = report.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![
            LINT_PARAMETER_SHADOWS_FUNCTION,
            LINT_UNRESOLVED_CALLEE,
            LINT_OUTPUT_WITH_PARAMETERS,
        ]
    );
    assert_eq!(report.program.len(), 3);
    assert_eq!(report.warning_count(), 3);
    assert!(report.clone().into_result().is_err());
}

#[test]
fn validate_program_keeps_program_alongside_findings() {
    let defs = parse_program("a = 1\nb = frob a\n").expect("parse");
    let report = validate_program(&defs);
    assert_eq!(report.program.len(), 2);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(
        report.diagnostics[0].to_string(),
        "line 2:1: [unresolved_callee] in 'b': 'frob' is applied but never defined"
    );

    let (program, findings) = report.into_result().unwrap_err();
    let names: Vec<&str> = program.names().collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(findings.len(), 1);
}

#[test]
fn parameter_findings_point_at_the_parameter() {
    let source = "blend a b a = a * b\n";
    let out = validator_report(source, &ValidateConfig::default());
    assert_eq!(out.warning_count(), 1);
    let rendered = format_diagnostic(&out.diagnostics[0], "blend.shade", source);
    assert_eq!(
        rendered,
        "blend.shade: warning: line 1:11: [duplicate_parameter] in 'blend': \
         parameter 'a' is declared more than once\n  blend a b a = a * b\n            ^"
    );
}

#[test]
fn validator_report_survives_broken_lines() {
    let source = include_str!("../../../shade-examples/errors.shade");
    let config = ValidateConfig::default();
    let out = validator_report(source, &config);
    assert_eq!(
        out.text,
        "Function: scale\n  Expression: 2\n\
         Function: shifted\n  Arguments: x\n  Expression: (+ x scale)\n\
         Function: gl_Position\n  Expression: (shifted gl_Vertex)\n"
    );
    assert!(out.has_errors());
    assert_eq!(out.diagnostics.len(), 2);
    assert_eq!(out.warning_count(), 0);
}
