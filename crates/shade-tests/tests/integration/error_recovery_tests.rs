use shade_frontend::lexer::lex_errors;
use shade_frontend::report::{format_diagnostic, lexer_report, parser_report, validator_report};
use shade_frontend::{
    parse, parse_recovering, tokenize, FrontendError, SourcePosition, ValidateConfig,
};

const ERRORS: &str = include_str!("../../../shade-examples/errors.shade");

#[test]
fn strict_parse_stops_at_first_error() {
    let err = parse(&tokenize(ERRORS)).unwrap_err();
    assert_eq!(
        err,
        FrontendError::Syntax {
            position: SourcePosition::new(2, 20),
            expected: "')'".into(),
            found: "".into(),
        }
    );
}

#[test]
fn recovering_parse_skips_only_bad_lines() {
    let unit = parse_recovering(&tokenize(ERRORS));
    let names: Vec<&str> = unit.definitions.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["scale", "shifted", "gl_Position"]);
    assert_eq!(unit.errors.len(), 2);
    assert_eq!(
        unit.errors[1],
        FrontendError::Lex {
            position: SourcePosition::new(4, 1),
            found: '$',
        }
    );
}

#[test]
fn parser_report_keeps_good_lines() {
    let out = parser_report(ERRORS);
    assert_eq!(
        out.text,
        " ( = scale 2 )\n \
         ( = ( shifted x ) ( + x scale ) )\n \
         ( = gl_Position ( shifted gl_Vertex ) )\n"
    );
}

#[test]
fn lexer_report_flags_unknown_characters() {
    let out = lexer_report(ERRORS);
    assert!(out.text.contains("$ = 1\n"));
    assert_eq!(out.diagnostics, lex_errors(&tokenize(ERRORS)));
    assert_eq!(out.diagnostics.len(), 1);
    let rendered = format_diagnostic(&out.diagnostics[0], "errors.shade", ERRORS);
    assert_eq!(
        rendered,
        "errors.shade: error: line 4:1: unexpected character '$'\n  $ = 1\n  ^"
    );
}

#[test]
fn overly_deep_lines_are_reported_not_fatal() {
    let parens = 1_000;
    let terms = vec!["x"; 50_000].join(" + ");
    let source = format!(
        "scale = 2\ndeep = {}x{}\nlong = {}\nkeep = scale\n",
        "(".repeat(parens),
        ")".repeat(parens),
        terms
    );

    let out = parser_report(&source);
    assert_eq!(out.text, " ( = scale 2 )\n ( = keep scale )\n");
    let lines: Vec<u32> = out.diagnostics.iter().map(|d| d.position().line).collect();
    assert_eq!(lines, vec![2, 3]);
    for diag in &out.diagnostics {
        assert!(diag.to_string().contains("nested at most"), "{}", diag);
    }

    let validated = validator_report(&source, &ValidateConfig::default());
    assert_eq!(validated.program.as_ref().map(|p| p.len()), Some(2));
    assert!(validated.has_errors());
}
