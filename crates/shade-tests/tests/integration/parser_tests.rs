use shade_frontend::{
    parse_expression, parse_program, print_definition, print_expr, tokenize, Expr,
    FrontendError, SourcePosition,
};

fn canonical(src: &str) -> String {
    print_expr(&parse_expression(&tokenize(src)).expect("expression parses"))
}

#[test]
fn precedence_examples() {
    assert_eq!(canonical("a + b * c"), "(+ a (* b c))");
    assert_eq!(canonical("a * b + c"), "(+ (* a b) c)");
    assert_eq!(canonical("a - b / c * d"), "(- a (* (/ b c) d))");
    assert_eq!(canonical("(a + b) * c"), "(* (+ a b) c)");
}

#[test]
fn juxtaposition_binds_tightest() {
    assert_eq!(canonical("sin x + baz 2 sin 3"), "(+ (sin x) (baz 2 sin 3))");
    assert_eq!(canonical("f x * g y"), "(* (f x) (g y))");
    assert_eq!(canonical("max (dot l v) 0"), "(max (dot l v) 0)");
}

#[test]
fn value_and_function_definitions_are_distinguished() {
    let defs = parse_program("foo = 1\nbing x y = sin x + baz 2 sin 3\n").expect("parse");
    assert!(defs[0].params.is_empty());
    assert_eq!(defs[0].body, Expr::Literal(1));
    assert_eq!(defs[1].params, vec!["x", "y"]);
    assert_eq!(print_expr(&defs[1].body), "(+ (sin x) (baz 2 sin 3))");
}

#[test]
fn parser_report_lines_for_reference_scripts() {
    let defs = parse_program(
        "mult matrix vector = matrix * vector\n\
         gl_Position = mult gl_ModelViewProjection gl_Vertex\n",
    )
    .expect("parse");
    let lines: Vec<String> = defs.iter().map(print_definition).collect();
    assert_eq!(
        lines,
        vec![
            " ( = ( mult matrix vector ) ( * matrix vector ) )\n",
            " ( = gl_Position ( mult gl_ModelViewProjection gl_Vertex ) )\n",
        ]
    );
}

#[test]
fn error_positions_track_lines() {
    let cases = [
        ("error", SourcePosition::new(1, 6)),
        ("\nerror", SourcePosition::new(2, 6)),
        ("\n#comment\nerror # foo", SourcePosition::new(3, 12)),
    ];
    for (src, position) in cases {
        match parse_program(src) {
            Err(FrontendError::Syntax {
                position: got,
                expected,
                found,
            }) => {
                assert_eq!(got, position, "source {:?}", src);
                assert_eq!(expected, "'='");
                assert_eq!(found, "");
            }
            other => panic!("expected syntax error for {:?}, got {:?}", src, other),
        }
    }
}

#[test]
fn empty_source_has_no_tokens_or_definitions() {
    assert!(tokenize("").is_empty());
    assert_eq!(parse_program(""), Ok(Vec::new()));
    assert_eq!(parse_program("\n  \n  \n     \n"), Ok(Vec::new()));
}
