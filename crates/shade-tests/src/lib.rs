//! Reference fixtures and the comparison helper used by the integration tests.
//!
//! Each fixture pairs a script from `crates/shade-examples` with the exact
//! report every stage must produce for it.

use shade_frontend::{run_stage, Stage, ValidateConfig};

/// A script and its expected lexer, parser and validator reports.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub name: &'static str,
    pub source: &'static str,
    pub lexer: &'static str,
    pub parser: &'static str,
    pub validator: &'static str,
}

impl Fixture {
    pub fn expected(&self, stage: Stage) -> &'static str {
        match stage {
            Stage::Lexer => self.lexer,
            Stage::Parser => self.parser,
            Stage::Validator => self.validator,
        }
    }
}

pub const FIXTURES: &[Fixture] = &[
    Fixture {
        name: "blank.shade",
        source: include_str!("../../shade-examples/blank.shade"),
        lexer: "",
        parser: "",
        validator: "",
    },
    Fixture {
        name: "basic.shade",
        source: include_str!("../../shade-examples/basic.shade"),
        lexer: "gl_Position = gl_ModelViewProjection * gl_Vertex\n",
        parser: " ( = gl_Position ( * gl_ModelViewProjection gl_Vertex ) )\n",
        validator: "Function: gl_Position\n  Expression: (* gl_ModelViewProjection gl_Vertex)\n",
    },
    Fixture {
        name: "expr.shade",
        source: include_str!("../../shade-examples/expr.shade"),
        lexer: "foo = 1\nbar = 9 8\nbaz = a b c\nbing x y = sin x + baz 2 sin 3\n",
        parser: " ( = foo 1 )\n \
                 ( = bar ( 9 8 ) )\n \
                 ( = baz ( a b c ) )\n \
                 ( = ( bing x y ) ( + ( sin x ) ( baz 2 sin 3 ) ) )\n",
        validator: "Function: foo\n  Expression: 1\n\
                    Function: bar\n  Expression: (9 8)\n\
                    Function: baz\n  Expression: (a b c)\n\
                    Function: bing\n  Arguments: x y\n  Expression: (+ (sin x) (baz 2 sin 3))\n",
    },
    Fixture {
        name: "function.shade",
        source: include_str!("../../shade-examples/function.shade"),
        lexer: "mult matrix vector = matrix * vector\n\
                gl_Position = mult gl_ModelViewProjection gl_Vertex\n",
        parser: " ( = ( mult matrix vector ) ( * matrix vector ) )\n \
                 ( = gl_Position ( mult gl_ModelViewProjection gl_Vertex ) )\n",
        validator: "Function: mult\n  Arguments: matrix vector\n  Expression: (* matrix vector)\n\
                    Function: gl_Position\n  Expression: (mult gl_ModelViewProjection gl_Vertex)\n",
    },
    Fixture {
        name: "comments.shade",
        source: include_str!("../../shade-examples/comments.shade"),
        lexer: "gl_Position = ftransform\nfoo = 1\n",
        parser: " ( = gl_Position ftransform )\n ( = foo 1 )\n",
        validator: "Function: gl_Position\n  Expression: ftransform\n\
                    Function: foo\n  Expression: 1\n",
    },
];

/// Looks up a fixture by file name.
pub fn fixture(name: &str) -> Option<&'static Fixture> {
    FIXTURES.iter().find(|f| f.name == name)
}

/// Runs `stage` over the fixture and compares byte for byte.
///
/// On mismatch the error holds a report with the actual and expected text.
pub fn check_stage(fixture: &Fixture, stage: Stage) -> Result<(), String> {
    let actual = run_stage(stage, fixture.source, &ValidateConfig::default()).text;
    let expected = fixture.expected(stage);
    if actual == expected {
        return Ok(());
    }
    Err(format!(
        "{} {}: failed\n---- STDOUT:\n{}---- EXPECTED:\n{}----",
        fixture.name,
        stage.name(),
        actual,
        expected
    ))
}
