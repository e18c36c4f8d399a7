use shade_frontend::Stage;
use shade_tests::{check_stage, fixture, FIXTURES};

#[test]
fn every_fixture_matches_every_stage() {
    let failures: Vec<String> = FIXTURES
        .iter()
        .flat_map(|f| Stage::ALL.into_iter().map(move |stage| check_stage(f, stage)))
        .filter_map(Result::err)
        .collect();
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn basic_script_end_to_end() {
    let basic = fixture("basic.shade").expect("basic fixture");
    assert_eq!(
        basic.source,
        "gl_Position = gl_ModelViewProjection * gl_Vertex\n"
    );
    for stage in Stage::ALL {
        check_stage(basic, stage).unwrap_or_else(|report| panic!("{}", report));
    }
}

#[test]
fn mismatch_report_shows_actual_and_expected() {
    let mut broken = *fixture("basic.shade").expect("basic fixture");
    broken.parser = " ( = gl_Position 1 )\n";
    let report = check_stage(&broken, Stage::Parser).unwrap_err();
    assert!(report.starts_with("basic.shade parser: failed\n---- STDOUT:\n"));
    assert!(report.contains("---- EXPECTED:\n ( = gl_Position 1 )\n----"));
}

#[test]
fn blank_fixture_is_empty_at_every_stage() {
    let blank = fixture("blank.shade").expect("blank fixture");
    assert!(blank.source.is_empty());
    for stage in Stage::ALL {
        assert_eq!(blank.expected(stage), "");
        assert!(check_stage(blank, stage).is_ok());
    }
}
