//! Shade CLI - run one front end stage over a definition file
//!
//! Usage:
//!   shade <file>                         # Validator report
//!   shade <file> --stage parser          # Parser report
//!   shade <file> --stage lexer           # Token dump
//!   shade <file> -o json                 # Validated program as JSON
//!   shade <file> --stage parser -o debug # Debug dump of the parsed definitions

use clap::{Parser, ValueEnum};
use shade_frontend::report::format_diagnostic;
use shade_frontend::{parse_recovering, run_stage, tokenize, Stage, ValidateConfig};
use std::process;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StageArg {
    Lexer,
    Parser,
    Validator,
}

impl From<StageArg> for Stage {
    fn from(arg: StageArg) -> Self {
        match arg {
            StageArg::Lexer => Stage::Lexer,
            StageArg::Parser => Stage::Parser,
            StageArg::Validator => Stage::Validator,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Debug,
}

#[derive(Parser)]
#[command(name = "shade")]
#[command(version)]
#[command(about = "Shade - tokenizer, parser and validator for shader definitions")]
struct Cli {
    /// Input definition file
    #[arg(value_name = "FILE")]
    file: String,

    /// Stage whose report is printed
    #[arg(short, long, value_enum, default_value = "validator")]
    stage: StageArg,

    /// Output format; json applies to the validator stage only
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Extra built-in function name (repeatable)
    #[arg(short, long = "builtin", value_name = "NAME")]
    builtins: Vec<String>,

    /// Do not warn about callees that are never defined
    #[arg(long)]
    allow_unresolved: bool,

    /// Exit with an error status when validation reports warnings
    #[arg(long)]
    deny_warnings: bool,
}

fn main() {
    let cli = Cli::parse();

    let source = match std::fs::read_to_string(&cli.file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", cli.file, e);
            process::exit(1);
        }
    };

    let config = ValidateConfig::default()
        .with_builtins(cli.builtins.iter().cloned())
        .warn_unresolved(!cli.allow_unresolved);
    let stage = Stage::from(cli.stage);
    let output = run_stage(stage, &source, &config);

    for diag in &output.diagnostics {
        eprintln!("{}", format_diagnostic(diag, &cli.file, &source));
    }

    match cli.output {
        OutputFormat::Text => print!("{}", output.text),
        OutputFormat::Json => match output.program.as_ref() {
            Some(program) => match serde_json::to_string_pretty(program) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error serializing to JSON: {}", e);
                    process::exit(1);
                }
            },
            None => {
                eprintln!("JSON output is only available for the validator stage");
                process::exit(2);
            }
        },
        OutputFormat::Debug => print_debug(stage, &source, &output),
    }

    if output.has_errors() || (cli.deny_warnings && output.warning_count() > 0) {
        process::exit(1);
    }
}

fn print_debug(stage: Stage, source: &str, output: &shade_frontend::StageOutput) {
    match stage {
        Stage::Lexer => println!("{:#?}", tokenize(source)),
        Stage::Parser => println!("{:#?}", parse_recovering(&tokenize(source)).definitions),
        Stage::Validator => println!("{:#?}", output.program),
    }
}
