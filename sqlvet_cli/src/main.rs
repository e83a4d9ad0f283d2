use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use sqlvet_core::parser::parser::parse;
use sqlvet_core::{Error, ErrorKind, Frontend, ValidatorConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// One line of `--json` output.
#[derive(Debug, Serialize)]
struct Report {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl Report {
    fn from_result<T>(result: &Result<T, Error>) -> Self {
        match result {
            Ok(_) => Report {
                ok: true,
                kind: None,
                message: None,
            },
            Err(err) => Report {
                ok: false,
                kind: err.kind(),
                message: Some(err.to_string()),
            },
        }
    }
}

/// sqlvet - interactive semantic checker for MySQL-dialect statements
#[derive(Parser, Debug)]
#[command(name = "sqlvet_cli")]
#[command(version, about = "Validate DDL/DML statements against engine limits", long_about = None)]
struct Cli {
    /// JSON file with validator settings
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Print one JSON report per statement
    #[arg(long = "json")]
    json: bool,
}

fn print_outcome<T>(result: &Result<T, Error>, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(&Report::from_result(result))?);
        return Ok(());
    }
    match result {
        Ok(_) => println!("ok"),
        Err(err) => match err.kind() {
            Some(kind) => println!("{kind:?}: {err}"),
            None => println!("{err}"),
        },
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ValidatorConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ValidatorConfig::default(),
    };
    debug!(?config, "validator configured");
    let frontend = Frontend::with_config(config);

    println!("sqlvet_cli (type 'help' or 'exit')");

    loop {
        print!("sqlvet> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        if input.eq_ignore_ascii_case("help") {
            println!("Commands:");
            println!("  parse <sql>    -> show the parsed statement (debug)");
            println!("  prepare <sql>  -> validate as a prepared statement ('?' allowed)");
            println!("  exit|quit      -> quit");
            println!("  help           -> help");
            println!("  (anything else is validated)");
            continue;
        }

        // ---- PARSE DEBUG MODE ----
        if let Some(rest) = input.strip_prefix("parse ") {
            match parse(rest) {
                Ok(stmt) => println!("Parsed as: {stmt:#?}"),
                Err(e) => eprintln!("Parse error: {e}"),
            }
            continue;
        }

        // ---- VALIDATION MODE ----
        let result = match input.strip_prefix("prepare ") {
            Some(rest) => frontend.check(rest, true),
            None => frontend.check(input, false),
        };
        print_outcome(&result, cli.json)?;
    }
    Ok(())
}
