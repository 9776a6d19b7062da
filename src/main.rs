//! Parapet CLI - Guard Clause Demonstration
//!
//! This is a demonstration CLI for the Parapet library. It runs the guard
//! rules against values supplied on the command line and prints the outcome,
//! optionally as JSON.

use anyhow::{bail, Context, Result};
use parapet::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        return Ok(());
    }

    match args[1].as_str() {
        "rules" => list_rules(),
        "check" => {
            if args.len() < 3 {
                bail!("please supply a value to check; see `{} help`", args[0]);
            }
            check_value(&args[2..])?;
        }
        "help" | "--help" | "-h" => print_usage(&args[0]),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage(&args[0]);
        }
    }
    Ok(())
}

fn print_usage(program: &str) {
    println!("Usage: {program} <command> [options]");
    println!();
    println!("Commands:");
    println!("  rules                      List the guard rules");
    println!("  check <value> [options]    Run guards against a value");
    println!("  help                       Show this help message");
    println!();
    println!("Check options:");
    println!("  --not-blank         Require a non-blank string (default: non-empty)");
    println!("  --int               Require a 32-bit integer string");
    println!("  --max-len <n>       Enforce a maximum character count");
    println!("  --one-of <a,b,c>    Require membership in a comma-separated set");
    println!("  --name <name>       Name the argument explicitly in failures");
    println!("  --json              Print failures as JSON");
}

fn list_rules() {
    println!("Available rules:");
    println!();
    for (name, about) in [
        ("not_null", "value must be present"),
        ("not_empty_str", "string must be present and non-empty"),
        ("not_blank_str", "string must contain a non-whitespace character"),
        ("max_len_str", "non-blank string must not exceed a length limit"),
        ("int_str", "string must parse as a 32-bit signed integer"),
        ("not_empty", "collection must be present and non-empty"),
        ("non_negative", "integer must be zero or greater"),
        ("positive", "integer must be greater than zero"),
        ("one_of", "value must be in the allowed set"),
        ("of_type_ref", "erased value must hold the required type"),
        ("condition", "caller-supplied condition must hold"),
    ] {
        println!("  {name:<16} {about}");
    }
}

fn check_value(args: &[String]) -> Result<()> {
    let value = args[0].clone();
    let mut not_blank = false;
    let mut as_int = false;
    let mut max_len: Option<usize> = None;
    let mut one_of_set: Option<Vec<String>> = None;
    let mut name: Option<String> = None;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--not-blank" => not_blank = true,
            "--int" => as_int = true,
            "--max-len" => {
                i += 1;
                let raw = args.get(i).context("--max-len requires a number")?;
                max_len = Some(raw.parse().context("--max-len requires a number")?);
            }
            "--one-of" => {
                i += 1;
                let raw = args.get(i).context("--one-of requires a comma-separated set")?;
                one_of_set = Some(raw.split(',').map(str::to_string).collect());
            }
            "--name" => {
                i += 1;
                name = Some(args.get(i).context("--name requires a name")?.clone());
            }
            "--json" => json = true,
            other => bail!("unknown check option: {other}"),
        }
        i += 1;
    }

    let outcome = run_guards(value, not_blank, as_int, max_len, one_of_set, name);
    match outcome {
        Ok(value) => {
            println!("ok: '{value}' passed all checks");
        }
        Err(failure) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&failure)?);
            } else {
                println!("failed: {failure}");
            }
            std::process::exit(1);
        }
    }
    Ok(())
}

fn run_guards(
    cli_value: String,
    not_blank: bool,
    as_int: bool,
    max_len: Option<usize>,
    one_of_set: Option<Vec<String>>,
    name: Option<String>,
) -> GuardResult<String> {
    let name = name.unwrap_or_else(|| "value".to_string());

    let mut value = if not_blank {
        arg(Some(cli_value)).named(&name).not_blank_str()?
    } else {
        arg(Some(cli_value)).named(&name).not_empty_str()?
    };

    if as_int {
        value = arg(value).named(&name).int_str()?;
    }
    if let Some(max) = max_len {
        value = arg(value).named(&name).max_len_str(max)?;
    }
    if let Some(supported) = one_of_set {
        value = arg(value).named(&name).one_of(&supported)?;
    }
    Ok(value)
}
