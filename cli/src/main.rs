//! failpolicy CLI: classify HTTP responses from the terminal.
//!
//! Usage:
//! ```bash
//! # Classify a 404 with the dispatch policy
//! failpolicy classify --policy dispatch --status 404 --body 'not here'
//!
//! # Headers, a body file, and JSON output
//! failpolicy classify --policy diagnostic --status 400 \
//!     --header content-type=application/json --body-file err.json --json
//!
//! # List the available policies
//! failpolicy policies
//! ```

mod logging;

use std::env;
use std::process;

use failpolicy_core::{
    Outcome, OutcomeError, OutcomePolicy, PolicyConfig, PolicyKind, ResponseBody,
    ResponseDescriptor, DEBUG_ENV_VAR,
};

/// Exit code when the policy surfaced the response as an error.
const EXIT_CLASSIFIED_FAILURE: i32 = 2;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "classify" => cmd_classify(&args[2..]),
        "policies" => {
            cmd_policies();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("failpolicy {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn print_usage() {
    println!("failpolicy {}", env!("CARGO_PKG_VERSION"));
    println!("Classify HTTP responses with an outcome policy\n");
    println!("USAGE:");
    println!("    failpolicy <COMMAND>\n");
    println!("COMMANDS:");
    println!("    classify  Run a response through a policy");
    println!("    policies  List the available policies");
    println!("    version   Print version");
    println!("    help      Print this help\n");
    println!("CLASSIFY FLAGS:");
    println!("    --policy <NAME>        strict | discard | diagnostic | dispatch  [default: strict]");
    println!("    --status <CODE>        Response status code (omit for none)");
    println!("    --header <NAME=VALUE>  Response header, repeatable");
    println!("    --body <TEXT>          Response body");
    println!("    --body-file <PATH>     Read the response body from a file");
    println!("    --debug                Include the body in error messages (also {DEBUG_ENV_VAR})");
    println!("    --verbose              Log classification details to stderr");
    println!("    --json                 Output as JSON");
}

fn cmd_policies() {
    for kind in PolicyKind::ALL {
        println!("{:<12} {}", kind.as_str(), kind.description());
    }
}

fn cmd_classify(args: &[String]) -> Result<(), String> {
    let mut config = PolicyConfig::from_env();
    let mut response = ResponseDescriptor::new();
    let mut body = ResponseBody::default();
    let mut as_json = false;
    let mut verbose = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--policy" => {
                i += 1;
                let name = args.get(i).ok_or("--policy needs a value")?;
                config.policy = name.parse().map_err(|e| format!("{e}"))?;
            }
            "--status" => {
                i += 1;
                let status = args.get(i).ok_or("--status needs a value")?;
                response = response.with_status(status);
            }
            "--header" => {
                i += 1;
                let raw = args.get(i).ok_or("--header needs a value")?;
                let (name, value) = raw
                    .split_once('=')
                    .ok_or_else(|| format!("invalid header (expected NAME=VALUE): {raw}"))?;
                response = response.with_header(name.trim(), value.trim());
            }
            "--body" => {
                i += 1;
                let text = args.get(i).ok_or("--body needs a value")?;
                body = ResponseBody::from(text.as_str());
            }
            "--body-file" => {
                i += 1;
                let path = args.get(i).ok_or("--body-file needs a value")?;
                let bytes =
                    std::fs::read(path).map_err(|e| format!("cannot read {path}: {e}"))?;
                body = ResponseBody::from(bytes);
            }
            "--debug" => config.debug = true,
            "--verbose" => verbose = true,
            "--json" => as_json = true,
            flag => return Err(format!("Unknown flag: {flag}")),
        }
        i += 1;
    }

    logging::init_tracing(verbose);
    tracing::debug!(
        policy = %config.policy,
        status = ?response.status(),
        body_len = body.as_bytes().len(),
        "classifying response"
    );

    let policy = config.build();
    match policy.classify(&response, body) {
        Ok(outcome) => print_outcome(&outcome, as_json),
        Err(err) => {
            print_error(policy.as_ref(), &err, as_json);
            process::exit(EXIT_CLASSIFIED_FAILURE);
        }
    }
}

fn print_outcome(outcome: &Outcome, as_json: bool) -> Result<(), String> {
    if as_json {
        let json = serde_json::json!({ "ok": true, "outcome": outcome });
        println!("{}", serde_json::to_string_pretty(&json).map_err(|e| e.to_string())?);
        return Ok(());
    }
    match outcome {
        Outcome::Body(body) => println!("{body}"),
        Outcome::Discarded => println!("(discarded)"),
        Outcome::Diagnostic(report) => {
            println!("Failed response: {}", report.response);
            println!("Body:");
            println!("{}", report.body);
        }
    }
    Ok(())
}

fn print_error(policy: &dyn OutcomePolicy, err: &OutcomeError, as_json: bool) {
    if as_json {
        let json = serde_json::json!({
            "ok": false,
            "policy": policy.name(),
            "error": {
                "kind": err.kind(),
                "message": err.message(),
                "body": err.body(),
            },
        });
        match serde_json::to_string_pretty(&json) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Error: {e}"),
        }
        return;
    }
    eprintln!("{}: {err}", err.kind());
}
