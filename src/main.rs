use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "ruleval",
    about = "ruleval - evaluate a rule formula against a JSON environment",
    version,
    after_help = "Example:\n\n\t$ ruleval 'gt(env[\"score\"], 0.5)' --env '{\"score\": 0.8}'"
)]
struct Cli {
    /// Rule formula to evaluate
    formula: String,

    /// Environment as an inline JSON object (default: read from stdin, or {} if stdin is a TTY)
    #[arg(long = "env")]
    env: Option<String>,

    /// Environment as a path to a JSON file
    #[arg(long = "env-file", value_name = "FILE", conflicts_with = "env")]
    env_file: Option<String>,

    /// Only check that the formula parses; print "valid"/"invalid" and set exit status
    #[arg(long)]
    validate_only: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.validate_only {
        if ruleform::validate(&cli.formula) {
            println!("valid");
            return Ok(());
        } else {
            println!("invalid");
            std::process::exit(1);
        }
    }

    let env_text = match (&cli.env, &cli.env_file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read env file: {path}"))?,
        (None, None) => {
            use std::io::IsTerminal;
            if io::stdin().is_terminal() {
                "{}".to_string()
            } else {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read stdin")?;
                if buf.trim().is_empty() {
                    "{}".to_string()
                } else {
                    buf
                }
            }
        }
    };

    let env: serde_json::Value = match serde_json::from_str(&env_text) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("ruleval: error: invalid environment JSON: {e}");
            std::process::exit(2);
        }
    };

    match ruleform::evaluate(&cli.formula, &env) {
        Ok(frequency) => {
            println!("{frequency}");
            Ok(())
        }
        Err(e) if e.is_parse_error() => {
            eprintln!("ruleval: error: failed to parse formula: {}\n\nCaused by:\n    {e}", cli.formula);
            std::process::exit(3);
        }
        Err(e) => {
            eprintln!("ruleval: error: {e}");
            std::process::exit(4);
        }
    }
}
