use std::{fs, process::ExitCode};

use clap::Parser;
use stepcalc::{
    Error,
    config::Config,
    get_result,
    interpreter::{bindings::bind, evaluator::core::Context},
    parse,
};

/// stepcalc evaluates arithmetic over arbitrarily large non-negative integers
/// and prints every reduction step on the way to the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells stepcalc to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Binds a variable, e.g. `--var x=42`. May be repeated.
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, String)>,

    /// Maximum number of decimal digits any value may have.
    #[arg(long, value_name = "N")]
    max_digits: Option<usize>,

    /// Maximum nesting depth of the expression.
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Prints only the final value instead of the whole trace.
    #[arg(short, long)]
    result_only: bool,

    contents: String,
}

fn parse_binding(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
       .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
       .ok_or_else(|| format!("expected NAME=VALUE, found '{arg}'"))
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_target(true).with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn run(source: &str, args: Args) -> Result<String, Error> {
    let mut config = Config::new();
    if let Some(digits) = args.max_digits {
        config.set_digit_limit(digits)?;
    }
    if let Some(depth) = args.max_depth {
        config.set_max_depth(depth)?;
    }

    let bindings = bind(args.vars, config.digit_limit())?;

    if args.result_only {
        let expr = parse(source, &config)?;
        let value = Context::new(&bindings, config.digit_limit()).eval(&expr)?;
        return Ok(value.to_string());
    }

    Ok(get_result(source, &bindings, &config)?.trace_text())
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents.clone()
    };

    match run(&source, args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use stepcalc::error::{BindingError, ConfigError};

    use super::*;

    fn run_with(argv: &[&str]) -> Result<String, Error> {
        let args = Args::try_parse_from(argv).unwrap();
        let source = args.contents.clone();
        run(&source, args)
    }

    #[test]
    fn prints_trace_or_result() {
        assert_eq!(run_with(&["stepcalc", "-v", "x=3", "x * 2"]).unwrap(),
                   "x * 2\n(x * 2)\n(3 * 2)\n6");
        assert_eq!(run_with(&["stepcalc", "--result-only", "--var", "x=3", "x * 2"]).unwrap(),
                   "6");
    }

    #[test]
    fn settings_and_bindings_fail_through_the_error_union() {
        assert_eq!(run_with(&["stepcalc", "--max-digits", "0", "1"]),
                   Err(Error::Config(ConfigError::ZeroDigitLimit)));
        assert_eq!(run_with(&["stepcalc", "--max-depth", "0", "1"]),
                   Err(Error::Config(ConfigError::ZeroNestingDepth)));
        assert_eq!(run_with(&["stepcalc", "-v", "x1=3", "1"]),
                   Err(Error::Binding(BindingError::InvalidName { name: "x1".to_string() })));
        assert_eq!(run_with(&["stepcalc", "-v", "x=1", "-v", "x=2", "x"]),
                   Err(Error::Binding(BindingError::DuplicateName { name: "x".to_string() })));
    }

    #[test]
    fn binding_argument_needs_an_equals_sign() {
        assert_eq!(parse_binding(" y = 12 "), Ok(("y".to_string(), "12".to_string())));
        assert!(parse_binding("y").is_err());
        assert!(Args::try_parse_from(["stepcalc", "-v", "y", "1"]).is_err());
    }

    #[test]
    fn result_only_handles_very_long_chains() {
        let source = vec!["1"; 300_000].join(" + ");
        assert_eq!(run_with(&["stepcalc", "--result-only", source.as_str()]).unwrap(), "300000");
    }
}
