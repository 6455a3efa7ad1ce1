use std::{fs, process::ExitCode};

use clap::{ArgAction, Parser};
use tiercalc::{
    catalog::STANDARD_CATALOG, evaluate, interpreter::lexer::strip_whitespace, tokenize,
};
use tracing_subscriber::EnvFilter;

/// tiercalc evaluates integer arithmetic expressions with `+ - * / ^ !` and
/// parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tiercalc to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Prints the token sequence before the result.
    #[arg(short, long)]
    tokens: bool,

    /// Raises the log level; repeat for more detail. `RUST_LOG` takes
    /// precedence when set.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

fn run(source: &str, show_tokens: bool) -> Result<f64, Box<dyn std::error::Error>> {
    let source = strip_whitespace(source);
    let symbols = tokenize(&source, &STANDARD_CATALOG)?;

    if show_tokens {
        for symbol in &symbols {
            println!("{:<10} {symbol}", symbol.kind_name());
        }
    }

    Ok(evaluate(&symbols, &STANDARD_CATALOG)?)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    match run(&source, args.tokens) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
