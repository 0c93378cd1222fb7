use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use intcalc::{error::Error, interpreter::evaluator::core::Evaluator, parse, tokenize};
use tracing::Level;

mod repl;

/// intcalc evaluates integer arithmetic expressions built from `+ - * /`,
/// unary signs and parentheses.
///
/// Without an expression or a file, an interactive session is started.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates every non-empty line of this file instead of reading from
    /// the terminal.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Prints the fully parenthesized syntax tree before each result.
    #[arg(short = 'a', long)]
    show_ast: bool,

    /// Prints the token stream before each result.
    #[arg(short, long)]
    tokens: bool,

    /// Raises log verbosity on stderr (`-v` debug, `-vv` trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// A single expression to evaluate. May start with `-`, as in `-5 * 2`.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(std::io::stderr)
                             .with_target(false)
                             .init();

    if let Some(path) = &args.file {
        let Ok(script) = fs::read_to_string(path) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            return ExitCode::FAILURE;
        };
        let mut failed = false;
        for (index, line) in script.lines()
                                   .enumerate()
                                   .filter(|(_, line)| !line.trim().is_empty())
        {
            if let Err(e) = run_line(line, &args) {
                eprintln!("Line {}: {e}", index + 1);
                failed = true;
            }
        }
        return if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS };
    }

    if let Some(expression) = &args.expression {
        return match run_line(expression, &args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    repl::run(&args)
}

/// Evaluates one line, printing the requested views and the result to stdout.
///
/// The error is returned unprinted so each mode can report it its own way.
fn run_line(line: &str, args: &Args) -> Result<(), Error> {
    if args.tokens {
        let rendered: Vec<String> = tokenize(line)?.iter().map(|s| s.token.to_string()).collect();
        println!("tokens: {}", rendered.join(", "));
    }

    let tree = parse(line)?;
    if args.show_ast {
        println!("ast: {tree}");
    }

    println!("{}", Evaluator::new().eval(&tree)?);
    Ok(())
}
