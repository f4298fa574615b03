use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use loxide::{
    ast::{Expr, printer::AstPrinter},
    error::StderrReporter,
    frontend::{lexer::TokenKind, token::Token},
    run,
};
use tracing_subscriber::EnvFilter;

/// Exit status for a script that failed to scan.
const EXIT_DATA_ERROR: u8 = 65;

/// loxide scans Lox scripts and prints the tokens it finds. Without a script
/// it starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the script to scan.
    script: Option<PathBuf>,

    /// Print a sample expression tree through the AST printer first.
    #[arg(long)]
    demo: bool,
}

fn main() -> ExitCode {
    // LOXIDE_LOG takes an EnvFilter directive such as `debug` or
    // `loxide::frontend=trace`.
    if let Ok(filter) = EnvFilter::try_from_env("LOXIDE_LOG") {
        tracing_subscriber::fmt().with_env_filter(filter)
                                 .with_target(true)
                                 .with_writer(io::stderr)
                                 .init();
        tracing::debug!("tracing initialized");
    }

    let args = Args::parse();

    if args.demo {
        println!("{}", AstPrinter.print(&sample_expression()));
    }

    match args.script {
        Some(path) => run_file(&path),
        None => match run_prompt() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Failed to read from standard input: {e}");
                ExitCode::FAILURE
            },
        },
    }
}

fn run_file(path: &Path) -> ExitCode {
    let Ok(source) = fs::read_to_string(path) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  path.display());
        return ExitCode::FAILURE;
    };

    let outcome = run(&source, &mut StderrReporter);
    for token in &outcome.tokens {
        println!("{token}");
    }

    if outcome.had_error {
        ExitCode::from(EXIT_DATA_ERROR)
    } else {
        ExitCode::SUCCESS
    }
}

/// Reads and runs one line at a time until an empty line or end of input.
fn run_prompt() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if line.is_empty() {
            break;
        }

        // Every line gets its own outcome, so an error does not leak into
        // the next one.
        let outcome = run(&line, &mut StderrReporter);
        for token in &outcome.tokens {
            println!("{token}");
        }
    }

    Ok(())
}

/// `-123 * (45.67)`
fn sample_expression() -> Expr {
    Expr::binary(Expr::unary(Token::symbol(TokenKind::Minus, "-", 1), Expr::literal(123.0)),
                 Token::symbol(TokenKind::Star, "*", 1),
                 Expr::grouping(Expr::literal(45.67)))
}
