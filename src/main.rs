use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use seqfn::interpreter::{
    evaluator::core::{DEFAULT_MAX_DEPTH, EvalConfig},
    session::Session,
};

mod repl;

/// seqfn evaluates expressions over numbers and lazy sequences, with
/// user-defined functions written as `name -> body`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Definition files to load before anything is evaluated.
    files: Vec<PathBuf>,

    /// Evaluates a single expression, prints its value and exits instead of
    /// starting the interactive session.
    #[arg(short, long)]
    expr: Option<String>,

    /// Deepest allowed nesting of user-function calls.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();
    let mut session = Session::stdio().with_config(EvalConfig { max_depth: args.max_depth });

    let mut clean = true;
    for path in &args.files {
        match session.load_file(path) {
            Ok(errors) => {
                for (line, e) in &errors {
                    eprintln!("{}:{line}: {e}", path.display());
                }
                clean &= errors.is_empty();
            },
            Err(e) => {
                eprintln!("Failed to read the definition file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        }
    }

    if let Some(expr) = args.expr {
        return match session.evaluate(&expr) {
            Ok(value) => {
                println!("{value}");
                if clean { ExitCode::SUCCESS } else { ExitCode::FAILURE }
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    match repl::Repl::new(session) {
        Ok(mut repl) => repl.run(),
        Err(e) => {
            eprintln!("Failed to start the line editor: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Installs a log subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=seqfn=trace`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}
