use std::io::{self, BufRead, Write};

use clap::Parser;
use vecalc::interpreter::{evaluator::core::Context, value::display::DEFAULT_PRECISION};

/// vecalc evaluates expressions over scalars, vectors and matrices.
///
/// Without an expression it starts an interactive session in which variables
/// persist from line to line. An empty line ends the session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates a single expression and exits.
    #[arg(short, long)]
    expression: Option<String>,

    /// Number of decimals shown in results.
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut context = Context::new();

    if let Some(expression) = args.expression {
        match context.evaluate(&expression) {
            Ok(Some(value)) => println!("{}", value.display(args.precision)),
            Ok(None) => {},
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    if let Err(e) = repl(&mut context, args.precision) {
        eprintln!("Failed to read input: {e}");
        std::process::exit(1);
    }
}

fn repl(context: &mut Context, precision: usize) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };
        if line.trim().is_empty() {
            return Ok(());
        }

        match context.evaluate(&line) {
            Ok(Some(value)) => println!("Result: {}", value.display(precision)),
            Ok(None) => {},
            Err(e) => println!("{e}"),
        }
    }
}
