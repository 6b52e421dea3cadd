use clap::Parser;
use miette::{IntoDiagnostic, Result};
use scalc::{Engine, HostValue, Parameters, render_error};
use std::io::BufRead;
use std::io::BufReader;
use tracing::debug;

/// scalc - evaluate parametrized postfix expressions
#[derive(Parser, Debug)]
#[command(name = "scalc")]
#[command(about = "Evaluate scalc expressions", long_about = None)]
struct Args {
    /// Bind a parameter, e.g. `--param price=21`. Values that parse as an
    /// integer or a float are bound as numbers, anything else as text.
    #[arg(short, long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
    params: Vec<(String, HostValue)>,

    /// Print every value left on the stack instead of exactly one
    #[arg(long)]
    all: bool,

    /// Print the compiled instructions (for debugging)
    #[arg(long)]
    debug_code: bool,

    /// Expression to evaluate (if not provided, reads one per line from stdin)
    expression: Option<String>,
}

fn parse_param(arg: &str) -> std::result::Result<(String, HostValue), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got {:?}", arg))?;
    if name.is_empty() {
        return Err(format!("missing parameter name in {:?}", arg));
    }

    let value = if let Ok(int) = value.parse::<i64>() {
        HostValue::from(int)
    } else if let Ok(float) = value.parse::<f64>() {
        HostValue::from(float)
    } else {
        HostValue::from(value)
    };
    Ok((name.to_string(), value))
}

fn interpret_input(engine: &Engine, params: &Parameters, input: &str, args: &Args) {
    let expr = match engine.compile(input) {
        Ok(expr) => expr,
        Err(e) => {
            render_error(input, &e);
            return;
        }
    };

    if args.debug_code {
        println!("=== Compiled Code ===");
        println!("{:?}", expr.code());
        println!();
    }

    if args.all {
        match expr.run_all(params) {
            Ok(values) => {
                for value in values {
                    println!("{}", value);
                }
            }
            Err(e) => render_error(input, &e),
        }
    } else {
        match expr.run(params) {
            Ok(value) => println!("{}", value),
            Err(e) => render_error(input, &e),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG to control log level, default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let engine = Engine::default();
    let params: Parameters = args.params.iter().cloned().collect();
    debug!(count = params.len(), "bound parameters");

    // Check if we have a direct expression argument
    if let Some(expr) = &args.expression {
        interpret_input(&engine, &params, expr, &args);
        return Ok(());
    }

    // Otherwise evaluate stdin line by line
    let stdin = std::io::stdin();
    let reader = BufReader::new(stdin.lock());

    for line in reader.lines() {
        let line = line.into_diagnostic()?;
        if line.trim().is_empty() {
            continue;
        }
        interpret_input(&engine, &params, &line, &args);
    }

    Ok(())
}
