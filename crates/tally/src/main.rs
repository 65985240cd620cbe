//! tally: line-oriented accumulator calculator.

use std::io::{self, IsTerminal};
use std::path::Path;

use tally::commands::{explain_error, run_file, run_repl, Session};
use tally::{init_tracing, CliError, ConfigError, ReplConfig};
use tally_diagnostic::emitter::TerminalEmitter;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(error) = dispatch(&args) {
        eprintln!("error: {error}");
        if matches!(error, CliError::UnknownCommand(_)) {
            eprintln!();
            print_usage();
        }
        std::process::exit(1);
    }
}

fn dispatch(args: &[String]) -> Result<(), CliError> {
    let Some(command) = args.first() else {
        return repl(&[]);
    };

    match command.as_str() {
        "repl" => repl(&args[1..]),
        "run" => run(&args[1..]),
        "explain" | "--explain" => {
            let Some(code) = args.get(1) else {
                eprintln!("Usage: tally explain <CODE>");
                eprintln!("Example: tally explain E1001");
                return Err(CliError::MissingCode);
            };
            explain_error(code, &mut io::stdout().lock())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("tally {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        // Options without a command: `tally --initial=5`
        option if option.starts_with('-') => repl(args),
        _ => Err(CliError::UnknownCommand(command.clone())),
    }
}

fn repl(args: &[String]) -> Result<(), CliError> {
    let (config, positional) = ReplConfig::parse_args(args)?;
    if config.final_only {
        return Err(ConfigError::RunOnly("--final").into());
    }
    if let Some(extra) = positional.into_iter().next() {
        return Err(ConfigError::UnexpectedArgument(extra).into());
    }

    let mut session = new_session(&config);
    run_repl(io::stdin().lock(), &mut io::stdout().lock(), &mut session)
}

fn run(args: &[String]) -> Result<(), CliError> {
    let (config, positional) = ReplConfig::parse_args(args)?;
    let mut positional = positional.into_iter();
    let Some(path) = positional.next() else {
        eprintln!("Usage: tally run <file> [--final] [--initial=<number>]");
        return Err(CliError::MissingFile);
    };
    if let Some(extra) = positional.next() {
        return Err(ConfigError::UnexpectedArgument(extra).into());
    }

    let mut session = new_session(&config);
    run_file(
        Path::new(&path),
        &mut io::stdout().lock(),
        &mut session,
        config.final_only,
    )
}

fn new_session(config: &ReplConfig) -> Session<TerminalEmitter<io::Stderr>> {
    let emitter = (!config.quiet)
        .then(|| TerminalEmitter::stderr(config.color, io::stderr().is_terminal()));
    Session::new(config.initial, emitter)
}

fn print_usage() {
    println!("tally: line-oriented accumulator calculator");
    println!();
    println!("Usage: tally [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl                 Read lines from stdin (default)");
    println!("  run <file>           Evaluate every line of a file");
    println!("  explain <code>       Explain a diagnostic code (e.g., E1001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --initial=<number>   Starting value (default: 0)");
    println!("  --quiet, -q          Do not print diagnostics");
    println!("  --color=<when>       auto, always, never (default: auto)");
    println!("  --final              Print only the final value (run only)");
    println!();
    println!("Lines:");
    println!("  12                   Set the value to 12");
    println!("  +3  -3  *3  /3       Add, subtract, multiply, divide");
    println!("  %3  ^3               Remainder, power");
    println!("  _   SQRT             Negate, square root");
    println!("  (+) 1 2 3            Apply the operator to each argument in turn");
    println!();
    println!("Examples:");
    println!("  tally                          # Interactive");
    println!("  tally run sums.txt --final     # Print only the result");
    println!("  tally --initial=100 -q         # Start at 100, no diagnostics");
    println!("  RUST_LOG=tally_eval=trace tally");
}
