use std::{fs, process::ExitCode};

use clap::Parser;
use num_bigint::BigInt;
use plc::{check, interpreter::value::core::Value, run};

/// plc scans, type-checks and runs programs written in a small imperative
/// scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells plc to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Stops after static analysis without running the program.
    #[arg(short, long)]
    check: bool,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    if args.check {
        return match check(&script) {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    match run(&script) {
        Ok(Value::Integer(code)) => {
            ExitCode::from(u8::try_from(code & BigInt::from(0xff)).unwrap_or(1))
        },
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
