use std::fs;

use clap::Parser;
use schemette::{interpret, interpreter::value::Value};

/// schemette is a small interpreter for a Scheme-like expression language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells schemette to look at a file instead of an inline expression.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match interpret(&script) {
        Ok(Value::Unspecified) => {},
        Ok(value) => println!("{value}"),
        Err(e) => eprintln!("{e}"),
    }
}
