use std::{fs, path::PathBuf};

use clap::Parser;
use minirun::execute;

/// minirun runs MiniC teaching programs without a compiler toolchain,
/// producing the program's output for a given stream of input values.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells minirun to look at a file instead of inline source text.
    #[arg(short, long)]
    file: bool,

    /// Path to a file holding one input value per line.
    #[arg(short, long)]
    input: Option<PathBuf>,

    program: String,
}

fn main() {
    let args = Args::parse();

    let input = match &args.input {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            std::process::exit(1);
        }),
        None => String::new(),
    };

    let source = if args.file {
        fs::read_to_string(&args.program).unwrap_or_else(|_| {
            eprintln!("Failed to read the program file '{}'. Perhaps this file does not exist?",
                      &args.program);
            std::process::exit(1);
        })
    } else {
        args.program
    };

    match execute(&source, &input) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
