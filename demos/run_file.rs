//! Example: Execute Minilang scripts from files
//!
//! Usage: cargo run --example run_file <script.ml>

use std::env;
use std::fs;
use std::process;

use anyhow::Context;
use minilang::{parse, Interpreter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo run --example run_file <script.ml>");
        eprintln!("\nExample scripts in demos/:");
        eprintln!("  - sum.ml");
        eprintln!("  - fizzbuzz.ml");
        process::exit(1);
    }

    let file_path = &args[1];
    let code = fs::read_to_string(file_path)
        .with_context(|| format!("Error reading file '{}'", file_path))?;

    println!("Executing: {}", file_path);
    println!("{}", "=".repeat(60));

    // Output goes straight to stdout as each print runs
    let program = parse(&code)?;
    let mut interpreter = Interpreter::new();
    match interpreter.interpret(&program) {
        Ok(Some(value)) => println!("\nResult: {}", value),
        Ok(None) => println!("\nResult: (none)"),
        Err(err) => {
            eprintln!("\nError: {}", err);
            process::exit(1);
        }
    }

    Ok(())
}
