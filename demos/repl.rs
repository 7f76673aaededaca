//! Simple REPL (Read-Eval-Print Loop) for Minilang
//!
//! Usage: cargo run --example repl
//!
//! Every line runs against the same interpreter, so variables declared on one
//! line stay visible on the next.

use std::io::{self, Write};

use minilang::{parse, Interpreter, Value};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Minilang REPL v{}", minilang::VERSION);
    println!("Type 'exit' to quit, 'clear' to reset variables, 'vars' to list them.");
    println!();

    let mut interpreter = Interpreter::new();
    let mut line_num = 1;

    loop {
        print!("ml[{}]> ", line_num);
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        match input.trim() {
            "" => continue,
            "exit" | "quit" => break,
            "clear" => {
                interpreter = Interpreter::new();
                println!("Environment cleared");
                continue;
            }
            "vars" => {
                let mut vars: Vec<_> = interpreter.env().iter().collect();
                vars.sort_by(|a, b| a.0.cmp(b.0));
                for (name, value) in vars {
                    println!("  {}: {} = {}", name, value.type_name(), describe(value));
                }
                continue;
            }
            source => match parse(source).and_then(|program| interpreter.interpret(&program)) {
                Ok(Some(value)) => println!("=> {}", describe(&value)),
                Ok(None) => {}
                Err(err) => eprintln!("Error: {}", err),
            },
        }

        line_num += 1;
    }

    Ok(())
}

fn describe(value: &Value) -> String {
    match value.as_str() {
        Some(s) => format!("{:?}", s),
        None => value.to_string(),
    }
}
