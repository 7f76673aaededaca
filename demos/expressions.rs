//! Example: Evaluate a fixed list of arithmetic expressions
//!
//! Usage: cargo run --example expressions

use minilang::evaluate;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let expressions = [
        "2 + 3",
        "5 - 2",
        "3 * 4",
        "10 / 2",
        "2 + 3 * 4",
        "(2 + 3) * 4",
        "10 - 2 * 3",
    ];

    for expr in expressions {
        let evaluation = evaluate(expr);
        match (evaluation.result, evaluation.error) {
            (_, Some(error)) => println!("{} = error: {}", expr, error),
            (Some(value), None) => println!("{} = {}", expr, value),
            (None, None) => println!("{} = (none)", expr),
        }
    }
}
