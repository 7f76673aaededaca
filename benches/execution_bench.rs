use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use minilang::{parse, Interpreter, Lexer};

const SUM_LOOP: &str = r#"
    let sum = 0
    let i = 1
    while (i <= 100) {
        sum = sum + i
        i = i + 1
    }
    print "Sum is:"
    print sum
"#;

fn lexer_benchmark(c: &mut Criterion) {
    c.bench_function("tokenize sum loop", |b| {
        b.iter(|| Lexer::new(black_box(SUM_LOOP)).scan_tokens().unwrap())
    });
}

fn parser_benchmark(c: &mut Criterion) {
    c.bench_function("parse sum loop", |b| {
        b.iter(|| parse(black_box(SUM_LOOP)).unwrap())
    });
}

/// Interpretation cost as loop iteration count grows
fn interpreter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("while_loop");

    for size in [10, 100, 1000].iter() {
        let source = format!(
            "let n = 0 let acc = 1 while (n < {}) {{ acc = acc * 2 / 2 + n n = n + 1 }} acc",
            size
        );
        let program = parse(&source).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &program, |b, program| {
            b.iter(|| {
                let mut interpreter = Interpreter::with_sink(Vec::new());
                black_box(interpreter.interpret(program).unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    lexer_benchmark,
    parser_benchmark,
    interpreter_benchmark
);
criterion_main!(benches);
