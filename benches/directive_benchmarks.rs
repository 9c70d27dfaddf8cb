//! Performance benchmarks for directive expansion.
//!
//! Covers each stage on its own and the full pipeline:
//! - Splitting argument lists of growing length and nesting
//! - Binding in named and positional mode
//! - Template substitution with and without escapes
//! - Expanding whole documents through a registry

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use directives::{
    DirectiveRegistry, ParameterDescriptor, Parameters, ParsedArgument, Syntax, bind_named,
    bind_positional, compile, split,
};
use std::hint::black_box;

fn argument_list(count: usize) -> String {
    (0..count)
        .map(|i| match i % 3 {
            0 => format!("$value{}", i),
            1 => format!("['k{}' => [{}, {}], 'text, with comma']", i, i, i + 1),
            _ => format!("fn($x) => strtoupper(\"{}\")", i),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn declared(count: usize) -> Parameters {
    Parameters::new((0..count).map(|i| {
        if i % 2 == 0 {
            ParameterDescriptor::required(format!("p{}", i))
        } else {
            ParameterDescriptor::optional(format!("p{}", i), i as i64)
        }
    }))
    .unwrap()
}

fn template(count: usize) -> String {
    (0..count)
        .map(|i| format!("echo $p{} . \\$p{} . $unbound{};\n", i, i, i))
        .collect()
}

/// Benchmark splitting across argument list sizes
fn split_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("split/arguments");

    for count in [1, 8, 64] {
        let source = argument_list(count);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(format!("{}_args", count), |b| {
            b.iter(|| black_box(split(black_box(&source)).unwrap().len()));
        });
    }

    let nested = format!("{}{}{}", "[".repeat(64), "1, 2", "]".repeat(64));
    group.bench_function("deep_nesting", |b| {
        b.iter(|| black_box(split(black_box(&nested)).unwrap().len()));
    });

    group.finish();
}

/// Benchmark binding modes
fn bind_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("bind");
    let syntax = Syntax::default();
    let params = declared(16);

    let positional: Vec<_> = (0..8)
        .map(|i| ParsedArgument::positional(format!("$a{}", i)))
        .collect();
    let mut mixed = positional.clone();
    mixed.extend((8..16).rev().map(|i| ParsedArgument::named(format!("p{}", i), "$n")));

    group.bench_function("named/positional_only", |b| {
        b.iter(|| black_box(bind_named(&params, black_box(&positional), &syntax).len()));
    });

    group.bench_function("named/mixed", |b| {
        b.iter(|| black_box(bind_named(&params, black_box(&mixed), &syntax).len()));
    });

    group.bench_function("positional/mixed", |b| {
        b.iter(|| black_box(bind_positional(&params, black_box(&mixed), &syntax).len()));
    });

    group.finish();
}

/// Benchmark template substitution
fn compile_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile/templates");
    let syntax = Syntax::default();
    let params = declared(16);
    let bindings = bind_named(&params, &[], &syntax);

    for lines in [1, 16, 256] {
        let code = template(lines);
        group.throughput(Throughput::Bytes(code.len() as u64));
        group.bench_function(format!("{}_lines", lines), |b| {
            b.iter(|| black_box(compile(black_box(&code), &bindings, &syntax).len()));
        });
    }

    group.finish();
}

/// Benchmark expansion of whole documents
fn expand_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand/documents");

    let mut registry = DirectiveRegistry::new();
    registry
        .compile("each", declared(2), |_| {
            "<?php foreach ($p0 as $item) { echo $item . $p1; } ?>".to_string()
        })
        .unwrap();
    registry
        .make("upper", declared(1), |bound| {
            format!("<?php echo strtoupper({}); ?>", bound.get("p0").unwrap_or("''"))
        })
        .unwrap();

    for blocks in [1, 32, 512] {
        let document: String = (0..blocks)
            .map(|i| {
                format!(
                    "<li>@each([{}, 2, 3], p1 => '!')</li>\n<p>@upper('x{}') user@mail.test @@each</p>\n",
                    i, i
                )
            })
            .collect();

        group.throughput(Throughput::Bytes(document.len() as u64));
        group.bench_function(format!("{}_blocks", blocks), |b| {
            b.iter(|| black_box(registry.expand(black_box(&document)).unwrap().len()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    split_benchmarks,
    bind_benchmarks,
    compile_benchmarks,
    expand_benchmarks
);
criterion_main!(benches);
