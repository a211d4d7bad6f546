use criterion::{Criterion, black_box, criterion_group, criterion_main};
use text_rules::{RuleChain, TextRulesExt};

/// Build a chain of `n` always-passing length checks, with a transform every
/// fifth entry.
fn build_chain(n: usize) -> RuleChain {
    let mut chain = RuleChain::new().input("  the quick brown fox  ");
    for i in 0..n {
        chain = chain.min_len(1, false);
        if i % 5 == 0 {
            chain = chain.transform_input(|s| s.trim().to_owned());
        }
    }
    chain
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_eval");

    for &n in &[5, 20, 50] {
        group.bench_function(&format!("{n}_conditions_cold"), |b| {
            b.iter_batched(
                || build_chain(n),
                |mut chain| black_box(chain.validate()),
                criterion::BatchSize::SmallInput,
            );
        });

        let mut chain = build_chain(n);
        group.bench_function(&format!("{n}_conditions_cached"), |b| {
            b.iter(|| black_box(chain.validate()));
        });
    }

    group.finish();
}

fn bench_form_field(c: &mut Criterion) {
    c.bench_function("email_field", |b| {
        b.iter(|| {
            black_box("someone@example.co.id")
                .text_rules()
                .hint("Email")
                .max_len(64, true)
                .email()
                .value_or_none()
        });
    });

    c.bench_function("phone_field_rejected", |b| {
        b.iter(|| {
            black_box("0812-34")
                .text_rules()
                .transform_input(|s| s.replace('-', ""))
                .number_only(false)
                .indonesia_phone_number()
                .is_valid()
        });
    });
}

criterion_group!(benches, bench_evaluate, bench_form_field);
criterion_main!(benches);
