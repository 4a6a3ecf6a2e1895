// Condition set evaluation benchmarks
// Run with: cargo bench -p verdict-validator

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use verdict_validator::prelude::*;

fn age_rules() -> ConditionSet<i64> {
    ConditionBuilder::<i64>::new()
        .when(|age| *age < 0)
        .then_error_message("{0} must not be negative")
        .unwrap()
        .when(|age| *age < 18)
        .then(|chain| chain.mode(CompositeMode::All).push(min(18_i64)).push(max(10_i64)))
        .otherwise(|chain| chain.push(max(130_i64)))
        .build()
}

fn tagged_chain() -> ConditionSet<str> {
    ConditionBuilder::<str>::new()
        .otherwise(|chain| {
            chain
                .mode(CompositeMode::All)
                .push(not_empty())
                .push(min_length(3))
                .push_in(["create"], max_length(32))
                .push_in(["admin"], max_length(8))
        })
        .build()
}

/// Valid subject through the default chain (hot path)
fn bench_valid_default(c: &mut Criterion) {
    let rules = age_rules();
    let ctx = EvaluationContext::for_field("Age");

    c.bench_function("condition_set_valid_default", |b| {
        b.iter(|| black_box(rules.is_valid(black_box(&42), &ctx)));
    });
}

/// Failing subject collecting every failure of the matched branch
fn bench_failing_branch(c: &mut Criterion) {
    let rules = age_rules();
    let ctx = EvaluationContext::for_field("Age");

    c.bench_function("condition_set_failing_branch", |b| {
        b.iter(|| black_box(rules.evaluate(black_box(&12), &ctx).failure_count()));
    });
}

/// Rule set filtering plus priority ordering
fn bench_rule_set_filter(c: &mut Criterion) {
    let rules = tagged_chain();
    let none = EvaluationContext::for_field("Name");
    let all = EvaluationContext::builder()
        .field_name("Name")
        .rule_sets(RuleSetFilter::wildcard())
        .build();

    c.bench_function("rule_set_untagged_only", |b| {
        b.iter(|| black_box(rules.is_valid(black_box("alice"), &none)));
    });
    c.bench_function("rule_set_wildcard", |b| {
        b.iter(|| black_box(rules.is_valid(black_box("alice"), &all)));
    });
}

criterion_group!(
    benches,
    bench_valid_default,
    bench_failing_branch,
    bench_rule_set_filter
);
criterion_main!(benches);
