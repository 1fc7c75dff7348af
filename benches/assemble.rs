use criterion::{Criterion, black_box, criterion_group, criterion_main};

use gridscope::{Breakpoint, CachedAssembler, GridConfig, Responsive, ScopeId, Stylesheet};

fn dashboard_config() -> GridConfig {
    GridConfig::new(
        Responsive::base("\"header\" \"main\" \"footer\"".to_string())
            .with(
                Breakpoint::Md,
                "\"header header\" \"nav main\" \"footer footer\"".to_string(),
            )
            .with(
                Breakpoint::Lg,
                "\"header header header\" \"nav main aside\" \"footer footer footer\"".to_string(),
            ),
    )
    .with_columns(
        Responsive::base("1fr".to_string())
            .with(Breakpoint::Md, "12rem 1fr".to_string())
            .with(Breakpoint::Lg, "12rem 1fr 16rem".to_string()),
    )
    .with_rows(Responsive::base("auto 1fr auto".to_string()))
    .with_gap("0.5rem")
    .with_align_items("start")
}

fn assemble_dashboard(c: &mut Criterion) {
    let scope = ScopeId::derive("bench-dashboard");
    let config = dashboard_config();
    c.bench_function("assemble_dashboard", |b| {
        b.iter(|| Stylesheet::assemble(black_box(&scope), black_box(&config)).css());
    });
}

fn assemble_dashboard_cached(c: &mut Criterion) {
    let scope = ScopeId::derive("bench-dashboard-cached");
    let config = dashboard_config();
    c.bench_function("assemble_dashboard_cached", |b| {
        let mut assembler = CachedAssembler::new();
        b.iter(|| {
            assembler
                .assemble(black_box(&scope), black_box(&config))
                .css()
        });
    });
}

criterion_group!(benches, assemble_dashboard, assemble_dashboard_cached);
criterion_main!(benches);
