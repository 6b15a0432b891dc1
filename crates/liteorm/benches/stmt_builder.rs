use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use liteorm::{FilterSet, SelectStmt, Statement, UpdateStmt};

/// Build a SELECT over `n` equality filters:
/// SELECT * FROM t WHERE col0 = ?1 AND col1 = ?2 ...
fn build_select(n: usize) -> SelectStmt {
    let mut filters = FilterSet::new();
    for i in 0..n {
        filters = filters.eq(&format!("col{i}"), i as i64);
    }
    SelectStmt::new("t").filters(filters)
}

fn bench_select_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("stmt_builder/select_render");

    for n in [1, 5, 10, 50, 100] {
        let stmt = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &stmt, |b, stmt| {
            b.iter(|| black_box(stmt.build()));
        });
    }

    group.finish();
}

fn bench_update_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("stmt_builder/update_render");

    for n in [1, 5, 10, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut stmt = UpdateStmt::new("t").set_now("updated_at");
                for i in 0..n {
                    stmt = stmt.set(&format!("col{i}"), i as i64);
                }
                black_box(stmt.eq("id", 1).build());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_select_render, bench_update_render);
criterion_main!(benches);
