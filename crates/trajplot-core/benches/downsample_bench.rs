
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};
use trajplot_core::downsample::downsample;
use trajplot_core::RowSet;

fn gen_rows(n: usize) -> RowSet {
    let t: Vec<f64> = (0..n).map(|i| i as f64 * 1e-3).collect();
    let y: Vec<f64> = t.iter().map(|t| 10.0 * t - 4.905 * t * t).collect();
    let v: Vec<f64> = t.iter().map(|t| (t * 10.0).sin() * 10.0 + t * 0.1).collect();
    RowSet::new(vec!["time_s".into(), "y_m".into(), "v_mag_m_s".into()], vec![t, y, v]).expect("rows")
}

fn bench_downsample(c: &mut Criterion) {
    let mut group = c.benchmark_group("downsample");
    for &n in &[50_000usize, 200_000usize] {
        let rows = gen_rows(n);
        let slice: Vec<f64> = rows.column("v_mag_m_s").expect("column").to_vec();
        for &target in &[1_000usize, 5_000usize] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("slice_n{n}_t{target}")), &target, |b, &t| {
                b.iter_batched(
                    || slice.clone(),
                    |d| { let _ = black_box(downsample(&d, t).len()); },
                    BatchSize::SmallInput,
                );
            });
            group.bench_with_input(BenchmarkId::from_parameter(format!("rowset_n{n}_t{target}")), &target, |b, &t| {
                b.iter(|| black_box(rows.downsample(t).len()));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_downsample);
criterion_main!(benches);
