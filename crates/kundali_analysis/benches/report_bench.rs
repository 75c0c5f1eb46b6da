use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_analysis::{
    ReportConfig, analyze_all, build_report, synthesize_analysis, validate_report,
};
use kundali_base::{ALL_GRAHAS, Chart, PlanetaryPosition};

fn sample_chart() -> Chart {
    let lons = [200.0, 30.0, 95.0, 150.0, 100.0, 250.0, 320.0, 10.0, 190.0];
    let positions: Vec<PlanetaryPosition> = ALL_GRAHAS
        .iter()
        .zip(lons)
        .map(|(g, lon)| PlanetaryPosition::new(*g, lon))
        .collect();
    match Chart::new(185.0, &positions) {
        Ok(c) => c,
        Err(e) => panic!("sample chart: {e}"),
    }
}

fn analysis_bench(c: &mut Criterion) {
    let chart = sample_chart();
    let config = ReportConfig::default();

    let mut group = c.benchmark_group("analysis");
    group.bench_function("analyze_all", |b| {
        b.iter(|| analyze_all(black_box(&chart), black_box(20.0), &config))
    });
    let analyses = match analyze_all(&chart, 20.0, &config) {
        Ok(a) => a,
        Err(e) => panic!("analyses: {e}"),
    };
    group.bench_function("synthesize", |b| {
        b.iter(|| synthesize_analysis(black_box(&analyses)))
    });
    group.finish();
}

fn report_bench(c: &mut Criterion) {
    let chart = sample_chart();
    let config = ReportConfig::default();

    let mut group = c.benchmark_group("report");
    group.bench_function("build_report", |b| {
        b.iter(|| build_report(black_box(&chart), black_box(20.0), &config))
    });
    let value = match build_report(&chart, 20.0, &config).map(|r| serde_json::to_value(&r)) {
        Ok(Ok(v)) => v,
        _ => panic!("report value"),
    };
    group.bench_function("validate_report", |b| {
        b.iter(|| validate_report(black_box(&value)))
    });
    group.finish();
}

criterion_group!(benches, analysis_bench, report_bench);
criterion_main!(benches);
