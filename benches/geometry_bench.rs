use criterion::{Criterion, criterion_group, criterion_main};
use spider_chart::api::{SpiderChartConfig, compose_chart};
use spider_chart::core::{
    AngleReference, AxisAngleTable, AxisSet, ChartData, EstimatedTextMeasurer, Series, Vertex,
    Viewport, build_web_grid,
};
use spider_chart::render::{Color, NullRenderer};
use spider_chart::SpiderChart;
use std::hint::black_box;

fn sample_data(axis_count: usize, series_count: usize) -> ChartData {
    let labels = (0..axis_count).map(|i| format!("axis {i}"));
    let series = (0..series_count)
        .map(|s| {
            let values: Vec<f64> = (0..axis_count)
                .map(|a| ((s * 31 + a * 17) % 100) as f64)
                .collect();
            Series::new(values, Color::argb(125, (s * 40 % 255) as u8, 120, 200))
        })
        .collect();
    ChartData::new(AxisSet::new(labels), series)
}

fn bench_web_grid_32_axes(c: &mut Criterion) {
    let angles = AxisAngleTable::new(32, 15.0, AngleReference::Up).expect("valid angles");
    let center = Vertex::new(400.0, 400.0);

    c.bench_function("web_grid_32_axes_32_rings", |b| {
        b.iter(|| {
            let _ = build_web_grid(black_box(&angles), center, black_box(350.0), 32)
                .expect("grid should build");
        })
    });
}

fn bench_compose_20_axes_10_series(c: &mut Criterion) {
    let config = SpiderChartConfig::default();
    let data = sample_data(20, 10);
    let viewport = Viewport::new(1024, 768);

    c.bench_function("compose_20_axes_10_series", |b| {
        b.iter(|| {
            let _ = compose_chart(
                black_box(&config),
                black_box(&data),
                viewport,
                &EstimatedTextMeasurer,
            )
            .expect("compose should succeed");
        })
    });
}

fn bench_widget_refresh(c: &mut Criterion) {
    let mut chart =
        SpiderChart::new(NullRenderer::default(), Viewport::new(800, 800)).expect("chart init");
    let data = sample_data(8, 4);
    chart.set_labels(data.axes.labels().to_vec());
    chart.set_data(data.series);

    c.bench_function("widget_refresh_8_axes_4_series", |b| {
        b.iter(|| chart.refresh().expect("refresh should succeed"))
    });
}

criterion_group!(
    benches,
    bench_web_grid_32_axes,
    bench_compose_20_axes_10_series,
    bench_widget_refresh
);
criterion_main!(benches);
