use approx::assert_abs_diff_eq;
use spider_chart::api::{RenderWarning, SpiderChartConfig, compose_chart};
use spider_chart::core::{AxisSet, ChartData, EstimatedTextMeasurer, Series, ValueScale, Viewport};
use spider_chart::render::{Color, DrawPrimitive, FrameStats};

fn abc_data() -> ChartData {
    ChartData::new(
        AxisSet::new(["A", "B", "C"]),
        vec![Series::new(vec![10.0, 20.0, 0.0], Color::from_argb(0x7DFF0000))],
    )
}

fn kinds(primitives: &[DrawPrimitive]) -> Vec<&'static str> {
    primitives
        .iter()
        .map(|primitive| match primitive {
            DrawPrimitive::FillPolygon(_) => "fill",
            DrawPrimitive::StrokePolygon(_) => "stroke",
            DrawPrimitive::Line(_) => "line",
            DrawPrimitive::Text(_) => "text",
        })
        .collect()
}

#[test]
fn frame_paints_background_web_series_then_labels() {
    let composed = compose_chart(
        &SpiderChartConfig::default(),
        &abc_data(),
        Viewport::new(400, 400),
        &EstimatedTextMeasurer,
    )
    .expect("compose");

    assert_eq!(
        kinds(&composed.frame.primitives),
        vec![
            "fill", "stroke", "stroke", "stroke", "line", "line", "line", "fill", "text", "text",
            "text",
        ]
    );

    let DrawPrimitive::StrokePolygon(edge) = &composed.frame.primitives[3] else {
        panic!("outer edge should close the ring layer");
    };
    assert_eq!(edge.color, Color::DARK_GRAY);
    assert_eq!(edge.stroke_width, 0.8);

    let DrawPrimitive::StrokePolygon(inner) = &composed.frame.primitives[1] else {
        panic!("inner ring expected");
    };
    assert_eq!(inner.color, Color::LIGHT_GRAY);
    assert_eq!(inner.stroke_width, 0.5);
}

#[test]
fn outer_radius_reserves_room_for_widest_label() {
    let composed = compose_chart(
        &SpiderChartConfig::default(),
        &abc_data(),
        Viewport::new(400, 400),
        &EstimatedTextMeasurer,
    )
    .expect("compose");

    // labels are 12px tall plus an 8px margin on each side
    assert_abs_diff_eq!(composed.geometry.outer_radius, 180.0, epsilon = 1e-9);
    assert_eq!(composed.geometry.center.x, 200.0);
    assert_eq!(composed.geometry.center.y, 200.0);
    assert_eq!(composed.max_value, 20.0);
}

#[test]
fn ring_count_defaults_to_axis_count() {
    let data = ChartData::new(
        AxisSet::new(["a", "b", "c", "d", "e"]),
        vec![Series::new(vec![1.0, 2.0, 3.0, 4.0, 5.0], Color::GRAY)],
    );
    let config = SpiderChartConfig::default();
    let composed = compose_chart(&config, &data, Viewport::new(500, 500), &EstimatedTextMeasurer)
        .expect("compose");
    assert_eq!(composed.ring_count, 5);
    assert_eq!(composed.frame.stats().stroked_polygons, 5);

    let composed = compose_chart(
        &config.with_web_ring_count(Some(2)),
        &data,
        Viewport::new(500, 500),
        &EstimatedTextMeasurer,
    )
    .expect("compose");
    assert_eq!(composed.ring_count, 2);
    assert_eq!(composed.frame.stats().stroked_polygons, 2);
}

#[test]
fn hiding_the_web_keeps_background_and_edge() {
    let composed = compose_chart(
        &SpiderChartConfig::default()
            .with_draw_web(false)
            .with_draw_labels(false),
        &abc_data(),
        Viewport::new(400, 400),
        &EstimatedTextMeasurer,
    )
    .expect("compose");

    assert_eq!(
        composed.frame.stats(),
        FrameStats {
            filled_polygons: 2,
            stroked_polygons: 1,
            lines: 0,
            texts: 0,
        }
    );
    assert_abs_diff_eq!(composed.geometry.outer_radius, 200.0, epsilon = 1e-9);
}

#[test]
fn zero_width_strokes_are_skipped() {
    let composed = compose_chart(
        &SpiderChartConfig::default()
            .with_web_stroke_width(0.0)
            .with_web_edge_stroke_width(0.0),
        &abc_data(),
        Viewport::new(400, 400),
        &EstimatedTextMeasurer,
    )
    .expect("compose");

    let stats = composed.frame.stats();
    assert_eq!(stats.stroked_polygons, 0);
    assert_eq!(stats.lines, 0);
    assert_eq!(stats.filled_polygons, 2);
}

#[test]
fn empty_label_keeps_its_axis_but_draws_no_text() {
    let data = ChartData::new(
        AxisSet::new(["A", "", "C"]),
        vec![Series::new(vec![1.0, 2.0, 3.0], Color::GRAY)],
    );
    let composed = compose_chart(
        &SpiderChartConfig::default(),
        &data,
        Viewport::new(400, 400),
        &EstimatedTextMeasurer,
    )
    .expect("compose");
    assert_eq!(composed.axis_count, 3);
    assert_eq!(composed.frame.stats().texts, 2);
    assert_eq!(composed.frame.stats().lines, 3);
}

#[test]
fn density_scales_strokes_and_labels() {
    let config = SpiderChartConfig::default().with_display_metrics(
        spider_chart::api::DisplayMetrics::new(2.0, 3.0),
    );
    let composed =
        compose_chart(&config, &abc_data(), Viewport::new(800, 800), &EstimatedTextMeasurer)
            .expect("compose");

    let texts: Vec<f64> = composed
        .frame
        .primitives
        .iter()
        .filter_map(|primitive| match primitive {
            DrawPrimitive::Text(text) => Some(text.font_size_px),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec![36.0, 36.0, 36.0]);

    let DrawPrimitive::StrokePolygon(inner) = &composed.frame.primitives[1] else {
        panic!("inner ring expected");
    };
    assert_eq!(inner.stroke_width, 1.0);
}

#[test]
fn composing_twice_yields_identical_frames() {
    let config = SpiderChartConfig::default().with_rotation_angle(33.0);
    let viewport = Viewport::new(320, 240);
    let first = compose_chart(&config, &abc_data(), viewport, &EstimatedTextMeasurer)
        .expect("first compose");
    let second = compose_chart(&config, &abc_data(), viewport, &EstimatedTextMeasurer)
        .expect("second compose");
    assert_eq!(first, second);
}

#[test]
fn all_zero_values_warn_and_collapse_to_center() {
    let data = ChartData::new(
        AxisSet::new(["A", "B", "C"]),
        vec![Series::new(vec![0.0, 0.0, 0.0], Color::GRAY)],
    );
    let composed = compose_chart(
        &SpiderChartConfig::default(),
        &data,
        Viewport::new(400, 400),
        &EstimatedTextMeasurer,
    )
    .expect("compose");

    assert_eq!(composed.warnings, vec![RenderWarning::AllValuesZero]);
    let center = composed.geometry.center;
    let DrawPrimitive::FillPolygon(series) = &composed.frame.primitives[7] else {
        panic!("series fill expected after spokes");
    };
    assert!(series.points.iter().all(|point| *point == center));
}

#[test]
fn all_zero_values_warn_under_fixed_scale() {
    let data = ChartData::new(
        AxisSet::new(["A", "B", "C"]),
        vec![Series::new(vec![0.0, 0.0, 0.0], Color::GRAY)],
    );
    let composed = compose_chart(
        &SpiderChartConfig::default().with_value_scale(ValueScale::Fixed(100.0)),
        &data,
        Viewport::new(400, 400),
        &EstimatedTextMeasurer,
    )
    .expect("compose");

    assert_eq!(composed.max_value, 100.0);
    assert_eq!(composed.warnings, vec![RenderWarning::AllValuesZero]);
}

#[test]
fn fixed_scale_with_data_does_not_warn() {
    let composed = compose_chart(
        &SpiderChartConfig::default().with_value_scale(ValueScale::Fixed(100.0)),
        &abc_data(),
        Viewport::new(400, 400),
        &EstimatedTextMeasurer,
    )
    .expect("compose");
    assert!(composed.warnings.is_empty());
}
