use tracing::trace;

use crate::core::{
    AxisAngleTable, ChartData, ChartGeometry, TextMeasurer, Viewport, build_series_polygons,
    build_web_grid, place_labels, resolve_chart_geometry,
};
use crate::error::ChartResult;
use crate::render::{
    ChartLayerKind, ChartLayerStack, FillPolygonPrimitive, LayeredRenderFrame, LinePrimitive,
    RenderFrame, StrokePolygonPrimitive, TextPrimitive,
};

use super::SpiderChartConfig;
use super::validation::validate_config;

/// Non-fatal findings of a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderWarning {
    /// Every value is zero (or below), so all series collapse onto the center.
    AllValuesZero,
}

/// Output of one composition pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedChart {
    pub frame: RenderFrame,
    pub geometry: ChartGeometry,
    pub axis_count: usize,
    pub ring_count: u32,
    /// Value mapped onto the outer ring.
    pub max_value: f64,
    pub warnings: Vec<RenderWarning>,
}

/// Pure composition: turns configuration and data into an ordered frame.
///
/// Every input is validated before any primitive is produced. Output layers
/// are, in order: web background, web rings (outer edge last), spokes,
/// series in insertion order, labels.
pub fn compose_chart(
    config: &SpiderChartConfig,
    data: &ChartData,
    viewport: Viewport,
    measurer: &dyn TextMeasurer,
) -> ChartResult<ComposedChart> {
    validate_config(config)?;
    let axis_count = data.validate()?;

    let metrics = config.display_metrics;
    let label_size_px = metrics.sp_to_px(config.label_size);
    let label_margin_px = metrics.dp_to_px(config.label_margin);
    let web_stroke_px = metrics.dp_to_px(config.web_stroke_width);
    let edge_stroke_px = metrics.dp_to_px(config.web_edge_stroke_width);

    let angles = AxisAngleTable::new(axis_count, config.rotation_angle, config.angle_reference)?;
    let geometry = resolve_chart_geometry(
        viewport,
        data.axes.labels(),
        label_size_px,
        label_margin_px,
        config.draw_labels,
        measurer,
    )?;
    let ChartGeometry {
        center,
        outer_radius,
    } = geometry;

    let max_value = config.value_scale.resolve_max(data.value_sets());
    let ring_count = config
        .web_ring_count
        .unwrap_or_else(|| u32::try_from(axis_count).unwrap_or(u32::MAX));
    let grid = build_web_grid(&angles, center, outer_radius, ring_count)?;
    let polygons = build_series_polygons(&data.series, &angles, max_value, outer_radius, center)?;
    let labels = if config.draw_labels {
        place_labels(
            data.axes.labels(),
            &angles,
            outer_radius,
            label_margin_px,
            center,
        )?
    } else {
        Vec::new()
    };

    let mut layered = LayeredRenderFrame::from_stack(viewport, ChartLayerStack::canonical());

    if let Some(outer) = grid.outer_ring() {
        layered.push(
            ChartLayerKind::Background,
            FillPolygonPrimitive::new(outer.vertices.to_vec(), config.web_background_color),
        );
    }

    if config.draw_web && web_stroke_px > 0.0 {
        for ring in grid.inner_rings() {
            layered.push(
                ChartLayerKind::WebRings,
                StrokePolygonPrimitive::new(
                    ring.vertices.to_vec(),
                    web_stroke_px,
                    config.web_color,
                ),
            );
        }
    }
    if let Some(outer) = grid.outer_ring() {
        if edge_stroke_px > 0.0 {
            layered.push(
                ChartLayerKind::WebRings,
                StrokePolygonPrimitive::new(
                    outer.vertices.to_vec(),
                    edge_stroke_px,
                    config.web_edge_color,
                ),
            );
        }
    }

    if config.draw_web && web_stroke_px > 0.0 {
        for spoke in &grid.spokes {
            layered.push(
                ChartLayerKind::WebSpokes,
                LinePrimitive::between(spoke.start, spoke.end, web_stroke_px, config.web_color),
            );
        }
    }

    for polygon in &polygons {
        layered.push(
            ChartLayerKind::Series,
            FillPolygonPrimitive::new(polygon.vertices.to_vec(), polygon.fill_color),
        );
        if let Some(stroke) = polygon.stroke {
            let stroke_px = metrics.dp_to_px(stroke.width);
            if stroke_px > 0.0 {
                layered.push(
                    ChartLayerKind::Series,
                    StrokePolygonPrimitive::new(
                        polygon.vertices.to_vec(),
                        stroke_px,
                        stroke.color,
                    ),
                );
            }
        }
    }

    for label in labels {
        // empty labels still own an axis but have nothing to draw
        if label.text.is_empty() {
            continue;
        }
        layered.push(
            ChartLayerKind::Labels,
            TextPrimitive::new(
                label.text,
                label.anchor.x,
                label.anchor.y,
                label_size_px,
                config.label_color,
                label.h_align,
                label.v_align,
            ),
        );
    }

    let frame = layered.flatten();
    let mut warnings = Vec::new();
    if data.all_values_zero() {
        warnings.push(RenderWarning::AllValuesZero);
    }

    trace!(
        axis_count,
        ring_count,
        series_count = data.series.len(),
        primitive_count = frame.len(),
        outer_radius,
        max_value,
        "composed spider chart frame"
    );

    Ok(ComposedChart {
        frame,
        geometry,
        axis_count,
        ring_count,
        max_value,
        warnings,
    })
}
