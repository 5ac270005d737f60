use serde::{Deserialize, Serialize};

use crate::core::Vertex;
use crate::core::geometry::{AxisAngleTable, AxisBuffer, MIN_AXIS_COUNT, compute_vertex};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Ordered axis labels. The label count is the chart's axis count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AxisSet {
    labels: Vec<String>,
}

impl AxisSet {
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Optional outline drawn on top of a series fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStroke {
    pub color: Color,
    pub width: f64,
}

impl SeriesStroke {
    #[must_use]
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// One dataset: a value per axis plus its translucent fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub values: Vec<f64>,
    pub fill_color: Color,
    #[serde(default)]
    pub stroke: Option<SeriesStroke>,
}

impl Series {
    #[must_use]
    pub fn new(values: impl Into<Vec<f64>>, fill_color: Color) -> Self {
        Self {
            values: values.into(),
            fill_color,
            stroke: None,
        }
    }

    /// Builds a series from a packed `0xAARRGGBB` fill color.
    #[must_use]
    pub fn from_argb(values: impl Into<Vec<f64>>, fill_argb: u32) -> Self {
        Self::new(values, Color::from_argb(fill_argb))
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: SeriesStroke) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

/// Labels plus every series submitted for one render pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub axes: AxisSet,
    pub series: Vec<Series>,
}

impl ChartData {
    #[must_use]
    pub fn new(axes: AxisSet, series: Vec<Series>) -> Self {
        Self { axes, series }
    }

    /// Checks cross-field invariants and returns the axis count.
    pub fn validate(&self) -> ChartResult<usize> {
        let label_count = self.axes.len();
        if label_count == 0 {
            if !self.series.is_empty() {
                return Err(ChartError::MissingLabels {
                    series_count: self.series.len(),
                });
            }
            return Err(ChartError::TooFewAxes { count: 0 });
        }
        if label_count < MIN_AXIS_COUNT {
            return Err(ChartError::TooFewAxes { count: label_count });
        }
        if self.series.is_empty() {
            return Err(ChartError::MissingData { label_count });
        }

        for (series_index, series) in self.series.iter().enumerate() {
            if series.values.len() != label_count {
                return Err(ChartError::SeriesLengthMismatch {
                    series_index,
                    expected: label_count,
                    actual: series.values.len(),
                });
            }
            if let Some(axis_index) = series.values.iter().position(|value| !value.is_finite()) {
                return Err(ChartError::InvalidConfiguration(format!(
                    "series #{series_index} value on axis {axis_index} must be finite"
                )));
            }
            series.fill_color.validate().map_err(|_| {
                ChartError::InvalidConfiguration(format!(
                    "series #{series_index} fill color channels must be in [0, 1]"
                ))
            })?;
            if let Some(stroke) = series.stroke {
                if !stroke.width.is_finite() || stroke.width < 0.0 {
                    return Err(ChartError::InvalidConfiguration(format!(
                        "series #{series_index} stroke width must be finite and >= 0"
                    )));
                }
            }
        }

        Ok(label_count)
    }

    #[must_use]
    pub fn value_sets(&self) -> impl Iterator<Item = &[f64]> {
        self.series.iter().map(|series| series.values.as_slice())
    }

    /// `true` when no series has a strictly positive value.
    #[must_use]
    pub fn all_values_zero(&self) -> bool {
        self.value_sets().flatten().all(|value| *value <= 0.0)
    }
}

/// Closed polygon for one series, ready for compositing.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPolygon {
    pub series_index: usize,
    pub vertices: AxisBuffer<Vertex>,
    pub fill_color: Color,
    pub stroke: Option<SeriesStroke>,
}

pub fn build_series_polygon(
    series_index: usize,
    series: &Series,
    angles: &AxisAngleTable,
    max_value: f64,
    outer_radius: f64,
    center: Vertex,
) -> ChartResult<SeriesPolygon> {
    if series.values.len() != angles.axis_count() {
        return Err(ChartError::SeriesLengthMismatch {
            series_index,
            expected: angles.axis_count(),
            actual: series.values.len(),
        });
    }

    let vertices = series
        .values
        .iter()
        .enumerate()
        .map(|(axis_index, value)| {
            compute_vertex(axis_index, *value, max_value, outer_radius, center, angles)
        })
        .collect::<ChartResult<AxisBuffer<Vertex>>>()?;

    Ok(SeriesPolygon {
        series_index,
        vertices,
        fill_color: series.fill_color,
        stroke: series.stroke,
    })
}

/// Builds polygons in insertion order; later entries paint on top.
pub fn build_series_polygons(
    series: &[Series],
    angles: &AxisAngleTable,
    max_value: f64,
    outer_radius: f64,
    center: Vertex,
) -> ChartResult<Vec<SeriesPolygon>> {
    series
        .iter()
        .enumerate()
        .map(|(index, series)| {
            build_series_polygon(index, series, angles, max_value, outer_radius, center)
        })
        .collect()
}
