//! Polar geometry shared by the web grid, labels and series polygons.
//!
//! Chart angles are degrees measured clockwise (in screen space, y down) from
//! an [`AngleReference`] direction. Axis `i` of `N` sits at
//! `rotation + i * 360 / N`, normalized to `[0, 360)`.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Vertex;
use crate::error::{ChartError, ChartResult};

/// Smallest axis count that still forms a polygon.
pub const MIN_AXIS_COUNT: usize = 3;

/// Inline capacity for per-axis buffers; charts rarely exceed this.
pub const INLINE_AXES: usize = 16;

pub type AxisBuffer<T> = SmallVec<[T; INLINE_AXES]>;

/// Screen direction that chart angle zero points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AngleReference {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl AngleReference {
    /// Screen angle of chart angle zero, in degrees clockwise from +x.
    #[must_use]
    pub const fn screen_offset_deg(self) -> f64 {
        match self {
            Self::Up => -90.0,
            Self::Right => 0.0,
            Self::Down => 90.0,
            Self::Left => 180.0,
        }
    }
}

/// How series values are mapped onto the `[0, outer_radius]` span.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ValueScale {
    /// Outer ring is the largest value across every series and axis.
    #[default]
    GlobalMax,
    /// Outer ring is a fixed value, e.g. `100.0` for percentage-style data.
    Fixed(f64),
}

impl ValueScale {
    pub fn validate(self) -> ChartResult<Self> {
        if let Self::Fixed(max) = self {
            if !max.is_finite() || max <= 0.0 {
                return Err(ChartError::InvalidConfiguration(
                    "fixed value scale maximum must be finite and > 0".to_owned(),
                ));
            }
        }
        Ok(self)
    }

    /// Resolves the value represented by the outer ring.
    #[must_use]
    pub fn resolve_max<'a>(self, value_sets: impl IntoIterator<Item = &'a [f64]>) -> f64 {
        match self {
            Self::GlobalMax => global_max_value(value_sets),
            Self::Fixed(max) => max,
        }
    }
}

/// Normalizes an angle in degrees to `[0, 360)`.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if normalized >= 360.0 { 0.0 } else { normalized }
}

/// Largest value across all value sets; `0.0` when empty or all non-positive.
#[must_use]
pub fn global_max_value<'a>(value_sets: impl IntoIterator<Item = &'a [f64]>) -> f64 {
    value_sets
        .into_iter()
        .flat_map(|values| values.iter().copied())
        .filter(|value| value.is_finite())
        .map(OrderedFloat)
        .max()
        .map_or(0.0, |max| max.0.max(0.0))
}

/// Fraction of the outer radius covered by `value`.
///
/// Values are clamped into `[0, max_value]`. A non-positive `max_value` maps
/// every value to the center.
#[must_use]
pub fn radius_fraction(value: f64, max_value: f64) -> f64 {
    if !max_value.is_finite() || max_value <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, max_value) / max_value
}

/// Point at `radius` from `center` along a screen angle in radians.
#[must_use]
pub fn polar_point(center: Vertex, radius: f64, screen_angle_rad: f64) -> Vertex {
    Vertex::new(
        center.x + radius * screen_angle_rad.cos(),
        center.y + radius * screen_angle_rad.sin(),
    )
}

/// Per-axis angles for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisAngleTable {
    rotation_deg: f64,
    reference: AngleReference,
    angles_deg: AxisBuffer<f64>,
}

impl AxisAngleTable {
    pub fn new(
        axis_count: usize,
        rotation_deg: f64,
        reference: AngleReference,
    ) -> ChartResult<Self> {
        if axis_count < MIN_AXIS_COUNT {
            return Err(ChartError::TooFewAxes { count: axis_count });
        }
        if !rotation_deg.is_finite() {
            return Err(ChartError::InvalidConfiguration(
                "rotation angle must be finite".to_owned(),
            ));
        }

        let step = 360.0 / axis_count as f64;
        let angles_deg = (0..axis_count)
            .map(|index| normalize_degrees(rotation_deg + index as f64 * step))
            .collect();

        Ok(Self {
            rotation_deg,
            reference,
            angles_deg,
        })
    }

    #[must_use]
    pub fn axis_count(&self) -> usize {
        self.angles_deg.len()
    }

    #[must_use]
    pub fn step_deg(&self) -> f64 {
        360.0 / self.axis_count() as f64
    }

    #[must_use]
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    #[must_use]
    pub fn reference(&self) -> AngleReference {
        self.reference
    }

    #[must_use]
    pub fn angles_deg(&self) -> &[f64] {
        &self.angles_deg
    }

    #[must_use]
    pub fn angle_deg(&self, axis_index: usize) -> Option<f64> {
        self.angles_deg.get(axis_index).copied()
    }

    /// Screen angle in radians (clockwise from +x) used for point mapping.
    #[must_use]
    pub fn screen_angle_rad(&self, axis_index: usize) -> Option<f64> {
        self.angle_deg(axis_index)
            .map(|angle| (angle + self.reference.screen_offset_deg()).to_radians())
    }

    /// Point on axis `axis_index` at `radius` from `center`.
    #[must_use]
    pub fn point_on_axis(&self, axis_index: usize, radius: f64, center: Vertex) -> Option<Vertex> {
        self.screen_angle_rad(axis_index)
            .map(|angle| polar_point(center, radius, angle))
    }

    /// One point per axis at the same radius, in axis order.
    #[must_use]
    pub fn ring_points(&self, radius: f64, center: Vertex) -> AxisBuffer<Vertex> {
        (0..self.axis_count())
            .filter_map(|index| self.point_on_axis(index, radius, center))
            .collect()
    }
}

/// Maps one value on one axis to a pixel position.
pub fn compute_vertex(
    axis_index: usize,
    value: f64,
    max_value: f64,
    outer_radius: f64,
    center: Vertex,
    angles: &AxisAngleTable,
) -> ChartResult<Vertex> {
    let radius = radius_fraction(value, max_value) * outer_radius;
    angles
        .point_on_axis(axis_index, radius, center)
        .ok_or_else(|| {
            ChartError::InvalidData(format!(
                "axis index {axis_index} out of range for {} axes",
                angles.axis_count()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::{global_max_value, normalize_degrees, radius_fraction};

    #[test]
    fn normalize_wraps_negative_and_large_angles() {
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_degrees(-1e-18), 0.0);
    }

    #[test]
    fn radius_fraction_clamps_and_handles_zero_max() {
        assert_eq!(radius_fraction(5.0, 0.0), 0.0);
        assert_eq!(radius_fraction(-3.0, 10.0), 0.0);
        assert_eq!(radius_fraction(30.0, 10.0), 1.0);
        assert_eq!(radius_fraction(2.5, 10.0), 0.25);
    }

    #[test]
    fn radius_fraction_treats_non_finite_max_as_empty_scale() {
        assert_eq!(radius_fraction(5.0, f64::NAN), 0.0);
        assert_eq!(radius_fraction(5.0, f64::INFINITY), 0.0);
        assert_eq!(radius_fraction(f64::NAN, 10.0), 0.0);
    }

    #[test]
    fn global_max_ignores_empty_sets() {
        let empty: [&[f64]; 0] = [];
        assert_eq!(global_max_value(empty), 0.0);
        assert_eq!(global_max_value([&[1.0, 4.0][..], &[3.0][..]]), 4.0);
    }
}
