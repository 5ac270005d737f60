use serde::{Deserialize, Serialize};

use crate::core::{AngleReference, ValueScale};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

pub const DEFAULT_LABEL_SIZE_SP: f64 = 12.0;
pub const DEFAULT_LABEL_COLOR: Color = Color::DARK_GRAY;
pub const DEFAULT_LABEL_MARGIN_DP: f64 = 8.0;
pub const DEFAULT_WEB_COLOR: Color = Color::LIGHT_GRAY;
pub const DEFAULT_WEB_BACKGROUND_COLOR: Color = Color::TRANSPARENT;
pub const DEFAULT_WEB_STROKE_WIDTH_DP: f64 = 0.5;
pub const DEFAULT_WEB_EDGE_COLOR: Color = Color::DARK_GRAY;
pub const DEFAULT_WEB_EDGE_STROKE_WIDTH_DP: f64 = 0.8;
pub const DEFAULT_ROTATION_ANGLE_DEG: f64 = 0.0;

/// Converts density-independent units into device pixels.
///
/// Label sizes are expressed in scaled pixels (sp), margins and stroke widths
/// in density pixels (dp). Both factors default to `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    pub density: f64,
    pub scaled_density: f64,
}

impl DisplayMetrics {
    #[must_use]
    pub const fn new(density: f64, scaled_density: f64) -> Self {
        Self {
            density,
            scaled_density,
        }
    }

    #[must_use]
    pub fn dp_to_px(self, dp: f64) -> f64 {
        dp * self.density
    }

    #[must_use]
    pub fn sp_to_px(self, sp: f64) -> f64 {
        sp * self.scaled_density
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// Immutable style and layout settings for one render pass.
///
/// This type is serializable so hosts can persist chart styling; every field
/// falls back to its default when missing from the input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiderChartConfig {
    /// Label font size in sp.
    pub label_size: f64,
    pub label_color: Color,
    /// Distance between the outer ring and label anchors, in dp.
    pub label_margin: f64,
    pub web_color: Color,
    pub web_background_color: Color,
    /// Inner ring and spoke stroke width in dp; `0` hides them.
    pub web_stroke_width: f64,
    pub web_edge_color: Color,
    /// Outer ring stroke width in dp; `0` hides it.
    pub web_edge_stroke_width: f64,
    /// Angle of the first axis in degrees, clockwise from `angle_reference`.
    pub rotation_angle: f64,
    /// Number of concentric rings; `None` uses one ring per axis.
    pub web_ring_count: Option<u32>,
    pub draw_web: bool,
    pub draw_labels: bool,
    pub angle_reference: AngleReference,
    pub value_scale: ValueScale,
    pub display_metrics: DisplayMetrics,
}

impl Default for SpiderChartConfig {
    fn default() -> Self {
        Self {
            label_size: DEFAULT_LABEL_SIZE_SP,
            label_color: DEFAULT_LABEL_COLOR,
            label_margin: DEFAULT_LABEL_MARGIN_DP,
            web_color: DEFAULT_WEB_COLOR,
            web_background_color: DEFAULT_WEB_BACKGROUND_COLOR,
            web_stroke_width: DEFAULT_WEB_STROKE_WIDTH_DP,
            web_edge_color: DEFAULT_WEB_EDGE_COLOR,
            web_edge_stroke_width: DEFAULT_WEB_EDGE_STROKE_WIDTH_DP,
            rotation_angle: DEFAULT_ROTATION_ANGLE_DEG,
            web_ring_count: None,
            draw_web: true,
            draw_labels: true,
            angle_reference: AngleReference::default(),
            value_scale: ValueScale::default(),
            display_metrics: DisplayMetrics::default(),
        }
    }
}

impl SpiderChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_label_size(mut self, size_sp: f64) -> Self {
        self.label_size = size_sp;
        self
    }

    #[must_use]
    pub fn with_label_color(mut self, color: Color) -> Self {
        self.label_color = color;
        self
    }

    #[must_use]
    pub fn with_label_margin(mut self, margin_dp: f64) -> Self {
        self.label_margin = margin_dp;
        self
    }

    #[must_use]
    pub fn with_web_color(mut self, color: Color) -> Self {
        self.web_color = color;
        self
    }

    #[must_use]
    pub fn with_web_background_color(mut self, color: Color) -> Self {
        self.web_background_color = color;
        self
    }

    #[must_use]
    pub fn with_web_stroke_width(mut self, width_dp: f64) -> Self {
        self.web_stroke_width = width_dp;
        self
    }

    #[must_use]
    pub fn with_web_edge_color(mut self, color: Color) -> Self {
        self.web_edge_color = color;
        self
    }

    #[must_use]
    pub fn with_web_edge_stroke_width(mut self, width_dp: f64) -> Self {
        self.web_edge_stroke_width = width_dp;
        self
    }

    #[must_use]
    pub fn with_rotation_angle(mut self, degrees: f64) -> Self {
        self.rotation_angle = degrees;
        self
    }

    #[must_use]
    pub fn with_web_ring_count(mut self, ring_count: Option<u32>) -> Self {
        self.web_ring_count = ring_count;
        self
    }

    #[must_use]
    pub fn with_draw_web(mut self, enabled: bool) -> Self {
        self.draw_web = enabled;
        self
    }

    #[must_use]
    pub fn with_draw_labels(mut self, enabled: bool) -> Self {
        self.draw_labels = enabled;
        self
    }

    #[must_use]
    pub fn with_angle_reference(mut self, reference: AngleReference) -> Self {
        self.angle_reference = reference;
        self
    }

    #[must_use]
    pub fn with_value_scale(mut self, scale: ValueScale) -> Self {
        self.value_scale = scale;
        self
    }

    #[must_use]
    pub fn with_display_metrics(mut self, metrics: DisplayMetrics) -> Self {
        self.display_metrics = metrics;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}
