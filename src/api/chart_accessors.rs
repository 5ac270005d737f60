use tracing::{debug, trace};

use crate::core::{AxisSet, Series, Viewport};
use crate::render::{Color, Renderer};

use super::frame_composer::RenderWarning;
use super::{SpiderChart, SpiderChartConfig};

impl<R: Renderer> SpiderChart<R> {
    /// Replaces axis labels. The label count defines the axis count.
    pub fn set_labels<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data.axes = AxisSet::new(labels);
        debug!(label_count = self.data.axes.len(), "set axis labels");
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        self.data.axes.labels()
    }

    /// Replaces every series. Draw order follows the given order.
    pub fn set_data(&mut self, series: Vec<Series>) {
        debug!(series_count = series.len(), "set series data");
        self.data.series = series;
    }

    #[must_use]
    pub fn data(&self) -> &[Series] {
        &self.data.series
    }

    /// Sets label size in scaled pixels.
    pub fn set_label_size(&mut self, size_sp: f64) {
        trace!(size_sp, "set label size");
        self.config.label_size = size_sp;
    }

    #[must_use]
    pub fn label_size(&self) -> f64 {
        self.config.label_size
    }

    /// Sets label color from a `0xAARRGGBB` value.
    pub fn set_label_color(&mut self, argb: u32) {
        self.config.label_color = Color::from_argb(argb);
    }

    #[must_use]
    pub fn label_color(&self) -> u32 {
        self.config.label_color.to_argb()
    }

    /// Sets the gap between the outer ring and labels, in density pixels.
    pub fn set_label_margin_size(&mut self, margin_dp: f64) {
        trace!(margin_dp, "set label margin");
        self.config.label_margin = margin_dp;
    }

    #[must_use]
    pub fn label_margin_size(&self) -> f64 {
        self.config.label_margin
    }

    pub fn set_web_color(&mut self, argb: u32) {
        self.config.web_color = Color::from_argb(argb);
    }

    #[must_use]
    pub fn web_color(&self) -> u32 {
        self.config.web_color.to_argb()
    }

    pub fn set_web_background_color(&mut self, argb: u32) {
        self.config.web_background_color = Color::from_argb(argb);
    }

    #[must_use]
    pub fn web_background_color(&self) -> u32 {
        self.config.web_background_color.to_argb()
    }

    /// Sets inner ring and spoke width in density pixels.
    pub fn set_web_stroke_width(&mut self, width_dp: f64) {
        trace!(width_dp, "set web stroke width");
        self.config.web_stroke_width = width_dp;
    }

    #[must_use]
    pub fn web_stroke_width(&self) -> f64 {
        self.config.web_stroke_width
    }

    pub fn set_web_edge_color(&mut self, argb: u32) {
        self.config.web_edge_color = Color::from_argb(argb);
    }

    #[must_use]
    pub fn web_edge_color(&self) -> u32 {
        self.config.web_edge_color.to_argb()
    }

    /// Sets outer ring width in density pixels.
    pub fn set_web_edge_stroke_width(&mut self, width_dp: f64) {
        trace!(width_dp, "set web edge stroke width");
        self.config.web_edge_stroke_width = width_dp;
    }

    #[must_use]
    pub fn web_edge_stroke_width(&self) -> f64 {
        self.config.web_edge_stroke_width
    }

    /// Sets the angle of the first axis in degrees.
    pub fn set_rotation_angle(&mut self, degrees: f64) {
        trace!(degrees, "set rotation angle");
        self.config.rotation_angle = degrees;
    }

    #[must_use]
    pub fn rotation_angle(&self) -> f64 {
        self.config.rotation_angle
    }

    /// Overrides the ring subdivision count; `None` uses one ring per axis.
    pub fn set_web_ring_count(&mut self, ring_count: Option<u32>) {
        self.config.web_ring_count = ring_count;
    }

    #[must_use]
    pub fn web_ring_count(&self) -> Option<u32> {
        self.config.web_ring_count
    }

    /// Toggles inner rings and spokes. Background and edge are always drawn.
    pub fn set_draw_web(&mut self, enabled: bool) {
        self.config.draw_web = enabled;
    }

    #[must_use]
    pub fn draw_web(&self) -> bool {
        self.config.draw_web
    }

    pub fn set_draw_labels(&mut self, enabled: bool) {
        self.config.draw_labels = enabled;
    }

    #[must_use]
    pub fn draw_labels(&self) -> bool {
        self.config.draw_labels
    }

    /// Stages a viewport size; invalid sizes are reported at refresh.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn config(&self) -> SpiderChartConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SpiderChartConfig) {
        self.config = config;
    }

    /// Non-fatal findings of the last successful refresh.
    #[must_use]
    pub fn last_warnings(&self) -> &[RenderWarning] {
        &self.last_warnings
    }

    /// Number of successful [`SpiderChart::refresh`] calls. Redraws on an
    /// external cairo context are not counted.
    #[must_use]
    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }
}
