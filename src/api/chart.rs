use crate::core::{ChartData, EstimatedTextMeasurer, TextMeasurer, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::frame_composer::{ComposedChart, RenderWarning, compose_chart};
use super::render_coordinator::RenderCoordinator;
use super::SpiderChartConfig;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Host-facing spider chart widget.
///
/// Setters only stage configuration and data; nothing is validated or drawn
/// until [`SpiderChart::refresh`], which recomputes the whole chart from the
/// staged values and hands one ordered frame to the renderer.
///
/// The widget is meant to be driven from a single (UI) thread: stage values,
/// then call `refresh` from the same thread.
pub struct SpiderChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) measurer: Box<dyn TextMeasurer>,
    pub(super) viewport: Viewport,
    pub(super) config: SpiderChartConfig,
    pub(super) data: ChartData,
    pub(super) last_warnings: Vec<RenderWarning>,
    pub(super) refresh_count: u64,
}

impl<R: Renderer> SpiderChart<R> {
    pub fn new(renderer: R, viewport: Viewport) -> ChartResult<Self> {
        Self::with_config(renderer, viewport, SpiderChartConfig::default())
    }

    pub fn with_config(
        renderer: R,
        viewport: Viewport,
        config: SpiderChartConfig,
    ) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self {
            renderer,
            measurer: Box::new(EstimatedTextMeasurer),
            viewport,
            config,
            data: ChartData::default(),
            last_warnings: Vec::new(),
            refresh_count: 0,
        })
    }

    /// Replaces the label measurer used to reserve room around the web.
    #[must_use]
    pub fn with_text_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    /// Composes the staged configuration and data without drawing.
    pub fn compose(&self) -> ChartResult<ComposedChart> {
        compose_chart(
            &self.config,
            &self.data,
            self.viewport,
            self.measurer.as_ref(),
        )
    }

    /// Commits staged configuration/data, recomputes geometry and renders.
    ///
    /// On error the renderer is not called and the previous output stays as is.
    pub fn refresh(&mut self) -> ChartResult<()> {
        RenderCoordinator::refresh(self)
    }

    /// Renders the chart into an external cairo context.
    ///
    /// Used by GTK draw callbacks while keeping the renderer implementation
    /// decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        RenderCoordinator::render_on_cairo_context(self, context)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
