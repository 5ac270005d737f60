use tracing::{debug, warn};

use crate::error::ChartResult;
use crate::render::Renderer;

use super::SpiderChart;
use super::frame_composer::{ComposedChart, RenderWarning};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

pub(super) struct RenderCoordinator;

impl RenderCoordinator {
    pub(super) fn refresh<R: Renderer>(chart: &mut SpiderChart<R>) -> ChartResult<()> {
        let composed = compose_or_warn(chart)?;
        chart.renderer.render(&composed.frame)?;
        chart.refresh_count += 1;
        finalize_pass(chart, composed);
        Ok(())
    }

    #[cfg(feature = "cairo-backend")]
    pub(super) fn render_on_cairo_context<R: Renderer + CairoContextRenderer>(
        chart: &mut SpiderChart<R>,
        context: &cairo::Context,
    ) -> ChartResult<()> {
        let composed = compose_or_warn(chart)?;
        chart
            .renderer
            .render_on_cairo_context(context, &composed.frame)?;
        finalize_pass(chart, composed);
        Ok(())
    }
}

fn compose_or_warn<R: Renderer>(chart: &SpiderChart<R>) -> ChartResult<ComposedChart> {
    chart.compose().inspect_err(|err| {
        warn!(error = %err, "spider chart refresh rejected; nothing drawn");
    })
}

// Redraws on an external context update warnings but are not refresh commits.
fn finalize_pass<R: Renderer>(chart: &mut SpiderChart<R>, composed: ComposedChart) {
    for warning in &composed.warnings {
        match warning {
            RenderWarning::AllValuesZero => warn!(
                series_count = chart.data.series.len(),
                "all series values are zero; polygons collapse onto the center"
            ),
        }
    }
    chart.last_warnings = composed.warnings;
    debug!(
        refresh_count = chart.refresh_count,
        axis_count = composed.axis_count,
        primitive_count = composed.frame.len(),
        "spider chart refreshed"
    );
}

#[cfg(test)]
mod tests {
    use crate::api::SpiderChart;
    use crate::core::{Series, Viewport};
    use crate::error::ChartResult;
    use crate::render::{Color, RenderFrame, Renderer};

    #[derive(Default)]
    struct RecordingRenderer {
        calls: usize,
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, _frame: &RenderFrame) -> ChartResult<()> {
            self.calls += 1;
            Ok(())
        }
    }

    #[test]
    fn refresh_submits_single_render_call() {
        let mut chart = SpiderChart::new(RecordingRenderer::default(), Viewport::new(400, 400))
            .expect("chart init");
        chart.set_labels(["A", "B", "C"]);
        chart.set_data(vec![Series::new(vec![1.0, 2.0, 3.0], Color::BLACK)]);
        chart.refresh().expect("refresh");
        assert_eq!(chart.renderer.calls, 1);
        assert_eq!(chart.refresh_count, 1);
    }

    #[test]
    fn rejected_refresh_never_reaches_renderer() {
        let mut chart = SpiderChart::new(RecordingRenderer::default(), Viewport::new(400, 400))
            .expect("chart init");
        chart.set_labels(["A", "B"]);
        chart.set_data(vec![Series::new(vec![1.0, 2.0], Color::BLACK)]);
        assert!(chart.refresh().is_err());
        assert_eq!(chart.renderer.calls, 0);
        assert_eq!(chart.refresh_count, 0);
    }
}
