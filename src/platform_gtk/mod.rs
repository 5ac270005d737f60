use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::SpiderChart;
use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::CairoRenderer;

/// Hosts a [`SpiderChart`] inside a `gtk4::DrawingArea`.
///
/// The drawing area's size becomes the chart viewport on every draw; staged
/// changes are applied with [`GtkSpiderChart::refresh`].
pub struct GtkSpiderChart {
    area: gtk::DrawingArea,
    chart: Rc<RefCell<SpiderChart<CairoRenderer>>>,
}

impl GtkSpiderChart {
    #[must_use]
    pub fn new(chart: SpiderChart<CairoRenderer>) -> Self {
        let area = gtk::DrawingArea::new();
        let chart = Rc::new(RefCell::new(chart));

        let draw_chart = Rc::clone(&chart);
        area.set_draw_func(move |_area, context, width, height| {
            let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) else {
                return;
            };
            let viewport = Viewport::new(width, height);
            if !viewport.is_valid() {
                return;
            }
            let mut chart = draw_chart.borrow_mut();
            chart.set_viewport(viewport);
            if let Err(err) = chart.render_on_cairo_context(context) {
                warn!(error = %err, "skipping spider chart gtk draw");
            }
        });

        Self { area, chart }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Mutates the hosted chart, e.g. to stage labels, data or styling.
    pub fn update<T>(&self, apply: impl FnOnce(&mut SpiderChart<CairoRenderer>) -> T) -> T {
        apply(&mut self.chart.borrow_mut())
    }

    /// Validates staged values and schedules a redraw.
    pub fn refresh(&self) -> ChartResult<()> {
        self.chart.borrow().compose()?;
        self.area.queue_draw();
        Ok(())
    }
}
