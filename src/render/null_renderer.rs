use crate::error::ChartResult;
use crate::render::{FrameStats, RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so invalid geometry is caught without a
/// real drawing surface.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_calls: usize,
    pub last_stats: FrameStats,
    pub last_primitive_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.render_calls += 1;
        self.last_stats = frame.stats();
        self.last_primitive_count = frame.len();
        Ok(())
    }
}
