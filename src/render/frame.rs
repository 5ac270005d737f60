use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::DrawPrimitive;

/// Backend-agnostic scene for one chart draw pass.
///
/// Primitives are kept in a single list because paint order across kinds
/// matters: backgrounds, web, series and labels interleave fills, strokes and
/// text.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub primitives: Vec<DrawPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            primitives: Vec::new(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for primitive in &self.primitives {
            primitive.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    #[must_use]
    pub fn stats(&self) -> FrameStats {
        let mut stats = FrameStats::default();
        for primitive in &self.primitives {
            match primitive {
                DrawPrimitive::FillPolygon(_) => stats.filled_polygons += 1,
                DrawPrimitive::StrokePolygon(_) => stats.stroked_polygons += 1,
                DrawPrimitive::Line(_) => stats.lines += 1,
                DrawPrimitive::Text(_) => stats.texts += 1,
            }
        }
        stats
    }
}

/// Primitive counts per kind, handy for logs and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub filled_polygons: usize,
    pub stroked_polygons: usize,
    pub lines: usize,
    pub texts: usize,
}
