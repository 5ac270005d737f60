use crate::core::{Vertex, Viewport};
use crate::error::{ChartError, ChartResult};

/// Pixel extent of a rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

impl TextExtent {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Source of label extents for the layout pass.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextExtent;
}

/// Deterministic, backend-independent glyph-width estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextExtent {
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                'A'..='Z' => 0.68,
                'i' | 'l' | 'j' | '.' | ',' | ':' | ';' | '\'' => 0.30,
                'm' | 'w' => 0.86,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                _ => 0.58,
            }
        });
        let height = if text.is_empty() { 0.0 } else { font_size_px };
        TextExtent::new(units * font_size_px, height)
    }
}

/// Where the web sits inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub center: Vertex,
    pub outer_radius: f64,
}

/// Largest label extent, measured once per pass.
#[must_use]
pub fn max_label_extent(
    labels: &[String],
    font_size_px: f64,
    measurer: &dyn TextMeasurer,
) -> TextExtent {
    labels
        .iter()
        .map(|label| measurer.measure(label, font_size_px))
        .fold(TextExtent::default(), |acc, extent| {
            TextExtent::new(acc.width.max(extent.width), acc.height.max(extent.height))
        })
}

/// Centers the web in the viewport and sizes it so that the widest and
/// tallest label plus margin still fit on every side.
pub fn resolve_chart_geometry(
    viewport: Viewport,
    labels: &[String],
    font_size_px: f64,
    margin_px: f64,
    reserve_label_room: bool,
    measurer: &dyn TextMeasurer,
) -> ChartResult<ChartGeometry> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let (room_x, room_y) = if reserve_label_room {
        let extent = max_label_extent(labels, font_size_px, measurer);
        (extent.width + margin_px, extent.height + margin_px)
    } else {
        (0.0, 0.0)
    };

    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let outer_radius = ((width - room_x * 2.0) / 2.0).min((height - room_y * 2.0) / 2.0);
    if !outer_radius.is_finite() || outer_radius <= 0.0 {
        return Err(ChartError::ViewportTooSmall {
            width: viewport.width,
            height: viewport.height,
        });
    }

    Ok(ChartGeometry {
        center: viewport.center(),
        outer_radius,
    })
}
