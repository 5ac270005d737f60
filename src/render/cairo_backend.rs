use cairo::{Context, Format, ImageSurface, Operator};
use pango::FontDescription;

use crate::core::{TextExtent, TextMeasurer, Vertex};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawPrimitive, RenderFrame, Renderer, TextHAlign, TextVAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub polygons_filled: usize,
    pub polygons_stroked: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::TRANSPARENT,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the offscreen surface as PNG.
    pub fn write_png(&self, writer: &mut impl std::io::Write) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::InvalidData(format!("failed to encode png: {err}")))
    }

    /// Draws `frame` on `context`.
    ///
    /// With `replace_surface` the clear color overwrites every pixel, so the
    /// offscreen surface never keeps the previous frame. External contexts are
    /// painted over, leaving whatever the host drew underneath.
    fn render_with_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
        replace_surface: bool,
    ) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        let cleared = if replace_surface {
            context.set_operator(Operator::Source);
            let painted = context.paint();
            context.set_operator(Operator::Over);
            painted
        } else {
            context.paint()
        };
        cleared.map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for primitive in &frame.primitives {
            match primitive {
                DrawPrimitive::FillPolygon(polygon) => {
                    append_polygon_path(context, &polygon.points);
                    apply_color(context, polygon.color);
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill polygon", err))?;
                    stats.polygons_filled += 1;
                }
                DrawPrimitive::StrokePolygon(polygon) => {
                    append_polygon_path(context, &polygon.points);
                    apply_color(context, polygon.color);
                    context.set_line_width(polygon.stroke_width);
                    context
                        .stroke()
                        .map_err(|err| map_backend_error("failed to stroke polygon", err))?;
                    stats.polygons_stroked += 1;
                }
                DrawPrimitive::Line(line) => {
                    apply_color(context, line.color);
                    context.set_line_width(line.stroke_width);
                    context.move_to(line.x1, line.y1);
                    context.line_to(line.x2, line.y2);
                    context
                        .stroke()
                        .map_err(|err| map_backend_error("failed to stroke line", err))?;
                    stats.lines_drawn += 1;
                }
                DrawPrimitive::Text(text) => {
                    let layout = pangocairo::functions::create_layout(context);
                    layout.set_font_description(Some(&font_description(text.font_size_px)));
                    layout.set_text(&text.text);

                    let (text_width, text_height) = layout.pixel_size();
                    let x = match text.h_align {
                        TextHAlign::Left => text.x,
                        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                        TextHAlign::Right => text.x - f64::from(text_width),
                    };
                    let y = match text.v_align {
                        TextVAlign::Top => text.y,
                        TextVAlign::Middle => text.y - f64::from(text_height) / 2.0,
                        TextVAlign::Bottom => text.y - f64::from(text_height),
                    };

                    apply_color(context, text.color);
                    context.move_to(x, y);
                    pangocairo::functions::show_layout(context, &layout);
                    stats.texts_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame, true)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame, false)
    }
}

/// Measures label extents with the same Pango layout path used for drawing.
#[derive(Debug)]
pub struct PangoTextMeasurer {
    context: Context,
}

impl PangoTextMeasurer {
    pub fn new() -> ChartResult<Self> {
        let surface = ImageSurface::create(Format::ARgb32, 1, 1)
            .map_err(|err| map_backend_error("failed to create measuring surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create measuring context", err))?;
        Ok(Self { context })
    }
}

impl TextMeasurer for PangoTextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextExtent {
        let layout = pangocairo::functions::create_layout(&self.context);
        layout.set_font_description(Some(&font_description(font_size_px)));
        layout.set_text(text);
        let (width, height) = layout.pixel_size();
        TextExtent::new(f64::from(width), f64::from(height))
    }
}

fn font_description(font_size_px: f64) -> FontDescription {
    FontDescription::from_string(&format!("Sans {font_size_px}"))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_polygon_path(context: &Context, points: &[Vertex]) {
    let mut points = points.iter();
    if let Some(first) = points.next() {
        context.new_path();
        context.move_to(first.x, first.y);
        for point in points {
            context.line_to(point.x, point.y);
        }
        context.close_path();
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
