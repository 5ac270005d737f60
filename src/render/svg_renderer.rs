use std::fmt::Write;

use crate::core::Vertex;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawPrimitive, RenderFrame, Renderer, TextHAlign, TextVAlign};

/// Renderer that serializes each frame into a standalone SVG document.
///
/// Primitives map one-to-one onto SVG elements in frame order, so the
/// document order is the paint order.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// SVG markup of the last rendered frame; empty before the first render.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.document = render_svg_document(frame).map_err(map_fmt_error)?;
        Ok(())
    }
}

fn render_svg_document(frame: &RenderFrame) -> Result<String, std::fmt::Error> {
    let width = frame.viewport.width;
    let height = frame.viewport.height;
    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;

    for primitive in &frame.primitives {
        match primitive {
            DrawPrimitive::FillPolygon(polygon) => {
                writeln!(
                    out,
                    r#"  <polygon points="{}" fill="{}" fill-opacity="{}" stroke="none"/>"#,
                    format_points(&polygon.points),
                    css_rgb(polygon.color),
                    fmt_num(polygon.color.alpha),
                )?;
            }
            DrawPrimitive::StrokePolygon(polygon) => {
                writeln!(
                    out,
                    r#"  <polygon points="{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}"/>"#,
                    format_points(&polygon.points),
                    css_rgb(polygon.color),
                    fmt_num(polygon.color.alpha),
                    fmt_num(polygon.stroke_width),
                )?;
            }
            DrawPrimitive::Line(line) => {
                writeln!(
                    out,
                    r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-opacity="{}" stroke-width="{}"/>"#,
                    fmt_num(line.x1),
                    fmt_num(line.y1),
                    fmt_num(line.x2),
                    fmt_num(line.y2),
                    css_rgb(line.color),
                    fmt_num(line.color.alpha),
                    fmt_num(line.stroke_width),
                )?;
            }
            DrawPrimitive::Text(text) => {
                let anchor = match text.h_align {
                    TextHAlign::Left => "start",
                    TextHAlign::Center => "middle",
                    TextHAlign::Right => "end",
                };
                let baseline = match text.v_align {
                    TextVAlign::Top => "hanging",
                    TextVAlign::Middle => "central",
                    TextVAlign::Bottom => "text-after-edge",
                };
                writeln!(
                    out,
                    r#"  <text x="{}" y="{}" font-size="{}" fill="{}" fill-opacity="{}" text-anchor="{anchor}" dominant-baseline="{baseline}">{}</text>"#,
                    fmt_num(text.x),
                    fmt_num(text.y),
                    fmt_num(text.font_size_px),
                    css_rgb(text.color),
                    fmt_num(text.color.alpha),
                    escape_xml(&text.text),
                )?;
            }
        }
    }

    writeln!(out, "</svg>")?;
    Ok(out)
}

fn format_points(points: &[Vertex]) -> String {
    points
        .iter()
        .map(|point| format!("{},{}", fmt_num(point.x), fmt_num(point.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn css_rgb(color: Color) -> String {
    let argb = color.to_argb();
    format!(
        "rgb({},{},{})",
        (argb >> 16) & 0xFF,
        (argb >> 8) & 0xFF,
        argb & 0xFF
    )
}

// Two decimals keep documents stable across platforms without visible loss.
fn fmt_num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // avoids "-0"
        return "0".to_owned();
    }
    format!("{rounded}")
}

fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn map_fmt_error(err: std::fmt::Error) -> ChartError {
    ChartError::InvalidData(format!("failed to write svg document: {err}"))
}

#[cfg(test)]
mod tests {
    use super::{escape_xml, fmt_num};

    #[test]
    fn numbers_are_rounded_to_two_decimals() {
        assert_eq!(fmt_num(1.0), "1");
        assert_eq!(fmt_num(12.3456), "12.35");
        assert_eq!(fmt_num(-0.0001), "0");
    }

    #[test]
    fn label_text_is_escaped() {
        assert_eq!(escape_xml("R&D <x>"), "R&amp;D &lt;x&gt;");
    }
}
