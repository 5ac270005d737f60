use serde::{Deserialize, Serialize};

use crate::core::Vertex;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Hosts usually speak packed `0xAARRGGBB`; use [`Color::from_argb`] and
/// [`Color::to_argb`] at that boundary. Serialized form is the packed value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "u32", from = "u32")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const TRANSPARENT: Self = Self::from_argb(0x0000_0000);
    pub const BLACK: Self = Self::from_argb(0xFF00_0000);
    pub const WHITE: Self = Self::from_argb(0xFFFF_FFFF);
    pub const GRAY: Self = Self::from_argb(0xFF88_8888);
    pub const LIGHT_GRAY: Self = Self::from_argb(0xFFCC_CCCC);
    pub const DARK_GRAY: Self = Self::from_argb(0xFF44_4444);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels, alpha first.
    #[must_use]
    pub const fn argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
            alpha as f64 / 255.0,
        )
    }

    /// Unpacks a `0xAARRGGBB` value.
    #[must_use]
    pub const fn from_argb(packed: u32) -> Self {
        Self::argb(
            (packed >> 24) as u8,
            (packed >> 16) as u8,
            (packed >> 8) as u8,
            packed as u8,
        )
    }

    /// Packs the color as `0xAARRGGBB`, rounding each channel to 8 bits.
    #[must_use]
    pub fn to_argb(self) -> u32 {
        let quantize = |channel: f64| -> u32 { (channel.clamp(0.0, 1.0) * 255.0).round() as u32 };
        (quantize(self.alpha) << 24)
            | (quantize(self.red) << 16)
            | (quantize(self.green) << 8)
            | quantize(self.blue)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Self::from_argb(packed)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_argb()
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    #[must_use]
    pub const fn between(start: Vertex, end: Vertex, stroke_width: f64, color: Color) -> Self {
        Self::new(start.x, start.y, end.x, end.y, stroke_width, color)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width, "line")?;
        self.color.validate()
    }
}

/// Closed polygon filled with a single color.
///
/// The last vertex connects back to the first; the closing vertex is not
/// repeated in `points`.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPolygonPrimitive {
    pub points: Vec<Vertex>,
    pub color: Color,
}

impl FillPolygonPrimitive {
    #[must_use]
    pub fn new(points: impl Into<Vec<Vertex>>, color: Color) -> Self {
        Self {
            points: points.into(),
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_polygon_points(&self.points, "filled polygon")?;
        self.color.validate()
    }
}

/// Closed polygon outline.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePolygonPrimitive {
    pub points: Vec<Vertex>,
    pub stroke_width: f64,
    pub color: Color,
}

impl StrokePolygonPrimitive {
    #[must_use]
    pub fn new(points: impl Into<Vec<Vertex>>, stroke_width: f64, color: Color) -> Self {
        Self {
            points: points.into(),
            stroke_width,
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_polygon_points(&self.points, "stroked polygon")?;
        validate_stroke_width(self.stroke_width, "polygon")?;
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to `TextPrimitive::y`.
///
/// `Top` places the top of the text box at `y`, `Bottom` its bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextVAlign {
    Top,
    Middle,
    Bottom,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
        v_align: TextVAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            v_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// One ordered draw instruction. Backends execute these exactly in frame order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    FillPolygon(FillPolygonPrimitive),
    StrokePolygon(StrokePolygonPrimitive),
    Line(LinePrimitive),
    Text(TextPrimitive),
}

impl DrawPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::FillPolygon(polygon) => polygon.validate(),
            Self::StrokePolygon(polygon) => polygon.validate(),
            Self::Line(line) => line.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

impl From<FillPolygonPrimitive> for DrawPrimitive {
    fn from(value: FillPolygonPrimitive) -> Self {
        Self::FillPolygon(value)
    }
}

impl From<StrokePolygonPrimitive> for DrawPrimitive {
    fn from(value: StrokePolygonPrimitive) -> Self {
        Self::StrokePolygon(value)
    }
}

impl From<LinePrimitive> for DrawPrimitive {
    fn from(value: LinePrimitive) -> Self {
        Self::Line(value)
    }
}

impl From<TextPrimitive> for DrawPrimitive {
    fn from(value: TextPrimitive) -> Self {
        Self::Text(value)
    }
}

fn validate_polygon_points(points: &[Vertex], kind: &str) -> ChartResult<()> {
    if points.len() < 3 {
        return Err(ChartError::InvalidData(format!(
            "{kind} needs at least 3 points, got {}",
            points.len()
        )));
    }
    if points.iter().any(|point| !point.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "{kind} coordinates must be finite"
        )));
    }
    Ok(())
}

fn validate_stroke_width(width: f64, kind: &str) -> ChartResult<()> {
    if !width.is_finite() || width <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{kind} stroke width must be finite and > 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn argb_round_trips_through_normalized_channels() {
        let packed = 0x7DC1_E6DB;
        let color = Color::from_argb(packed);
        assert_eq!(color.to_argb(), packed);
        assert!((color.alpha - 125.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn transparent_has_zero_alpha() {
        assert_eq!(Color::TRANSPARENT.alpha, 0.0);
        assert!(Color::TRANSPARENT.validate().is_ok());
    }

    #[test]
    fn serializes_as_packed_argb() {
        let color = Color::from_argb(0x7DC1_E6DB);
        let json = serde_json::to_string(&color).expect("serialize");
        assert_eq!(json, "2109859547");
        assert_eq!(serde_json::from_str::<Color>(&json).expect("parse"), color);
    }
}
