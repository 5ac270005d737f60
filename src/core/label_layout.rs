use crate::core::Vertex;
use crate::core::geometry::{AxisAngleTable, normalize_degrees};
use crate::error::{ChartError, ChartResult};
use crate::render::{TextHAlign, TextVAlign};

/// Half-width in degrees of the bands around straight up/down (centered text)
/// and straight left/right (vertically centered text).
pub const LABEL_ALIGN_BAND_DEG: f64 = 10.0;

/// Text anchor for one axis label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    pub axis_index: usize,
    pub text: String,
    pub anchor: Vertex,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
}

/// Screen direction of an axis in degrees clockwise from straight up.
#[must_use]
pub fn screen_direction_deg(angles: &AxisAngleTable, axis_index: usize) -> Option<f64> {
    angles.angle_deg(axis_index).map(|angle| {
        // screen angles are measured from +x; +90 rebases them on "up"
        normalize_degrees(angle + angles.reference().screen_offset_deg() + 90.0)
    })
}

/// Alignment bucket for a label whose axis points `direction_deg` clockwise
/// from straight up.
///
/// Labels near the vertical are centered horizontally, labels on the right
/// half grow rightwards and labels on the left half grow leftwards. Upper
/// labels sit above their anchor, lower labels below it, and labels near the
/// horizontal are vertically centered.
#[must_use]
pub fn label_alignment(direction_deg: f64) -> (TextHAlign, TextVAlign) {
    let direction = normalize_degrees(direction_deg);
    let band = LABEL_ALIGN_BAND_DEG;

    let h_align = if direction <= band
        || direction >= 360.0 - band
        || (180.0 - band..=180.0 + band).contains(&direction)
    {
        TextHAlign::Center
    } else if direction < 180.0 {
        TextHAlign::Left
    } else {
        TextHAlign::Right
    };

    let v_align = if (90.0 - band..=90.0 + band).contains(&direction)
        || (270.0 - band..=270.0 + band).contains(&direction)
    {
        TextVAlign::Middle
    } else if direction < 90.0 || direction > 270.0 {
        TextVAlign::Bottom
    } else {
        TextVAlign::Top
    };

    (h_align, v_align)
}

pub fn place_labels(
    labels: &[String],
    angles: &AxisAngleTable,
    outer_radius: f64,
    margin: f64,
    center: Vertex,
) -> ChartResult<Vec<LabelPlacement>> {
    if labels.len() != angles.axis_count() {
        return Err(ChartError::InvalidData(format!(
            "label count {} does not match axis count {}",
            labels.len(),
            angles.axis_count()
        )));
    }
    if !margin.is_finite() || margin < 0.0 {
        return Err(ChartError::InvalidConfiguration(
            "label margin must be finite and >= 0".to_owned(),
        ));
    }

    let anchor_radius = outer_radius + margin;
    let mut placements = Vec::with_capacity(labels.len());
    for (axis_index, text) in labels.iter().enumerate() {
        let (Some(anchor), Some(direction)) = (
            angles.point_on_axis(axis_index, anchor_radius, center),
            screen_direction_deg(angles, axis_index),
        ) else {
            continue;
        };
        let (h_align, v_align) = label_alignment(direction);
        placements.push(LabelPlacement {
            axis_index,
            text: text.clone(),
            anchor,
            h_align,
            v_align,
        });
    }
    Ok(placements)
}
