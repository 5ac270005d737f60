use crate::error::{ChartError, ChartResult};

use super::{DisplayMetrics, SpiderChartConfig};

pub(super) fn validate_config(config: &SpiderChartConfig) -> ChartResult<()> {
    if !config.label_size.is_finite() || config.label_size <= 0.0 {
        return Err(ChartError::InvalidConfiguration(
            "label size must be finite and > 0".to_owned(),
        ));
    }
    for (name, value) in [
        ("label margin", config.label_margin),
        ("web stroke width", config.web_stroke_width),
        ("web edge stroke width", config.web_edge_stroke_width),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidConfiguration(format!(
                "{name} must be finite and >= 0"
            )));
        }
    }
    if !config.rotation_angle.is_finite() {
        return Err(ChartError::InvalidConfiguration(
            "rotation angle must be finite".to_owned(),
        ));
    }
    if config.web_ring_count == Some(0) {
        return Err(ChartError::InvalidConfiguration(
            "web ring count must be >= 1".to_owned(),
        ));
    }
    for (name, color) in [
        ("label color", config.label_color),
        ("web color", config.web_color),
        ("web background color", config.web_background_color),
        ("web edge color", config.web_edge_color),
    ] {
        color.validate().map_err(|_| {
            ChartError::InvalidConfiguration(format!("{name} channels must be in [0, 1]"))
        })?;
    }
    config.value_scale.validate()?;
    validate_display_metrics(config.display_metrics)
}

fn validate_display_metrics(metrics: DisplayMetrics) -> ChartResult<()> {
    for (name, value) in [
        ("density", metrics.density),
        ("scaled density", metrics.scaled_density),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidConfiguration(format!(
                "display {name} must be finite and > 0"
            )));
        }
    }
    Ok(())
}
