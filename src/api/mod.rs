mod chart;
mod chart_accessors;
mod config;
mod frame_composer;
mod json_contract;
mod render_coordinator;
mod validation;

pub use chart::SpiderChart;
pub use config::{
    DEFAULT_LABEL_COLOR, DEFAULT_LABEL_MARGIN_DP, DEFAULT_LABEL_SIZE_SP,
    DEFAULT_ROTATION_ANGLE_DEG, DEFAULT_WEB_BACKGROUND_COLOR, DEFAULT_WEB_COLOR,
    DEFAULT_WEB_EDGE_COLOR, DEFAULT_WEB_EDGE_STROKE_WIDTH_DP, DEFAULT_WEB_STROKE_WIDTH_DP,
    DisplayMetrics, SpiderChartConfig,
};
pub use frame_composer::{ComposedChart, RenderWarning, compose_chart};
pub use json_contract::{
    CHART_CONFIG_JSON_SCHEMA_V1, CHART_DATA_JSON_SCHEMA_V1, ChartConfigJsonContractV1,
    ChartDataJsonContractV1,
};
