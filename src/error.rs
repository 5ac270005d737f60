use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("spider chart needs at least 3 axes, got {count}")]
    TooFewAxes { count: usize },

    #[error("series #{series_index} has {actual} values, expected one per axis ({expected})")]
    SeriesLengthMismatch {
        series_index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{series_count} series submitted without axis labels")]
    MissingLabels { series_count: usize },

    #[error("{label_count} axis labels submitted without any series")]
    MissingData { label_count: usize },

    #[error("viewport {width}x{height} leaves no room for the web after label placement")]
    ViewportTooSmall { width: u32, height: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
