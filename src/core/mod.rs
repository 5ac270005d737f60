pub mod geometry;
pub mod label_layout;
pub mod layout;
pub mod series;
pub mod types;
pub mod web_grid;

pub use geometry::{
    AngleReference, AxisAngleTable, MIN_AXIS_COUNT, ValueScale, compute_vertex, global_max_value,
    normalize_degrees, radius_fraction,
};
pub use label_layout::{LabelPlacement, label_alignment, place_labels};
pub use layout::{
    ChartGeometry, EstimatedTextMeasurer, TextExtent, TextMeasurer, resolve_chart_geometry,
};
pub use series::{
    AxisSet, ChartData, Series, SeriesPolygon, SeriesStroke, build_series_polygon,
    build_series_polygons,
};
pub use types::{Vertex, Viewport};
pub use web_grid::{WebGrid, WebRing, WebSpoke, build_web_grid};
